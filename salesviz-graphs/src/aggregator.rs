//! Reductions from the raw sales table into chart-ready aggregates

use crate::dataset::{Category, Sale};
use chrono::{Datelike, NaiveDate};
use salesviz_common::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Summed sales for one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySalesPoint {
    pub date: NaiveDate,
    pub total: u64,
}

/// Summed sales for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySalesPoint {
    pub year: i32,
    pub month: u32,
    pub total: u64,
}

impl MonthlySalesPoint {
    /// Month identifier formatted as "YYYY-MM"
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Summed sales for one product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySalesPoint {
    pub category: Category,
    pub total: u64,
}

/// Trait for reducing the sales table into one kind of aggregate
pub trait SalesAggregator<T> {
    /// Process the sales table and return aggregated points
    fn aggregate(&self, sales: &[Sale]) -> Result<Vec<T>>;
}

/// Aggregator for daily sales totals, ordered by date ascending
#[derive(Debug, Default)]
pub struct DailySalesAggregator;

impl DailySalesAggregator {
    pub fn new() -> Self {
        Self
    }
}

impl SalesAggregator<DailySalesPoint> for DailySalesAggregator {
    #[instrument(skip(self, sales))]
    fn aggregate(&self, sales: &[Sale]) -> Result<Vec<DailySalesPoint>> {
        let mut daily_totals: HashMap<NaiveDate, u64> = HashMap::new();

        for sale in sales {
            *daily_totals.entry(sale.date).or_insert(0) += u64::from(sale.amount);
        }

        let mut result: Vec<DailySalesPoint> = daily_totals
            .into_iter()
            .map(|(date, total)| DailySalesPoint { date, total })
            .collect();

        result.sort_by_key(|point| point.date);

        debug!("aggregated {} daily sales points", result.len());
        Ok(result)
    }
}

/// Aggregator for monthly sales totals, ordered by (year, month) ascending
#[derive(Debug, Default)]
pub struct MonthlySalesAggregator;

impl MonthlySalesAggregator {
    pub fn new() -> Self {
        Self
    }
}

impl SalesAggregator<MonthlySalesPoint> for MonthlySalesAggregator {
    #[instrument(skip(self, sales))]
    fn aggregate(&self, sales: &[Sale]) -> Result<Vec<MonthlySalesPoint>> {
        let mut monthly_totals: HashMap<(i32, u32), u64> = HashMap::new();

        for sale in sales {
            let key = (sale.date.year(), sale.date.month());
            *monthly_totals.entry(key).or_insert(0) += u64::from(sale.amount);
        }

        let mut result: Vec<MonthlySalesPoint> = monthly_totals
            .into_iter()
            .map(|((year, month), total)| MonthlySalesPoint { year, month, total })
            .collect();

        result.sort_by_key(|point| (point.year, point.month));

        debug!("aggregated {} monthly sales points", result.len());
        Ok(result)
    }
}

/// Aggregator for per-category sales totals, ordered by total descending.
///
/// Ties keep the `Category::ALL` enumeration order (stable sort). A
/// category with no sales is omitted rather than reported as zero.
#[derive(Debug, Default)]
pub struct CategorySalesAggregator;

impl CategorySalesAggregator {
    pub fn new() -> Self {
        Self
    }
}

impl SalesAggregator<CategorySalesPoint> for CategorySalesAggregator {
    #[instrument(skip(self, sales))]
    fn aggregate(&self, sales: &[Sale]) -> Result<Vec<CategorySalesPoint>> {
        let mut category_totals: HashMap<Category, u64> = HashMap::new();

        for sale in sales {
            *category_totals.entry(sale.category).or_insert(0) += u64::from(sale.amount);
        }

        // Collect in enumeration order so the stable sort preserves it
        // for equal totals.
        let mut result: Vec<CategorySalesPoint> = Category::ALL
            .iter()
            .filter_map(|category| {
                category_totals.get(category).map(|&total| CategorySalesPoint {
                    category: *category,
                    total,
                })
            })
            .collect();

        result.sort_by(|a, b| b.total.cmp(&a.total));

        debug!("aggregated {} category sales points", result.len());
        Ok(result)
    }
}
