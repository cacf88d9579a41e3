//! Synthetic sales dataset generation

use chrono::{Duration, NaiveDate};
use salesviz_common::{Result, SalesVizError};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Product category of a sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    Groceries,
    #[serde(rename = "Home Decor")]
    HomeDecor,
    Sports,
}

impl Category {
    /// All categories in enumeration order. This order breaks ties when
    /// the category aggregate is sorted by total.
    pub const ALL: [Category; 5] = [
        Category::Electronics,
        Category::Clothing,
        Category::Groceries,
        Category::HomeDecor,
        Category::Sports,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Groceries => "Groceries",
            Category::HomeDecor => "Home Decor",
            Category::Sports => "Sports",
        };
        // pad() keeps width specifiers working in the table preview
        f.pad(name)
    }
}

/// A single sale record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub date: NaiveDate,
    pub category: Category,
    pub amount: u32,
}

/// Configuration for the dataset generator
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// RNG seed, fixed for reproducibility
    pub seed: u64,
    /// Number of sale records to generate
    pub count: usize,
    /// First day of the sampled date range (inclusive)
    pub start_date: NaiveDate,
    /// Last day of the sampled date range (inclusive)
    pub end_date: NaiveDate,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            count: 600,
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2023, 6, 30).expect("valid date"),
        }
    }
}

/// Minimum sale amount (inclusive)
const AMOUNT_MIN: u32 = 1_000;
/// Maximum sale amount (exclusive)
const AMOUNT_MAX: u32 = 15_000;

/// Generator that produces a synthetic sales table from a seeded RNG.
///
/// Each field of every record is drawn independently and uniformly from
/// its domain, so two generators with the same configuration produce
/// identical tables.
#[derive(Debug)]
pub struct SalesGenerator {
    config: DatasetConfig,
    rng: fastrand::Rng,
}

impl SalesGenerator {
    /// Create a new generator with the given configuration
    pub fn new(config: DatasetConfig) -> Self {
        let rng = fastrand::Rng::with_seed(config.seed);
        Self { config, rng }
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    /// Generate the full sales table
    pub fn generate(&mut self) -> Result<Vec<Sale>> {
        let span = self
            .config
            .end_date
            .signed_duration_since(self.config.start_date)
            .num_days();
        if span < 0 {
            return Err(SalesVizError::data(format!(
                "end date {} precedes start date {}",
                self.config.end_date, self.config.start_date
            )));
        }
        let span_days = span as u64 + 1;

        let mut sales = Vec::with_capacity(self.config.count);
        for _ in 0..self.config.count {
            let offset = self.rng.u64(0..span_days) as i64;
            let date = self.config.start_date + Duration::days(offset);
            let category = Category::ALL[self.rng.usize(0..Category::ALL.len())];
            let amount = self.rng.u32(AMOUNT_MIN..AMOUNT_MAX);
            sales.push(Sale {
                date,
                category,
                amount,
            });
        }

        debug!(
            count = sales.len(),
            seed = self.config.seed,
            "generated sales table"
        );
        Ok(sales)
    }
}

/// Format the first `limit` rows of the sales table for a stdout preview
pub fn preview(sales: &[Sale], limit: usize) -> String {
    let mut out = String::from("        Date     Category    Sales\n");
    for sale in sales.iter().take(limit) {
        out.push_str(&format!(
            "  {}  {:<12} {:>6}\n",
            sale.date, sale.category, sale.amount
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_deterministic() {
        let first = SalesGenerator::new(DatasetConfig::default())
            .generate()
            .unwrap();
        let second = SalesGenerator::new(DatasetConfig::default())
            .generate()
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_differ() {
        let first = SalesGenerator::new(DatasetConfig::default())
            .generate()
            .unwrap();
        let second = SalesGenerator::new(DatasetConfig {
            seed: 43,
            ..DatasetConfig::default()
        })
        .generate()
        .unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_record_domains() {
        let config = DatasetConfig::default();
        let sales = SalesGenerator::new(config.clone()).generate().unwrap();

        assert_eq!(sales.len(), 600);
        for sale in &sales {
            assert!(sale.amount >= 1_000 && sale.amount < 15_000);
            assert!(sale.date >= config.start_date);
            assert!(sale.date <= config.end_date);
            assert!(Category::ALL.contains(&sale.category));
        }
    }

    #[test]
    fn test_inverted_range_is_an_error() {
        let mut generator = SalesGenerator::new(DatasetConfig {
            start_date: NaiveDate::from_ymd_opt(2023, 6, 30).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            ..DatasetConfig::default()
        });

        assert!(generator.generate().is_err());
    }

    #[test]
    fn test_single_day_range() {
        let day = NaiveDate::from_ymd_opt(2023, 3, 15).unwrap();
        let sales = SalesGenerator::new(DatasetConfig {
            start_date: day,
            end_date: day,
            count: 25,
            ..DatasetConfig::default()
        })
        .generate()
        .unwrap();

        assert_eq!(sales.len(), 25);
        assert!(sales.iter().all(|s| s.date == day));
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::HomeDecor.to_string(), "Home Decor");
        assert_eq!(Category::Electronics.to_string(), "Electronics");
    }

    #[test]
    fn test_preview_limits_rows() {
        let sales = SalesGenerator::new(DatasetConfig::default())
            .generate()
            .unwrap();
        let text = preview(&sales, 5);

        // Header plus five data rows
        assert_eq!(text.lines().count(), 6);
        assert!(text.contains("Category"));
    }
}
