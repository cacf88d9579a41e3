//! Dataset generation, aggregation and chart rendering for salesviz.
//!
//! The pipeline is linear: [`dataset`] synthesizes the sales table,
//! [`aggregator`] reduces it by day, month and category, and the four
//! chart modules render each aggregate to a PNG file.

pub mod aggregator;
pub mod category_comparison;
pub mod category_share;
pub mod dataset;
pub mod monthly_sales;
pub mod renderer;
pub mod sales_over_time;
pub mod types;

pub use aggregator::{
    CategorySalesAggregator, CategorySalesPoint, DailySalesAggregator, DailySalesPoint,
    MonthlySalesAggregator, MonthlySalesPoint, SalesAggregator,
};
pub use category_comparison::CategoryComparisonGraph;
pub use category_share::CategoryShareGraph;
pub use dataset::{preview, Category, DatasetConfig, Sale, SalesGenerator};
pub use monthly_sales::MonthlySalesGraph;
pub use renderer::GraphRenderer;
pub use sales_over_time::SalesOverTimeGraph;
pub use types::*;
