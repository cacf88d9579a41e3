//! The linear analysis pipeline: generate, aggregate, render, report

use crate::report;
use salesviz_common::Result;
use salesviz_graphs::{
    preview, CategoryComparisonGraph, CategorySalesAggregator, CategoryShareGraph,
    DailySalesAggregator, DatasetConfig, GraphRenderer, MonthlySalesAggregator, MonthlySalesGraph,
    SalesAggregator, SalesGenerator, SalesOverTimeGraph,
};
use std::path::Path;
use tracing::info;

/// Number of rows echoed to stdout as a sample of the generated table
const PREVIEW_ROWS: usize = 5;

/// Run the whole pipeline, writing the four charts and the summary into
/// `out_dir`. Any failure aborts the run; partially written files are
/// left as-is.
pub fn run(out_dir: &Path) -> Result<()> {
    let config = DatasetConfig::default();
    info!(
        seed = config.seed,
        count = config.count,
        "generating sales dataset"
    );
    let sales = SalesGenerator::new(config).generate()?;

    println!("Sample Data:");
    print!("{}", preview(&sales, PREVIEW_ROWS));

    let daily = DailySalesAggregator::new().aggregate(&sales)?;
    let monthly = MonthlySalesAggregator::new().aggregate(&sales)?;
    let by_category = CategorySalesAggregator::new().aggregate(&sales)?;
    info!(
        days = daily.len(),
        months = monthly.len(),
        categories = by_category.len(),
        "aggregation complete"
    );

    SalesOverTimeGraph::new(daily).render_to_file(
        &SalesOverTimeGraph::default_config(),
        &out_dir.join(report::SALES_OVER_TIME_PNG),
    )?;
    MonthlySalesGraph::new(monthly).render_to_file(
        &MonthlySalesGraph::default_config(),
        &out_dir.join(report::MONTHLY_SALES_PNG),
    )?;
    CategoryComparisonGraph::new(by_category.clone()).render_to_file(
        &CategoryComparisonGraph::default_config(),
        &out_dir.join(report::CATEGORY_COMPARISON_PNG),
    )?;
    CategoryShareGraph::new(by_category).render_to_file(
        &CategoryShareGraph::default_config(),
        &out_dir.join(report::CATEGORY_SHARE_PNG),
    )?;

    report::write_summary(&out_dir.join(report::SUMMARY_FILE))?;

    println!();
    print!("{}", report::SUMMARY_TEXT);
    println!();
    println!(
        "Analysis complete. Charts and summary saved to {}",
        out_dir.display()
    );
    Ok(())
}
