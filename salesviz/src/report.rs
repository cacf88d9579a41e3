//! Fixed-template text summary of the generated charts

use salesviz_common::Result;
use std::fs;
use std::path::Path;
use tracing::info;

/// Line chart output file
pub const SALES_OVER_TIME_PNG: &str = "sales_over_time.png";
/// Monthly bar chart output file
pub const MONTHLY_SALES_PNG: &str = "monthly_sales.png";
/// Category bar chart output file
pub const CATEGORY_COMPARISON_PNG: &str = "category_comparison.png";
/// Pie chart output file
pub const CATEGORY_SHARE_PNG: &str = "category_share.png";
/// Text summary output file
pub const SUMMARY_FILE: &str = "sales_analysis_summary.txt";

/// The summary text. Fixed template: it describes which charts were
/// produced and does not depend on the data values.
pub const SUMMARY_TEXT: &str = "\
Sales Analysis Summary:
------------------------
1. The 'Sales Over Time' line chart shows sales patterns across days, helping identify high-performing periods.
2. The 'Monthly Sales' bar chart reveals how performance varies month to month.
3. The 'Category Comparison' bar chart compares total sales across product categories.
4. The 'Category Share' pie chart highlights which category dominates the market.

Visual formatting choices:
- Titles and axis labels clearly describe each visualization.
- Legends and color schemes improve readability.
- Saved all charts as PNG files for submission.

All files generated:
- sales_over_time.png
- monthly_sales.png
- category_comparison.png
- category_share.png
";

/// Write the summary verbatim to the given path, overwriting any
/// previous run's output
pub fn write_summary(path: &Path) -> Result<()> {
    fs::write(path, SUMMARY_TEXT)?;
    info!("wrote summary report to {}", path.display());
    Ok(())
}
