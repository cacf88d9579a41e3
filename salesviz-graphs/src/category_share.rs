//! Category share pie chart

use crate::aggregator::CategorySalesPoint;
use crate::renderer::GraphRenderer;
use crate::{GraphConfig, GraphType, StyleConfig};
use plotters::prelude::*;
use salesviz_common::{Result, SalesVizError};
use std::path::Path;
use tracing::info;

/// Pie chart of each category's share of total sales.
///
/// Slices start at 90 degrees; each slice is labeled with the category
/// name and its share formatted to one decimal place.
#[derive(Debug)]
pub struct CategoryShareGraph {
    /// Category aggregate, ordered by total descending
    pub data: Vec<CategorySalesPoint>,
}

impl CategoryShareGraph {
    /// Create a new graph over the category aggregate
    pub fn new(data: Vec<CategorySalesPoint>) -> Self {
        Self { data }
    }

    /// Default configuration for this chart
    pub fn default_config() -> GraphConfig {
        GraphConfig {
            graph_type: GraphType::Pie,
            title: "Category Sales Share".to_string(),
            width: 600,
            height: 600,
            x_label: None,
            y_label: None,
            style: StyleConfig::default(),
        }
    }

    /// Each category's share of the total, in percent
    fn percentages(&self) -> Vec<f64> {
        let total: u64 = self.data.iter().map(|p| p.total).sum();
        if total == 0 {
            return vec![0.0; self.data.len()];
        }
        self.data
            .iter()
            .map(|p| (p.total as f64 / total as f64) * 100.0)
            .collect()
    }

    /// Slice labels: "<category> (<share>%)" with one decimal place
    pub fn slice_labels(&self) -> Vec<String> {
        self.data
            .iter()
            .zip(self.percentages())
            .map(|(point, pct)| format!("{} ({:.1}%)", point.category, pct))
            .collect()
    }
}

impl GraphRenderer for CategoryShareGraph {
    fn render_to_file(&self, config: &GraphConfig, path: &Path) -> Result<()> {
        if self.data.is_empty() {
            return Err(SalesVizError::graph(
                "No data available for category share chart",
            ));
        }
        if self.data.iter().all(|p| p.total == 0) {
            return Err(SalesVizError::graph(
                "Category totals sum to zero, cannot compute shares",
            ));
        }

        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&self.get_background_color(config))?;

        let title_font = (
            config.style.title_font.family.as_str(),
            config.style.title_font.size,
        );
        let plot_area = root.titled(&config.title, title_font)?;

        let (plot_width, plot_height) = plot_area.dim_in_pixel();
        let center = (plot_width as i32 / 2, plot_height as i32 / 2);
        let radius = f64::from(plot_width.min(plot_height)) * 0.35;

        let sizes: Vec<f64> = self.data.iter().map(|p| p.total as f64).collect();
        let colors = self.get_colors(&config.style.color_scheme);
        let labels = self.slice_labels();

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.start_angle(90.0);
        pie.label_style(
            (
                config.style.label_font.family.as_str(),
                config.style.label_font.size,
            )
                .into_font()
                .color(&BLACK),
        );
        plot_area.draw(&pie)?;

        root.present()?;
        info!("rendered category share chart to {}", path.display());
        Ok(())
    }
}
