//! Category comparison bar chart

use crate::aggregator::CategorySalesPoint;
use crate::renderer::GraphRenderer;
use crate::{GraphConfig, GraphType, StyleConfig};
use plotters::prelude::*;
use salesviz_common::{Result, SalesVizError};
use std::path::Path;
use tracing::info;

/// Vertical bar chart of total sales per category, one palette color per
/// bar, in descending-total order
#[derive(Debug)]
pub struct CategoryComparisonGraph {
    /// Category aggregate, ordered by total descending
    pub data: Vec<CategorySalesPoint>,
}

impl CategoryComparisonGraph {
    /// Create a new graph over the category aggregate
    pub fn new(data: Vec<CategorySalesPoint>) -> Self {
        Self { data }
    }

    /// Default configuration for this chart
    pub fn default_config() -> GraphConfig {
        GraphConfig {
            graph_type: GraphType::Bar,
            title: "Sales by Category".to_string(),
            width: 800,
            height: 400,
            x_label: Some("Category".to_string()),
            y_label: Some("Total Sales".to_string()),
            style: StyleConfig::default(),
        }
    }

    /// Max total for y-axis scaling, with 10% headroom
    fn y_max(&self) -> u64 {
        let max = self.data.iter().map(|p| p.total).max().unwrap_or(0);
        (max + max / 10).max(1)
    }

    /// Category names in data order
    fn category_labels(&self) -> Vec<String> {
        self.data.iter().map(|p| p.category.to_string()).collect()
    }
}

impl GraphRenderer for CategoryComparisonGraph {
    fn render_to_file(&self, config: &GraphConfig, path: &Path) -> Result<()> {
        if self.data.is_empty() {
            return Err(SalesVizError::graph(
                "No data available for category comparison chart",
            ));
        }

        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&self.get_background_color(config))?;

        let labels = self.category_labels();
        let y_max = self.y_max();

        let title_font = (
            config.style.title_font.family.as_str(),
            config.style.title_font.size,
        );
        let mut chart = ChartBuilder::on(&root)
            .caption(&config.title, title_font)
            .margin(config.style.margins.top)
            .x_label_area_size(config.style.margins.bottom)
            .y_label_area_size(config.style.margins.left)
            .build_cartesian_2d((0usize..self.data.len()).into_segmented(), 0u64..y_max)?;

        let category_formatter = |seg: &SegmentValue<usize>| match seg {
            SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
            _ => String::new(),
        };
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(config.x_label.as_deref().unwrap_or("Category"))
            .y_desc(config.y_label.as_deref().unwrap_or("Total Sales"))
            .x_labels(self.data.len())
            .x_label_formatter(&category_formatter)
            .draw()?;

        let colors = self.get_colors(&config.style.color_scheme);

        chart.draw_series(self.data.iter().enumerate().map(|(i, point)| {
            let color = colors[i % colors.len()];
            Rectangle::new(
                [
                    (SegmentValue::Exact(i), 0u64),
                    (SegmentValue::Exact(i + 1), point.total),
                ],
                color.filled(),
            )
        }))?;

        root.present()?;
        info!("rendered category comparison chart to {}", path.display());
        Ok(())
    }
}
