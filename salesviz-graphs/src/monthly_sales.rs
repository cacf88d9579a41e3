//! Monthly sales bar chart

use crate::aggregator::MonthlySalesPoint;
use crate::renderer::GraphRenderer;
use crate::{GraphConfig, GraphType, StyleConfig};
use plotters::prelude::*;
use salesviz_common::{Result, SalesVizError};
use std::path::Path;
use tracing::info;

/// Vertical bar chart of total sales per calendar month
#[derive(Debug)]
pub struct MonthlySalesGraph {
    /// Monthly aggregate, ordered by (year, month) ascending
    pub data: Vec<MonthlySalesPoint>,
}

impl MonthlySalesGraph {
    /// Create a new graph over the monthly aggregate
    pub fn new(data: Vec<MonthlySalesPoint>) -> Self {
        Self { data }
    }

    /// Default configuration for this chart
    pub fn default_config() -> GraphConfig {
        GraphConfig {
            graph_type: GraphType::Bar,
            title: "Monthly Sales".to_string(),
            width: 800,
            height: 400,
            x_label: Some("Month".to_string()),
            y_label: Some("Sales".to_string()),
            style: StyleConfig::default(),
        }
    }

    /// Max total for y-axis scaling, with 10% headroom
    fn y_max(&self) -> u64 {
        let max = self.data.iter().map(|p| p.total).max().unwrap_or(0);
        (max + max / 10).max(1)
    }

    /// "YYYY-MM" labels in data order
    fn month_labels(&self) -> Vec<String> {
        self.data.iter().map(|p| p.label()).collect()
    }
}

impl GraphRenderer for MonthlySalesGraph {
    fn render_to_file(&self, config: &GraphConfig, path: &Path) -> Result<()> {
        if self.data.is_empty() {
            return Err(SalesVizError::graph(
                "No data available for monthly sales chart",
            ));
        }

        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&self.get_background_color(config))?;

        let labels = self.month_labels();
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

        let month_formatter = |seg: &SegmentValue<usize>| match seg {
            SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
            _ => String::new(),
        };
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(config.x_label.as_deref().unwrap_or("Month"))
            .y_desc(config.y_label.as_deref().unwrap_or("Sales"))
            .x_labels(self.data.len())
            .x_label_formatter(&month_formatter)
            .draw()?;

        let colors = self.get_colors(&config.style.color_scheme);
        let bar_color = colors.first().copied().unwrap_or(RGBColor(135, 206, 235));

        chart.draw_series(self.data.iter().enumerate().map(|(i, point)| {
            Rectangle::new(
                [
                    (SegmentValue::Exact(i), 0u64),
                    (SegmentValue::Exact(i + 1), point.total),
                ],
                bar_color.filled(),
            )
        }))?;

        root.present()?;
        info!("rendered monthly sales chart to {}", path.display());
        Ok(())
    }
}
