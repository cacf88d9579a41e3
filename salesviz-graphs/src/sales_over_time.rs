//! Daily sales line chart

use crate::aggregator::DailySalesPoint;
use crate::renderer::GraphRenderer;
use crate::{GraphConfig, GraphType, StyleConfig};
use plotters::prelude::*;
use salesviz_common::{Result, SalesVizError};
use std::path::Path;
use tracing::info;

/// Line chart of total sales per day
#[derive(Debug)]
pub struct SalesOverTimeGraph {
    /// Daily aggregate, ordered by date ascending
    pub data: Vec<DailySalesPoint>,
}

impl SalesOverTimeGraph {
    /// Create a new graph over the daily aggregate
    pub fn new(data: Vec<DailySalesPoint>) -> Self {
        Self { data }
    }

    /// Default configuration for this chart
    pub fn default_config() -> GraphConfig {
        GraphConfig {
            graph_type: GraphType::Line,
            title: "Sales Over Time".to_string(),
            width: 1000,
            height: 500,
            x_label: Some("Date".to_string()),
            y_label: Some("Total Sales".to_string()),
            style: StyleConfig::default(),
        }
    }

    /// Convert data to plotters-compatible (index, total) pairs
    fn prepare_plot_data(&self) -> Vec<(f64, f64)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, point)| (i as f64, point.total as f64))
            .collect()
    }

    /// Max total for y-axis scaling, with 10% headroom
    fn max_total(&self) -> f64 {
        self.data
            .iter()
            .map(|p| p.total as f64)
            .fold(0.0, f64::max)
            * 1.1
    }

    /// Axis label for the point nearest to the given x position
    fn date_label(&self, x: f64) -> String {
        if x < 0.0 {
            return String::new();
        }
        self.data
            .get(x.round() as usize)
            .map(|p| p.date.format("%b %d").to_string())
            .unwrap_or_default()
    }
}

impl GraphRenderer for SalesOverTimeGraph {
    fn render_to_file(&self, config: &GraphConfig, path: &Path) -> Result<()> {
        if self.data.is_empty() {
            return Err(SalesVizError::graph(
                "No data available for sales over time chart",
            ));
        }

        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&self.get_background_color(config))?;

        let plot_data = self.prepare_plot_data();
        let max_total = self.max_total();
        let max_x = (self.data.len().saturating_sub(1)).max(1) as f64;

        let title_font = (
            config.style.title_font.family.as_str(),
            config.style.title_font.size,
        );
        let mut chart = ChartBuilder::on(&root)
            .caption(&config.title, title_font)
            .margin(config.style.margins.top)
            .x_label_area_size(config.style.margins.bottom)
            .y_label_area_size(config.style.margins.left)
            .build_cartesian_2d(0f64..max_x, 0f64..max_total)?;

        let date_formatter = |x: &f64| self.date_label(*x);
        let mut mesh = chart.configure_mesh();
        mesh.x_desc(config.x_label.as_deref().unwrap_or("Date"))
            .y_desc(config.y_label.as_deref().unwrap_or("Total Sales"))
            .x_label_formatter(&date_formatter);
        if let Some(grid_color) = &config.style.grid.color {
            mesh.light_line_style(self.parse_color(grid_color));
        }
        if !config.style.grid.show_x && !config.style.grid.show_y {
            mesh.disable_mesh();
        }
        mesh.draw()?;

        let colors = self.get_colors(&config.style.color_scheme);
        let primary_color = colors.first().copied().unwrap_or(RGBColor(0, 128, 128));

        chart.draw_series(LineSeries::new(
            plot_data.iter().copied(),
            primary_color.stroke_width(2),
        ))?;

        root.present()?;
        info!("rendered sales over time chart to {}", path.display());
        Ok(())
    }
}
