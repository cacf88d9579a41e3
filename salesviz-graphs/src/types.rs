//! Chart configuration and styling types

use serde::{Deserialize, Serialize};

/// Supported chart types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GraphType {
    Line,
    Bar,
    Pie,
}

/// Chart configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    pub graph_type: GraphType,
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub style: StyleConfig,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            graph_type: GraphType::Line,
            title: "Chart".to_string(),
            width: 800,
            height: 600,
            x_label: None,
            y_label: None,
            style: StyleConfig::default(),
        }
    }
}

/// Color scheme for charts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ColorScheme {
    /// Soft pastel palette in the Set2 spirit
    Default,
    Vibrant,
    Monochrome,
    Custom(Vec<String>),
}

/// Font configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontConfig {
    pub family: String,
    pub size: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: 12,
        }
    }
}

/// Margin configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarginConfig {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Default for MarginConfig {
    fn default() -> Self {
        Self {
            top: 20,
            right: 20,
            bottom: 45,
            left: 70,
        }
    }
}

/// Grid line configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub show_x: bool,
    pub show_y: bool,
    pub color: Option<String>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            show_x: true,
            show_y: true,
            color: None,
        }
    }
}

/// Styling configuration shared by all chart renderers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    pub color_scheme: ColorScheme,
    pub background_color: Option<String>,
    pub title_font: FontConfig,
    pub label_font: FontConfig,
    pub margins: MarginConfig,
    pub grid: GridConfig,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::Default,
            background_color: Some("#FFFFFF".to_string()),
            title_font: FontConfig {
                family: "sans-serif".to_string(),
                size: 24,
            },
            label_font: FontConfig::default(),
            margins: MarginConfig::default(),
            grid: GridConfig::default(),
        }
    }
}
