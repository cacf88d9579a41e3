//! Chart rendering trait and shared styling helpers

use crate::{ColorScheme, GraphConfig};
use plotters::prelude::*;
use salesviz_common::Result;
use std::path::Path;

/// Trait for rendering one chart to a PNG file.
///
/// Rendering is synchronous and idempotent: re-rendering the same data to
/// the same path overwrites the file.
pub trait GraphRenderer {
    /// Render the chart to the given file path
    fn render_to_file(&self, config: &GraphConfig, path: &Path) -> Result<()>;

    /// Resolve a color scheme into a concrete palette
    fn get_colors(&self, scheme: &ColorScheme) -> Vec<RGBColor> {
        match scheme {
            ColorScheme::Default => vec![
                RGBColor(102, 194, 165), // Teal
                RGBColor(252, 141, 98),  // Salmon
                RGBColor(141, 160, 203), // Periwinkle
                RGBColor(231, 138, 195), // Pink
                RGBColor(166, 216, 84),  // Lime
                RGBColor(255, 217, 47),  // Gold
            ],
            ColorScheme::Vibrant => vec![
                RGBColor(230, 25, 75),  // Red
                RGBColor(60, 180, 75),  // Green
                RGBColor(0, 130, 200),  // Blue
                RGBColor(245, 130, 48), // Orange
                RGBColor(145, 30, 180), // Purple
                RGBColor(70, 240, 240), // Cyan
            ],
            ColorScheme::Monochrome => vec![
                RGBColor(0, 0, 0),
                RGBColor(64, 64, 64),
                RGBColor(128, 128, 128),
                RGBColor(192, 192, 192),
                RGBColor(224, 224, 224),
            ],
            ColorScheme::Custom(colors) => colors
                .iter()
                .map(|color_str| self.parse_color(color_str))
                .collect(),
        }
    }

    /// Parse a hex color string ("#RRGGBB") to RGBColor
    fn parse_color(&self, color_str: &str) -> RGBColor {
        if let Some(hex) = color_str.strip_prefix('#') {
            if hex.len() == 6 {
                if let (Ok(r), Ok(g), Ok(b)) = (
                    u8::from_str_radix(&hex[0..2], 16),
                    u8::from_str_radix(&hex[2..4], 16),
                    u8::from_str_radix(&hex[4..6], 16),
                ) {
                    return RGBColor(r, g, b);
                }
            }
        }
        // Default to black if parsing fails
        RGBColor(0, 0, 0)
    }

    /// Get the background color from the style config
    fn get_background_color(&self, config: &GraphConfig) -> RGBColor {
        config
            .style
            .background_color
            .as_ref()
            .map(|color| self.parse_color(color))
            .unwrap_or(RGBColor(255, 255, 255))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockRenderer;

    impl GraphRenderer for MockRenderer {
        fn render_to_file(&self, _config: &GraphConfig, _path: &Path) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_color_schemes() {
        let renderer = MockRenderer;

        let default_colors = renderer.get_colors(&ColorScheme::Default);
        assert!(default_colors.len() >= 5);
        assert_eq!(default_colors[0], RGBColor(102, 194, 165));

        let custom = ColorScheme::Custom(vec![
            "#FF0000".to_string(),
            "#00FF00".to_string(),
            "#0000FF".to_string(),
        ]);
        let colors = renderer.get_colors(&custom);
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[0], RGBColor(255, 0, 0));
        assert_eq!(colors[1], RGBColor(0, 255, 0));
        assert_eq!(colors[2], RGBColor(0, 0, 255));
    }

    #[test]
    fn test_color_parsing() {
        let renderer = MockRenderer;

        assert_eq!(renderer.parse_color("#FF0000"), RGBColor(255, 0, 0));
        assert_eq!(renderer.parse_color("#336699"), RGBColor(51, 102, 153));

        // Invalid inputs default to black
        assert_eq!(renderer.parse_color("invalid"), RGBColor(0, 0, 0));
        assert_eq!(renderer.parse_color("#ZZ0000"), RGBColor(0, 0, 0));
    }

    #[test]
    fn test_background_color() {
        let renderer = MockRenderer;
        let mut config = GraphConfig::default();

        assert_eq!(
            renderer.get_background_color(&config),
            RGBColor(255, 255, 255)
        );

        config.style.background_color = Some("#F8F9FA".to_string());
        assert_eq!(
            renderer.get_background_color(&config),
            RGBColor(248, 249, 250)
        );
    }
}
