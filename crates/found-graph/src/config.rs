use found_core::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Logical minimap canvas width in pixels.
pub const MINIMAP_WIDTH: f64 = 200.0;
/// Logical minimap canvas height in pixels.
pub const MINIMAP_HEIGHT: f64 = 140.0;
/// Inset kept free on every side of the canvas.
pub const MINIMAP_PADDING: f64 = 10.0;
/// Radius of a node marker.
pub const NODE_RADIUS: f64 = 3.0;
/// Opacity of edge strokes, so edges read as a dim layer under nodes.
pub const EDGE_OPACITY: f64 = 0.35;
/// Largest canvas side a config may ask for.
pub const MAX_CANVAS_SIZE: f64 = 4096.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    #[error("{field} = {value} is outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("padding {padding} leaves no room in a {width}x{height} canvas")]
    NoDrawableArea {
        padding: f64,
        width: f64,
        height: f64,
    },
}

/// Geometry and styling of the minimap canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimapConfig {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub node_radius: f64,
    pub edge_opacity: f64,
    pub edge_color: Color,
    pub edge_width: f64,
    /// Used for nodes that carry no color of their own.
    pub node_color: Color,
    pub viewport_color: Color,
    pub viewport_width: f64,
}

impl Default for MinimapConfig {
    fn default() -> Self {
        Self {
            width: MINIMAP_WIDTH,
            height: MINIMAP_HEIGHT,
            padding: MINIMAP_PADDING,
            node_radius: NODE_RADIUS,
            edge_opacity: EDGE_OPACITY,
            edge_color: Color::WHITE,
            edge_width: 1.0,
            node_color: Color::ACCENT,
            viewport_color: Color::WHITE,
            viewport_width: 2.0,
        }
    }
}

impl MinimapConfig {
    /// Drawable width once padding is removed from both sides.
    pub fn inner_width(&self) -> f64 {
        self.width - self.padding * 2.0
    }

    pub fn inner_height(&self) -> f64 {
        self.height - self.padding * 2.0
    }

    /// Canvas size in whole pixels, as surfaces are allocated.
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            self.width.clamp(1.0, MAX_CANVAS_SIZE).round() as u32,
            self.height.clamp(1.0, MAX_CANVAS_SIZE).round() as u32,
        )
    }

    /// Checks that the canvas has a drawable area and every numeric field
    /// is finite and in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ranges = [
            ("width", self.width, 1.0, MAX_CANVAS_SIZE),
            ("height", self.height, 1.0, MAX_CANVAS_SIZE),
            ("padding", self.padding, 0.0, MAX_CANVAS_SIZE),
            ("node_radius", self.node_radius, 0.0, MAX_CANVAS_SIZE),
            ("edge_opacity", self.edge_opacity, 0.0, 1.0),
            ("edge_width", self.edge_width, 0.0, MAX_CANVAS_SIZE),
            ("viewport_width", self.viewport_width, 0.0, MAX_CANVAS_SIZE),
        ];
        for (field, value, min, max) in ranges {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
            if value < min || value > max {
                return Err(ConfigError::OutOfRange {
                    field,
                    value,
                    min,
                    max,
                });
            }
        }
        if self.inner_width() <= 0.0 || self.inner_height() <= 0.0 {
            return Err(ConfigError::NoDrawableArea {
                padding: self.padding,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// This config if valid, otherwise the defaults.
    pub fn sanitized(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                tracing::error!("Invalid minimap config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Center pixel of the canvas.
    pub fn center(&self) -> found_core::Point {
        found_core::Point::new(self.width / 2.0, self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_canvas_contract() {
        let config = MinimapConfig::default();
        assert_eq!(config.pixel_size(), (200, 140));
        assert_eq!(config.inner_width(), 180.0);
        assert_eq!(config.inner_height(), 120.0);
        assert_eq!(config.node_radius, 3.0);
        assert_eq!(config.edge_opacity, 0.35);
        assert_eq!(config.node_color.to_string(), "#6ea8fe");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: MinimapConfig =
            serde_json::from_str(r##"{ "padding": 4.0, "node_color": "#ff0000" }"##).unwrap();
        assert_eq!(config.padding, 4.0);
        assert_eq!(config.node_color, Color::rgb(255, 0, 0));
        assert_eq!(config.width, MINIMAP_WIDTH);
    }

    #[test]
    fn test_default_is_valid() {
        assert_eq!(MinimapConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_padding_swallowing_canvas_is_rejected() {
        let config = MinimapConfig {
            padding: 100.0,
            ..MinimapConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NoDrawableArea { .. })
        ));
        assert_eq!(config.sanitized(), MinimapConfig::default());
    }

    #[test]
    fn test_out_of_range_and_non_finite_fields_are_rejected() {
        let huge = MinimapConfig {
            width: 1.0e12,
            ..MinimapConfig::default()
        };
        assert!(matches!(
            huge.validate(),
            Err(ConfigError::OutOfRange { field: "width", .. })
        ));
        assert_eq!(huge.pixel_size().0, MAX_CANVAS_SIZE as u32);

        let nan = MinimapConfig {
            edge_opacity: f64::NAN,
            ..MinimapConfig::default()
        };
        assert!(matches!(
            nan.validate(),
            Err(ConfigError::NotFinite {
                field: "edge_opacity",
                ..
            })
        ));
    }

    #[test]
    fn test_valid_custom_config_survives_sanitizing() {
        let config = MinimapConfig {
            width: 320.0,
            padding: 0.0,
            ..MinimapConfig::default()
        };
        assert_eq!(config.clone().sanitized(), config);
    }
}
