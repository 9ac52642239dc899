use crate::{Bounds, MinimapConfig};
use found_core::Point;

/// Affine map between graph space and minimap pixel space.
///
/// The graph-space extent `[min, min + size]` is stretched onto the padded
/// inner area of the canvas. Output is never clipped: points outside the
/// extent land outside the padded area, possibly off-canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    min: Point,
    width: f64,
    height: f64,
    padding: f64,
    inner_width: f64,
    inner_height: f64,
}

impl CoordinateMapper {
    pub fn new(bounds: &Bounds, config: &MinimapConfig) -> Self {
        Self::from_extent(bounds.min(), bounds.width, bounds.height, config)
    }

    /// Mapper for an explicit graph-space extent.
    pub fn from_extent(min: Point, width: f64, height: f64, config: &MinimapConfig) -> Self {
        Self {
            min,
            width,
            height,
            padding: config.padding,
            inner_width: config.inner_width(),
            inner_height: config.inner_height(),
        }
    }

    /// Graph space to minimap pixels.
    pub fn to_mini(&self, point: Point) -> Point {
        Point::new(
            (point.x - self.min.x) / self.width * self.inner_width + self.padding,
            (point.y - self.min.y) / self.height * self.inner_height + self.padding,
        )
    }

    /// Minimap pixels to graph space; exact inverse of [`Self::to_mini`].
    pub fn to_graph(&self, point: Point) -> Point {
        Point::new(
            (point.x - self.padding) / self.inner_width * self.width + self.min.x,
            (point.y - self.padding) / self.inner_height * self.height + self.min.y,
        )
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    /// Random extent plus a point inside it, expressed as fractions.
    fn extent_strategy() -> impl Strategy<Value = (Point, f64, f64, f64, f64)> {
        (
            -1.0e4f64..1.0e4,
            -1.0e4f64..1.0e4,
            1.0f64..1.0e4,
            1.0f64..1.0e4,
            0.0f64..=1.0,
            0.0f64..=1.0,
        )
            .prop_map(|(x, y, w, h, fx, fy)| (Point::new(x, y), w, h, fx, fy))
    }

    proptest! {
        /// Mapping into the minimap and back returns the original point.
        #[test]
        fn prop_round_trip((min, w, h, fx, fy) in extent_strategy()) {
            let mapper = CoordinateMapper::from_extent(min, w, h, &MinimapConfig::default());
            let p = Point::new(min.x + fx * w, min.y + fy * h);
            let back = mapper.to_graph(mapper.to_mini(p));
            prop_assert!((back.x - p.x).abs() < 1e-9, "{:?} -> {:?}", p, back);
            prop_assert!((back.y - p.y).abs() < 1e-9, "{:?} -> {:?}", p, back);
        }

        /// Points inside the extent always land inside the padded area.
        #[test]
        fn prop_containment((min, w, h, fx, fy) in extent_strategy()) {
            let config = MinimapConfig::default();
            let mapper = CoordinateMapper::from_extent(min, w, h, &config);
            let mini = mapper.to_mini(Point::new(min.x + fx * w, min.y + fy * h));
            let eps = 1e-9;
            prop_assert!(mini.x >= config.padding - eps);
            prop_assert!(mini.x <= config.width - config.padding + eps);
            prop_assert!(mini.y >= config.padding - eps);
            prop_assert!(mini.y <= config.height - config.padding + eps);
        }
    }
}
