use found_core::Point;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box over node positions in graph space.
///
/// `width` and `height` never drop below 1 so that mapping into the minimap
/// never divides by zero, even for a single node or a row of nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub width: f64,
    pub height: f64,
    /// The finite positions the box was computed from.
    pub positions: Vec<Point>,
}

impl Bounds {
    /// Computes the box over every finite position.
    ///
    /// Returns `None` when no finite position remains, which callers treat
    /// as "nothing to draw".
    pub fn from_positions<I>(positions: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let positions: Vec<Point> = positions.into_iter().filter(Point::is_finite).collect();
        let first = *positions.first()?;

        let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
        for p in &positions[1..] {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }

        Some(Self {
            min_x,
            max_x,
            min_y,
            max_y,
            width: (max_x - min_x).max(1.0),
            height: (max_y - min_y).max(1.0),
            positions,
        })
    }

    pub fn min(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    pub fn max(&self) -> Point {
        Point::new(self.max_x, self.max_y)
    }

    /// Center of the mapped extent (`min + size / 2`).
    pub fn center(&self) -> Point {
        Point::new(
            self.min_x + self.width * 0.5,
            self.min_y + self.height * 0.5,
        )
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}
