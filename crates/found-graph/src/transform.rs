use found_core::Point;
use serde::{Deserialize, Serialize};

/// Pixel dimensions of a rendering surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// The main view's pan/zoom: `screen = graph * zoom + pan`.
///
/// Shared by the main graph view and the minimap so both agree on which
/// graph-space region is visible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub pan: Point,
    pub zoom: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            pan: Point::ZERO,
            zoom: 1.0,
        }
    }
}

impl ViewTransform {
    pub const fn new(pan: Point, zoom: f64) -> Self {
        Self { pan, zoom }
    }

    pub fn graph_to_screen(&self, point: Point) -> Point {
        Point::new(
            point.x * self.zoom + self.pan.x,
            point.y * self.zoom + self.pan.y,
        )
    }

    pub fn screen_to_graph(&self, point: Point) -> Point {
        Point::new(
            (point.x - self.pan.x) / self.zoom,
            (point.y - self.pan.y) / self.zoom,
        )
    }

    /// Pan that puts `graph_point` under `screen_point` at the current zoom.
    pub fn pan_placing(&self, graph_point: Point, screen_point: Point) -> Point {
        Point::new(
            screen_point.x - graph_point.x * self.zoom,
            screen_point.y - graph_point.y * self.zoom,
        )
    }

    /// Graph-space corners (top-left, bottom-right) visible through a view of
    /// `view_size` pixels.
    pub fn visible_corners(&self, view_size: Size) -> (Point, Point) {
        (
            self.screen_to_graph(Point::ZERO),
            self.screen_to_graph(Point::new(view_size.width, view_size.height)),
        )
    }
}

/// Snapshot of the main view: its transform and its own pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub transform: ViewTransform,
    pub view_size: Size,
}

impl Viewport {
    pub fn new(pan: Point, zoom: f64, view_size: Size) -> Self {
        Self {
            transform: ViewTransform::new(pan, zoom),
            view_size,
        }
    }

    pub fn pan(&self) -> Point {
        self.transform.pan
    }

    pub fn zoom(&self) -> f64 {
        self.transform.zoom
    }

    pub fn visible_corners(&self) -> (Point, Point) {
        self.transform.visible_corners(self.view_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_graph_inverse() {
        let t = ViewTransform::new(Point::new(40.0, -20.0), 2.0);
        let g = Point::new(13.0, 7.5);
        let s = t.graph_to_screen(g);
        assert_eq!(s, Point::new(66.0, -5.0));
        assert_eq!(t.screen_to_graph(s), g);
    }

    #[test]
    fn test_visible_corners() {
        let viewport = Viewport::new(Point::new(100.0, 50.0), 2.0, Size::new(800.0, 600.0));
        let (tl, br) = viewport.visible_corners();
        assert_eq!(tl, Point::new(-50.0, -25.0));
        assert_eq!(br, Point::new(350.0, 275.0));
    }

    #[test]
    fn test_identity_transform_shows_view_rect() {
        let viewport = Viewport::new(Point::ZERO, 1.0, Size::new(640.0, 480.0));
        assert_eq!(
            viewport.visible_corners(),
            (Point::ZERO, Point::new(640.0, 480.0))
        );
    }

    #[test]
    fn test_pan_placing_puts_point_under_target() {
        let t = ViewTransform::new(Point::ZERO, 1.5);
        let graph_point = Point::new(20.0, -8.0);
        let target = Point::new(100.0, 70.0);
        let moved = ViewTransform::new(t.pan_placing(graph_point, target), t.zoom);
        assert_eq!(moved.graph_to_screen(graph_point), target);
    }
}
