use crate::{Bounds, GraphSnapshot, GraphView, MinimapEdge, MinimapNode, Size, ViewTransform};
use found_core::Point;

/// A [`GraphView`] held entirely in memory.
///
/// Stands in for the interactive graph view in headless tools and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct InMemoryGraphView {
    nodes: Vec<MinimapNode>,
    edges: Vec<MinimapEdge>,
    transform: ViewTransform,
    view_size: Size,
}

impl InMemoryGraphView {
    pub fn new(
        nodes: Vec<MinimapNode>,
        edges: Vec<MinimapEdge>,
        transform: ViewTransform,
        view_size: Size,
    ) -> Self {
        Self {
            nodes,
            edges,
            transform,
            view_size,
        }
    }

    pub fn from_snapshot(snapshot: GraphSnapshot) -> Self {
        Self::new(
            snapshot.nodes,
            snapshot.edges,
            snapshot.viewport.transform,
            snapshot.viewport.view_size,
        )
    }

    pub fn transform(&self) -> ViewTransform {
        self.transform
    }
}

impl GraphView for InMemoryGraphView {
    fn nodes(&self) -> Vec<MinimapNode> {
        self.nodes.clone()
    }

    fn edges(&self) -> Vec<MinimapEdge> {
        self.edges.clone()
    }

    fn pan(&self) -> Point {
        self.transform.pan
    }

    fn zoom(&self) -> f64 {
        self.transform.zoom
    }

    fn view_size(&self) -> Size {
        self.view_size
    }

    fn set_pan(&mut self, pan: Point) {
        self.transform.pan = pan;
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.transform.zoom = zoom;
    }

    fn center(&mut self) {
        let Some(bounds) = Bounds::from_positions(self.nodes.iter().map(|n| n.position)) else {
            return;
        };
        let content_center = Point::new(
            (bounds.min_x + bounds.max_x) / 2.0,
            (bounds.min_y + bounds.max_y) / 2.0,
        );
        self.transform.pan = self
            .transform
            .pan_placing(content_center, self.view_size.center());
    }
}
