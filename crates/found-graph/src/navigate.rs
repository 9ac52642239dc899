use crate::render::SkipReason;
use crate::{
    Bounds, CoordinateMapper, GraphSnapshot, MinimapConfig, MinimapEdge, MinimapNode, Size,
    ViewTransform, Viewport,
};
use found_core::Point;

/// The main graph view, as seen by the minimap.
///
/// Implementations own the live node/edge data and the pan/zoom state.
/// The minimap only ever changes the view through [`GraphView::set_pan`],
/// [`GraphView::set_zoom`] and [`GraphView::center`].
pub trait GraphView {
    fn nodes(&self) -> Vec<MinimapNode>;

    fn edges(&self) -> Vec<MinimapEdge>;

    fn pan(&self) -> Point;

    fn zoom(&self) -> f64;

    /// Pixel size of the view's own rendering surface.
    fn view_size(&self) -> Size;

    fn set_pan(&mut self, pan: Point);

    fn set_zoom(&mut self, zoom: f64);

    /// Pans so the content is centered in the view.
    fn center(&mut self);

    fn viewport(&self) -> Viewport {
        Viewport::new(self.pan(), self.zoom(), self.view_size())
    }

    /// Immutable copy of the current state, for rendering.
    fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot::new(self.nodes(), self.edges(), self.viewport())
    }
}

/// Where the minimap canvas sits on screen and its logical size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasGeometry {
    /// Top-left corner of the canvas in client coordinates.
    pub client_origin: Point,
    pub size: Size,
}

impl CanvasGeometry {
    pub fn new(client_origin: Point, size: Size) -> Self {
        Self {
            client_origin,
            size,
        }
    }

    /// Canvas placed at `client_origin` with the configured logical size.
    pub fn at(client_origin: Point, config: &MinimapConfig) -> Self {
        Self::new(client_origin, Size::new(config.width, config.height))
    }

    pub fn to_local(&self, client: Point) -> Point {
        Point::new(
            client.x - self.client_origin.x,
            client.y - self.client_origin.y,
        )
    }
}

/// A pointer click in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerEvent {
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }

    pub fn client(&self) -> Point {
        Point::new(self.client_x, self.client_y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigateOutcome {
    /// The view was re-panned so `graph_point` sits at the canvas center.
    Panned { graph_point: Point, pan: Point },
    Skipped(SkipReason),
}

/// Turns minimap clicks into pans of the main view.
#[derive(Debug, Clone, Default)]
pub struct ClickNavigator {
    config: MinimapConfig,
}

impl ClickNavigator {
    /// Navigator for `config`. An invalid config is replaced by the defaults.
    pub fn new(config: MinimapConfig) -> Self {
        Self {
            config: config.sanitized(),
        }
    }

    pub fn config(&self) -> &MinimapConfig {
        &self.config
    }

    /// Graph-space point under a minimap click, or `None` for an empty graph.
    pub fn resolve<V>(
        &self,
        view: &V,
        canvas: &CanvasGeometry,
        pointer: PointerEvent,
    ) -> Option<Point>
    where
        V: GraphView + ?Sized,
    {
        let bounds = Bounds::from_positions(view.nodes().into_iter().map(|n| n.position))?;
        let local = canvas.to_local(pointer.client());
        Some(CoordinateMapper::new(&bounds, &self.config).to_graph(local))
    }

    /// Re-pans `view` so the clicked spot becomes the new visual center.
    ///
    /// Zoom is preserved. This is the only minimap operation that mutates
    /// the main view.
    pub fn handle_click<V>(
        &self,
        view: &mut V,
        canvas: &CanvasGeometry,
        pointer: PointerEvent,
    ) -> NavigateOutcome
    where
        V: GraphView + ?Sized,
    {
        let zoom = view.zoom();
        if !(zoom.is_finite() && zoom > 0.0) || !pointer.client().is_finite() {
            tracing::debug!(
                "Minimap click ignored: zoom {} pointer {}",
                zoom,
                pointer.client()
            );
            return NavigateOutcome::Skipped(SkipReason::InvalidInput);
        }
        let Some(graph_point) = self.resolve(&*view, canvas, pointer) else {
            tracing::debug!("Minimap click ignored: graph is empty");
            return NavigateOutcome::Skipped(SkipReason::EmptyGraph);
        };

        let pan =
            ViewTransform::new(view.pan(), zoom).pan_placing(graph_point, canvas.size.center());
        if !(graph_point.is_finite() && pan.is_finite()) {
            tracing::debug!(
                "Minimap click ignored: resolved to {} with pan {}",
                graph_point,
                pan
            );
            return NavigateOutcome::Skipped(SkipReason::InvalidInput);
        }

        view.center();
        view.set_zoom(zoom);
        view.set_pan(pan);
        tracing::debug!("Minimap click at {} panned view to {}", graph_point, pan);

        NavigateOutcome::Panned { graph_point, pan }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryGraphView;
    use found_core::NodeId;

    fn view_with(points: &[(f64, f64)], zoom: f64) -> InMemoryGraphView {
        let nodes = points
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| MinimapNode {
                id: NodeId(format!("n{i}")),
                position: Point::new(x, y),
                color: None,
            })
            .collect();
        InMemoryGraphView::new(
            nodes,
            Vec::new(),
            ViewTransform::new(Point::new(3.0, -9.0), zoom),
            Size::new(1024.0, 768.0),
        )
    }

    /// A view whose recenter also resets zoom, as some graph widgets do.
    struct ZoomResettingView(InMemoryGraphView);

    impl GraphView for ZoomResettingView {
        fn nodes(&self) -> Vec<MinimapNode> {
            self.0.nodes()
        }
        fn edges(&self) -> Vec<MinimapEdge> {
            self.0.edges()
        }
        fn pan(&self) -> Point {
            self.0.pan()
        }
        fn zoom(&self) -> f64 {
            self.0.zoom()
        }
        fn view_size(&self) -> Size {
            self.0.view_size()
        }
        fn set_pan(&mut self, pan: Point) {
            self.0.set_pan(pan)
        }
        fn set_zoom(&mut self, zoom: f64) {
            self.0.set_zoom(zoom)
        }
        fn center(&mut self) {
            self.0.center();
            self.0.set_zoom(1.0);
        }
    }

    #[test]
    fn test_click_at_canvas_center_resolves_to_box_center() {
        let mut view = view_with(&[(-50.0, -30.0), (50.0, 30.0), (10.0, 0.0)], 2.0);
        let canvas = CanvasGeometry::at(Point::new(500.0, 400.0), &MinimapConfig::default());
        let outcome = ClickNavigator::default().handle_click(
            &mut view,
            &canvas,
            PointerEvent::new(600.0, 470.0),
        );

        let NavigateOutcome::Panned { graph_point, pan } = outcome else {
            panic!("expected a pan, got {outcome:?}");
        };
        assert!(graph_point.distance(Point::ZERO) < 1e-9);
        assert_eq!(pan, Point::new(100.0, 70.0));
        assert_eq!(view.pan(), pan);
        assert_eq!(view.zoom(), 2.0);
    }

    #[test]
    fn test_clicked_point_lands_on_canvas_center() {
        let mut view = view_with(&[(0.0, 0.0), (360.0, 240.0)], 0.75);
        let canvas = CanvasGeometry::at(Point::ZERO, &MinimapConfig::default());
        let outcome = ClickNavigator::default().handle_click(
            &mut view,
            &canvas,
            PointerEvent::new(10.0, 130.0),
        );

        let NavigateOutcome::Panned { graph_point, .. } = outcome else {
            panic!("expected a pan, got {outcome:?}");
        };
        // Bottom-left corner of the padded area is the content's (min_x, max_y).
        assert!(graph_point.distance(Point::new(0.0, 240.0)) < 1e-9);
        let screen = view.transform().graph_to_screen(graph_point);
        assert!(screen.distance(Point::new(100.0, 70.0)) < 1e-9);
    }

    #[test]
    fn test_zoom_survives_recentering() {
        let mut view = ZoomResettingView(view_with(&[(0.0, 0.0), (10.0, 10.0)], 3.5));
        let canvas = CanvasGeometry::at(Point::ZERO, &MinimapConfig::default());
        let outcome = ClickNavigator::default().handle_click(
            &mut view,
            &canvas,
            PointerEvent::new(40.0, 40.0),
        );
        assert!(matches!(outcome, NavigateOutcome::Panned { .. }));
        assert_eq!(view.zoom(), 3.5);
    }

    #[test]
    fn test_empty_graph_is_noop() {
        let mut view = view_with(&[(f64::NAN, 1.0)], 1.0);
        let canvas = CanvasGeometry::at(Point::ZERO, &MinimapConfig::default());
        let outcome = ClickNavigator::default().handle_click(
            &mut view,
            &canvas,
            PointerEvent::new(50.0, 50.0),
        );
        assert_eq!(outcome, NavigateOutcome::Skipped(SkipReason::EmptyGraph));
        assert_eq!(
            view.transform(),
            ViewTransform::new(Point::new(3.0, -9.0), 1.0)
        );
    }

    #[test]
    fn test_unusable_zoom_is_noop() {
        let mut view = view_with(&[(0.0, 0.0)], 0.0);
        let before = view.clone();
        let canvas = CanvasGeometry::at(Point::ZERO, &MinimapConfig::default());
        let outcome = ClickNavigator::default().handle_click(
            &mut view,
            &canvas,
            PointerEvent::new(50.0, 50.0),
        );
        assert_eq!(outcome, NavigateOutcome::Skipped(SkipReason::InvalidInput));
        assert_eq!(view, before);
    }

    #[test]
    fn test_overflowing_extent_leaves_view_untouched() {
        let mut view = view_with(&[(-1.7e308, 0.0), (1.7e308, 10.0)], 1.0);
        let before = view.clone();
        let canvas = CanvasGeometry::at(Point::ZERO, &MinimapConfig::default());
        let outcome = ClickNavigator::default().handle_click(
            &mut view,
            &canvas,
            PointerEvent::new(50.0, 50.0),
        );
        assert_eq!(outcome, NavigateOutcome::Skipped(SkipReason::InvalidInput));
        assert_eq!(view, before);
    }

    #[test]
    fn test_padding_swallowing_canvas_never_corrupts_pan() {
        let config = MinimapConfig {
            padding: 100.0,
            ..MinimapConfig::default()
        };
        let navigator = ClickNavigator::new(config.clone());
        assert_eq!(navigator.config(), &MinimapConfig::default());

        let mut view = view_with(&[(0.0, 0.0), (40.0, 30.0)], 1.0);
        let canvas = CanvasGeometry::at(Point::ZERO, &config);
        let outcome = navigator.handle_click(&mut view, &canvas, PointerEvent::new(50.0, 50.0));
        assert!(matches!(outcome, NavigateOutcome::Panned { .. }));
        assert!(view.pan().is_finite());
    }

    #[test]
    fn test_repeated_clicks_are_idempotent() {
        let mut view = view_with(&[(0.0, 0.0), (80.0, 20.0)], 1.25);
        let canvas = CanvasGeometry::at(Point::new(12.0, 34.0), &MinimapConfig::default());
        let navigator = ClickNavigator::default();
        let first = navigator.handle_click(&mut view, &canvas, PointerEvent::new(70.0, 90.0));
        let second = navigator.handle_click(&mut view, &canvas, PointerEvent::new(70.0, 90.0));
        assert_eq!(first, second);
    }
}
