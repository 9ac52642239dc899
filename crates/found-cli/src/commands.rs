use crate::settings::Settings;
use anyhow::{Context, Result};
use found_core::{GraphDocument, NoteNode, Point, capture_snippet};
use found_graph::{
    Bounds, CanvasGeometry, ClickNavigator, GraphSnapshot, InMemoryGraphView, MinimapRenderer,
    NavigateOutcome, PointerEvent, RasterSurface, RenderOutcome, Size, Viewport,
};
use serde::Serialize;
use std::path::Path;

/// Main-view pan/zoom the minimap is drawn against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewOptions {
    pub pan: Point,
    pub zoom: f64,
    pub view_size: Option<Size>,
}

impl ViewOptions {
    fn viewport(&self, settings: &Settings) -> Viewport {
        Viewport::new(
            self.pan,
            self.zoom,
            self.view_size.unwrap_or_else(|| settings.view_size()),
        )
    }
}

fn load_snapshot(
    doc_path: &Path,
    view: &ViewOptions,
    settings: &Settings,
) -> Result<GraphSnapshot> {
    let document = GraphDocument::load(doc_path)
        .with_context(|| format!("Failed to load graph document {:?}", doc_path))?;
    let viewport = view.viewport(settings);
    Ok(GraphSnapshot::from_document(&document, viewport))
}

/// Renders the document's minimap into a PNG at `output`.
pub fn render(
    doc_path: &Path,
    output: &Path,
    view: &ViewOptions,
    settings: &Settings,
) -> Result<RenderOutcome> {
    let snapshot = load_snapshot(doc_path, view, settings)?;
    let (width, height) = settings.minimap.pixel_size();
    let mut surface = RasterSurface::with_background(width, height, settings.background);

    let outcome =
        MinimapRenderer::new(settings.minimap.clone()).render(Some(&snapshot), Some(&mut surface));
    match &outcome {
        RenderOutcome::Drawn(stats) => tracing::info!(
            "Rendered {} nodes and {} edges ({} skipped)",
            stats.nodes_drawn,
            stats.edges_drawn,
            stats.skipped_items
        ),
        RenderOutcome::Skipped(reason) => {
            tracing::warn!("Nothing to draw ({:?}), writing a blank minimap", reason)
        }
    }

    surface
        .save_png(output)
        .with_context(|| format!("Failed to write {:?}", output))?;
    Ok(outcome)
}

/// Bounding box of the document's laid-out nodes, if any.
pub fn bounds(doc_path: &Path) -> Result<Option<Bounds>> {
    let document = GraphDocument::load(doc_path)
        .with_context(|| format!("Failed to load graph document {:?}", doc_path))?;
    Ok(Bounds::from_positions(
        document.nodes.iter().filter_map(|n| n.position),
    ))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LocateReport {
    pub graph_point: Point,
    pub pan: Point,
    pub zoom: f64,
}

/// Where a click at minimap pixel `at` would take the main view.
pub fn locate(
    doc_path: &Path,
    at: Point,
    view: &ViewOptions,
    settings: &Settings,
) -> Result<Option<LocateReport>> {
    let snapshot = load_snapshot(doc_path, view, settings)?;
    let mut graph_view = InMemoryGraphView::from_snapshot(snapshot);
    let canvas = CanvasGeometry::at(Point::ZERO, &settings.minimap);

    let outcome = ClickNavigator::new(settings.minimap.clone()).handle_click(
        &mut graph_view,
        &canvas,
        PointerEvent::new(at.x, at.y),
    );
    match outcome {
        NavigateOutcome::Panned { graph_point, pan } => Ok(Some(LocateReport {
            graph_point,
            pan,
            zoom: view.zoom,
        })),
        NavigateOutcome::Skipped(reason) => {
            tracing::warn!("Click could not be resolved: {:?}", reason);
            Ok(None)
        }
    }
}

/// Appends a captured snippet to the document, creating it if needed.
pub fn capture(doc_path: &Path, text: &str, url: Option<&str>) -> Result<NoteNode> {
    let mut document = if doc_path.exists() {
        GraphDocument::load(doc_path)
            .with_context(|| format!("Failed to load graph document {:?}", doc_path))?
    } else {
        tracing::info!("Creating new graph document {:?}", doc_path);
        GraphDocument::new()
    };

    let node = document.add_node(capture_snippet(text, url)).clone();
    document
        .save(doc_path)
        .with_context(|| format!("Failed to save graph document {:?}", doc_path))?;
    Ok(node)
}
