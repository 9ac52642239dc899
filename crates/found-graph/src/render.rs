//! Minimap painting.
//!
//! Drawing order is fixed: edges, then nodes, then the viewport indicator,
//! so the indicator sits on top and edges form a dim background layer.

use crate::surface::{MinimapSurface, Stroke};
use crate::{CoordinateMapper, GraphSnapshot, MinimapConfig};
use found_core::Point;

/// Why a minimap operation did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No graph was supplied.
    MissingGraph,
    /// No surface was supplied.
    MissingSurface,
    /// A surface was supplied but cannot be drawn on.
    SurfaceUnavailable,
    /// The graph has no node with a finite position.
    EmptyGraph,
    /// The main view's zoom or the pointer position is not usable.
    InvalidInput,
}

/// What a completed render drew.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStats {
    pub edges_drawn: usize,
    pub nodes_drawn: usize,
    /// Nodes and edges left out because a position was not finite.
    pub skipped_items: usize,
    /// Minimap-pixel corners of the viewport indicator, if it was drawn.
    pub viewport_rect: Option<(Point, Point)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    Drawn(RenderStats),
    Skipped(SkipReason),
}

impl RenderOutcome {
    pub fn is_drawn(&self) -> bool {
        matches!(self, Self::Drawn(_))
    }

    pub fn stats(&self) -> Option<&RenderStats> {
        match self {
            Self::Drawn(stats) => Some(stats),
            Self::Skipped(_) => None,
        }
    }
}

/// Paints graph overviews onto minimap surfaces.
///
/// Holds no state between calls: every render recomputes bounds from the
/// snapshot it is given, so repeated renders of the same input are
/// identical.
#[derive(Debug, Clone, Default)]
pub struct MinimapRenderer {
    config: MinimapConfig,
}

impl MinimapRenderer {
    /// Renderer for `config`. An invalid config is replaced by the defaults.
    pub fn new(config: MinimapConfig) -> Self {
        Self {
            config: config.sanitized(),
        }
    }

    pub fn config(&self) -> &MinimapConfig {
        &self.config
    }

    /// Repaints `surface` from `graph`.
    ///
    /// Never fails: missing inputs and empty graphs are reported as
    /// [`RenderOutcome::Skipped`]. An empty graph still clears the surface.
    pub fn render<S>(
        &self,
        graph: Option<&GraphSnapshot>,
        surface: Option<&mut S>,
    ) -> RenderOutcome
    where
        S: MinimapSurface + ?Sized,
    {
        let Some(graph) = graph else {
            return skipped(SkipReason::MissingGraph);
        };
        let Some(surface) = surface else {
            return skipped(SkipReason::MissingSurface);
        };
        if !surface.is_ready() {
            return skipped(SkipReason::SurfaceUnavailable);
        }

        let config = &self.config;
        let (width, height) = config.pixel_size();
        surface.resize(width, height);
        surface.clear();

        let Some(bounds) = graph.bounds() else {
            return skipped(SkipReason::EmptyGraph);
        };
        let mapper = CoordinateMapper::new(&bounds, config);
        let mut skipped_items = 0;

        let edge_stroke = Stroke::new(
            config.edge_width,
            config.edge_color.with_opacity(config.edge_opacity),
        );
        let mut edges_drawn = 0;
        for edge in &graph.edges {
            if !(edge.source.is_finite() && edge.target.is_finite()) {
                skipped_items += 1;
                continue;
            }
            surface.stroke_line(
                mapper.to_mini(edge.source),
                mapper.to_mini(edge.target),
                edge_stroke,
            );
            edges_drawn += 1;
        }

        let mut nodes_drawn = 0;
        for node in &graph.nodes {
            if !node.position.is_finite() {
                skipped_items += 1;
                continue;
            }
            let color = node.color.unwrap_or(config.node_color);
            surface.fill_circle(mapper.to_mini(node.position), config.node_radius, color);
            nodes_drawn += 1;
        }

        // Left unclipped: when zoomed out past the content the indicator
        // extends beyond the canvas.
        let (top_left, bottom_right) = graph.viewport.visible_corners();
        let viewport_rect = if top_left.is_finite() && bottom_right.is_finite() {
            let corners = (mapper.to_mini(top_left), mapper.to_mini(bottom_right));
            surface.stroke_rect(
                corners.0,
                corners.1,
                Stroke::new(config.viewport_width, config.viewport_color),
            );
            Some(corners)
        } else {
            tracing::debug!(
                "Viewport indicator skipped, zoom {} is unusable",
                graph.viewport.zoom()
            );
            None
        };

        if skipped_items > 0 {
            tracing::debug!(
                "Minimap left out {} items without a finite position",
                skipped_items
            );
        }

        RenderOutcome::Drawn(RenderStats {
            edges_drawn,
            nodes_drawn,
            skipped_items,
            viewport_rect,
        })
    }
}

fn skipped(reason: SkipReason) -> RenderOutcome {
    tracing::debug!("Minimap render skipped: {:?}", reason);
    RenderOutcome::Skipped(reason)
}
