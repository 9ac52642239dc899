use crate::{Bounds, Viewport};
use found_core::{Color, GraphDocument, NodeId, Point};
use std::collections::HashMap;

/// The minimal view of a node the minimap needs.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimapNode {
    pub id: NodeId,
    /// Non-finite when the node has not been laid out yet.
    pub position: Point,
    pub color: Option<Color>,
}

/// An edge with both endpoints already resolved to positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimapEdge {
    pub source: Point,
    pub target: Point,
}

/// Immutable copy of everything a minimap draw reads from the main view.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphSnapshot {
    pub nodes: Vec<MinimapNode>,
    pub edges: Vec<MinimapEdge>,
    pub viewport: Viewport,
}

impl GraphSnapshot {
    pub fn new(nodes: Vec<MinimapNode>, edges: Vec<MinimapEdge>, viewport: Viewport) -> Self {
        Self {
            nodes,
            edges,
            viewport,
        }
    }

    /// Builds a snapshot from a stored document.
    ///
    /// Nodes without a position are kept with a non-finite position so they
    /// count as not laid out. Edges pointing at unknown nodes are dropped.
    pub fn from_document(document: &GraphDocument, viewport: Viewport) -> Self {
        let nodes: Vec<MinimapNode> = document
            .nodes
            .iter()
            .map(|node| MinimapNode {
                id: node.id.clone(),
                position: node.position.unwrap_or(Point::new(f64::NAN, f64::NAN)),
                color: parse_node_color(&node.id, &node.color),
            })
            .collect();

        let positions: HashMap<&NodeId, Point> =
            nodes.iter().map(|n| (&n.id, n.position)).collect();

        let edges = document
            .edges
            .iter()
            .filter_map(|edge| {
                let source = positions.get(&edge.source);
                let target = positions.get(&edge.target);
                match (source, target) {
                    (Some(&source), Some(&target)) => Some(MinimapEdge { source, target }),
                    _ => {
                        tracing::warn!(
                            "Edge {} references a missing node ({} -> {})",
                            edge.id,
                            edge.source,
                            edge.target
                        );
                        None
                    }
                }
            })
            .collect();

        Self::new(nodes, edges, viewport)
    }

    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.nodes.iter().map(|n| n.position)
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_positions(self.positions())
    }
}

fn parse_node_color(id: &NodeId, value: &str) -> Option<Color> {
    if value.trim().is_empty() {
        return None;
    }
    match Color::from_hex(value) {
        Ok(color) => Some(color),
        Err(e) => {
            tracing::warn!("Node {} has an unusable color, using default: {}", id, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Size;
    use serde_json::json;

    fn viewport() -> Viewport {
        Viewport::new(Point::ZERO, 1.0, Size::new(800.0, 600.0))
    }

    #[test]
    fn test_from_document_resolves_edges() {
        let doc = GraphDocument::from_value(&json!({
            "nodes": [
                { "id": "a", "color": "#ff0000", "position": { "x": 0.0, "y": 0.0 } },
                { "id": "b", "color": "tomato", "position": { "x": 10.0, "y": 5.0 } },
                { "id": "c" }
            ],
            "edges": [
                { "source": "a", "target": "b" },
                { "source": "a", "target": "ghost" }
            ]
        }))
        .unwrap();

        let snapshot = GraphSnapshot::from_document(&doc, viewport());
        assert_eq!(snapshot.nodes.len(), 3);
        assert_eq!(snapshot.nodes[0].color, Some(Color::rgb(255, 0, 0)));
        assert_eq!(snapshot.nodes[1].color, None);
        assert!(!snapshot.nodes[2].position.is_finite());
        assert_eq!(
            snapshot.edges,
            vec![MinimapEdge {
                source: Point::new(0.0, 0.0),
                target: Point::new(10.0, 5.0)
            }]
        );
    }

    #[test]
    fn test_bounds_ignore_unplaced_nodes() {
        let doc = GraphDocument::from_value(&json!({
            "nodes": [
                { "id": "a", "position": { "x": -4.0, "y": 2.0 } },
                { "id": "b" }
            ]
        }))
        .unwrap();
        let snapshot = GraphSnapshot::from_document(&doc, viewport());
        let bounds = snapshot.bounds().unwrap();
        assert_eq!(bounds.positions, vec![Point::new(-4.0, 2.0)]);
    }
}
