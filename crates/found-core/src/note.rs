use crate::{Color, EdgeId, NodeId, Point};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Smallest rendered size a note node may have.
pub const MIN_NODE_SIZE: f64 = 28.0;

const LABEL_FROM_NOTES_CHARS: usize = 40;
const PREVIEW_CHARS: usize = 180;

/// A captured note as stored in a graph document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteNode {
    pub id: NodeId,
    pub label: String,
    pub notes: String,
    pub notes_preview: String,
    pub tags: Vec<String>,
    pub size: f64,
    /// CSS color string. Usually hex, but arbitrary strings survive a load.
    pub color: String,
    pub url: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,
    #[serde(default)]
    pub meta: Map<String, Value>,
}

/// A directed link between two notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteEdge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    #[serde(default)]
    pub label: String,
}

/// Loosely-typed node record as found in imported or hand-edited documents.
///
/// Every field is kept as raw JSON so a single mistyped value never costs
/// the rest of the record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawNode {
    id: Value,
    label: Value,
    notes: Value,
    notes_preview: Value,
    tags: Value,
    size: Value,
    color: Value,
    url: Value,
    #[serde(rename = "createdAt")]
    created_at: Value,
    position: Value,
    meta: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawEdge {
    id: Value,
    source: Value,
    target: Value,
    from: Value,
    to: Value,
    label: Value,
}

/// Non-empty strings pass through and numbers are spelled out; anything
/// else counts as absent.
fn lenient_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn prefix_chars(text: &str, count: usize) -> String {
    text.chars().take(count).collect()
}

fn lenient_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl From<RawNode> for NoteNode {
    fn from(raw: RawNode) -> Self {
        let notes = lenient_string(raw.notes).unwrap_or_default();
        let url = lenient_string(raw.url);

        let label = match lenient_string(raw.label) {
            Some(label) if !label.trim().is_empty() => label,
            _ if !notes.is_empty() => prefix_chars(&notes, LABEL_FROM_NOTES_CHARS),
            _ => "Untitled".to_string(),
        };
        let notes_preview = lenient_string(raw.notes_preview)
            .unwrap_or_else(|| prefix_chars(&notes, PREVIEW_CHARS));
        let tags = match raw.tags {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        };
        let size = lenient_number(&raw.size)
            .filter(|s| s.is_finite() && *s != 0.0)
            .unwrap_or(MIN_NODE_SIZE)
            .max(MIN_NODE_SIZE);
        let color = lenient_string(raw.color).unwrap_or_else(|| {
            if url.is_some() {
                Color::ACCENT.to_string()
            } else {
                Color::MUTED.to_string()
            }
        });
        let position = match raw.position {
            Value::Null => None,
            value => match serde_json::from_value::<Point>(value) {
                Ok(position) => Some(position),
                Err(e) => {
                    tracing::warn!("Dropping unusable node position: {}", e);
                    None
                }
            },
        };
        let meta = match raw.meta {
            Value::Object(meta) => meta,
            _ => Map::new(),
        };

        Self {
            id: lenient_string(raw.id)
                .map(NodeId)
                .unwrap_or_else(NodeId::generate),
            label,
            notes,
            notes_preview,
            tags,
            size,
            color,
            url,
            created_at: lenient_string(raw.created_at)
                .unwrap_or_else(|| chrono::Utc::now().to_rfc3339()),
            position,
            meta,
        }
    }
}

/// Normalizes loosely-typed node records into complete [`NoteNode`]s.
///
/// Anything that is not an array yields no nodes. Entries that are not
/// objects are treated as empty records.
pub fn normalize_nodes(value: &Value) -> Vec<NoteNode> {
    let Value::Array(items) = value else {
        return Vec::new();
    };
    items
        .iter()
        .map(|item| {
            let raw = serde_json::from_value::<RawNode>(item.clone()).unwrap_or_else(|e| {
                tracing::warn!("Malformed node record, using defaults: {}", e);
                RawNode::default()
            });
            NoteNode::from(raw)
        })
        .collect()
}

/// Normalizes loosely-typed edge records. `from`/`to` are accepted as
/// aliases for `source`/`target`; edges missing either endpoint are dropped.
pub fn normalize_edges(value: &Value) -> Vec<NoteEdge> {
    let Value::Array(items) = value else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            let raw = serde_json::from_value::<RawEdge>(item.clone()).ok()?;
            let source = lenient_string(raw.source).or_else(|| lenient_string(raw.from))?;
            let target = lenient_string(raw.target).or_else(|| lenient_string(raw.to))?;
            Some(NoteEdge {
                id: lenient_string(raw.id)
                    .map(EdgeId)
                    .unwrap_or_else(EdgeId::generate),
                source: NodeId(source),
                target: NodeId(target),
                label: lenient_string(raw.label).unwrap_or_default(),
            })
        })
        .collect()
}
