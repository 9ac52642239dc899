use crate::{Color, MIN_NODE_SIZE, NodeId, NoteNode};
use serde_json::Map;

const CAPTURE_LABEL_CHARS: usize = 30;
const PREVIEW_CHARS: usize = 180;
/// Captures with fewer words than this are kept whole as the label.
const SHORT_CAPTURE_WORDS: usize = 7;
const FALLBACK_TEXT: &str = "Untitled Node";

/// Builds a note from a captured text selection.
///
/// Short snippets become the label with no notes; longer ones are
/// truncated for the label and kept in full as notes.
pub fn capture_snippet(text: &str, url: Option<&str>) -> NoteNode {
    let text = if text.is_empty() { FALLBACK_TEXT } else { text };
    let word_count = text.split_whitespace().count();

    let (label, notes) = if word_count < SHORT_CAPTURE_WORDS {
        (text.to_string(), String::new())
    } else {
        let mut label: String = text.chars().take(CAPTURE_LABEL_CHARS).collect();
        if text.chars().count() > CAPTURE_LABEL_CHARS {
            label.push_str("...");
        }
        (label, text.to_string())
    };

    let url = url.filter(|u| !u.is_empty()).map(str::to_string);
    let color = if url.is_some() {
        Color::ACCENT
    } else {
        Color::MUTED
    };

    NoteNode {
        id: NodeId::generate(),
        label,
        notes_preview: notes.chars().take(PREVIEW_CHARS).collect(),
        notes,
        tags: Vec::new(),
        size: MIN_NODE_SIZE,
        color: color.to_string(),
        url,
        created_at: chrono::Utc::now().to_rfc3339(),
        position: None,
        meta: Map::new(),
    }
}
