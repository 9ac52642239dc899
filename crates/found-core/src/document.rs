use crate::{NodeId, NoteEdge, NoteNode, normalize_edges, normalize_nodes};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Storage keys used by the browser extension's export format.
const EXPORT_NODES_KEY: &str = "found_nodes_v1";
const EXPORT_EDGES_KEY: &str = "found_edges_v1";
const EXPORT_TAGS_KEY: &str = "found_tags_v1";

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse graph document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("graph document must be a JSON object")]
    NotAnObject,
}

/// The persisted shape of a note graph: nodes, links and the tag registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<NoteNode>,
    pub edges: Vec<NoteEdge>,
    #[serde(default)]
    pub tags: Map<String, Value>,
}

impl GraphDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a document, normalizing every node and edge record.
    ///
    /// Accepts both the plain `{nodes, edges, tags}` layout and the
    /// extension's export layout keyed by storage key.
    pub fn from_json_str(content: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self, DocumentError> {
        let Value::Object(object) = value else {
            return Err(DocumentError::NotAnObject);
        };
        let field = |plain: &str, exported: &str| {
            object
                .get(plain)
                .or_else(|| object.get(exported))
                .cloned()
                .unwrap_or(Value::Null)
        };

        let nodes = normalize_nodes(&field("nodes", EXPORT_NODES_KEY));
        let edges = normalize_edges(&field("edges", EXPORT_EDGES_KEY));
        let tags = match field("tags", EXPORT_TAGS_KEY) {
            Value::Object(tags) => tags,
            _ => Map::new(),
        };

        Ok(Self { nodes, edges, tags })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document = Self::from_json_str(&content)?;
        tracing::debug!(
            "Loaded graph document {:?}: {} nodes, {} edges",
            path,
            document.nodes.len(),
            document.edges.len()
        );
        Ok(document)
    }

    pub fn to_json_string(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DocumentError> {
        let path = path.as_ref();
        let content = self.to_json_string()?;
        fs::write(path, content).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn node(&self, id: &NodeId) -> Option<&NoteNode> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    pub fn add_node(&mut self, node: NoteNode) -> &NoteNode {
        self.nodes.push(node);
        &self.nodes[self.nodes.len() - 1]
    }
}
