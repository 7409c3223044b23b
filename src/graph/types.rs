use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Display category assigned to nodes whose document entry names none.
pub const DEFAULT_NODE_KIND: &str = "default";

/// A node set and an edge set, shaped for a node-editor frontend.
///
/// Snapshots serialize to and from JSON so a presentation layer can exchange
/// them wholesale. Extra presentational fields an external editor attaches
/// to nodes or edges (`width`, `height`, `selected`, `dragging`, styling)
/// are tolerated on input and never re-emitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
}

impl Graph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    /// Decodes a snapshot from presentation-layer JSON.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Encodes the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// A single pipeline step as the node editor sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Identical to the document's node id.
    pub id: String,

    /// Display category; does not affect conversion.
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,

    #[serde(default)]
    pub data: NodeData,

    /// Grid placement derived from the node's ordinal index in the source
    /// document. Presentational only; never reaches the document.
    #[serde(default)]
    pub position: Position,
}

fn default_kind() -> String {
    DEFAULT_NODE_KIND.to_string()
}

/// The semantic payload of a graph node.
///
/// `function` is carried as an explicit field next to the display label, so
/// regenerating a document never has to pick the label apart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    /// Display string of the form `"<id> (<function-or-N/A>)"`.
    #[serde(default)]
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub params: IndexMap<String, Value>,

    /// Output variable name; empty when the document declares none.
    #[serde(default)]
    pub vars: String,
}

/// One dependency relation, directed from the dependency to the dependent.
///
/// Edges carry no identity beyond their endpoints. Duplicate
/// `(source, target)` pairs are representable, are not deduplicated, and
/// share the same derived id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Deterministic id of the form `"e-<source>-<target>"`.
    #[serde(default)]
    pub id: String,
    pub source: String,
    pub target: String,
}

/// A 2D canvas coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}
