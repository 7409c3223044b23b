use thiserror::Error;

/// Errors that can occur while turning pipeline document text into a graph.
///
/// Raised only by the document-to-graph direction. Callers are expected to
/// surface the message and keep their previous graph state; the regenerating
/// direction never raises (see [`crate::document::render_yaml`]).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentParseError {
    #[error("Failed to parse pipeline YAML: {0}")]
    Syntax(String),

    #[error("The `nodes` entry must be a mapping of node ids, found {found}")]
    NodesNotAMapping { found: &'static str },

    #[error("Node ids must be strings, found `{key}`")]
    NonStringNodeId { key: String },

    #[error("Node '{node_id}' is malformed: {message}")]
    MalformedNode { node_id: String, message: String },
}

/// Errors that can occur during [`PipelineEditor`](crate::editor::PipelineEditor)
/// operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("A node with id '{0}' already exists")]
    DuplicateNode(String),

    #[error("No node with id '{0}' exists")]
    UnknownNode(String),

    #[error("No edge with id '{0}' exists")]
    UnknownEdge(String),
}
