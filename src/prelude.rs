//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions so a consumer can
//! get the whole conversion surface with a single `use`.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowsheet::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let text = std::fs::read_to_string("pipeline.yaml")?;
//! let graph = document_to_graph(&text)?;
//! println!("{} nodes, {} edges", graph.nodes.len(), graph.edges.len());
//!
//! let regenerated = graph_to_document(&graph);
//! std::fs::write("pipeline.yaml", regenerated)?;
//! # Ok(())
//! # }
//! ```

// Core conversions
pub use crate::convert::{
    document_from_graph, document_to_graph, graph_from_document, graph_to_document,
};

// Label and id encoding rules
pub use crate::convert::{NO_FUNCTION, edge_id, node_label};

// Document types and the YAML reader/writer
pub use crate::document::{
    NodeSpec, PipelineDocument, STARTER_PIPELINE, YAML_ERROR_SENTINEL, parse_document, render_yaml,
};

// Graph types and layout
pub use crate::graph::{
    DEFAULT_NODE_KIND, Graph, GraphEdge, GraphNode, NodeData, Position, grid_position,
};

// Interactive editing
pub use crate::editor::PipelineEditor;

// Error types
pub use crate::error::{DocumentParseError, EditorError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
