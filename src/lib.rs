//! # Flowsheet - Pipeline Document and Graph Conversion Engine
//!
//! **Flowsheet** converts between the two faces of a visually edited data
//! pipeline: a declarative YAML document and a node-and-edge graph. Editing
//! the document re-derives the graph; editing the graph regenerates the
//! document. Both directions are pure value-to-value conversions with no
//! shared state, so a presentation layer can call them as often as it likes.
//!
//! ## Core Workflow
//!
//! 1.  **Parse**: [`document_to_graph`](convert::document_to_graph) turns
//!     document text into a [`Graph`](graph::Graph) of positioned nodes and
//!     dependency edges. Malformed YAML fails with a
//!     [`DocumentParseError`](error::DocumentParseError); a document without
//!     a `nodes` mapping is simply an empty graph.
//! 2.  **Edit**: the graph is shaped for a node-editor frontend. Each node
//!     carries its id, a display label, an explicit `function` field, its
//!     parameters, and a deterministic grid position. A
//!     [`PipelineEditor`](editor::PipelineEditor) can own the graph across
//!     an interactive session if you want edit operations instead of raw
//!     snapshots.
//! 3.  **Regenerate**: [`graph_to_document`](convert::graph_to_document)
//!     serializes any graph snapshot back to YAML. It never fails: a
//!     serializer error is swallowed and the fixed sentinel text
//!     [`YAML_ERROR_SENTINEL`](document::YAML_ERROR_SENTINEL) is returned so
//!     callers always have something to display.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowsheet::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let graph = document_to_graph(
//!         "nodes:\n  load:\n    function: read_csv\n  clean:\n    function: drop_nans\n    dependencies:\n      - load\n",
//!     )?;
//!     assert_eq!(graph.nodes.len(), 2);
//!     assert_eq!(graph.nodes[0].data.label, "load (read_csv)");
//!     assert_eq!(graph.edges[0].id, "e-load-clean");
//!
//!     let yaml = graph_to_document(&graph);
//!     assert!(yaml.contains("function: read_csv"));
//!     Ok(())
//! }
//! ```
//!
//! ## Interactive Editing
//!
//! ```rust
//! use flowsheet::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut editor = PipelineEditor::from_document(STARTER_PIPELINE)?;
//!     editor.add_node("plot", Some("plot_series"))?;
//!     editor.connect("rename_columns", "plot")?;
//!
//!     let yaml = editor.document();
//!     assert!(yaml.contains("plot_series"));
//!     Ok(())
//! }
//! ```

pub mod convert;
pub mod document;
pub mod editor;
pub mod error;
pub mod graph;
pub mod prelude;
