//! An explicit state container for interactive editing sessions.
//!
//! The graph is the single authoritative representation; the YAML document
//! is derived from it on demand. Loading a document replaces the graph
//! wholesale, so the two faces can never drift apart between edits.

use serde_yaml::Value;

use crate::convert::{document_from_graph, edge_id, graph_from_document, node_label};
use crate::document::parse_document;
use crate::error::{DocumentParseError, EditorError};
use crate::graph::{
    DEFAULT_NODE_KIND, Graph, GraphEdge, GraphNode, NodeData, Position, grid_position,
};

/// Owns a pipeline across an editing session.
#[derive(Debug, Clone, Default)]
pub struct PipelineEditor {
    graph: Graph,
}

impl PipelineEditor {
    /// Creates an editor holding an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an editor from document text.
    pub fn from_document(text: &str) -> Result<Self, DocumentParseError> {
        Ok(Self {
            graph: graph_from_document(&parse_document(text)?),
        })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Replaces the whole graph, e.g. with a snapshot handed back by the
    /// presentation layer after drag interactions.
    pub fn set_graph(&mut self, graph: Graph) {
        self.graph = graph;
    }

    /// Derives the YAML document for the current state. Always returns
    /// displayable text; see
    /// [`render_yaml`](crate::document::render_yaml).
    pub fn document(&self) -> String {
        document_from_graph(&self.graph).to_yaml()
    }

    /// Parses `text` and replaces the current graph with the result.
    ///
    /// On a parse error the previous state is kept untouched, so a caller
    /// can surface the message and let the user keep editing.
    pub fn load_document(&mut self, text: &str) -> Result<(), DocumentParseError> {
        let document = parse_document(text)?;
        self.graph = graph_from_document(&document);
        tracing::debug!(
            nodes = self.graph.nodes.len(),
            edges = self.graph.edges.len(),
            "loaded document into editor"
        );
        Ok(())
    }

    /// Appends a new node, placed on the grid at the next ordinal index.
    pub fn add_node(
        &mut self,
        id: impl Into<String>,
        function: Option<&str>,
    ) -> Result<(), EditorError> {
        let id = id.into();
        if self.graph.contains_node(&id) {
            return Err(EditorError::DuplicateNode(id));
        }
        let position = grid_position(self.graph.nodes.len());
        self.graph.nodes.push(GraphNode {
            data: NodeData {
                label: node_label(&id, function),
                function: function.map(str::to_string),
                ..NodeData::default()
            },
            kind: DEFAULT_NODE_KIND.to_string(),
            position,
            id,
        });
        Ok(())
    }

    /// Removes a node together with every incident edge.
    pub fn remove_node(&mut self, id: &str) -> Result<(), EditorError> {
        let index = self
            .graph
            .nodes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| EditorError::UnknownNode(id.to_string()))?;
        self.graph.nodes.remove(index);
        self.graph.edges.retain(|e| e.source != id && e.target != id);
        Ok(())
    }

    /// Materializes a dependency of `target` on `source` and returns the
    /// new edge's id.
    ///
    /// Both endpoints must exist. Duplicate `(source, target)` pairs are
    /// allowed and share the same derived id.
    pub fn connect(&mut self, source: &str, target: &str) -> Result<String, EditorError> {
        for endpoint in [source, target] {
            if !self.graph.contains_node(endpoint) {
                return Err(EditorError::UnknownNode(endpoint.to_string()));
            }
        }
        let id = edge_id(source, target);
        self.graph.edges.push(GraphEdge {
            id: id.clone(),
            source: source.to_string(),
            target: target.to_string(),
        });
        Ok(id)
    }

    /// Removes one edge with the given id. When duplicates share the id,
    /// the earliest is removed.
    pub fn disconnect(&mut self, edge_id: &str) -> Result<(), EditorError> {
        let index = self
            .graph
            .edges
            .iter()
            .position(|e| e.id == edge_id)
            .ok_or_else(|| EditorError::UnknownEdge(edge_id.to_string()))?;
        self.graph.edges.remove(index);
        Ok(())
    }

    /// Sets or clears a node's function and refreshes its display label.
    pub fn set_function(&mut self, id: &str, function: Option<&str>) -> Result<(), EditorError> {
        let node = self.node_mut(id)?;
        node.data.function = function.map(str::to_string);
        node.data.label = node_label(id, function);
        Ok(())
    }

    /// Sets the node's output variable name; an empty string clears it.
    pub fn set_output_variable(
        &mut self,
        id: &str,
        vars: impl Into<String>,
    ) -> Result<(), EditorError> {
        self.node_mut(id)?.data.vars = vars.into();
        Ok(())
    }

    /// Inserts or overwrites one parameter.
    pub fn set_param(
        &mut self,
        id: &str,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<(), EditorError> {
        self.node_mut(id)?.data.params.insert(key.into(), value.into());
        Ok(())
    }

    /// Removes one parameter, returning its previous value if any.
    pub fn remove_param(&mut self, id: &str, key: &str) -> Result<Option<Value>, EditorError> {
        Ok(self.node_mut(id)?.data.params.shift_remove(key))
    }

    /// Moves a node on the canvas. Presentational only; the derived
    /// document is unaffected.
    pub fn move_node(&mut self, id: &str, position: Position) -> Result<(), EditorError> {
        self.node_mut(id)?.position = position;
        Ok(())
    }

    fn node_mut(&mut self, id: &str) -> Result<&mut GraphNode, EditorError> {
        self.graph
            .nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| EditorError::UnknownNode(id.to_string()))
    }
}
