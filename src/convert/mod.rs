//! The two pure conversions between documents and graphs.
//!
//! Both directions are referentially transparent: they allocate only local
//! structures, mutate none of their inputs, and hold no state between
//! calls, so they can be invoked freely from any number of threads.

use std::collections::HashMap;

use indexmap::IndexMap;
use itertools::Itertools;

mod label;

pub use label::*;

use crate::document::{NodeSpec, PipelineDocument, parse_document};
use crate::error::DocumentParseError;
use crate::graph::{DEFAULT_NODE_KIND, Graph, GraphEdge, GraphNode, NodeData, grid_position};

/// Parses document text and lowers it to a graph.
///
/// Fails only on text that is not a valid document; see
/// [`parse_document`]. A document without nodes yields an empty graph.
pub fn document_to_graph(text: &str) -> Result<Graph, DocumentParseError> {
    Ok(graph_from_document(&parse_document(text)?))
}

/// Serializes a graph snapshot back to document text.
///
/// Never fails. A serializer error is swallowed and the sentinel text
/// [`YAML_ERROR_SENTINEL`](crate::document::YAML_ERROR_SENTINEL) is
/// returned instead.
pub fn graph_to_document(graph: &Graph) -> String {
    document_from_graph(graph).to_yaml()
}

/// Lowers a parsed document to its graph form.
///
/// Nodes come out in the document's mapping order, each placed on the grid
/// by its ordinal index. Dependencies are resolved in a second pass so the
/// existence check sees every declared node, not just the ones defined
/// earlier in the mapping; dependencies on undeclared nodes are dropped
/// silently.
pub fn graph_from_document(document: &PipelineDocument) -> Graph {
    let nodes = document
        .nodes
        .iter()
        .enumerate()
        .map(|(index, (id, spec))| GraphNode {
            id: id.clone(),
            kind: spec
                .kind
                .clone()
                .unwrap_or_else(|| DEFAULT_NODE_KIND.to_string()),
            data: NodeData {
                label: node_label(id, spec.function.as_deref()),
                function: spec.function.clone(),
                params: spec.params.clone(),
                vars: spec.vars.clone().unwrap_or_default(),
            },
            position: grid_position(index),
        })
        .collect();

    let mut edges = Vec::new();
    for (id, spec) in &document.nodes {
        for dependency in &spec.dependencies {
            if document.nodes.contains_key(dependency) {
                edges.push(GraphEdge {
                    id: edge_id(dependency, id),
                    source: dependency.clone(),
                    target: id.clone(),
                });
            } else {
                tracing::warn!(node = %id, dependency = %dependency, "dropping dependency on undeclared node");
            }
        }
    }

    Graph { nodes, edges }
}

/// Rebuilds the declarative document from a graph snapshot.
///
/// Each node's `dependencies` list is the ordered sources of its incoming
/// edges, accumulated in edge-iteration order; duplicate edges yield
/// duplicate entries. Absent or default-valued fields are omitted, and
/// presentational state (positions, selection) never appears.
pub fn document_from_graph(graph: &Graph) -> PipelineDocument {
    // Incoming edge sources per target, in edge-iteration order.
    let mut incoming: HashMap<&str, Vec<&str>> = graph
        .edges
        .iter()
        .map(|edge| (edge.target.as_str(), edge.source.as_str()))
        .into_group_map();

    let mut nodes = IndexMap::with_capacity(graph.nodes.len());
    for node in &graph.nodes {
        let function = node
            .data
            .function
            .as_deref()
            .filter(|f| *f != NO_FUNCTION)
            .map(str::to_string);
        let vars = (!node.data.vars.is_empty()).then(|| node.data.vars.clone());
        let kind = (node.kind != DEFAULT_NODE_KIND).then(|| node.kind.clone());
        let dependencies = incoming
            .remove(node.id.as_str())
            .unwrap_or_default()
            .into_iter()
            .map(str::to_string)
            .collect();

        nodes.insert(
            node.id.clone(),
            NodeSpec {
                function,
                params: node.data.params.clone(),
                vars,
                dependencies,
                kind,
            },
        );
    }

    if !incoming.is_empty() {
        tracing::debug!(
            targets = incoming.len(),
            "ignored edges whose target is not in the node set"
        );
    }

    PipelineDocument { nodes }
}
