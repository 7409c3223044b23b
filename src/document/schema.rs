use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// The declarative form of a pipeline: an insertion-ordered mapping from
/// node id to [`NodeSpec`].
///
/// Mapping order is semantic. It drives the ordinal grid layout when the
/// document is lowered to a graph, and it is preserved verbatim when a graph
/// is serialized back to text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineDocument {
    #[serde(default)]
    pub nodes: IndexMap<String, NodeSpec>,
}

impl PipelineDocument {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// A single named pipeline step.
///
/// Every field is optional in the textual form; absent fields are omitted
/// again on output, so a minimal node round-trips as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    /// Name of the operation this step runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,

    /// Named arguments passed to the function. Values are opaque YAML
    /// scalars or nested structures; the engine copies them verbatim.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub params: IndexMap<String, Value>,

    /// Name of the output variable this step produces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vars: Option<String>,

    /// Ids of the steps this one depends on, in declaration order.
    /// Duplicates are kept and produce duplicate edges.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,

    /// Display category for the node editor. Omitted when unset; the graph
    /// side substitutes its generic default.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}
