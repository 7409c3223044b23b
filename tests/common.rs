//! Shared fixtures for conversion and editor tests.
use flowsheet::prelude::*;

/// A document exercising every node field: functions, params, output
/// variables, dependencies, and a custom display kind.
#[allow(dead_code)]
pub const PIPELINE_YAML: &str = r#"nodes:
  load_data:
    function: read_csv
    params:
      file_path: data/input.csv
      separator: ","
    vars: df
  normalize:
    function: scale
    params:
      df: df
      factor: 2.5
    vars: df_scaled
    dependencies:
      - load_data
  report:
    type: sink
    vars: summary
    dependencies:
      - load_data
      - normalize
"#;

/// Builds a graph node with the given id and function, default kind, and
/// default position.
#[allow(dead_code)]
pub fn node(id: &str, function: Option<&str>) -> GraphNode {
    GraphNode {
        id: id.to_string(),
        kind: DEFAULT_NODE_KIND.to_string(),
        data: NodeData {
            label: node_label(id, function),
            function: function.map(str::to_string),
            ..NodeData::default()
        },
        position: Position::default(),
    }
}

/// Builds an edge with its derived id.
#[allow(dead_code)]
pub fn edge(source: &str, target: &str) -> GraphEdge {
    GraphEdge {
        id: edge_id(source, target),
        source: source.to_string(),
        target: target.to_string(),
    }
}
