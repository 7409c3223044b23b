use indexmap::IndexMap;
use serde_yaml::Value;

use super::schema::{NodeSpec, PipelineDocument};
use crate::error::DocumentParseError;

/// Parses pipeline document text into a [`PipelineDocument`].
///
/// Malformed YAML fails with [`DocumentParseError::Syntax`] carrying the
/// underlying parser message. A well-formed document without a `nodes`
/// mapping (empty text, a `null` document, a scalar, or `nodes: null`) is
/// not an error and parses to an empty document.
pub fn parse_document(text: &str) -> Result<PipelineDocument, DocumentParseError> {
    let root: Value = serde_yaml::from_str(text)
        .map_err(|e| DocumentParseError::Syntax(e.to_string()))?;

    let Some(nodes_value) = root.get("nodes") else {
        return Ok(PipelineDocument::default());
    };

    let entries = match nodes_value {
        Value::Null => return Ok(PipelineDocument::default()),
        Value::Mapping(entries) => entries,
        other => {
            return Err(DocumentParseError::NodesNotAMapping {
                found: yaml_type_name(other),
            });
        }
    };

    let mut nodes = IndexMap::with_capacity(entries.len());
    for (key, value) in entries {
        let id = key
            .as_str()
            .ok_or_else(|| DocumentParseError::NonStringNodeId {
                key: scalar_preview(key),
            })?;
        let spec: NodeSpec = serde_yaml::from_value(value.clone()).map_err(|e| {
            DocumentParseError::MalformedNode {
                node_id: id.to_string(),
                message: e.to_string(),
            }
        })?;
        nodes.insert(id.to_string(), spec);
    }

    tracing::debug!(nodes = nodes.len(), "parsed pipeline document");
    Ok(PipelineDocument { nodes })
}

fn yaml_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

fn scalar_preview(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(_) => "<sequence>".to_string(),
        Value::Mapping(_) => "<mapping>".to_string(),
        Value::Tagged(_) => "<tagged value>".to_string(),
    }
}
