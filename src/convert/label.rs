//! Shared encoding rules for node labels and edge ids.

/// Placeholder shown in a node label when no function is set.
pub const NO_FUNCTION: &str = "N/A";

/// Synthesizes the display label for a node: `"<id> (<function>)"`, with
/// [`NO_FUNCTION`] standing in when no function is set.
///
/// The label is presentation text. The function name also travels as an
/// explicit field on [`NodeData`](crate::graph::NodeData), so nothing ever
/// parses this string back apart.
pub fn node_label(id: &str, function: Option<&str>) -> String {
    format!("{} ({})", id, function.unwrap_or(NO_FUNCTION))
}

/// Derives the deterministic edge id for a dependency relation.
pub fn edge_id(source: &str, target: &str) -> String {
    format!("e-{}-{}", source, target)
}
