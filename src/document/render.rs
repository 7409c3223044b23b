use serde::Serialize;

use super::schema::PipelineDocument;

/// Fixed text substituted for the document when YAML serialization fails.
///
/// The regenerating direction deliberately never raises: whatever comes
/// back can always be written into an editable text area for the user to
/// see and correct.
pub const YAML_ERROR_SENTINEL: &str = "Error: Could not generate YAML.";

/// Serializes any value to YAML text, substituting [`YAML_ERROR_SENTINEL`]
/// when the serializer fails.
///
/// This is the single writer behind every document the engine emits. The
/// typed document model cannot smuggle unserializable values in, so the
/// sentinel path is unreachable from graphs built by this crate; the
/// contract is kept for callers serializing their own types.
pub fn render_yaml<T: Serialize>(value: &T) -> String {
    match serde_yaml::to_string(value) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(error = %e, "YAML serialization failed");
            YAML_ERROR_SENTINEL.to_string()
        }
    }
}

impl PipelineDocument {
    /// Serializes the document to YAML text. Never fails; see
    /// [`render_yaml`].
    pub fn to_yaml(&self) -> String {
        render_yaml(self)
    }
}
