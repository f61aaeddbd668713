use crate::error::{ExportError, Result};
use crate::model::OutputData;

/// Pretty-printed JSON with two-space indentation.
pub fn render(data: &OutputData) -> Result<String> {
    serde_json::to_string_pretty(data).map_err(ExportError::Serialization)
}
