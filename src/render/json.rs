//! JSON rendering for composed text layers.

use serde::Serialize;

use crate::document::ComposedPage;
use crate::error::{Error, Result};
use crate::model::PageLayer;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a page layer to JSON.
pub fn to_json(layer: &PageLayer, format: JsonFormat) -> Result<String> {
    serialize(layer, format)
}

/// Convert the composed pages of a document to a JSON array.
pub fn document_to_json(pages: &[ComposedPage], format: JsonFormat) -> Result<String> {
    serialize(pages, format)
}

fn serialize<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
