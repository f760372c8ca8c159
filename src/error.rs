//! Error types for the ocrlayer library.

use thiserror::Error;

use crate::model::FontId;

/// Result type alias for ocrlayer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while composing a text layer.
#[derive(Error, Debug)]
pub enum Error {
    /// A page metadata entry is present but does not have the expected shape.
    #[error("Malformed page metadata: {0}")]
    MalformedMetadata(String),

    /// The page resolution is zero, negative or not a number.
    #[error("Invalid resolution: {0}")]
    InvalidResolution(f64),

    /// A text run references a font resource that was never registered.
    #[error("Unknown font resource: {0}")]
    UnknownFont(FontId),

    /// The font provider could not materialize a font.
    #[error("Font loading error: {0}")]
    FontLoad(String),

    /// Error decoding an OCR tree or metadata from JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error during rendering of the composed layer.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Page index is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(usize, usize),
}
