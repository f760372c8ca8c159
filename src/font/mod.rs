//! Font resources: deduplication, embedding policy and metrics.

pub mod encoding;
mod metrics;
mod registry;

pub use metrics::{FontMetrics, FontProvider, StandardFont, StandardFonts};
pub use registry::{FontRegistry, FontResource, FontTable};

use serde::{Deserialize, Serialize};

/// Whether a font's glyph program is embedded in the output document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Embedding {
    /// Embed the glyph program
    Embed,
    /// Rely on a standard substitute
    DontEmbed,
}
