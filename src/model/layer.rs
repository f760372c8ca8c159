//! The composed text layer of one page.

use serde::Serialize;

use super::{Size, TextRun};
use crate::font::{Embedding, FontTable};

/// Runs and fonts for one page, fully resolved.
#[derive(Debug, Clone, Serialize)]
pub struct PageLayer {
    /// Target page size in points
    pub page_size: Size,

    /// Runs in traversal order
    pub runs: Vec<TextRun>,

    /// Fonts referenced by the runs, in first-seen order
    pub fonts: FontTable,
}

impl PageLayer {
    /// Check if the layer carries no text.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Get the number of runs.
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Plain text of the layer, one run per word, runs separated by spaces.
    pub fn plain_text(&self) -> String {
        self.runs
            .iter()
            .map(|r| r.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Number of fonts whose glyph programs must be embedded.
    pub fn embedded_font_count(&self) -> usize {
        self.fonts
            .iter()
            .filter(|f| f.embedding == Embedding::Embed)
            .count()
    }
}
