//! Style resolution over resolved per-glyph attributes.

use crate::model::{Color, FontDescriptor, Glyph};

/// Font and color of a text run, borrowed from the recognition tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStyle<'a> {
    pub font: &'a FontDescriptor,
    pub color: Color,
}

impl<'a> ResolvedStyle<'a> {
    /// Style of a single glyph.
    pub fn of(glyph: &'a Glyph) -> Self {
        Self {
            font: &glyph.font,
            color: glyph.color,
        }
    }
}

/// Check if all glyphs share one font and one color.
///
/// An empty sequence is trivially uniform.
pub fn is_uniform<'a>(glyphs: impl IntoIterator<Item = &'a Glyph>) -> bool {
    let mut glyphs = glyphs.into_iter();
    let Some(first) = glyphs.next() else {
        return true;
    };
    glyphs.all(|g| g.font == first.font && g.color == first.color)
}

/// Style at the start of a glyph sequence.
pub fn resolve<'a>(glyphs: impl IntoIterator<Item = &'a Glyph>) -> Option<ResolvedStyle<'a>> {
    glyphs.into_iter().next().map(ResolvedStyle::of)
}
