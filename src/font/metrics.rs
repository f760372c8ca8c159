//! Font metrics and the provider that materializes fonts.
//!
//! Metrics only exist for fonts whose embedding has been decided, so the
//! registry asks a [`FontProvider`] for them after layout is complete.

use std::sync::Arc;

use super::Embedding;
use crate::error::Result;
use crate::model::FontDescriptor;

/// Measures rendered text with one font.
pub trait FontMetrics: Send + Sync {
    /// Advance width of `text` at `size`, in PDF points.
    fn text_width(&self, text: &str, size: f64) -> f64;

    /// Whether the font carries a glyph program that can be embedded.
    fn is_embeddable(&self) -> bool {
        false
    }

    /// PostScript name of the font program backing the metrics.
    fn base_font(&self) -> &str;
}

/// Materializes fonts once their embedding decision is final.
pub trait FontProvider: Send + Sync {
    /// Load metrics for `descriptor` with the decided embedding.
    fn load(
        &self,
        descriptor: &FontDescriptor,
        embedding: Embedding,
    ) -> Result<Arc<dyn FontMetrics>>;
}

/// Provider backed by the standard 14 font metrics.
///
/// Families are matched to Helvetica, Times-Roman or Courier by name.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFonts;

impl StandardFonts {
    pub fn new() -> Self {
        Self
    }
}

impl FontProvider for StandardFonts {
    fn load(
        &self,
        descriptor: &FontDescriptor,
        embedding: Embedding,
    ) -> Result<Arc<dyn FontMetrics>> {
        let font = StandardFont::for_family(&descriptor.family);
        if embedding == Embedding::Embed {
            log::warn!(
                "{} needs embedding but is substituted by {}, which has no embeddable program",
                descriptor,
                font.base_font()
            );
        }
        Ok(Arc::new(font))
    }
}

/// One of the standard metric sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardFont {
    Helvetica,
    TimesRoman,
    Courier,
}

impl StandardFont {
    /// Pick the metric set closest to a family name.
    pub fn for_family(family: &str) -> Self {
        let family = family.to_lowercase();
        if family.contains("courier") || family.contains("mono") {
            StandardFont::Courier
        } else if family.contains("times")
            || (family.contains("serif") && !family.contains("sans"))
            || family.contains("roman")
            || family.contains("georgia")
        {
            StandardFont::TimesRoman
        } else {
            StandardFont::Helvetica
        }
    }

    /// Advance width of one character in 1/1000 em.
    pub fn char_width(self, c: char) -> u16 {
        let code = u32::from(c);
        match self {
            StandardFont::Courier => COURIER_WIDTH,
            StandardFont::Helvetica => ascii_width(&HELVETICA_WIDTHS, code).unwrap_or(556),
            StandardFont::TimesRoman => ascii_width(&TIMES_ROMAN_WIDTHS, code).unwrap_or(500),
        }
    }
}

impl FontMetrics for StandardFont {
    fn text_width(&self, text: &str, size: f64) -> f64 {
        let units: u32 = text.chars().map(|c| u32::from(self.char_width(c))).sum();
        f64::from(units) * size / 1000.0
    }

    fn base_font(&self) -> &str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::TimesRoman => "Times-Roman",
            StandardFont::Courier => "Courier",
        }
    }
}

fn ascii_width(table: &[u16; 95], code: u32) -> Option<u16> {
    match code {
        32..=126 => Some(table[(code - 32) as usize]),
        _ => None,
    }
}

const COURIER_WIDTH: u16 = 600;

// AFM advance widths for codes 32..=126.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const TIMES_ROMAN_WIDTHS: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_matching() {
        assert_eq!(StandardFont::for_family("Courier New"), StandardFont::Courier);
        assert_eq!(StandardFont::for_family("DejaVu Sans Mono"), StandardFont::Courier);
        assert_eq!(StandardFont::for_family("Times New Roman"), StandardFont::TimesRoman);
        assert_eq!(StandardFont::for_family("Noto Serif"), StandardFont::TimesRoman);
        assert_eq!(StandardFont::for_family("Noto Sans"), StandardFont::Helvetica);
        assert_eq!(StandardFont::for_family("Arial"), StandardFont::Helvetica);
    }

    #[test]
    fn test_char_widths() {
        assert_eq!(StandardFont::Helvetica.char_width(' '), 278);
        assert_eq!(StandardFont::Helvetica.char_width('W'), 944);
        assert_eq!(StandardFont::Helvetica.char_width('~'), 584);
        assert_eq!(StandardFont::TimesRoman.char_width('a'), 444);
        assert_eq!(StandardFont::TimesRoman.char_width('~'), 541);
        assert_eq!(StandardFont::Courier.char_width('i'), 600);
        // outside printable ASCII falls back to the average width
        assert_eq!(StandardFont::Helvetica.char_width('é'), 556);
    }

    #[test]
    fn test_text_width() {
        // 5 Courier glyphs at 10pt: 5 * 600 / 1000 * 10
        assert_eq!(StandardFont::Courier.text_width("hello", 10.0), 30.0);
        assert_eq!(StandardFont::Helvetica.text_width("", 12.0), 0.0);
        // H(722) + i(222) at 10pt
        assert_eq!(StandardFont::Helvetica.text_width("Hi", 10.0), 9.44);
    }

    #[test]
    fn test_standard_provider() {
        let provider = StandardFonts::new();
        let font = provider
            .load(&FontDescriptor::new("Courier", 12.0), Embedding::DontEmbed)
            .unwrap();
        assert_eq!(font.base_font(), "Courier");
        assert!(!font.is_embeddable());
    }
}
