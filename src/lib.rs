//! # ocrlayer
//!
//! Searchable text layers for scanned PDF pages.
//!
//! This library takes the recognition tree an OCR engine produces for a
//! scanned page (regions, lines, words and glyphs with pixel geometry, fonts
//! and colors) and composes a vector text layer that lines up with the scan.
//! Overlaid invisibly on the page image, it makes the page searchable and
//! selectable without changing how it looks.
//!
//! ## Quick Start
//!
//! ```no_run
//! use ocrlayer::{parse_page_json, compose_page, render};
//!
//! fn main() -> ocrlayer::Result<()> {
//!     // Load a page recognized by the OCR engine
//!     let json = std::fs::read_to_string("page.json").unwrap();
//!     let page = parse_page_json(&json)?;
//!
//!     // Compose its text layer
//!     let layer = compose_page(&page)?;
//!     println!("{}", render::to_json(&layer, render::JsonFormat::Pretty)?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Rotation aware**: text regions at 0°, 90°, 180° and 270°
//! - **Style runs**: one run per word when styles are uniform, per glyph otherwise
//! - **Baseline normalization**: OCR jitter is suppressed, real shifts are kept
//! - **Font embedding policy**: fonts are embedded only when their text needs it
//! - **Width fitting**: runs are stretched to cover the scanned words exactly
//! - **Parallel processing**: Uses Rayon for multi-page documents

pub mod document;
pub mod error;
pub mod font;
pub mod geometry;
pub mod layout;
pub mod metadata;
pub mod model;
pub mod render;

use std::sync::Arc;

// Re-export commonly used types
pub use document::{AlwaysRender, ComposedPage, ExistingPages, PageInspector};
pub use error::{Error, Result};
pub use font::{Embedding, FontMetrics, FontProvider, FontResource, FontTable, StandardFonts};
pub use layout::ComposeOptions;
pub use model::{
    Color, FontDescriptor, FontId, FontStyle, Glyph, Line, OcrPage, PageLayer, PageStyleInfo,
    PixelRect, Point, Region, RenderMode, Resolution, ResolutionUnit, Rotation, Size,
    TableRegion, TextRegion, TextRun, Word,
};
pub use render::JsonFormat;

/// Parse a recognized page from its JSON form.
///
/// # Example
///
/// ```
/// use ocrlayer::parse_page_json;
///
/// let page = parse_page_json(
///     r#"{"width": 2550, "height": 3300, "resolution": {"x": 300, "y": 300}}"#,
/// ).unwrap();
/// assert_eq!(page.width, 2550);
/// ```
pub fn parse_page_json(json: &str) -> Result<OcrPage> {
    let page: OcrPage = serde_json::from_str(json)?;
    page.resolution.validate()?;
    Ok(page)
}

/// Compose the text layer of a page with default options and the
/// standard font metrics.
pub fn compose_page(page: &OcrPage) -> Result<PageLayer> {
    layout::compose_page(page, &ComposeOptions::default(), &StandardFonts)
}

/// Compose the text layer of a page with custom options.
///
/// # Example
///
/// ```
/// use ocrlayer::{compose_page_with_options, ComposeOptions, OcrPage, Resolution};
///
/// let page = OcrPage::new(2550, 3300, Resolution::dpi(300.0));
/// let options = ComposeOptions::new()
///     .visible()
///     .with_normalized_baseline(true);
/// let layer = compose_page_with_options(&page, &options).unwrap();
/// assert!(layer.is_empty());
/// ```
pub fn compose_page_with_options(page: &OcrPage, options: &ComposeOptions) -> Result<PageLayer> {
    layout::compose_page(page, options, &StandardFonts)
}

/// Compose every page of a document with default options.
pub fn compose_document(
    pages: &[OcrPage],
    inspector: &dyn PageInspector,
) -> Result<Vec<ComposedPage>> {
    document::compose_document(pages, inspector, &ComposeOptions::default(), &StandardFonts)
}

/// Builder for composing text layers.
///
/// # Example
///
/// ```
/// use ocrlayer::{Color, Compositor, ExistingPages, OcrPage, Resolution};
///
/// let pages = vec![OcrPage::new(2550, 3300, Resolution::dpi(300.0)); 3];
/// let composed = Compositor::new()
///     .with_text_color(Color::rgb(0, 0, 128))
///     .sequential()
///     .compose_document(&pages, &ExistingPages(1))?;
/// assert_eq!(composed.len(), 3);
/// # Ok::<(), ocrlayer::Error>(())
/// ```
pub struct Compositor {
    options: ComposeOptions,
    provider: Arc<dyn FontProvider>,
}

impl Compositor {
    /// Create a new Compositor builder.
    pub fn new() -> Self {
        Self {
            options: ComposeOptions::default(),
            provider: Arc::new(StandardFonts),
        }
    }

    /// Replace all options at once.
    pub fn with_options(mut self, options: ComposeOptions) -> Self {
        self.options = options;
        self
    }

    /// Use a custom font provider.
    pub fn with_font_provider(mut self, provider: Arc<dyn FontProvider>) -> Self {
        self.provider = provider;
        self
    }

    /// Set the render mode.
    pub fn with_render_mode(mut self, mode: RenderMode) -> Self {
        self.options = self.options.with_render_mode(mode);
        self
    }

    /// Draw text instead of hiding it.
    pub fn visible(mut self) -> Self {
        self.options = self.options.visible();
        self
    }

    /// Always place words on their line's baseline.
    pub fn with_normalized_baseline(mut self) -> Self {
        self.options = self.options.with_normalized_baseline(true);
        self
    }

    /// Pin all text to one color.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.options = self.options.with_text_color(color);
        self
    }

    /// Keep the fonts' natural widths.
    pub fn without_width_fitting(mut self) -> Self {
        self.options = self.options.with_width_fitting(false);
        self
    }

    /// Set the target page size.
    pub fn with_page_size(mut self, size: Size) -> Self {
        self.options = self.options.with_page_size(size);
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Get the configured options.
    pub fn options(&self) -> &ComposeOptions {
        &self.options
    }

    /// Compose the text layer of one page.
    pub fn compose(&self, page: &OcrPage) -> Result<PageLayer> {
        layout::compose_page(page, &self.options, self.provider.as_ref())
    }

    /// Compose every page of a document.
    pub fn compose_document(
        &self,
        pages: &[OcrPage],
        inspector: &dyn PageInspector,
    ) -> Result<Vec<ComposedPage>> {
        document::compose_document(pages, inspector, &self.options, self.provider.as_ref())
    }
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedWidth;

    impl FontMetrics for FixedWidth {
        fn text_width(&self, text: &str, size: f64) -> f64 {
            text.chars().count() as f64 * size
        }

        fn base_font(&self) -> &str {
            "Fixed"
        }
    }

    struct FixedProvider;

    impl FontProvider for FixedProvider {
        fn load(&self, _: &FontDescriptor, _: Embedding) -> Result<Arc<dyn FontMetrics>> {
            Ok(Arc::new(FixedWidth))
        }
    }

    struct FailingProvider;

    impl FontProvider for FailingProvider {
        fn load(&self, descriptor: &FontDescriptor, _: Embedding) -> Result<Arc<dyn FontMetrics>> {
            Err(Error::FontLoad(descriptor.family.clone()))
        }
    }

    fn one_word_page() -> OcrPage {
        let font = FontDescriptor::new("Arial", 10.0);
        let rect = PixelRect::new(0.0, 0.0, 40.0, 10.0);
        let word = Word::new("ab", rect, 10.0)
            .with_glyph(Glyph::new("a", rect, 10.0, font.clone(), Color::BLACK))
            .with_glyph(Glyph::new("b", rect, 10.0, font, Color::BLACK));
        OcrPage::new(100, 100, Resolution::dpi(72.0)).with_region(
            TextRegion::new(Rotation::None)
                .with_line(Line::new(10.0).with_word(word))
                .into(),
        )
    }

    #[test]
    fn test_compositor_builder() {
        let compositor = Compositor::new()
            .visible()
            .with_normalized_baseline()
            .without_width_fitting()
            .sequential();

        let options = compositor.options();
        assert_eq!(options.render_mode, RenderMode::Fill);
        assert!(options.use_normalized_baseline);
        assert!(!options.fit_widths);
        assert!(!options.parallel);
    }

    #[test]
    fn test_compositor_default() {
        let compositor = Compositor::default();
        assert_eq!(compositor.options().render_mode, RenderMode::Invisible);
        assert!(compositor.options().fit_widths);
    }

    #[test]
    fn test_custom_font_provider() {
        // "ab" at 10pt measures 20pt against a 40pt box
        let layer = Compositor::new()
            .with_font_provider(Arc::new(FixedProvider))
            .compose(&one_word_page())
            .unwrap();
        assert_eq!(layer.runs[0].horizontal_scaling, 200.0);
        assert_eq!(layer.fonts.get(layer.runs[0].font).unwrap().base_font, "Fixed");
    }

    #[test]
    fn test_font_load_failure() {
        let result = Compositor::new()
            .with_font_provider(Arc::new(FailingProvider))
            .compose(&one_word_page());
        assert!(matches!(result, Err(Error::FontLoad(family)) if family == "Arial"));
    }

    #[test]
    fn test_parse_page_json_rejects_bad_resolution() {
        let json = r#"{"width": 10, "height": 10, "resolution": {"x": 0, "y": 300}}"#;
        assert!(matches!(parse_page_json(json), Err(Error::InvalidResolution(_))));
    }

    #[test]
    fn test_parse_page_json_invalid() {
        assert!(matches!(parse_page_json("not json"), Err(Error::Json(_))));
    }
}
