//! Composition options and configuration.

use crate::model::{Color, RenderMode, Size};

/// Options for composing text layers.
#[derive(Debug, Clone)]
pub struct ComposeOptions {
    /// Text rendering mode of every run
    pub render_mode: RenderMode,

    /// Always place words on their line's baseline
    pub use_normalized_baseline: bool,

    /// Pin all text to this color, regardless of OCR colors and page metadata
    pub text_color: Option<Color>,

    /// Rescale runs so their measured width matches the scanned word
    pub fit_widths: bool,

    /// Compose independent pages in parallel
    pub parallel: bool,

    /// Target page size in points when the page metadata gives none
    pub page_size: Option<Size>,
}

impl ComposeOptions {
    /// Create new compose options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the render mode.
    pub fn with_render_mode(mut self, mode: RenderMode) -> Self {
        self.render_mode = mode;
        self
    }

    /// Draw the text layer instead of hiding it.
    pub fn visible(mut self) -> Self {
        self.render_mode = RenderMode::Fill;
        self
    }

    /// Enable or disable baseline normalization.
    pub fn with_normalized_baseline(mut self, normalized: bool) -> Self {
        self.use_normalized_baseline = normalized;
        self
    }

    /// Pin all text to one color.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    /// Enable or disable width fitting.
    pub fn with_width_fitting(mut self, fit: bool) -> Self {
        self.fit_widths = fit;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set the fallback target page size.
    pub fn with_page_size(mut self, size: Size) -> Self {
        self.page_size = Some(size);
        self
    }
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            render_mode: RenderMode::Invisible,
            use_normalized_baseline: false,
            text_color: None,
            fit_widths: true,
            parallel: true,
            page_size: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_options_builder() {
        let options = ComposeOptions::new()
            .visible()
            .with_normalized_baseline(true)
            .with_text_color(Color::WHITE)
            .with_width_fitting(false)
            .sequential();

        assert_eq!(options.render_mode, RenderMode::Fill);
        assert!(options.use_normalized_baseline);
        assert_eq!(options.text_color, Some(Color::WHITE));
        assert!(!options.fit_widths);
        assert!(!options.parallel);
    }

    #[test]
    fn test_default_options() {
        let options = ComposeOptions::default();
        assert_eq!(options.render_mode, RenderMode::Invisible);
        assert!(!options.use_normalized_baseline);
        assert!(options.fit_widths);
        assert!(options.parallel);
        assert!(options.page_size.is_none());
    }
}
