//! Font and color state carried across the runs of one page.

use super::style::ResolvedStyle;
use crate::font::FontRegistry;
use crate::model::{Color, FontDescriptor, FontId};

/// Active font and fill color while walking a page.
#[derive(Debug)]
pub struct TextState {
    font: Option<(FontDescriptor, FontId)>,
    color: Color,
    pinned_color: Option<Color>,
}

impl TextState {
    /// Fresh state; with a pinned color every run uses that color.
    pub fn new(pinned_color: Option<Color>) -> Self {
        Self {
            font: None,
            color: pinned_color.unwrap_or(Color::BLACK),
            pinned_color,
        }
    }

    /// Size of the active font, if any font is active.
    pub fn current_size(&self) -> Option<f64> {
        self.font.as_ref().map(|(d, _)| d.size)
    }

    /// Active fill color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Make `style` active, registering its font if it has not been seen.
    pub fn set_font_and_color(
        &mut self,
        style: ResolvedStyle<'_>,
        registry: &mut FontRegistry,
    ) -> FontId {
        let id = match &self.font {
            Some((active, id)) if active == style.font => *id,
            _ => {
                let id = registry.register(style.font);
                self.font = Some((style.font.clone(), id));
                id
            }
        };

        if self.pinned_color.is_none() && style.color != self.color {
            self.color = style.color;
        }

        id
    }
}
