//! Font, color and page style types.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::Size;

/// A font as resolved by the OCR engine.
///
/// Equality is the deduplication key of the font registry: two descriptors
/// share a font resource iff family, size and style flags all match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontDescriptor {
    /// Family name (e.g., "Times New Roman")
    pub family: String,
    /// Size in points
    pub size: f64,
    /// Style flags
    #[serde(default)]
    pub style: FontStyle,
}

impl FontDescriptor {
    /// Create a regular-style descriptor.
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            size,
            style: FontStyle::default(),
        }
    }

    /// Set the style flags.
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the bold flag.
    pub fn bold(mut self) -> Self {
        self.style.bold = true;
        self
    }

    /// Set the italic flag.
    pub fn italic(mut self) -> Self {
        self.style.italic = true;
        self
    }

    // -0.0 and 0.0 must hash alike since they compare equal.
    fn size_bits(&self) -> u64 {
        if self.size == 0.0 {
            0
        } else {
            self.size.to_bits()
        }
    }
}

impl PartialEq for FontDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.family == other.family
            && self.size_bits() == other.size_bits()
            && self.style == other.style
    }
}

impl Eq for FontDescriptor {}

impl Hash for FontDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.family.hash(state);
        self.size_bits().hash(state);
        self.style.hash(state);
    }
}

impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}pt", self.family, self.size)?;
        if self.style.bold {
            write!(f, " bold")?;
        }
        if self.style.italic {
            write!(f, " italic")?;
        }
        Ok(())
    }
}

/// Font style flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FontStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikeout: bool,
}

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Components scaled to the 0.0..=1.0 range used by PDF color operators.
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}

/// Page style record carried in the OCR page metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageStyleInfo {
    /// Explicit target page size in points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<Size>,

    /// Keep the per-glyph colors reported by the OCR engine
    #[serde(default = "default_true")]
    pub use_native_color: bool,

    /// Color to pin all text to when native colors are not used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_color: Option<Color>,
}

fn default_true() -> bool {
    true
}

impl PageStyleInfo {
    /// Style info that pins all text to one color.
    pub fn with_override_color(color: Color) -> Self {
        Self {
            page_size: None,
            use_native_color: false,
            override_color: Some(color),
        }
    }

    /// Set the explicit target page size.
    pub fn with_page_size(mut self, size: Size) -> Self {
        self.page_size = Some(size);
        self
    }

    /// The color all text is pinned to, if native colors are disabled.
    ///
    /// A missing override color means black.
    pub fn pinned_color(&self) -> Option<Color> {
        if self.use_native_color {
            None
        } else {
            Some(self.override_color.unwrap_or(Color::BLACK))
        }
    }
}

impl Default for PageStyleInfo {
    fn default() -> Self {
        Self {
            page_size: None,
            use_native_color: true,
            override_color: None,
        }
    }
}
