//! Text runs, the output unit of composition.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Color, PixelRect, Point, Rotation};

/// Page-scoped font resource identifier.
///
/// Identifiers are 1-based and issued in first-seen order; the resource
/// name written into the page (`F1`, `F2`, ...) is derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontId(u32);

impl FontId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Resource name used in the page's font dictionary.
    pub fn resource_name(self) -> String {
        format!("F{}", self.0)
    }

    /// Position in first-seen order (0-based).
    pub(crate) fn index(self) -> usize {
        (self.0 as usize).saturating_sub(1)
    }
}

impl fmt::Display for FontId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

/// PDF text rendering mode (`Tr` operand).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    Fill,
    Stroke,
    FillStroke,
    /// Neither fill nor stroke: searchable but not drawn
    #[default]
    Invisible,
    FillClip,
    StrokeClip,
    FillStrokeClip,
    Clip,
}

impl RenderMode {
    /// Numeric operand of the `Tr` operator.
    pub fn operand(self) -> u8 {
        match self {
            RenderMode::Fill => 0,
            RenderMode::Stroke => 1,
            RenderMode::FillStroke => 2,
            RenderMode::Invisible => 3,
            RenderMode::FillClip => 4,
            RenderMode::StrokeClip => 5,
            RenderMode::FillStrokeClip => 6,
            RenderMode::Clip => 7,
        }
    }

    /// Whether text in this mode paints anything.
    pub fn is_visible(self) -> bool {
        !matches!(self, RenderMode::Invisible | RenderMode::Clip)
    }
}

/// A positioned run of text in PDF page space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// Text content
    pub text: String,

    /// Origin in PDF points (origin bottom-left)
    pub origin: Point,

    /// Text rotation
    pub rotation: Rotation,

    /// Rendering mode
    pub render_mode: RenderMode,

    /// Fill color
    pub color: Color,

    /// Font resource
    pub font: FontId,

    /// Font size in points
    pub font_size: f64,

    /// Horizontal scaling in percent
    pub horizontal_scaling: f64,

    /// Pixel bounding box the run has to cover on the scan
    pub source: PixelRect,
}

impl TextRun {
    /// Scaling of a run whose measured width already matches its footprint.
    pub const DEFAULT_SCALING: f64 = 100.0;

    /// Check if the run was rescaled by width fitting.
    pub fn is_scaled(&self) -> bool {
        self.horizontal_scaling != Self::DEFAULT_SCALING
    }
}
