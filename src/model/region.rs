//! Recognition tree: regions, lines, words and glyphs.

use serde::{Deserialize, Serialize};

use super::{Color, FontDescriptor, PixelRect};

/// A region of recognized content.
///
/// Tables nest arbitrary regions as their cells, so the tree is recursive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Region {
    /// A block of text lines sharing one orientation
    Text(TextRegion),
    /// A table whose cells are regions
    Table(TableRegion),
}

impl Region {
    /// Check if this region is a text region.
    pub fn is_text(&self) -> bool {
        matches!(self, Region::Text(_))
    }

    /// Check if this region is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Region::Table(_))
    }

    /// Total number of lines in this region and all nested cells.
    pub fn line_count(&self) -> usize {
        match self {
            Region::Text(text) => text.lines.len(),
            Region::Table(table) => table.cells.iter().map(Region::line_count).sum(),
        }
    }
}

/// A text region: lines in reading order with a common rotation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextRegion {
    /// Clockwise rotation of the text relative to the page
    #[serde(default)]
    pub rotation: Rotation,
    /// Lines in reading order
    #[serde(default)]
    pub lines: Vec<Line>,
}

impl TextRegion {
    pub fn new(rotation: Rotation) -> Self {
        Self {
            rotation,
            lines: Vec::new(),
        }
    }

    /// Builder-style line append.
    pub fn with_line(mut self, line: Line) -> Self {
        self.lines.push(line);
        self
    }
}

impl From<TextRegion> for Region {
    fn from(region: TextRegion) -> Self {
        Region::Text(region)
    }
}

/// A table region: cells in reading order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableRegion {
    /// Cell regions in reading order
    #[serde(default)]
    pub cells: Vec<Region>,
}

impl TableRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style cell append.
    pub fn with_cell(mut self, cell: impl Into<Region>) -> Self {
        self.cells.push(cell.into());
        self
    }
}

impl From<TableRegion> for Region {
    fn from(region: TableRegion) -> Self {
        Region::Table(region)
    }
}

/// Clockwise text rotation, in quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Rotation {
    #[default]
    None,
    /// 90° clockwise
    Clockwise,
    /// 180°
    UpsideDown,
    /// 270° clockwise
    Counterclockwise,
}

impl Rotation {
    /// Rotation in degrees (0, 90, 180, 270).
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::None => 0,
            Rotation::Clockwise => 90,
            Rotation::UpsideDown => 180,
            Rotation::Counterclockwise => 270,
        }
    }

    /// Whether the text runs vertically on the page.
    pub fn is_sideways(self) -> bool {
        matches!(self, Rotation::Clockwise | Rotation::Counterclockwise)
    }
}

impl TryFrom<u16> for Rotation {
    type Error = String;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Rotation::None),
            90 => Ok(Rotation::Clockwise),
            180 => Ok(Rotation::UpsideDown),
            270 => Ok(Rotation::Counterclockwise),
            other => Err(format!(
                "unsupported rotation {} (expected 0, 90, 180 or 270)",
                other
            )),
        }
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

/// A recognized text line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Line {
    /// Baseline y-coordinate in page pixels
    pub baseline: f64,
    /// Words in reading order
    #[serde(default)]
    pub words: Vec<Word>,
}

impl Line {
    pub fn new(baseline: f64) -> Self {
        Self {
            baseline,
            words: Vec::new(),
        }
    }

    /// Builder-style word append.
    pub fn with_word(mut self, word: Word) -> Self {
        self.words.push(word);
        self
    }

    /// All glyphs of the line, word by word.
    pub fn glyphs(&self) -> impl Iterator<Item = &Glyph> + '_ {
        self.words.iter().flat_map(|w| w.glyphs.iter())
    }

    /// Word texts joined by single spaces.
    pub fn text(&self) -> String {
        self.words
            .iter()
            .filter(|w| !w.text.is_empty())
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Check if no word of the line carries text.
    pub fn is_blank(&self) -> bool {
        self.words.iter().all(|w| w.text.is_empty())
    }
}

/// A recognized word.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Word {
    /// Bounding box in page pixels
    pub rect: PixelRect,
    /// The word's own baseline y-coordinate in page pixels
    pub baseline: f64,
    /// Recognized text
    pub text: String,
    /// Glyphs in reading order
    #[serde(default)]
    pub glyphs: Vec<Glyph>,
}

impl Word {
    pub fn new(text: impl Into<String>, rect: PixelRect, baseline: f64) -> Self {
        Self {
            rect,
            baseline,
            text: text.into(),
            glyphs: Vec::new(),
        }
    }

    /// Builder-style glyph append.
    pub fn with_glyph(mut self, glyph: Glyph) -> Self {
        self.glyphs.push(glyph);
        self
    }
}

/// A single recognized glyph with its resolved style.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Glyph {
    /// Bounding box in page pixels
    pub rect: PixelRect,
    /// Baseline y-coordinate in page pixels
    pub baseline: f64,
    /// Recognized character(s); ligatures may carry more than one
    pub text: String,
    /// Font the OCR engine resolved for this glyph
    pub font: FontDescriptor,
    /// Color the OCR engine resolved for this glyph
    #[serde(default)]
    pub color: Color,
}

impl Glyph {
    pub fn new(
        text: impl Into<String>,
        rect: PixelRect,
        baseline: f64,
        font: FontDescriptor,
        color: Color,
    ) -> Self {
        Self {
            rect,
            baseline,
            text: text.into(),
            font,
            color,
        }
    }
}
