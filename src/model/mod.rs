//! Data model for OCR recognition trees and composed text layers.
//!
//! The input side mirrors what an OCR engine produces for one scanned page:
//! regions containing lines, words and glyphs, each with a pixel-space
//! bounding box and baseline. The output side is the ordered list of
//! [`TextRun`]s plus the page's font table, ready to be written into a PDF
//! content stream by the host document model.

mod layer;
mod page;
mod region;
mod run;
mod style;

pub use layer::PageLayer;
pub use page::{OcrPage, PixelRect, Point, Resolution, ResolutionUnit, Size};
pub use region::{Glyph, Line, Region, Rotation, TableRegion, TextRegion, Word};
pub use run::{FontId, RenderMode, TextRun};
pub use style::{Color, FontDescriptor, FontStyle, PageStyleInfo};
