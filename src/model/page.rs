//! Page-level types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Region;
use crate::error::{Error, Result};

/// A single recognized page as delivered by the OCR engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrPage {
    /// Page width in pixels
    pub width: u32,

    /// Page height in pixels
    pub height: u32,

    /// Scan resolution
    pub resolution: Resolution,

    /// Top-level regions in reading order
    #[serde(default)]
    pub regions: Vec<Region>,

    /// Free-form metadata attached to the page by the OCR engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl OcrPage {
    /// Create a new empty page with the given pixel dimensions.
    pub fn new(width: u32, height: u32, resolution: Resolution) -> Self {
        Self {
            width,
            height,
            resolution,
            regions: Vec::new(),
            metadata: None,
        }
    }

    /// Add a region to the page.
    pub fn add_region(&mut self, region: Region) {
        self.regions.push(region);
    }

    /// Builder-style variant of [`OcrPage::add_region`].
    pub fn with_region(mut self, region: Region) -> Self {
        self.regions.push(region);
        self
    }

    /// Set a metadata entry, creating the metadata map if needed.
    pub fn set_metadata(&mut self, key: impl Into<String>, value: Value) {
        self.metadata
            .get_or_insert_with(Map::new)
            .insert(key.into(), value);
    }

    /// Look up a metadata entry.
    pub fn metadata_entry(&self, key: &str) -> Option<&Value> {
        self.metadata.as_ref().and_then(|m| m.get(key))
    }

    /// Pixel dimensions as a [`Size`].
    pub fn pixel_size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// Check if the page has no regions at all.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Unit the resolution value is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionUnit {
    /// Pixels per inch
    #[default]
    Inches,
    /// Pixels per centimeter
    Centimeters,
}

/// Scan resolution, independently per axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    /// Horizontal resolution
    pub x: f64,
    /// Vertical resolution
    pub y: f64,
    /// Unit of both values
    #[serde(default)]
    pub unit: ResolutionUnit,
}

impl Resolution {
    /// Same resolution on both axes.
    pub fn uniform(value: f64, unit: ResolutionUnit) -> Self {
        Self {
            x: value,
            y: value,
            unit,
        }
    }

    /// Resolution in dots per inch.
    pub fn dpi(value: f64) -> Self {
        Self::uniform(value, ResolutionUnit::Inches)
    }

    /// Resolution in dots per centimeter.
    pub fn per_centimeter(value: f64) -> Self {
        Self::uniform(value, ResolutionUnit::Centimeters)
    }

    /// Reject values that would make unit conversion meaningless.
    pub fn validate(&self) -> Result<()> {
        for value in [self.x, self.y] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidResolution(value));
            }
        }
        Ok(())
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::dpi(300.0)
    }
}

/// Axis-aligned rectangle in page pixel space (origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PixelRect {
    /// Create a rectangle from its edges.
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from origin and extent.
    pub fn from_size(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(left, top, left + width, top + height)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Extent as a [`Size`].
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

/// A point, in pixels or PDF points depending on context.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair, in pixels or PDF points depending on context.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Standard Letter size in points (8.5 x 11 inches).
    pub fn letter() -> Self {
        Self::new(612.0, 792.0)
    }

    /// Standard A4 size in points (210 x 297 mm).
    pub fn a4() -> Self {
        Self::new(595.0, 842.0)
    }

    /// Check if the size is in landscape orientation.
    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }
}
