//! Per-page geometry and style, resolved once before layout.

use super::ComposeOptions;
use crate::error::Result;
use crate::geometry;
use crate::metadata;
use crate::model::{Color, OcrPage, Resolution, Size};

/// Everything the walker needs to know about the page it lays out.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContext {
    /// Page size in pixels
    pub pixel_size: Size,
    /// Target page size in points
    pub page_size: Size,
    /// Scan resolution
    pub resolution: Resolution,
    /// Color all text is pinned to, if any
    pub pinned_color: Option<Color>,
}

impl PageContext {
    /// Resolve the context of `page`.
    ///
    /// Page size comes from the page style record, then the options, then
    /// the pixel size at scan resolution. A caller color beats the record's.
    pub fn resolve(page: &OcrPage, options: &ComposeOptions) -> Result<Self> {
        page.resolution.validate()?;
        let style = metadata::page_style(page)?.unwrap_or_default();
        if !style.use_native_color
            && style.override_color.is_none()
            && options.text_color.is_none()
        {
            log::warn!("Page style overrides text color without a color, using black");
        }

        let pixel_size = page.pixel_size();
        let page_size = style
            .page_size
            .or(options.page_size)
            .unwrap_or_else(|| geometry::size_to_pdf(pixel_size, &page.resolution));

        Ok(Self {
            pixel_size,
            page_size,
            resolution: page.resolution,
            pinned_color: options.text_color.or_else(|| style.pinned_color()),
        })
    }
}
