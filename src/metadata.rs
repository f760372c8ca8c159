//! Page style records carried in OCR page metadata.

use crate::error::{Error, Result};
use crate::model::{OcrPage, PageStyleInfo};

/// Metadata key of the [`PageStyleInfo`] record.
pub const PAGE_STYLE_KEY: &str = "page_style";

/// Read the page style record of `page`.
///
/// An absent record is `Ok(None)`. A record that is present but of the
/// wrong shape, `null` included, is an error.
pub fn page_style(page: &OcrPage) -> Result<Option<PageStyleInfo>> {
    match page.metadata_entry(PAGE_STYLE_KEY) {
        None => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| Error::MalformedMetadata(format!("{}: {}", PAGE_STYLE_KEY, e))),
    }
}

/// Store `style` in the metadata of `page`.
pub fn set_page_style(page: &mut OcrPage, style: &PageStyleInfo) -> Result<()> {
    let value = serde_json::to_value(style)?;
    page.set_metadata(PAGE_STYLE_KEY, value);
    Ok(())
}
