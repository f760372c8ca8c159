//! Document-level composition.
//!
//! Pages share no state, so a document is composed by composing its pages
//! independently, in parallel when enabled. Whether a page's scanned image
//! has to be drawn as well is decided by a caller-supplied [`PageInspector`].

use rayon::prelude::*;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::font::FontProvider;
use crate::layout::{self, ComposeOptions};
use crate::model::{OcrPage, PageLayer};

/// Decides whether a page needs its image layer drawn under the text.
pub trait PageInspector: Send + Sync {
    /// `index` is the 0-based position of `page` in the document.
    fn needs_image_layer(&self, index: usize, page: &OcrPage) -> bool;
}

/// Every page gets its image layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysRender;

impl PageInspector for AlwaysRender {
    fn needs_image_layer(&self, _index: usize, _page: &OcrPage) -> bool {
        true
    }
}

/// The first `n` pages already exist in the host document.
///
/// Only pages past the existing ones get an image layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExistingPages(pub usize);

impl PageInspector for ExistingPages {
    fn needs_image_layer(&self, index: usize, _page: &OcrPage) -> bool {
        index >= self.0
    }
}

/// The composed text layer of one page and its image decision.
#[derive(Debug, Clone, Serialize)]
pub struct ComposedPage {
    /// 0-based page index
    pub index: usize,

    /// Draw the scanned image under the text
    pub render_image: bool,

    /// Composed text layer
    pub layer: PageLayer,
}

/// Compose every page of a document.
///
/// Results are in input order; the first failing page aborts with its error.
pub fn compose_document(
    pages: &[OcrPage],
    inspector: &dyn PageInspector,
    options: &ComposeOptions,
    provider: &dyn FontProvider,
) -> Result<Vec<ComposedPage>> {
    let compose = |(index, page): (usize, &OcrPage)| -> Result<ComposedPage> {
        let layer = layout::compose_page(page, options, provider)?;
        Ok(ComposedPage {
            index,
            render_image: inspector.needs_image_layer(index, page),
            layer,
        })
    };

    let composed: Vec<ComposedPage> = if options.parallel && pages.len() > 1 {
        log::debug!("Composing {} pages in parallel", pages.len());
        pages.par_iter().enumerate().map(compose).collect::<Result<_>>()?
    } else {
        pages.iter().enumerate().map(compose).collect::<Result<_>>()?
    };

    log::debug!(
        "Composed document: {} pages, {} with image layer",
        composed.len(),
        composed.iter().filter(|p| p.render_image).count()
    );
    Ok(composed)
}

/// Compose a single page of a document by index.
pub fn compose_document_page(
    pages: &[OcrPage],
    index: usize,
    options: &ComposeOptions,
    provider: &dyn FontProvider,
) -> Result<PageLayer> {
    let page = pages
        .get(index)
        .ok_or(Error::PageOutOfRange(index, pages.len()))?;
    layout::compose_page(page, options, provider)
}
