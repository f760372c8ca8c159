//! Page layout: turns a recognition tree into a positioned text layer.
//!
//! Composition of a page runs three ordered passes over page-scoped state:
//!
//! 1. The [`LayoutWalker`] traverses regions, resolves styles and baselines,
//!    and emits runs while the [`FontRegistry`](crate::font::FontRegistry)
//!    collects fonts and their encoding needs.
//! 2. The registry commits each font's embedding and loads its metrics.
//! 3. Width fitting rescales every run to its scanned footprint.

pub mod baseline;
mod context;
pub mod fitting;
mod options;
pub mod style;
mod state;
mod walker;

pub use context::PageContext;
pub use options::ComposeOptions;
pub use state::TextState;
pub use walker::LayoutWalker;

use crate::error::Result;
use crate::font::FontProvider;
use crate::model::{OcrPage, PageLayer};

/// Compose the text layer of one page.
pub fn compose_page(
    page: &OcrPage,
    options: &ComposeOptions,
    provider: &dyn FontProvider,
) -> Result<PageLayer> {
    let ctx = PageContext::resolve(page, options)?;

    let mut walker = LayoutWalker::new(&ctx, options);
    walker.walk(&page.regions)?;
    let (mut runs, registry) = walker.finish();

    let fonts = registry.resolve(provider)?;
    if options.fit_widths {
        fitting::fit_widths(&mut runs, &fonts, &ctx.resolution)?;
    }

    let layer = PageLayer {
        page_size: ctx.page_size,
        runs,
        fonts,
    };
    log::debug!(
        "Composed page: {} runs, {} fonts ({} embedded)",
        layer.run_count(),
        layer.fonts.len(),
        layer.embedded_font_count()
    );
    Ok(layer)
}
