//! Recursive traversal of the recognition tree.
//!
//! Lines whose glyphs all share one style are emitted one run per word.
//! Mixed lines fall back to one run per uniform word, and to one run per
//! glyph inside words that mix styles themselves. Runs are emitted in
//! traversal order.

use super::baseline::resolve_baseline;
use super::state::TextState;
use super::style::{self, ResolvedStyle};
use super::{ComposeOptions, PageContext};
use crate::error::Result;
use crate::font::FontRegistry;
use crate::geometry;
use crate::model::{Line, PixelRect, Region, Rotation, TextRun};

/// Lays out one page and collects its runs and fonts.
pub struct LayoutWalker<'a> {
    ctx: &'a PageContext,
    options: &'a ComposeOptions,
    registry: FontRegistry,
    state: TextState,
    runs: Vec<TextRun>,
}

impl<'a> LayoutWalker<'a> {
    /// Create a walker with empty page-scoped state.
    pub fn new(ctx: &'a PageContext, options: &'a ComposeOptions) -> Self {
        Self {
            ctx,
            options,
            registry: FontRegistry::new(),
            state: TextState::new(ctx.pinned_color),
            runs: Vec::new(),
        }
    }

    /// Walk a sequence of regions in order.
    pub fn walk(&mut self, regions: &[Region]) -> Result<()> {
        for region in regions {
            self.walk_region(region)?;
        }
        Ok(())
    }

    /// Hand over the collected runs and the registry.
    pub fn finish(self) -> (Vec<TextRun>, FontRegistry) {
        (self.runs, self.registry)
    }

    fn walk_region(&mut self, region: &Region) -> Result<()> {
        match region {
            Region::Table(table) => self.walk(&table.cells),
            Region::Text(text) => {
                for line in &text.lines {
                    self.walk_line(line, text.rotation)?;
                }
                Ok(())
            }
        }
    }

    fn walk_line(&mut self, line: &Line, rotation: Rotation) -> Result<()> {
        if line.is_blank() {
            return Ok(());
        }

        if style::is_uniform(line.glyphs()) {
            let Some(style) = style::resolve(line.glyphs()) else {
                log::debug!("Skipping line without glyphs: {:?}", line.text());
                return Ok(());
            };
            for word in line.words.iter().filter(|w| !w.text.is_empty()) {
                let anchor = Anchor {
                    rect: &word.rect,
                    line_baseline: line.baseline,
                    own_baseline: word.baseline,
                    rotation,
                };
                self.emit(&word.text, anchor, style)?;
            }
            return Ok(());
        }

        for word in line.words.iter().filter(|w| !w.text.is_empty()) {
            if style::is_uniform(&word.glyphs) {
                let Some(style) = style::resolve(&word.glyphs) else {
                    log::debug!("Skipping word without glyphs: {:?}", word.text);
                    continue;
                };
                let anchor = Anchor {
                    rect: &word.rect,
                    line_baseline: line.baseline,
                    own_baseline: word.baseline,
                    rotation,
                };
                self.emit(&word.text, anchor, style)?;
            } else {
                for glyph in word.glyphs.iter().filter(|g| !g.text.is_empty()) {
                    let anchor = Anchor {
                        rect: &glyph.rect,
                        line_baseline: line.baseline,
                        own_baseline: glyph.baseline,
                        rotation,
                    };
                    self.emit(&glyph.text, anchor, ResolvedStyle::of(glyph))?;
                }
            }
        }
        Ok(())
    }

    fn emit(&mut self, text: &str, anchor: Anchor<'_>, style: ResolvedStyle<'_>) -> Result<()> {
        // Baseline is judged against the font active before this run.
        let baseline = resolve_baseline(
            anchor.line_baseline,
            anchor.own_baseline,
            anchor.rect.height(),
            self.state.current_size(),
            style.font.size,
            self.options.use_normalized_baseline,
        );

        let font = self.state.set_font_and_color(style, &mut self.registry);
        self.registry.note_text(font, text)?;

        let ctx = self.ctx;
        let origin = geometry::run_origin(anchor.rect, baseline, ctx.pixel_size, anchor.rotation);
        let origin = geometry::page_point_to_pdf(origin, &ctx.resolution, ctx.page_size);

        self.runs.push(TextRun {
            text: text.to_string(),
            origin,
            rotation: anchor.rotation,
            render_mode: self.options.render_mode,
            color: self.state.color(),
            font,
            font_size: style.font.size,
            horizontal_scaling: TextRun::DEFAULT_SCALING,
            source: *anchor.rect,
        });
        Ok(())
    }
}

/// Where a run sits on the scan.
#[derive(Debug, Clone, Copy)]
struct Anchor<'a> {
    rect: &'a PixelRect,
    line_baseline: f64,
    own_baseline: f64,
    rotation: Rotation,
}
