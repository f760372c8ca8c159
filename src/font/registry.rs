//! Page-scoped font registry with two-pass embedding resolution.
//!
//! During layout every distinct [`FontDescriptor`] gets a resource id the
//! first time it is seen, and every run's text is checked against the
//! standard encoding range. Once layout is finished, [`FontRegistry::resolve`]
//! commits the embedding decision of each font in first-seen order and
//! materializes its metrics through a [`FontProvider`].

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::{encoding, Embedding, FontMetrics, FontProvider};
use crate::error::{Error, Result};
use crate::model::{FontDescriptor, FontId};

/// A font seen during layout whose embedding is not decided yet.
#[derive(Debug, Clone)]
struct PendingFont {
    descriptor: FontDescriptor,
    needs_embedding: bool,
}

/// Collects fonts during layout of one page.
#[derive(Debug, Default)]
pub struct FontRegistry {
    fonts: Vec<PendingFont>,
    ids: HashMap<FontDescriptor, FontId>,
}

impl FontRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the id of `descriptor`, reserving the next one if it is new.
    pub fn register(&mut self, descriptor: &FontDescriptor) -> FontId {
        if let Some(&id) = self.ids.get(descriptor) {
            return id;
        }

        let id = FontId::new(self.fonts.len() as u32 + 1);
        log::trace!("Registered font {} as {}", descriptor, id);
        self.fonts.push(PendingFont {
            descriptor: descriptor.clone(),
            needs_embedding: false,
        });
        self.ids.insert(descriptor.clone(), id);
        id
    }

    /// Record text drawn with font `id`.
    ///
    /// The embedding flag only ever goes from false to true.
    pub fn note_text(&mut self, id: FontId, text: &str) -> Result<()> {
        let font = self
            .fonts
            .get_mut(id.index())
            .ok_or(Error::UnknownFont(id))?;
        if !font.needs_embedding && encoding::needs_embedding(text) {
            log::trace!("{} needs embedding for {:?}", id, text);
            font.needs_embedding = true;
        }
        Ok(())
    }

    /// Number of distinct fonts registered.
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Commit embedding decisions and materialize every font.
    pub fn resolve(self, provider: &dyn FontProvider) -> Result<FontTable> {
        let mut resolved = Vec::with_capacity(self.fonts.len());

        for (index, pending) in self.fonts.into_iter().enumerate() {
            let id = FontId::new(index as u32 + 1);
            let embedding = if pending.needs_embedding {
                Embedding::Embed
            } else {
                Embedding::DontEmbed
            };
            log::trace!("{} ({}) resolved as {:?}", id, pending.descriptor, embedding);

            let metrics = provider.load(&pending.descriptor, embedding)?;
            resolved.push(FontResource {
                id,
                base_font: metrics.base_font().to_string(),
                descriptor: pending.descriptor,
                embedding,
                metrics,
            });
        }

        Ok(FontTable { fonts: resolved })
    }
}

/// A font with its final embedding decision and metrics.
#[derive(Clone, Serialize)]
pub struct FontResource {
    /// Resource id, unique within the page
    pub id: FontId,

    /// Font as resolved by the OCR engine
    pub descriptor: FontDescriptor,

    /// Final embedding decision
    pub embedding: Embedding,

    /// Name of the font program backing the metrics
    pub base_font: String,

    /// Metrics used for width fitting
    #[serde(skip)]
    pub metrics: Arc<dyn FontMetrics>,
}

impl FontResource {
    /// Resource name used in the page's font dictionary.
    pub fn resource_name(&self) -> String {
        self.id.resource_name()
    }
}

impl fmt::Debug for FontResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontResource")
            .field("id", &self.id)
            .field("descriptor", &self.descriptor)
            .field("embedding", &self.embedding)
            .field("base_font", &self.base_font)
            .finish_non_exhaustive()
    }
}

/// Resolved fonts of one page, in first-seen order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct FontTable {
    fonts: Vec<FontResource>,
}

impl FontTable {
    /// Get a font by id.
    pub fn get(&self, id: FontId) -> Option<&FontResource> {
        self.fonts.get(id.index()).filter(|f| f.id == id)
    }

    /// Iterate fonts in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &FontResource> {
        self.fonts.iter()
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::StandardFonts;

    fn arial(size: f64) -> FontDescriptor {
        FontDescriptor::new("Arial", size)
    }

    #[test]
    fn test_ids_in_first_seen_order() {
        let mut registry = FontRegistry::new();
        let a = registry.register(&arial(10.0));
        let b = registry.register(&arial(12.0));
        let a_again = registry.register(&arial(10.0));
        let c = registry.register(&arial(10.0).bold());

        assert_eq!(a, FontId::new(1));
        assert_eq!(b, FontId::new(2));
        assert_eq!(a_again, a);
        assert_eq!(c, FontId::new(3));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_embedding_flag_is_monotonic() {
        let mut registry = FontRegistry::new();
        let id = registry.register(&arial(10.0));
        let other = registry.register(&arial(12.0));

        registry.note_text(id, "plain").unwrap();
        registry.note_text(id, "Ωmega").unwrap();
        registry.note_text(id, "plain again").unwrap();
        registry.note_text(other, "plain").unwrap();

        let table = registry.resolve(&StandardFonts).unwrap();
        assert_eq!(table.get(id).unwrap().embedding, Embedding::Embed);
        assert_eq!(table.get(other).unwrap().embedding, Embedding::DontEmbed);
    }

    #[test]
    fn test_note_text_unknown_font() {
        let mut registry = FontRegistry::new();
        let result = registry.note_text(FontId::new(4), "x");
        assert!(matches!(result, Err(Error::UnknownFont(_))));
    }

    #[test]
    fn test_resolve_commits_decisions() {
        let mut registry = FontRegistry::new();
        let latin = registry.register(&arial(10.0));
        let greek = registry.register(&FontDescriptor::new("Times", 11.0));
        registry.note_text(latin, "Hello").unwrap();
        registry.note_text(greek, "αβγ").unwrap();

        let table = registry.resolve(&StandardFonts).unwrap();
        assert_eq!(table.len(), 2);

        let first = table.get(latin).unwrap();
        assert_eq!(first.embedding, Embedding::DontEmbed);
        assert_eq!(first.resource_name(), "F1");
        assert_eq!(first.base_font, "Helvetica");

        let second = table.get(greek).unwrap();
        assert_eq!(second.embedding, Embedding::Embed);
        assert_eq!(second.base_font, "Times-Roman");

        assert!(table.get(FontId::new(3)).is_none());
    }

    #[test]
    fn test_resolve_empty_registry() {
        let table = FontRegistry::new().resolve(&StandardFonts).unwrap();
        assert!(table.is_empty());
    }
}
