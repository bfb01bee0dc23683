use tracing::debug;

use crate::catalog::store::KnowledgeCatalog;
use crate::core::symptom::Symptom;
use crate::core::types::SymptomId;

/// Normalize free text for matching: trim and lowercase
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Maps free-form text to symptoms by label/keyword substring containment.
///
/// This is a heuristic, not a semantic matcher: a symptom is hit when the
/// normalized text contains its label or any one of its keywords as a
/// substring. Word boundaries, spelling variants, and negation ("no smoke")
/// are not understood.
pub struct TextMatcher<'a> {
    catalog: &'a KnowledgeCatalog,
}

impl<'a> TextMatcher<'a> {
    #[must_use]
    pub fn new(catalog: &'a KnowledgeCatalog) -> Self {
        Self { catalog }
    }

    /// Find symptoms reported by the text, in catalog declaration order.
    ///
    /// Each symptom is included at most once regardless of how many of its
    /// keywords matched. No hits is an empty result, not an error.
    #[must_use]
    pub fn match_text(&self, text: &str) -> Vec<&'a Symptom> {
        let normalized = normalize(text);
        if normalized.is_empty() {
            return Vec::new();
        }

        let hits: Vec<&Symptom> = self
            .catalog
            .symptoms
            .iter()
            .filter(|symptom| symptom.matches_text(&normalized))
            .collect();

        debug!("text matched {} symptom(s)", hits.len());
        hits
    }

    /// Like [`match_text`](Self::match_text), returning ids only
    #[must_use]
    pub fn match_ids(&self, text: &str) -> Vec<SymptomId> {
        self.match_text(text)
            .into_iter()
            .map(|symptom| symptom.id)
            .collect()
    }
}
