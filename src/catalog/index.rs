use std::collections::HashMap;

use crate::core::query::SymptomQuery;

use super::store::KnowledgeCatalog;

/// Finds causes implicated by a set of symptoms
pub struct CandidateFinder<'a> {
    catalog: &'a KnowledgeCatalog,
}

impl<'a> CandidateFinder<'a> {
    #[must_use]
    pub fn new(catalog: &'a KnowledgeCatalog) -> Self {
        Self { catalog }
    }

    /// Find implicated causes via the inverted symptom index.
    ///
    /// Returns `(cause index, trigger overlap count)` pairs in catalog
    /// declaration order. Ranking happens downstream in the engine; the
    /// stable order here is what makes its tie-breaks deterministic.
    #[must_use]
    pub fn find_implicated(&self, query: &SymptomQuery) -> Vec<(usize, usize)> {
        let mut overlap_counts: HashMap<usize, usize> = HashMap::new();

        // Query ids are deduplicated, so each hit counts one distinct
        // triggering symptom. Unknown ids have no index entry and fall through.
        for symptom_id in &query.ids {
            if let Some(indices) = self.catalog.symptom_to_causes.get(symptom_id) {
                for &idx in indices {
                    *overlap_counts.entry(idx).or_default() += 1;
                }
            }
        }

        let mut implicated: Vec<(usize, usize)> = overlap_counts.into_iter().collect();
        implicated.sort_unstable_by_key(|&(idx, _)| idx);
        implicated
    }
}
