use std::collections::HashSet;

use crate::core::types::SymptomId;

/// The set of symptoms under diagnosis
///
/// Built from caller-supplied ids: duplicates collapse to one occurrence and
/// first-seen order is kept, so the same set in any order diagnoses
/// identically. Ids unknown to the catalog are allowed here; they simply never
/// implicate a cause downstream.
#[derive(Debug, Clone)]
pub struct SymptomQuery {
    /// Deduplicated ids in first-seen order
    pub ids: Vec<SymptomId>,

    /// Set view for membership tests
    pub id_set: HashSet<SymptomId>,
}

impl SymptomQuery {
    #[must_use]
    pub fn new(ids: impl IntoIterator<Item = SymptomId>) -> Self {
        let mut seen = HashSet::new();
        let mut ordered = Vec::new();
        for id in ids {
            if seen.insert(id) {
                ordered.push(id);
            }
        }
        Self {
            ids: ordered,
            id_set: seen,
        }
    }

    #[must_use]
    pub fn contains(&self, id: SymptomId) -> bool {
        self.id_set.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
