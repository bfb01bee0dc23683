use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::core::types::{CauseId, SymptomId, Urgency};

/// Estimated repair cost bounds in the application's currency unit (Rupiah)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostRange {
    pub min: u64,
    pub max: u64,
}

impl CostRange {
    #[must_use]
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }
}

/// A candidate root cause in the catalog, associated with one or more symptoms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cause {
    /// Unique identifier
    pub id: CauseId,

    /// Name of the probable root cause
    pub label: String,

    /// Symptom ids whose presence makes this cause plausible, in catalog order
    pub triggering_symptoms: Vec<SymptomId>,

    /// Likelihood (integer percent, 0-100) of this cause given its triggering
    /// symptom(s) are present, independent of other symptoms
    pub base_probability: u8,

    /// How urgently this cause needs attention
    pub urgency: Urgency,

    /// Short remediation text
    pub solution: String,

    /// Estimated repair cost bounds
    pub cost_range: CostRange,

    // === Pre-computed for fast matching (populated on load) ===
    /// Set view of `triggering_symptoms` for membership tests
    #[serde(skip)]
    pub trigger_set: HashSet<SymptomId>,
}

impl Cause {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        base_probability: u8,
        urgency: Urgency,
    ) -> Self {
        Self {
            id: CauseId::new(id),
            label: label.into(),
            triggering_symptoms: Vec::new(),
            base_probability,
            urgency,
            solution: String::new(),
            cost_range: CostRange::new(0, 0),
            trigger_set: HashSet::new(),
        }
    }

    #[must_use]
    pub fn with_triggers(mut self, symptom_ids: impl IntoIterator<Item = u32>) -> Self {
        self.triggering_symptoms = symptom_ids.into_iter().map(SymptomId::new).collect();
        self.rebuild_indexes();
        self
    }

    #[must_use]
    pub fn with_solution(mut self, solution: impl Into<String>) -> Self {
        self.solution = solution.into();
        self
    }

    #[must_use]
    pub fn with_cost_range(mut self, min: u64, max: u64) -> Self {
        self.cost_range = CostRange::new(min, max);
        self
    }

    /// Rebuild the internal trigger set after modifying `triggering_symptoms`
    pub fn rebuild_indexes(&mut self) {
        self.trigger_set = self.triggering_symptoms.iter().copied().collect();
    }

    /// Number of this cause's triggering symptoms present in the given set
    #[must_use]
    pub fn trigger_overlap(&self, symptom_ids: &HashSet<SymptomId>) -> usize {
        self.trigger_set.intersection(symptom_ids).count()
    }

    /// Whether at least one triggering symptom is present in the given set
    #[must_use]
    pub fn is_implicated_by(&self, symptom_ids: &HashSet<SymptomId>) -> bool {
        !self.trigger_set.is_disjoint(symptom_ids)
    }
}
