use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::catalog::index::CandidateFinder;
use crate::catalog::store::KnowledgeCatalog;
use crate::core::cause::Cause;
use crate::core::query::SymptomQuery;
use crate::core::types::{Category, SymptomId, Urgency};
use crate::matching::cost;
use crate::matching::scoring::{adjusted_probability, ScoringConfig};
use crate::matching::text::TextMatcher;
use crate::utils::format::format_cost_range;

/// One ranked cause within a diagnosis
///
/// Field names serialize camelCase for the consuming UI layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCause {
    /// Display label of the cause
    pub cause: String,

    /// Adjusted probability (integer percent). Independent per-cause
    /// confidence, not part of a normalized distribution.
    pub probability: u8,

    pub urgency: Urgency,

    /// Short remediation text
    pub solution: String,

    /// This cause's own cost range, rendered for display
    pub estimated_cost: String,
}

/// Result of diagnosing a set of symptoms
///
/// Ephemeral per call; any history storage is the calling layer's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisResult {
    /// Synthesized label for the overall issue
    pub problem: String,

    /// Causes sorted by probability descending, ties broken by urgency
    /// (high first) then catalog declaration order. Never empty.
    pub possible_causes: Vec<RankedCause>,

    /// Deduplicated remediation texts plus standing advice, first-seen order
    pub recommendations: Vec<String>,

    /// Aggregate of all matched causes' cost ranges, rendered for display
    pub estimated_cost_range: String,

    /// Maximum urgency across `possible_causes`
    pub overall_urgency: Urgency,
}

/// A cause index with its adjusted probability
struct Scored {
    index: usize,
    probability: u8,
}

/// The diagnosis engine: both public entry points over an immutable catalog
///
/// Construct one per catalog and share it freely; all methods take `&self`
/// and every call is an independent, synchronous computation.
pub struct DiagnosisEngine<'a> {
    catalog: &'a KnowledgeCatalog,
    config: ScoringConfig,
}

impl<'a> DiagnosisEngine<'a> {
    /// Create an engine with the default scoring configuration
    #[must_use]
    pub fn new(catalog: &'a KnowledgeCatalog) -> Self {
        Self {
            catalog,
            config: ScoringConfig::default(),
        }
    }

    /// Create an engine with a custom scoring configuration
    #[must_use]
    pub fn with_config(catalog: &'a KnowledgeCatalog, config: ScoringConfig) -> Self {
        Self { catalog, config }
    }

    /// Diagnose a set of symptom ids.
    ///
    /// Duplicate ids are idempotent and unknown ids are silently ignored.
    /// Returns `None` when no cause is implicated — an expected outcome,
    /// not a fault.
    #[must_use]
    pub fn diagnose(&self, symptom_ids: &[SymptomId]) -> Option<DiagnosisResult> {
        let query = SymptomQuery::new(symptom_ids.iter().copied());
        self.aggregate(&query)
    }

    /// Diagnose from free-form text.
    ///
    /// The text is mapped to symptoms by keyword/substring matching; when
    /// nothing matches this short-circuits to `None` without aggregating.
    #[must_use]
    pub fn diagnose_text(&self, text: &str) -> Option<DiagnosisResult> {
        let matcher = TextMatcher::new(self.catalog);
        let ids = matcher.match_ids(text);
        if ids.is_empty() {
            return None;
        }
        self.aggregate(&SymptomQuery::new(ids))
    }

    fn aggregate(&self, query: &SymptomQuery) -> Option<DiagnosisResult> {
        if query.is_empty() {
            return None;
        }

        let finder = CandidateFinder::new(self.catalog);
        let implicated = finder.find_implicated(query);
        if implicated.is_empty() {
            return None;
        }

        debug!(
            "{} cause(s) implicated by {} symptom(s)",
            implicated.len(),
            query.len()
        );

        let mut ranked: Vec<Scored> = implicated
            .into_iter()
            .map(|(index, overlap)| {
                let cause = &self.catalog.causes[index];
                Scored {
                    index,
                    probability: adjusted_probability(
                        cause.base_probability,
                        overlap,
                        &self.config,
                    ),
                }
            })
            .collect();

        // Probability descending, then urgency rank descending, then catalog
        // declaration order (the indexes are already ascending, kept stable).
        ranked.sort_by(|a, b| {
            let cause_a = &self.catalog.causes[a.index];
            let cause_b = &self.catalog.causes[b.index];
            b.probability
                .cmp(&a.probability)
                .then_with(|| cause_b.urgency.rank().cmp(&cause_a.urgency.rank()))
                .then_with(|| a.index.cmp(&b.index))
        });

        let top_cause = &self.catalog.causes[ranked[0].index];
        let problem = self.problem_label(top_cause, query);

        let overall_urgency = ranked.iter().fold(Urgency::Low, |acc, scored| {
            acc.max(self.catalog.causes[scored.index].urgency)
        });

        let possible_causes = ranked
            .iter()
            .map(|scored| {
                let cause = &self.catalog.causes[scored.index];
                RankedCause {
                    cause: cause.label.clone(),
                    probability: scored.probability,
                    urgency: cause.urgency,
                    solution: cause.solution.clone(),
                    estimated_cost: format_cost_range(cause.cost_range),
                }
            })
            .collect();

        let recommendations = self.recommendations(&ranked, query);

        // The implicated set is non-empty, so the estimator always yields a range
        let estimated_cost_range =
            cost::estimate_range(ranked.iter().map(|scored| &self.catalog.causes[scored.index]))?;

        Some(DiagnosisResult {
            problem,
            possible_causes,
            recommendations,
            estimated_cost_range,
            overall_urgency,
        })
    }

    /// Synthesize the overall problem label.
    ///
    /// When a strict majority of the top-ranked cause's matched triggering
    /// symptoms share one category, that category names the problem;
    /// otherwise the cause's own label does.
    fn problem_label(&self, top_cause: &Cause, query: &SymptomQuery) -> String {
        let mut category_counts: Vec<(Category, usize)> = Vec::new();
        let mut matched_total = 0usize;

        for &symptom_id in &top_cause.triggering_symptoms {
            if !query.contains(symptom_id) {
                continue;
            }
            let Some(symptom) = self.catalog.symptom(symptom_id) else {
                continue;
            };
            matched_total += 1;
            match category_counts
                .iter_mut()
                .find(|(category, _)| *category == symptom.category)
            {
                Some(entry) => entry.1 += 1,
                None => category_counts.push((symptom.category.clone(), 1)),
            }
        }

        // First-seen wins among equal counts, keeping the label deterministic
        let mut dominant: Option<(&Category, usize)> = None;
        for (category, count) in &category_counts {
            if dominant.map_or(true, |(_, best)| *count > best) {
                dominant = Some((category, *count));
            }
        }

        match dominant {
            Some((category, count)) if count * 2 > matched_total => category.problem_label(),
            _ => top_cause.label.clone(),
        }
    }

    /// Remediation texts in rank order, then standing advice for input
    /// categories no implicated cause addressed. Deduplicated, first-seen
    /// order preserved.
    fn recommendations(&self, ranked: &[Scored], query: &SymptomQuery) -> Vec<String> {
        let mut recommendations: Vec<String> = Vec::new();

        for scored in ranked {
            let solution = &self.catalog.causes[scored.index].solution;
            if solution.is_empty() {
                continue;
            }
            if !recommendations.iter().any(|existing| existing == solution) {
                recommendations.push(solution.clone());
            }
        }

        // Categories addressed by some implicated cause's matched symptom
        let mut covered: HashSet<&Category> = HashSet::new();
        for scored in ranked {
            let cause = &self.catalog.causes[scored.index];
            for &symptom_id in &cause.triggering_symptoms {
                if !query.contains(symptom_id) {
                    continue;
                }
                if let Some(symptom) = self.catalog.symptom(symptom_id) {
                    covered.insert(&symptom.category);
                }
            }
        }

        for &symptom_id in &query.ids {
            let Some(symptom) = self.catalog.symptom(symptom_id) else {
                continue;
            };
            if covered.contains(&symptom.category) {
                continue;
            }
            if let Some(advice) = self.catalog.advice_for(&symptom.category) {
                if !recommendations.iter().any(|existing| existing == advice) {
                    recommendations.push(advice.to_string());
                }
            }
        }

        recommendations
    }
}
