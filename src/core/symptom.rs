use serde::{Deserialize, Serialize};

use crate::core::types::{Category, Severity, SymptomId};

/// A single observable symptom in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symptom {
    /// Unique identifier, stable across catalog revisions
    pub id: SymptomId,

    /// Human-readable description presented to the user
    pub label: String,

    /// Coarse grouping (engine, brakes, electrical, ...)
    pub category: Category,

    /// Intrinsic severity of reporting this symptom, independent of cause
    pub severity: Severity,

    /// Lowercase tokens used for free-text matching
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl Symptom {
    pub fn new(
        id: u32,
        label: impl Into<String>,
        category: Category,
        severity: Severity,
    ) -> Self {
        Self {
            id: SymptomId::new(id),
            label: label.into(),
            category,
            severity,
            keywords: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_keywords(mut self, keywords: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Check whether already-normalized (lowercased, trimmed) text reports
    /// this symptom.
    ///
    /// A hit is the symptom's label or any one of its keywords appearing as a
    /// substring. Keywords are stored lowercase, so no per-call allocation is
    /// needed for them.
    #[must_use]
    pub fn matches_text(&self, normalized_text: &str) -> bool {
        if normalized_text.contains(&self.label.to_lowercase()) {
            return true;
        }
        self.keywords
            .iter()
            .any(|keyword| normalized_text.contains(keyword.as_str()))
    }
}
