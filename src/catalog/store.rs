use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::core::cause::Cause;
use crate::core::symptom::Symptom;
use crate::core::types::{Category, CauseId, SymptomId};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Standing advice surfaced when a category has symptoms but no implicated cause
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryAdvice {
    pub category: Category,
    pub text: String,
}

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub symptoms: Vec<Symptom>,
    pub causes: Vec<Cause>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub advice: Vec<CategoryAdvice>,
}

/// The knowledge base: symptoms, causes, and standing advice, with indexes
///
/// Read-only after construction; the engine borrows it and may be called
/// concurrently from any number of threads.
#[derive(Debug)]
pub struct KnowledgeCatalog {
    /// All symptoms, in declaration order
    pub symptoms: Vec<Symptom>,

    /// All causes, in declaration order
    pub causes: Vec<Cause>,

    /// Category-level standing advice
    advice: Vec<CategoryAdvice>,

    /// Index: symptom id -> index in symptoms vec
    symptom_index: HashMap<SymptomId, usize>,

    /// Index: cause id -> index in causes vec
    cause_index: HashMap<CauseId, usize>,

    /// Index: symptom id -> indices of causes triggered by it
    pub symptom_to_causes: HashMap<SymptomId, Vec<usize>>,
}

impl KnowledgeCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self {
            symptoms: Vec::new(),
            causes: Vec::new(),
            advice: Vec::new(),
            symptom_index: HashMap::new(),
            cause_index: HashMap::new(),
            symptom_to_causes: HashMap::new(),
        }
    }

    /// Load the embedded default catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` if the embedded JSON is invalid
    /// (also caught earlier by the build-time validation in `build.rs`).
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Embedded at compile time, validated by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/vehicle_faults.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load a catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ReadError` if the file cannot be read or
    /// `CatalogError::ParseError` if it is not a valid catalog.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a catalog from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` if the JSON does not match the
    /// catalog format.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            warn!(
                "catalog version mismatch (expected {CATALOG_VERSION}, found {})",
                data.version
            );
        }

        let mut catalog = Self::new();
        for symptom in data.symptoms {
            catalog.add_symptom(symptom);
        }
        for mut cause in data.causes {
            cause.rebuild_indexes();
            catalog.add_cause(cause);
        }
        catalog.advice = data.advice;

        catalog.warn_on_inconsistencies();
        Ok(catalog)
    }

    /// Add a symptom to the catalog
    pub fn add_symptom(&mut self, symptom: Symptom) {
        let index = self.symptoms.len();
        self.symptom_index.insert(symptom.id, index);
        self.symptoms.push(symptom);
    }

    /// Add a cause to the catalog, indexing it under each triggering symptom
    pub fn add_cause(&mut self, cause: Cause) {
        let index = self.causes.len();
        self.cause_index.insert(cause.id.clone(), index);

        for &symptom_id in &cause.triggering_symptoms {
            self.symptom_to_causes
                .entry(symptom_id)
                .or_default()
                .push(index);
        }

        self.causes.push(cause);
    }

    /// Set the category-level standing advice
    pub fn set_advice(&mut self, advice: Vec<CategoryAdvice>) {
        self.advice = advice;
    }

    /// Get a symptom by id
    #[must_use]
    pub fn symptom(&self, id: SymptomId) -> Option<&Symptom> {
        self.symptom_index.get(&id).map(|&idx| &self.symptoms[idx])
    }

    /// Get a cause by id
    #[must_use]
    pub fn cause(&self, id: &CauseId) -> Option<&Cause> {
        self.cause_index.get(id).map(|&idx| &self.causes[idx])
    }

    /// Standing advice for a category, if any
    #[must_use]
    pub fn advice_for(&self, category: &Category) -> Option<&str> {
        self.advice
            .iter()
            .find(|entry| entry.category == *category)
            .map(|entry| entry.text.as_str())
    }

    /// Export the catalog to JSON
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            symptoms: self.symptoms.clone(),
            causes: self.causes.clone(),
            advice: self.advice.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of symptoms in the catalog
    #[must_use]
    pub fn symptom_count(&self) -> usize {
        self.symptoms.len()
    }

    /// Number of causes in the catalog
    #[must_use]
    pub fn cause_count(&self) -> usize {
        self.causes.len()
    }

    /// Check if the catalog has no causes (nothing can ever be diagnosed)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.causes.is_empty()
    }

    /// Surface tolerated inconsistencies without failing the load.
    ///
    /// A trigger id with no symptom record still implicates its cause when
    /// queried; it only loses text matching and category bookkeeping.
    fn warn_on_inconsistencies(&self) {
        for cause in &self.causes {
            for &symptom_id in &cause.triggering_symptoms {
                if !self.symptom_index.contains_key(&symptom_id) {
                    warn!(
                        "cause '{}' references unknown symptom id {symptom_id}",
                        cause.id
                    );
                }
            }
        }
        for entry in &self.advice {
            let category_in_use = self
                .symptoms
                .iter()
                .any(|symptom| symptom.category == entry.category);
            if !category_in_use {
                warn!(
                    "standing advice for category '{}' matches no symptom",
                    entry.category
                );
            }
        }
    }
}

impl Default for KnowledgeCatalog {
    fn default() -> Self {
        Self::new()
    }
}
