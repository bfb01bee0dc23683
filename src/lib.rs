//! # fault-solver
//!
//! A library for ranking probable vehicle faults from observed symptoms.
//!
//! When a driver reports what they see — a knock under load, a soft brake
//! pedal, white smoke — it is rarely obvious which underlying fault is
//! responsible, how urgent it is, or what a repair will cost.
//!
//! `fault-solver` answers this by matching the reported symptoms against a
//! catalog of known symptom-to-cause associations.
//!
//! ## Features
//!
//! - **Catalog-backed matching**: symptoms and causes are static reference
//!   data, embedded or loaded from JSON
//! - **Free-text entry**: keyword/substring matching maps user text to
//!   catalog symptoms (a heuristic, not NLP)
//! - **Corroboration-aware ranking**: causes with more of their triggering
//!   symptoms present rank higher
//! - **Aggregate urgency**: the most urgent implicated cause sets the tone
//!   for the whole result
//! - **Cost estimation**: per-cause and folded repair-cost ranges
//!
//! ## Example
//!
//! ```rust,no_run
//! use fault_solver::{DiagnosisEngine, KnowledgeCatalog};
//! use fault_solver::core::types::SymptomId;
//!
//! // Load the embedded knowledge base
//! let catalog = KnowledgeCatalog::load_embedded().unwrap();
//! let engine = DiagnosisEngine::new(&catalog);
//!
//! // Diagnose from selected symptom ids...
//! if let Some(result) = engine.diagnose(&[SymptomId::new(1)]) {
//!     println!("{}: {}", result.problem, result.estimated_cost_range);
//! }
//!
//! // ...or from free text
//! let result = engine.diagnose_text("suara mesin ketukan");
//! assert!(result.is_some());
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: knowledge base storage and indexing
//! - [`core`]: core data types for symptoms, causes, and queries
//! - [`matching`]: diagnosis engine, scoring, and text matching
//! - [`utils`]: shared formatting helpers
//!
//! Each call is a pure, synchronous computation over the immutable catalog;
//! the engine may be shared across threads without locking.

pub mod catalog;
pub mod core;
pub mod matching;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::store::{CatalogError, KnowledgeCatalog};
pub use core::cause::{Cause, CostRange};
pub use core::query::SymptomQuery;
pub use core::symptom::Symptom;
pub use core::types::*;
pub use matching::engine::{DiagnosisEngine, DiagnosisResult, RankedCause};
pub use matching::scoring::ScoringConfig;
pub use matching::text::TextMatcher;
