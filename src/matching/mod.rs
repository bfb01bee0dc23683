//! Diagnosis engine, scoring, text matching, and cost estimation.
//!
//! This module provides the inference core:
//!
//! - [`DiagnosisEngine`](engine::DiagnosisEngine): the two public entry points
//!   (`diagnose`, `diagnose_text`) over an immutable catalog
//! - [`TextMatcher`](text::TextMatcher): free text → symptoms via
//!   keyword/substring containment
//! - [`ScoringConfig`](scoring::ScoringConfig): probability adjustment knobs
//! - [`estimate_range`](cost::estimate_range): aggregate cost bounds
//!
//! ## Diagnosis Algorithm
//!
//! 1. **Implication**: a cause is implicated when any of its triggering
//!    symptoms is present in the input set
//! 2. **Adjustment**: each implicated cause's base probability gains a bonus
//!    per corroborating symptom beyond the first, capped at 100
//! 3. **Ranking**: probability descending, ties by urgency (high first),
//!    remaining ties by catalog declaration order
//! 4. **Aggregation**: overall problem label, maximum urgency, deduplicated
//!    recommendations, and the folded cost range
//!
//! An input implicating no cause yields `None` — "no diagnosis available" is
//! an expected outcome, not an error.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fault_solver::{DiagnosisEngine, KnowledgeCatalog};
//!
//! let catalog = KnowledgeCatalog::load_embedded().unwrap();
//! let engine = DiagnosisEngine::new(&catalog);
//!
//! if let Some(result) = engine.diagnose_text("engine knocking when accelerating") {
//!     println!("{} ({})", result.problem, result.overall_urgency);
//!     for cause in &result.possible_causes {
//!         println!("  {}% {}", cause.probability, cause.cause);
//!     }
//! }
//! ```

pub mod cost;
pub mod engine;
pub mod scoring;
pub mod text;
