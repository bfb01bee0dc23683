//! Core data types for symptom-to-diagnosis inference.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Symptom`](symptom::Symptom): an observable, user-reported sign of a vehicle problem
//! - [`Cause`](cause::Cause): a candidate root cause with fix and cost estimate
//! - [`SymptomQuery`](query::SymptomQuery): the deduplicated set of symptoms under diagnosis
//! - [`SymptomId`](types::SymptomId), [`CauseId`](types::CauseId): tagged identifiers
//! - [`Category`](types::Category), [`Severity`](types::Severity),
//!   [`Urgency`](types::Urgency): classification enumerations
//!
//! Symptoms and causes are immutable reference data loaded once from the
//! catalog; queries and results are ephemeral per call.

pub mod cause;
pub mod query;
pub mod symptom;
pub mod types;
