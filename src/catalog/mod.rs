//! Knowledge base storage and indexing.
//!
//! The catalog holds the symptom and cause reference data plus category-level
//! standing advice. An embedded catalog is compiled into the binary, but
//! custom catalogs can also be loaded from JSON files or built
//! programmatically (e.g. for tests).
//!
//! ## Embedded Catalog
//!
//! The default knowledge base covers the common fault groups: engine,
//! transmission, brakes, electrical, cooling, suspension, steering, exhaust.
//! It is validated structurally at build time by `build.rs`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fault_solver::KnowledgeCatalog;
//! use fault_solver::core::types::SymptomId;
//!
//! // Load the embedded catalog
//! let catalog = KnowledgeCatalog::load_embedded().unwrap();
//!
//! // List all symptoms
//! for symptom in &catalog.symptoms {
//!     println!("{}: {}", symptom.id, symptom.label);
//! }
//!
//! // Get a specific symptom
//! let knocking = catalog.symptom(SymptomId::new(1));
//! ```
//!
//! ## Custom Catalogs
//!
//! ```rust,no_run
//! use fault_solver::KnowledgeCatalog;
//! use std::path::Path;
//!
//! // Export to JSON
//! let catalog = KnowledgeCatalog::load_embedded().unwrap();
//! let json = catalog.to_json().unwrap();
//!
//! // Load from a custom file
//! let custom = KnowledgeCatalog::load_from_file(Path::new("my_catalog.json")).unwrap();
//! ```

pub mod index;
pub mod store;
