//! # anesthesia-search
//!
//! Keyword search and category filtering over the anesthesia reference entries.
//!
//! The dataset is small and fixed, so everything lives in memory: an ordered
//! entry list plus an id map. Queries are pure reads and never fail.
//!
//! ## Features
//! - Direct lookup by id
//! - Case-insensitive substring search with per-field relevance weights
//! - Category filters and a combined search + category filter
//! - Category enumeration and per-category counts
//! - Validated construction from the embedded dataset or a JSON file
//!
//! ## Usage
//!
//! ```rust
//! let index = anesthesia_search::builtin().unwrap();
//! let hits = index.search("spinal");
//! assert_eq!(hits[0].id, "spinal-anesthesia");
//! ```

pub mod catalog;
pub mod error;
pub mod index;
pub mod options;
pub mod scoring;

pub use catalog::{builtin, BUILTIN_DATASET_JSON};
pub use error::SearchError;
pub use index::{EntryIndex, ScoredEntry};
pub use options::FilterOptions;
pub use scoring::{normalize_query, score_entry, SearchField, WEIGHTS};
