//! # anesthesia-types
//!
//! Shared domain types for the anesthesia reference index.
//!
//! This crate defines the core data structures used throughout the workspace:
//! - Entries: Authored reference records (technique, indications, pearls, ...)
//! - Categories: The closed set of topical buckets entries are filed under
//! - Settings: Layered configuration for the command-line front end
//!
//! ## Usage
//!
//! ```rust
//! use anesthesia_types::{AnesthesiaCategory, AnesthesiaEntry};
//!
//! let entry = AnesthesiaEntry::new("propofol", "Propofol", AnesthesiaCategory::Pharmacology);
//! assert_eq!(entry.category.as_str(), "pharmacology");
//! ```

pub mod category;
pub mod config;
pub mod entry;
pub mod error;

pub use category::AnesthesiaCategory;
pub use config::{OutputFormat, Settings};
pub use entry::AnesthesiaEntry;
pub use error::CatalogError;
