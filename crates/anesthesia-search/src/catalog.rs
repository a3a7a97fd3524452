//! The embedded anesthesia reference dataset.
//!
//! 35 entries across all nine categories, compiled into the binary and
//! parsed on first access.

use std::sync::LazyLock;

use crate::error::SearchError;
use crate::index::EntryIndex;

/// Raw dataset JSON, as shipped.
pub const BUILTIN_DATASET_JSON: &str = include_str!("../data/anesthesia_entries.json");

static BUILTIN: LazyLock<Result<EntryIndex, SearchError>> =
    LazyLock::new(|| EntryIndex::from_json(BUILTIN_DATASET_JSON));

/// Shared index over the embedded dataset.
///
/// Built once per process; every caller gets the same instance.
pub fn builtin() -> Result<&'static EntryIndex, &'static SearchError> {
    BUILTIN.as_ref()
}
