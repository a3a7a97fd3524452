//! Read-only in-memory entry index.
//!
//! Entries are kept in dataset order alongside an id -> position map. All
//! queries borrow from the index; nothing hands out mutable access.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

use anesthesia_types::{AnesthesiaCategory, AnesthesiaEntry};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::SearchError;
use crate::options::FilterOptions;
use crate::scoring::{normalize_query, score_entry};

/// A search hit with its relevance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredEntry<'a> {
    pub entry: &'a AnesthesiaEntry,
    /// Sum of matching field weights. Zero only for unqueried listings.
    pub score: u32,
}

/// Immutable index over a fixed set of entries.
#[derive(Debug, Clone)]
pub struct EntryIndex {
    entries: Vec<AnesthesiaEntry>,
    positions: HashMap<String, usize>,
}

impl EntryIndex {
    /// Build an index, validating every entry.
    ///
    /// Fails on the first malformed entry or duplicate id.
    pub fn from_entries(entries: Vec<AnesthesiaEntry>) -> Result<Self, SearchError> {
        let mut positions = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            validate_entry(entry)?;
            if positions.insert(entry.id.clone(), position).is_some() {
                return Err(SearchError::DuplicateId(entry.id.clone()));
            }
        }

        info!(entries = entries.len(), "Built entry index");
        Ok(Self { entries, positions })
    }

    /// Build an index from a JSON array of entries.
    pub fn from_json(json: &str) -> Result<Self, SearchError> {
        let entries: Vec<AnesthesiaEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Build an index from a JSON dataset file.
    pub fn from_path(path: &Path) -> Result<Self, SearchError> {
        debug!(path = %path.display(), "Loading dataset");
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every entry, in dataset order.
    pub fn get_all(&self) -> Vec<&AnesthesiaEntry> {
        self.entries.iter().collect()
    }

    /// Look up an entry by id. Unknown ids yield None.
    pub fn get_by_id(&self, id: &str) -> Option<&AnesthesiaEntry> {
        self.positions.get(id).map(|&position| &self.entries[position])
    }

    /// Keyword search, most relevant first.
    ///
    /// Blank queries return nothing. Equal scores keep dataset order.
    pub fn search(&self, query: &str) -> Vec<&AnesthesiaEntry> {
        self.search_scored(query)
            .into_iter()
            .map(|hit| hit.entry)
            .collect()
    }

    /// Keyword search keeping each hit's score.
    pub fn search_scored(&self, query: &str) -> Vec<ScoredEntry<'_>> {
        let Some(normalized) = normalize_query(query) else {
            return Vec::new();
        };

        let mut hits: Vec<ScoredEntry<'_>> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let score = score_entry(entry, &normalized);
                (score > 0).then_some(ScoredEntry { entry, score })
            })
            .collect();

        // sort_by is stable, so ties stay in dataset order
        hits.sort_by(|a, b| b.score.cmp(&a.score));

        debug!(query = %normalized, results = hits.len(), "Keyword search complete");
        hits
    }

    /// Entries in any of `categories`, in dataset order.
    pub fn filter_by_category(&self, categories: &[AnesthesiaCategory]) -> Vec<&AnesthesiaEntry> {
        self.entries
            .iter()
            .filter(|entry| categories.contains(&entry.category))
            .collect()
    }

    /// Entries in a single category, in dataset order.
    pub fn filter_by_single_category(&self, category: AnesthesiaCategory) -> Vec<&AnesthesiaEntry> {
        self.filter_by_category(std::slice::from_ref(&category))
    }

    /// Keyword search narrowed by category.
    ///
    /// Without a usable query this starts from the full dataset; without
    /// categories it leaves the starting set alone. The limit applies last.
    pub fn filter(&self, options: &FilterOptions) -> Vec<&AnesthesiaEntry> {
        self.filter_scored(options)
            .into_iter()
            .map(|hit| hit.entry)
            .collect()
    }

    /// [`filter`](Self::filter) keeping each hit's score.
    ///
    /// Entries taken from the full dataset (no usable query) score 0.
    pub fn filter_scored(&self, options: &FilterOptions) -> Vec<ScoredEntry<'_>> {
        let mut results = match options.effective_query() {
            Some(query) => self.search_scored(query),
            None => self
                .entries
                .iter()
                .map(|entry| ScoredEntry { entry, score: 0 })
                .collect(),
        };

        if !options.categories.is_empty() {
            results.retain(|hit| options.categories.contains(&hit.entry.category));
        }

        if let Some(limit) = options.limit {
            results.truncate(limit);
        }

        results
    }

    /// Categories that have at least one entry.
    pub fn categories(&self) -> BTreeSet<AnesthesiaCategory> {
        self.entries.iter().map(|entry| entry.category).collect()
    }

    /// Entry count per category. Empty categories are absent.
    pub fn counts_by_category(&self) -> BTreeMap<AnesthesiaCategory, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.category).or_insert(0) += 1;
        }
        counts
    }
}

fn validate_entry(entry: &AnesthesiaEntry) -> Result<(), SearchError> {
    if !is_valid_id(&entry.id) {
        return Err(SearchError::InvalidEntry {
            id: entry.id.clone(),
            reason: "id must be lowercase kebab-case".to_string(),
        });
    }
    if entry.name.trim().is_empty() {
        return Err(SearchError::InvalidEntry {
            id: entry.id.clone(),
            reason: "name is blank".to_string(),
        });
    }
    Ok(())
}

/// `[a-z0-9]+(-[a-z0-9]+)*`
fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id.split('-').all(|part| {
            !part.is_empty()
                && part
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}
