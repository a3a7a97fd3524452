//! Options for the combined search + category filter.

use anesthesia_types::AnesthesiaCategory;

/// Filter options combining a keyword query, a category restriction and a cap.
///
/// Every part is optional; `FilterOptions::new()` matches the whole dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Keyword query (None or blank = no keyword search)
    pub query: Option<String>,
    /// Restrict to these categories (empty = all categories)
    pub categories: Vec<AnesthesiaCategory>,
    /// Maximum results to return (None = unlimited)
    pub limit: Option<usize>,
}

impl FilterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_categories(
        mut self,
        categories: impl IntoIterator<Item = AnesthesiaCategory>,
    ) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    pub fn with_category(mut self, category: AnesthesiaCategory) -> Self {
        self.categories.push(category);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The query, if it has any non-whitespace content.
    pub fn effective_query(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.trim().is_empty())
    }
}
