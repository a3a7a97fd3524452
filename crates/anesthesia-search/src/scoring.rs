//! Additive relevance scoring.
//!
//! Each field is tested once for substring containment of the normalized
//! query. A matching field adds its weight a single time no matter how many
//! list elements match, so scores reflect *where* a term appears rather than
//! how often.

use anesthesia_types::AnesthesiaEntry;

/// Fields considered by keyword search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Id,
    Description,
    Technique,
    Indications,
    Medications,
    Complications,
    KeyPearls,
    Contraindications,
    References,
}

/// All scored fields, in evaluation order.
pub const WEIGHTS: [SearchField; 10] = [
    SearchField::Name,
    SearchField::Id,
    SearchField::Description,
    SearchField::Technique,
    SearchField::Indications,
    SearchField::Medications,
    SearchField::Complications,
    SearchField::KeyPearls,
    SearchField::Contraindications,
    SearchField::References,
];

impl SearchField {
    pub fn weight(&self) -> u32 {
        match self {
            SearchField::Name => 10,
            SearchField::Id => 8,
            SearchField::Description => 5,
            SearchField::Technique | SearchField::Indications | SearchField::Medications => 4,
            SearchField::Complications | SearchField::KeyPearls => 3,
            SearchField::Contraindications => 2,
            SearchField::References => 1,
        }
    }

    /// Whether this field of `entry` contains `query`.
    ///
    /// `query` must already be normalized. Ids are lowercase by construction,
    /// so they are compared without folding.
    pub fn matches(&self, entry: &AnesthesiaEntry, query: &str) -> bool {
        match self {
            SearchField::Name => contains_folded(&entry.name, query),
            SearchField::Id => entry.id.contains(query),
            SearchField::Description => contains_folded(&entry.description, query),
            SearchField::Technique => any_contains(&entry.technique, query),
            SearchField::Indications => any_contains(&entry.indications, query),
            SearchField::Medications => any_contains(&entry.medications, query),
            SearchField::Complications => any_contains(&entry.complications, query),
            SearchField::KeyPearls => any_contains(&entry.key_pearls, query),
            SearchField::Contraindications => any_contains(&entry.contraindications, query),
            SearchField::References => any_contains(&entry.references, query),
        }
    }
}

/// Trim and lower-case a raw query. Returns None when nothing is left.
pub fn normalize_query(query: &str) -> Option<String> {
    let normalized = query.trim().to_lowercase();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Total relevance of `entry` for an already-normalized query. Zero means no match.
pub fn score_entry(entry: &AnesthesiaEntry, query: &str) -> u32 {
    WEIGHTS
        .iter()
        .filter(|field| field.matches(entry, query))
        .map(SearchField::weight)
        .sum()
}

fn contains_folded(text: &str, query: &str) -> bool {
    text.to_lowercase().contains(query)
}

fn any_contains(items: &[String], query: &str) -> bool {
    items.iter().any(|item| contains_folded(item, query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anesthesia_types::AnesthesiaCategory;

    fn sample_entry() -> AnesthesiaEntry {
        let mut entry = AnesthesiaEntry::new(
            "spinal-anesthesia",
            "Spinal Anesthesia (Subarachnoid Block)",
            AnesthesiaCategory::RegionalAnesthesia,
        )
        .with_description("Injection of local anesthetic into the subarachnoid space.");
        entry.technique = vec![
            "Position patient sitting".to_string(),
            "Insert pencil-point spinal needle".to_string(),
            "Confirm free flow of CSF from the spinal needle".to_string(),
        ];
        entry.complications = vec!["Post-dural puncture headache".to_string()];
        entry.references = vec!["Brull R. Spinal anesthesia review".to_string()];
        entry
    }

    #[test]
    fn test_weights() {
        let total: u32 = WEIGHTS.iter().map(SearchField::weight).sum();
        assert_eq!(total, 44);
        assert_eq!(SearchField::Name.weight(), 10);
        assert_eq!(SearchField::Id.weight(), 8);
        assert_eq!(SearchField::References.weight(), 1);
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  Spinal  "), Some("spinal".to_string()));
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query(" \t\n"), None);
    }

    #[test]
    fn test_list_field_counts_once() {
        let entry = sample_entry();
        // "needle" appears in two technique steps but technique scores once
        assert_eq!(score_entry(&entry, "needle"), 4);
    }

    #[test]
    fn test_fields_accumulate() {
        let entry = sample_entry();
        // name 10 + id 8 + technique 4 + references 1
        assert_eq!(score_entry(&entry, "spinal"), 23);
    }

    #[test]
    fn test_no_match_scores_zero() {
        let entry = sample_entry();
        assert_eq!(score_entry(&entry, "sugammadex"), 0);
    }

    #[test]
    fn test_matching_is_case_insensitive_on_text() {
        let entry = sample_entry();
        // Field text is folded; the query is expected to be normalized already
        assert!(SearchField::Complications.matches(&entry, "post-dural"));
        assert!(SearchField::Description.matches(&entry, "subarachnoid"));
    }

    #[test]
    fn test_id_matches_substring() {
        let entry = sample_entry();
        assert!(SearchField::Id.matches(&entry, "l-an"));
        assert!(!SearchField::Name.matches(&entry, "l-an"));
    }
}
