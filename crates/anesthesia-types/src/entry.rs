//! Reference entry type.
//!
//! An entry is one authored topic: a technique, a drug class, a complication.
//! List fields keep their authored order, which is also display order.

use serde::{Deserialize, Serialize};

use crate::category::AnesthesiaCategory;

/// A single anesthesia reference topic, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnesthesiaEntry {
    /// Stable lowercase kebab-case key (e.g. "spinal-anesthesia")
    pub id: String,

    /// Display title
    pub name: String,

    pub category: AnesthesiaCategory,

    #[serde(default)]
    pub description: String,

    /// Procedural steps, in order
    #[serde(default)]
    pub technique: Vec<String>,

    #[serde(default)]
    pub indications: Vec<String>,

    #[serde(default)]
    pub contraindications: Vec<String>,

    /// Drugs and doses
    #[serde(default)]
    pub medications: Vec<String>,

    #[serde(default)]
    pub complications: Vec<String>,

    /// Short clinical takeaways
    #[serde(default)]
    pub key_pearls: Vec<String>,

    /// Citations
    #[serde(default)]
    pub references: Vec<String>,
}

impl AnesthesiaEntry {
    /// Create an entry with empty text and list fields.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: AnesthesiaCategory,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            description: String::new(),
            technique: Vec::new(),
            indications: Vec::new(),
            contraindications: Vec::new(),
            medications: Vec::new(),
            complications: Vec::new(),
            key_pearls: Vec::new(),
            references: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_medications<I, S>(mut self, medications: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.medications = medications.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_references<I, S>(mut self, references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.references = references.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_fields() {
        let json = r#"{
            "id": "propofol",
            "name": "Propofol",
            "category": "pharmacology",
            "description": "Short-acting IV hypnotic.",
            "medications": ["Propofol 10 mg/mL"],
            "keyPearls": ["Painful on injection"]
        }"#;

        let entry: AnesthesiaEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "propofol");
        assert_eq!(entry.category, AnesthesiaCategory::Pharmacology);
        assert_eq!(entry.key_pearls, vec!["Painful on injection"]);
        // Absent lists default to empty
        assert!(entry.technique.is_empty());
        assert!(entry.references.is_empty());
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let entry = AnesthesiaEntry::new("ponv", "PONV", AnesthesiaCategory::Complications);
        let value = serde_json::to_value(&entry).unwrap();
        assert!(value.get("keyPearls").is_some());
        assert!(value.get("key_pearls").is_none());
        assert_eq!(value["category"], "complications");
    }

    #[test]
    fn test_builder_methods() {
        let entry = AnesthesiaEntry::new("propofol", "Propofol", AnesthesiaCategory::Pharmacology)
            .with_description("IV hypnotic")
            .with_medications(["Propofol 1.5-2.5 mg/kg IV"])
            .with_references(["Miller's Anesthesia"]);

        assert_eq!(entry.description, "IV hypnotic");
        assert_eq!(entry.medications.len(), 1);
        assert_eq!(entry.references, vec!["Miller's Anesthesia".to_string()]);
    }

    #[test]
    fn test_missing_category_fails() {
        let json = r#"{"id": "x", "name": "X"}"#;
        assert!(serde_json::from_str::<AnesthesiaEntry>(json).is_err());
    }
}
