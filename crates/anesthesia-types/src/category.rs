//! Topical categories for reference entries.
//!
//! The set is closed: an entry filed under anything else fails to parse,
//! which keeps a typo in the dataset from silently dropping out of every
//! category filter.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Category an entry is filed under.
///
/// Serialized with kebab-case names (`"regional-anesthesia"`). Ordering
/// follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnesthesiaCategory {
    GeneralAnesthesia,
    RegionalAnesthesia,
    LocalAnesthesia,
    Sedation,
    AirwayManagement,
    Monitoring,
    Pharmacology,
    Complications,
    Perioperative,
}

impl AnesthesiaCategory {
    /// Every category, in declaration order.
    pub const ALL: [AnesthesiaCategory; 9] = [
        AnesthesiaCategory::GeneralAnesthesia,
        AnesthesiaCategory::RegionalAnesthesia,
        AnesthesiaCategory::LocalAnesthesia,
        AnesthesiaCategory::Sedation,
        AnesthesiaCategory::AirwayManagement,
        AnesthesiaCategory::Monitoring,
        AnesthesiaCategory::Pharmacology,
        AnesthesiaCategory::Complications,
        AnesthesiaCategory::Perioperative,
    ];

    /// Wire name, as used in the dataset and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnesthesiaCategory::GeneralAnesthesia => "general-anesthesia",
            AnesthesiaCategory::RegionalAnesthesia => "regional-anesthesia",
            AnesthesiaCategory::LocalAnesthesia => "local-anesthesia",
            AnesthesiaCategory::Sedation => "sedation",
            AnesthesiaCategory::AirwayManagement => "airway-management",
            AnesthesiaCategory::Monitoring => "monitoring",
            AnesthesiaCategory::Pharmacology => "pharmacology",
            AnesthesiaCategory::Complications => "complications",
            AnesthesiaCategory::Perioperative => "perioperative",
        }
    }

    /// Human-readable heading.
    pub fn label(&self) -> &'static str {
        match self {
            AnesthesiaCategory::GeneralAnesthesia => "General Anesthesia",
            AnesthesiaCategory::RegionalAnesthesia => "Regional Anesthesia",
            AnesthesiaCategory::LocalAnesthesia => "Local Anesthesia",
            AnesthesiaCategory::Sedation => "Sedation",
            AnesthesiaCategory::AirwayManagement => "Airway Management",
            AnesthesiaCategory::Monitoring => "Monitoring",
            AnesthesiaCategory::Pharmacology => "Pharmacology",
            AnesthesiaCategory::Complications => "Complications",
            AnesthesiaCategory::Perioperative => "Perioperative",
        }
    }

    /// Parse from a wire name, returning None for unknown categories.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl std::fmt::Display for AnesthesiaCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AnesthesiaCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.trim())
            .ok_or_else(|| CatalogError::InvalidInput(format!("unknown category: {}", s)))
    }
}
