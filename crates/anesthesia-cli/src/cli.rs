//! CLI argument parsing for the anesthesia reference tool.
//!
//! CLI flags override every other config source.

use anesthesia_types::{AnesthesiaCategory, OutputFormat};
use clap::{Parser, Subcommand};

/// Anesthesia Reference
///
/// Look up, search and filter the anesthesia reference entries.
#[derive(Parser, Debug)]
#[command(name = "anesthesia")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default ~/.config/anesthesia-reference/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Output format (text, json)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Load entries from this JSON file instead of the embedded dataset
    #[arg(long, global = true)]
    pub dataset: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Reference commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show a single entry
    Get {
        /// Entry ID (e.g. spinal-anesthesia)
        id: String,
    },

    /// List entries, optionally restricted to categories
    List {
        /// Only entries in this category (repeatable)
        #[arg(short = 'C', long = "category")]
        categories: Vec<AnesthesiaCategory>,
    },

    /// Keyword search, most relevant first
    Search {
        /// Case-insensitive search text
        #[arg(value_parser = parse_query)]
        query: String,

        /// Only entries in this category (repeatable)
        #[arg(short = 'C', long = "category")]
        categories: Vec<AnesthesiaCategory>,

        /// Maximum results (default from config, otherwise unlimited)
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Show relevance scores
        #[arg(long)]
        scores: bool,
    },

    /// List categories that have entries
    Categories,

    /// Entry count per category
    Counts,

    /// Check that a dataset file loads cleanly
    Validate {
        /// Dataset file (default: configured dataset, else the embedded one)
        path: Option<String>,
    },
}

/// Reject search text that is empty once trimmed.
fn parse_query(raw: &str) -> Result<String, String> {
    if raw.trim().is_empty() {
        Err("search text must not be blank (use `list` to show every entry)".to_string())
    } else {
        Ok(raw.to_string())
    }
}
