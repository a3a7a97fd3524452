//! Anesthesia reference CLI library exports.
//!
//! # Modules
//!
//! - `cli`: Command-line argument parsing with clap
//! - `commands`: Command implementations (get, list, search, categories, counts, validate)

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands};
pub use commands::{
    execute, init_logging, list_categories, list_entries, load_index, run, search_entries,
    show_counts, show_entry, validate_dataset,
};
