//! Anesthesia Reference CLI
//!
//! Lookup, keyword search and category filtering over the anesthesia
//! reference entries.
//!
//! # Usage
//!
//! ```bash
//! anesthesia get spinal-anesthesia
//! anesthesia search propofol --category sedation --limit 5 --scores
//! anesthesia list --category pharmacology
//! anesthesia categories
//! anesthesia counts --format json
//! anesthesia validate ./entries.json
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded in order (later sources override earlier):
//! 1. Built-in defaults
//! 2. Config file (~/.config/anesthesia-reference/config.toml)
//! 3. Environment variables (ANESTHESIA_*)
//! 4. CLI flags

use anyhow::Result;
use clap::Parser;

use anesthesia_cli::{run, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
