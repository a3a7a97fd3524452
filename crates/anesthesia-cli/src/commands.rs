//! Command implementations for the anesthesia reference tool.
//!
//! Each command renders to a caller-supplied writer so it can run against
//! stdout or a buffer alike.

use std::borrow::Cow;
use std::io::Write;
use std::path::{Path, PathBuf};

use anesthesia_search::{builtin, EntryIndex, FilterOptions};
use anesthesia_types::{AnesthesiaCategory, AnesthesiaEntry, CatalogError, OutputFormat, Settings};
use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::{Cli, Commands};

/// Parse-and-dispatch entry point used by `main`.
///
/// 1. Load configuration (defaults -> file -> env -> CLI)
/// 2. Initialize logging
/// 3. Load the dataset
/// 4. Run the command against stdout
pub fn run(cli: Cli) -> Result<()> {
    let mut settings =
        Settings::load(cli.config.as_deref()).context("Failed to load configuration")?;

    // CLI overrides
    if let Some(log_level) = cli.log_level {
        settings.log_level = log_level;
    }
    if let Some(format) = cli.format {
        settings.output_format = format;
    }
    if let Some(dataset) = cli.dataset {
        settings.dataset_path = Some(dataset);
    }

    init_logging(&settings.log_level)?;
    debug!(?settings, "Loaded configuration");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Commands::Validate { path } = &cli.command {
        let path = path
            .as_deref()
            .map(PathBuf::from)
            .or_else(|| settings.expanded_dataset_path());
        return validate_dataset(path.as_deref(), &mut out);
    }

    let index = load_index(settings.expanded_dataset_path().as_deref())?;
    execute(&index, &cli.command, &settings, &mut out)
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level. Logs go to stderr so stdout
/// stays clean for JSON output.
pub fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;
    Ok(())
}

/// The embedded index, or one built from `path` when given.
pub fn load_index(path: Option<&Path>) -> Result<Cow<'static, EntryIndex>> {
    match path {
        Some(path) => {
            info!("Loading dataset from {:?}", path);
            let index = EntryIndex::from_path(path)
                .with_context(|| format!("Failed to load dataset {}", path.display()))?;
            Ok(Cow::Owned(index))
        }
        None => {
            let index = builtin().map_err(|e| anyhow!("Embedded dataset is invalid: {}", e))?;
            Ok(Cow::Borrowed(index))
        }
    }
}

/// Run a loaded-index command.
///
/// `Validate` loads its own dataset and is handled by [`run`].
pub fn execute<W: Write>(
    index: &EntryIndex,
    command: &Commands,
    settings: &Settings,
    out: &mut W,
) -> Result<()> {
    let format = settings.output_format;
    match command {
        Commands::Get { id } => show_entry(index, id, format, out),
        Commands::List { categories } => list_entries(index, categories, format, out),
        Commands::Search {
            query,
            categories,
            limit,
            scores,
        } => {
            let mut options = FilterOptions::new()
                .with_query(query.as_str())
                .with_categories(categories.iter().copied());
            if let Some(limit) = limit.or(settings.default_limit) {
                options = options.with_limit(limit);
            }
            search_entries(index, &options, *scores, format, out)
        }
        Commands::Categories => list_categories(index, format, out),
        Commands::Counts => show_counts(index, format, out),
        Commands::Validate { .. } => {
            Err(anyhow!("validate must be run through the CLI entry point"))
        }
    }
}

/// Print one entry in full.
pub fn show_entry<W: Write>(
    index: &EntryIndex,
    id: &str,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let entry = index
        .get_by_id(id)
        .ok_or_else(|| CatalogError::NotFound(format!("entry '{}'", id)))?;

    match format {
        OutputFormat::Json => write_json(out, entry),
        OutputFormat::Text => {
            writeln!(out, "{}", entry.name)?;
            writeln!(out, "id: {}", entry.id)?;
            writeln!(out, "category: {}", entry.category.label())?;
            if !entry.description.is_empty() {
                writeln!(out)?;
                writeln!(out, "{}", entry.description)?;
            }
            write_section(out, "Technique", &entry.technique)?;
            write_section(out, "Indications", &entry.indications)?;
            write_section(out, "Contraindications", &entry.contraindications)?;
            write_section(out, "Medications", &entry.medications)?;
            write_section(out, "Complications", &entry.complications)?;
            write_section(out, "Key Pearls", &entry.key_pearls)?;
            write_section(out, "References", &entry.references)?;
            Ok(())
        }
    }
}

/// List entries in dataset order, optionally narrowed to categories.
pub fn list_entries<W: Write>(
    index: &EntryIndex,
    categories: &[AnesthesiaCategory],
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let entries = if categories.is_empty() {
        index.get_all()
    } else {
        index.filter_by_category(categories)
    };
    write_entry_list(out, &entries, format)
}

/// Keyword search narrowed by the options' categories and limit.
pub fn search_entries<W: Write>(
    index: &EntryIndex,
    options: &FilterOptions,
    show_scores: bool,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    if !show_scores {
        let entries = index.filter(options);
        return write_entry_list(out, &entries, format);
    }

    let hits = index.filter_scored(options);

    match format {
        OutputFormat::Json => write_json(out, &hits),
        OutputFormat::Text => {
            for hit in &hits {
                writeln!(out, "{:>3}  {:<36}  {}", hit.score, hit.entry.id, hit.entry.name)?;
            }
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct CategoryRow {
    category: AnesthesiaCategory,
    label: &'static str,
}

/// Categories that have at least one entry.
pub fn list_categories<W: Write>(
    index: &EntryIndex,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let rows: Vec<CategoryRow> = index
        .categories()
        .into_iter()
        .map(|category| CategoryRow {
            category,
            label: category.label(),
        })
        .collect();

    match format {
        OutputFormat::Json => write_json(out, &rows),
        OutputFormat::Text => {
            for row in &rows {
                writeln!(out, "{:<20}  {}", row.category, row.label)?;
            }
            Ok(())
        }
    }
}

/// Entry count per category.
pub fn show_counts<W: Write>(
    index: &EntryIndex,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let counts = index.counts_by_category();
    match format {
        OutputFormat::Json => write_json(out, &counts),
        OutputFormat::Text => {
            for (category, count) in &counts {
                writeln!(out, "{:<20}  {}", category, count)?;
            }
            writeln!(out, "{:<20}  {}", "total", index.len())?;
            Ok(())
        }
    }
}

/// Build an index from `path` (or the embedded dataset) and report its shape.
pub fn validate_dataset<W: Write>(path: Option<&Path>, out: &mut W) -> Result<()> {
    let index = load_index(path)?;
    let source = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "embedded dataset".to_string());

    writeln!(
        out,
        "OK: {} entries across {} categories ({})",
        index.len(),
        index.categories().len(),
        source
    )?;
    Ok(())
}

fn write_entry_list<W: Write>(
    out: &mut W,
    entries: &[&AnesthesiaEntry],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, entries),
        OutputFormat::Text => {
            for entry in entries {
                writeln!(out, "{:<36}  {:<20}  {}", entry.id, entry.category, entry.name)?;
            }
            Ok(())
        }
    }
}

fn write_section<W: Write>(out: &mut W, heading: &str, items: &[String]) -> Result<()> {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "{}:", heading)?;
    for item in items {
        writeln!(out, "  - {}", item)?;
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("Failed to serialize output")?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> EntryIndex {
        let mut spinal = AnesthesiaEntry::new(
            "spinal-anesthesia",
            "Spinal Anesthesia (Subarachnoid Block)",
            AnesthesiaCategory::RegionalAnesthesia,
        )
        .with_description("Local anesthetic into the subarachnoid space");
        spinal.technique = vec!["Sitting or lateral position".to_string()];

        let propofol =
            AnesthesiaEntry::new("propofol", "Propofol", AnesthesiaCategory::Pharmacology)
                .with_medications(["Propofol 10 mg/mL"]);

        EntryIndex::from_entries(vec![spinal, propofol]).unwrap()
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_show_entry_text_sections() {
        let index = sample_index();
        let text = render(|out| show_entry(&index, "spinal-anesthesia", OutputFormat::Text, out));

        assert!(text.starts_with("Spinal Anesthesia (Subarachnoid Block)\n"));
        assert!(text.contains("category: Regional Anesthesia"));
        assert!(text.contains("Technique:\n  - Sitting or lateral position"));
        // Empty sections are skipped
        assert!(!text.contains("Medications:"));
    }

    #[test]
    fn test_show_entry_not_found() {
        let index = sample_index();
        let mut buf = Vec::new();
        let err = show_entry(&index, "epidural", OutputFormat::Text, &mut buf).unwrap_err();
        assert!(err.to_string().contains("epidural"));
        assert!(err.downcast_ref::<CatalogError>().is_some());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_show_entry_json_round_trips() {
        let index = sample_index();
        let json = render(|out| show_entry(&index, "propofol", OutputFormat::Json, out));
        let entry: AnesthesiaEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(&entry, index.get_by_id("propofol").unwrap());
    }

    #[test]
    fn test_list_entries_by_category() {
        let index = sample_index();
        let text = render(|out| {
            list_entries(&index, &[AnesthesiaCategory::Pharmacology], OutputFormat::Text, out)
        });
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("propofol"));
    }

    #[test]
    fn test_search_with_scores() {
        let index = sample_index();
        let options = FilterOptions::new().with_query("SPINAL");
        let text = render(|out| search_entries(&index, &options, true, OutputFormat::Text, out));
        // name 10 + id 8
        assert!(text.trim_start().starts_with("18  spinal-anesthesia"));
    }

    #[test]
    fn test_search_scores_json() {
        let index = sample_index();
        let options = FilterOptions::new().with_query("propofol");
        let json = render(|out| search_entries(&index, &options, true, OutputFormat::Json, out));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["score"], 22);
        assert_eq!(value[0]["entry"]["id"], "propofol");
    }

    #[test]
    fn test_search_respects_categories_and_limit() {
        let index = sample_index();
        let options = FilterOptions::new()
            .with_query("o")
            .with_category(AnesthesiaCategory::Pharmacology);
        let text = render(|out| search_entries(&index, &options, true, OutputFormat::Text, out));
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("propofol"));

        let limited = FilterOptions::new().with_query("o").with_limit(1);
        let text = render(|out| search_entries(&index, &limited, false, OutputFormat::Text, out));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_counts_json_uses_wire_names() {
        let index = sample_index();
        let json = render(|out| show_counts(&index, OutputFormat::Json, out));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["pharmacology"], 1);
        assert_eq!(value["regional-anesthesia"], 1);
        assert!(value.get("sedation").is_none());
    }

    #[test]
    fn test_counts_text_has_total() {
        let index = sample_index();
        let text = render(|out| show_counts(&index, OutputFormat::Text, out));
        assert!(text.lines().last().unwrap().starts_with("total"));
        assert!(text.lines().last().unwrap().ends_with('2'));
    }

    #[test]
    fn test_list_categories_text() {
        let index = sample_index();
        let text = render(|out| list_categories(&index, OutputFormat::Text, out));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("regional-anesthesia"));
        assert!(lines[1].ends_with("Pharmacology"));
    }

    #[test]
    fn test_execute_applies_default_limit() {
        let index = sample_index();
        let settings = Settings {
            default_limit: Some(1),
            ..Settings::default()
        };
        let command = Commands::Search {
            query: "o".to_string(),
            categories: Vec::new(),
            limit: None,
            scores: false,
        };
        let text = render(|out| execute(&index, &command, &settings, out));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_execute_rejects_validate() {
        let index = sample_index();
        let mut buf = Vec::new();
        let command = Commands::Validate { path: None };
        assert!(execute(&index, &command, &Settings::default(), &mut buf).is_err());
    }
}
