//! Configuration loading for the anesthesia reference CLI.
//!
//! Layered config: defaults -> config file -> env vars -> CLI flags.
//! The default config file lives at ~/.config/anesthesia-reference/config.toml.
//!
//! The index itself takes no configuration; these settings only steer which
//! dataset the front end loads and how it prints results.

use config::{Config, Environment, File};
use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::CatalogError;

/// How command output is rendered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CatalogError::InvalidInput(format!(
                "unknown output format: {}",
                other
            ))),
        }
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// External JSON dataset to load instead of the embedded one
    #[serde(default)]
    pub dataset_path: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub output_format: OutputFormat,

    /// Cap on search results when the command line gives none
    #[serde(default)]
    pub default_limit: Option<usize>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dataset_path: None,
            log_level: default_log_level(),
            output_format: OutputFormat::default(),
            default_limit: None,
        }
    }
}

impl Settings {
    /// Load settings with layered precedence:
    /// 1. Built-in defaults
    /// 2. Config file (~/.config/anesthesia-reference/config.toml)
    /// 3. CLI-specified config file (optional)
    /// 4. Environment variables (ANESTHESIA_*)
    ///
    /// CLI flags should be applied by the caller after this returns.
    pub fn load(cli_config_path: Option<&str>) -> Result<Self, CatalogError> {
        let config_dir = ProjectDirs::from("", "", "anesthesia-reference")
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        let default_config_path = config_dir.join("config");

        let mut builder = Config::builder()
            .set_default("log_level", default_log_level())
            .map_err(|e| CatalogError::Config(e.to_string()))?
            .set_default("output_format", OutputFormat::default().as_str())
            .map_err(|e| CatalogError::Config(e.to_string()))?
            .add_source(File::with_name(&default_config_path.to_string_lossy()).required(false));

        if let Some(path) = cli_config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // ANESTHESIA_LOG_LEVEL, ANESTHESIA_DATASET_PATH, ANESTHESIA_DEFAULT_LIMIT, ...
        builder = builder.add_source(
            Environment::with_prefix("ANESTHESIA")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| CatalogError::Config(e.to_string()))?;

        let settings: Settings = config
            .try_deserialize()
            .map_err(|e| CatalogError::Config(e.to_string()))?;

        settings.validate().map_err(CatalogError::Config)?;
        Ok(settings)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.default_limit == Some(0) {
            return Err("default_limit must be > 0".to_string());
        }
        if let Some(path) = &self.dataset_path {
            if path.trim().is_empty() {
                return Err("dataset_path must not be blank".to_string());
            }
        }
        Ok(())
    }

    /// Dataset path with a leading `~/` expanded to the home directory.
    pub fn expanded_dataset_path(&self) -> Option<PathBuf> {
        self.dataset_path.as_deref().map(|path| {
            if let Some(rest) = path.strip_prefix("~/") {
                if let Some(dirs) = BaseDirs::new() {
                    return dirs.home_dir().join(rest);
                }
            }
            PathBuf::from(path)
        })
    }
}
