//! Configuration management for the application.
//!
//! Settings are layered with the `config` crate: built-in defaults, then
//! `config/default.toml`, then an explicit file, then environment variables.
//!
//! ## Example Configuration
//!
//! ```toml
//! [telemetry]
//! log_level = "info"
//! json_logging = false
//!
//! [ingestion]
//! delimiter = ";"
//! na_values = ["-", "missing"]
//! keep_default_na = true
//! sheet = "Data"
//!
//! [scoring]
//! detailed_breakdown = true
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix, e.g. `DATAQUALITY__INGESTION__DELIMITER=;`
pub const ENV_PREFIX: &str = "DATAQUALITY";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub ingestion: IngestionConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging format
    #[serde(default)]
    pub json_logging: bool,
}

/// File ingestion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestionConfig {
    /// CSV field delimiter
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Extra strings read as missing values
    #[serde(default)]
    pub na_values: Vec<String>,

    /// Whether the built-in missing-value sentinels apply
    #[serde(default = "default_true")]
    pub keep_default_na: bool,

    /// Worksheet to read; the first sheet when unset
    #[serde(default)]
    pub sheet: Option<String>,

    /// Largest file accepted, in bytes
    #[serde(default = "default_max_file_size")]
    pub max_file_size_bytes: u64,
}

/// Scoring configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Log the usability breakdown for every scoring call
    #[serde(default)]
    pub detailed_breakdown: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_delimiter() -> char {
    ','
}

fn default_true() -> bool {
    true
}

fn default_max_file_size() -> u64 {
    100 * 1024 * 1024
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logging: false,
        }
    }
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            na_values: Vec::new(),
            keep_default_na: default_true(),
            sheet: None,
            max_file_size_bytes: default_max_file_size(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment variables.
    ///
    /// Later sources override earlier ones:
    /// 1. Default values
    /// 2. `config/default.toml` (if exists)
    /// 3. `path` (required when given)
    /// 4. Environment variables prefixed with `DATAQUALITY__`
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder().add_source(
            config::File::with_name("config/default").required(false),
        );

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("ingestion.na_values")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?;

        let app_config: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.telemetry.log_level.as_str()) {
            anyhow::bail!(
                "Invalid log level '{}'. Must be one of: {}",
                self.telemetry.log_level,
                valid_log_levels.join(", ")
            );
        }

        if !self.ingestion.delimiter.is_ascii() {
            anyhow::bail!(
                "CSV delimiter must be a single ASCII character, got '{}'",
                self.ingestion.delimiter
            );
        }

        if self.ingestion.max_file_size_bytes == 0 {
            anyhow::bail!("Maximum file size must be greater than 0");
        }

        Ok(())
    }
}
