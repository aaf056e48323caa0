//! CLI preferences
//!
//! Handles loading and saving preferences from ~/.dataquality/config.toml.
//! Ingestion and scoring settings live in the application configuration
//! (`dataquality_common::AppConfig`), not here.

use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Enable colored output
    #[serde(default = "default_colored")]
    pub colored: bool,

    /// Rows shown in the dataset preview
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,

    /// Enable debug logging
    #[serde(default)]
    pub debug: bool,
}

fn default_colored() -> bool {
    true
}

fn default_preview_rows() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            colored: default_colored(),
            preview_rows: default_preview_rows(),
            debug: false,
        }
    }
}

impl Config {
    /// Keys accepted by `get` and `set`
    pub const KEYS: [&'static str; 4] = ["output_format", "colored", "preview_rows", "debug"];

    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".dataquality"))
    }

    /// Get the config file path
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from_file()?;

        if let Ok(format) = std::env::var("DATAQUALITY_OUTPUT_FORMAT") {
            config.output_format = format
                .parse()
                .with_context(|| format!("Invalid DATAQUALITY_OUTPUT_FORMAT: {}", format))?;
        }
        if std::env::var("DATAQUALITY_DEBUG").is_ok() {
            config.debug = true;
        }
        if std::env::var("NO_COLOR").is_ok() {
            config.colored = false;
        }

        Ok(config)
    }

    /// Load configuration from file only
    fn load_from_file() -> Result<Self> {
        let config_file = Self::config_file()?;

        if !config_file.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_file).context("Failed to read config file")?;
        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
        }

        let config_file = Self::config_file()?;
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&config_file, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get a configuration value by key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "output_format" | "output-format" | "format" => Some(self.output_format.to_string()),
            "colored" | "color" => Some(self.colored.to_string()),
            "preview_rows" | "preview-rows" | "preview" => Some(self.preview_rows.to_string()),
            "debug" => Some(self.debug.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key, without saving
    pub fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "output_format" | "output-format" | "format" => {
                self.output_format = value.parse()?;
            }
            "colored" | "color" => {
                self.colored = value.parse().context("Invalid boolean value")?;
            }
            "preview_rows" | "preview-rows" | "preview" => {
                self.preview_rows = value.parse().context("Invalid row count")?;
            }
            "debug" => {
                self.debug = value.parse().context("Invalid boolean value")?;
            }
            _ => anyhow::bail!(
                "Unknown configuration key: {}. Known keys: {}",
                key,
                Self::KEYS.join(", ")
            ),
        }
        Ok(())
    }

    /// Set a configuration value by key and save
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.apply(key, value)?;
        self.save()
    }

    /// Reset configuration to defaults
    pub fn reset(&mut self) -> Result<()> {
        *self = Self::default();
        self.save()
    }
}
