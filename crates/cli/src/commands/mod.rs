//! CLI commands

pub mod definitions;
pub mod score;

use crate::config::Config;
use crate::output::OutputFormat;
use dataquality_common::AppConfig;

/// Context passed to all commands
pub struct CommandContext {
    /// CLI preferences
    pub config: Config,
    /// Ingestion, scoring and telemetry settings
    pub app_config: AppConfig,
}

impl CommandContext {
    pub fn new(config: Config, app_config: AppConfig) -> Self {
        Self { config, app_config }
    }

    pub fn output_format(&self) -> OutputFormat {
        self.config.output_format
    }
}
