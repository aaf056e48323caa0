//! Data quality scorer CLI library
//!
//! Configuration management, output formatting and the command
//! implementations behind the `dq-score` binary.

pub mod commands;
pub mod config;
pub mod output;

pub use config::Config;
pub use output::{JsonFormatter, OutputFormat, PlainFormatter, TableFormatter};

/// Re-export common types
pub use anyhow::{Context, Result};
