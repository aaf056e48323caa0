//! Common utilities shared by the data quality crates.
//!
//! - Configuration management
//! - Telemetry (structured logging)

pub mod config;
pub mod telemetry;

pub use config::{AppConfig, IngestionConfig, ScoringConfig, TelemetryConfig};
pub use telemetry::{init_from_config, init_tracing};
