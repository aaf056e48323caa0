//! Logging setup.
//!
//! Installs a `tracing-subscriber` registry with an environment filter and
//! either a pretty or a JSON formatting layer.

use anyhow::{Context, Result};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

use crate::config::TelemetryConfig;

/// Initialize tracing.
///
/// `RUST_LOG` takes precedence over `log_level` when set. Logs go to stderr
/// so they never interleave with report output.
///
/// # Examples
///
/// ```no_run
/// use dataquality_common::telemetry::init_tracing;
///
/// init_tracing("info", false).expect("Failed to initialize tracing");
/// ```
pub fn init_tracing(log_level: &str, json_format: bool) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level)
            .with_context(|| format!("Invalid log filter '{}'", log_level))?,
    };

    let base = fmt::layer().with_writer(std::io::stderr).with_target(true);
    let fmt_layer: Box<dyn Layer<Registry> + Send + Sync> = if json_format {
        base.json().with_current_span(true).with_span_list(false).boxed()
    } else {
        base.compact().with_span_events(FmtSpan::CLOSE).boxed()
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()
        .context("Failed to initialize tracing subscriber")
}

/// Initialize tracing from the telemetry section of the configuration.
pub fn init_from_config(config: &TelemetryConfig) -> Result<()> {
    init_tracing(&config.log_level, config.json_logging)
}
