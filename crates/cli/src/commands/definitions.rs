//! Feature definitions

use anyhow::Result;
use colored::Colorize;
use dataquality_domain::MetricName;
use serde::Serialize;

use crate::commands::CommandContext;
use crate::output::{colors, JsonFormatter, OutputFormat};

#[derive(Debug, Serialize)]
pub struct Definition {
    pub metric: MetricName,
    pub definition: &'static str,
}

/// The five sub-metric definitions in report order.
pub fn all() -> Vec<Definition> {
    MetricName::SUB_METRICS
        .iter()
        .filter_map(|metric| {
            metric.definition().map(|definition| Definition {
                metric: *metric,
                definition,
            })
        })
        .collect()
}

/// Render the definitions as terminal text.
pub fn render() -> String {
    let mut out = format!("{}\n", colors::bold("Feature Definitions:"));
    for def in all() {
        out.push_str(&format!("- {}: {}\n", def.metric.as_str().bold(), def.definition));
    }
    out
}

/// Print the feature definitions
pub fn show(ctx: &CommandContext) -> Result<()> {
    match ctx.output_format() {
        OutputFormat::Json => println!("{}", JsonFormatter::format(&all())?),
        OutputFormat::Table | OutputFormat::Plain => print!("{}", render()),
    }
    Ok(())
}
