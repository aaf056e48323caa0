//! Score command

use anyhow::{Context, Result};
use dataquality_application::ScorerBuilder;
use dataquality_domain::{Dataset, MetricName, ScoreReport, UsabilityBreakdown};
use dataquality_infrastructure::DatasetLoader;
use std::path::PathBuf;
use tracing::debug;

use crate::commands::{definitions, CommandContext};
use crate::output::{colors, format_percentage, JsonFormatter, OutputFormat, TableFormatter};

/// Options for a single scoring run
#[derive(Debug, Clone, Default)]
pub struct ScoreOptions {
    pub file: PathBuf,
    /// Worksheet to read instead of the first one
    pub sheet: Option<String>,
    /// CSV delimiter override
    pub delimiter: Option<char>,
    /// Preview row override
    pub preview: Option<usize>,
    /// Also report the usability breakdown
    pub detailed: bool,
    pub no_definitions: bool,
}

/// Load a file and score it.
///
/// Returns the dataset together with its report so callers can render both.
pub fn evaluate(
    ctx: &CommandContext,
    options: &ScoreOptions,
) -> Result<(Dataset, ScoreReport, Option<UsabilityBreakdown>)> {
    let mut ingestion = ctx.app_config.ingestion.clone();
    if let Some(sheet) = &options.sheet {
        ingestion.sheet = Some(sheet.clone());
    }
    if let Some(delimiter) = options.delimiter {
        ingestion.delimiter = delimiter;
    }

    let dataset = DatasetLoader::new(ingestion)
        .load(&options.file)
        .with_context(|| format!("Failed to load {}", options.file.display()))?;

    let scorer = ScorerBuilder::new()
        .config(ctx.app_config.scoring.clone())
        .build();

    let report = scorer.score(&dataset).context("Failed to score dataset")?;
    let breakdown = if options.detailed {
        Some(scorer.usability_breakdown(&dataset)?)
    } else {
        None
    };

    debug!(overall = report.overall_score, "Scored {}", options.file.display());

    Ok((dataset, report, breakdown))
}

/// Score a file and print the result
pub fn run(ctx: &CommandContext, options: ScoreOptions) -> Result<()> {
    let (dataset, report, breakdown) = evaluate(ctx, &options)?;
    let preview_rows = options.preview.unwrap_or(ctx.config.preview_rows);

    match ctx.output_format() {
        OutputFormat::Json => println!("{}", JsonFormatter::format(&report)?),
        OutputFormat::Table => {
            print_preview(&dataset, preview_rows);

            println!("{}", colors::bold("Data Quality Scores:"));
            println!("{}", TableFormatter::scores(&report));

            if let Some(breakdown) = breakdown {
                println!();
                println!("{}", colors::bold("Usability Breakdown:"));
                println!("{}", TableFormatter::usability_breakdown(&breakdown));
            }

            if !options.no_definitions {
                println!();
                print!("{}", definitions::render());
            }
        }
        OutputFormat::Plain => {
            print!("{}", render_plain(&report, breakdown.as_ref()));
            if !options.no_definitions {
                println!();
                print!("{}", definitions::render());
            }
        }
    }

    Ok(())
}

fn print_preview(dataset: &Dataset, rows: usize) {
    if rows == 0 {
        return;
    }

    println!("{}", colors::bold("Uploaded Dataset:"));
    if dataset.row_count() == 0 {
        println!("{}", colors::warning("(no rows)"));
    } else {
        println!("{}", TableFormatter::dataset_preview(dataset, rows));
        if dataset.row_count() > rows {
            let hidden = dataset.row_count() - rows;
            println!("{}", colors::dim(&format!("... {} more rows", hidden)));
        }
    }
    println!();
}

/// One `Metric: value%` line per metric.
pub fn render_plain(report: &ScoreReport, breakdown: Option<&UsabilityBreakdown>) -> String {
    let mut out = String::from("Data Quality Scores:\n");
    for metric in MetricName::ALL {
        out.push_str(&format!(
            "{}: {}\n",
            metric,
            format_percentage(report.display_value(metric))
        ));
    }

    if let Some(b) = breakdown {
        out.push_str("\nUsability Breakdown:\n");
        for (label, value) in [
            ("Meaningful names", b.meaningful_names),
            ("Constant columns", b.constant_columns),
            ("Valid features", b.valid_features),
        ] {
            out.push_str(&format!("{}: {}\n", label, format_percentage(value * 100.0)));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain() {
        let report = ScoreReport {
            usability: 200.0 / 3.0,
            metadata: 70.0,
            freshness: 80.0,
            completeness: 75.0,
            accessibility: 100.0,
            overall_score: 0.7323333333333333,
        };

        let text = render_plain(&report, None);

        assert_eq!(
            text,
            "Data Quality Scores:\n\
             Usability: 66.67%\n\
             Metadata: 70.00%\n\
             Freshness: 80.00%\n\
             Completeness: 75.00%\n\
             Accessibility: 100.00%\n\
             Overall Score: 73.23%\n"
        );
    }

    #[test]
    fn test_render_plain_with_breakdown() {
        let report = ScoreReport {
            usability: 50.0,
            metadata: 70.0,
            freshness: 80.0,
            completeness: 100.0,
            accessibility: 100.0,
            overall_score: 0.723,
        };
        let breakdown = UsabilityBreakdown {
            meaningful_names: 1.0,
            constant_columns: 0.0,
            valid_features: 0.5,
        };

        let text = render_plain(&report, Some(&breakdown));

        assert!(text.contains("Usability Breakdown:\nMeaningful names: 100.00%\n"));
        assert!(text.ends_with("Valid features: 50.00%\n"));
    }
}
