//! Table formatting utilities

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, *};
use dataquality_domain::{Dataset, MetricName, ScoreReport, UsabilityBreakdown};

/// Table formatter
pub struct TableFormatter;

impl TableFormatter {
    /// Create a new table with default styling
    pub fn new() -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table
    }

    /// Create a simple table with headers and rows
    pub fn simple(headers: Vec<&str>, rows: Vec<Vec<String>>) -> String {
        let mut table = Self::new();
        table.set_header(headers);

        for row in rows {
            table.add_row(row);
        }

        table.to_string()
    }

    /// Create a key-value table
    pub fn key_value(items: Vec<(&str, String)>) -> String {
        let mut table = Self::new();

        for (key, value) in items {
            table.add_row(vec![Cell::new(key).add_attribute(Attribute::Bold), Cell::new(value)]);
        }

        table.to_string()
    }

    /// First `limit` rows of a dataset under its column names.
    ///
    /// Missing cells render empty.
    pub fn dataset_preview(dataset: &Dataset, limit: usize) -> String {
        let rows = dataset
            .rows()
            .take(limit)
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();

        Self::simple(dataset.column_names(), rows)
    }

    /// Metric scores as percentages with two decimals.
    pub fn scores(report: &ScoreReport) -> String {
        let mut table = Self::new();
        table.set_header(vec!["Metric", "Score"]);

        for metric in MetricName::ALL {
            table.add_row(vec![
                Cell::new(metric.as_str()),
                Cell::new(format_percentage(report.display_value(metric)))
                    .set_alignment(CellAlignment::Right),
            ]);
        }

        table.to_string()
    }

    /// The usability proportions as percentages.
    pub fn usability_breakdown(breakdown: &UsabilityBreakdown) -> String {
        Self::key_value(vec![
            ("Meaningful names", format_percentage(breakdown.meaningful_names * 100.0)),
            ("Constant columns", format_percentage(breakdown.constant_columns * 100.0)),
            ("Valid features", format_percentage(breakdown.valid_features * 100.0)),
        ])
    }
}

/// Render a percentage value the way every score is displayed.
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value)
}
