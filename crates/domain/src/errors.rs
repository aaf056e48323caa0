//! Error types for the data quality domain.
//!
//! Dataset construction and scoring each have their own error enum. Both
//! carry stable error codes so callers can react programmatically.

use crate::metric::MetricName;

/// Errors raised while building a [`Dataset`](crate::dataset::Dataset).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    /// Columns must all have the same number of cells
    #[error("Column '{column}' has {actual} rows, expected {expected}")]
    RaggedColumns {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// A row-major record had the wrong number of cells
    #[error("Row {row} has {actual} fields, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

impl DatasetError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::RaggedColumns { .. } => "RAGGED_COLUMNS",
            Self::RowWidth { .. } => "ROW_WIDTH",
        }
    }
}

/// Errors raised while scoring a dataset.
///
/// `NoColumns` and `EmptyDataset` are the division-by-zero cases: proportions
/// over columns and completeness over cells are undefined for them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    /// The dataset has no columns
    #[error("Division by zero: dataset has no columns")]
    NoColumns,

    /// The dataset has no cells
    #[error("Division by zero: dataset has no cells ({rows} rows x {columns} columns)")]
    EmptyDataset { rows: usize, columns: usize },

    /// A metric evaluator failed
    #[error("Evaluator for {metric} failed: {message}")]
    Evaluator { metric: MetricName, message: String },
}

impl ScoringError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NoColumns => "NO_COLUMNS",
            Self::EmptyDataset { .. } => "EMPTY_DATASET",
            Self::Evaluator { .. } => "EVALUATOR_FAILED",
        }
    }

    /// Whether this error comes from dividing by an empty dimension.
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::NoColumns | Self::EmptyDataset { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ScoringError::NoColumns.error_code(), "NO_COLUMNS");
        assert_eq!(
            ScoringError::EmptyDataset { rows: 0, columns: 2 }.error_code(),
            "EMPTY_DATASET"
        );
        assert_eq!(
            DatasetError::RowWidth { row: 1, expected: 2, actual: 3 }.error_code(),
            "ROW_WIDTH"
        );
    }

    #[test]
    fn test_division_by_zero_classification() {
        assert!(ScoringError::NoColumns.is_division_by_zero());
        assert!(ScoringError::EmptyDataset { rows: 0, columns: 1 }.is_division_by_zero());
        assert!(!ScoringError::Evaluator {
            metric: MetricName::Freshness,
            message: "boom".to_string(),
        }
        .is_division_by_zero());
    }

    #[test]
    fn test_error_messages() {
        let err = DatasetError::RaggedColumns {
            column: "b".to_string(),
            expected: 3,
            actual: 2,
        };
        assert_eq!(err.to_string(), "Column 'b' has 2 rows, expected 3");
        assert_eq!(
            ScoringError::Evaluator {
                metric: MetricName::Usability,
                message: "bad".to_string(),
            }
            .to_string(),
            "Evaluator for Usability failed: bad"
        );
    }
}
