//! Data Quality Score Domain Types
//!
//! This crate provides the core domain model for scoring tabular datasets.
//!
//! ## Architecture
//!
//! - **dataset**: `Dataset`, `Column` and `CellValue`, with the missing-value
//!   and distinct-value policies every metric shares
//! - **metric**: metric names, weights and fixed definitions
//! - **report**: `ScoreReport` and the usability breakdown
//! - **errors**: dataset and scoring error types
//!
//! ## Usage
//!
//! ```rust
//! use dataquality_domain::{CellValue, Column, Dataset, MetricName};
//!
//! let dataset = Dataset::new(vec![
//!     Column::new("id", vec![CellValue::Int(1), CellValue::Int(2)]),
//!     Column::new("name", vec![CellValue::from("a"), CellValue::Null]),
//! ])
//! .unwrap();
//!
//! assert_eq!(dataset.total_cells(), 4);
//! assert_eq!(dataset.missing_cells(), 1);
//! assert_eq!(MetricName::Usability.weight(), Some(0.38));
//! ```

#![warn(clippy::all)]

pub mod dataset;
pub mod errors;
pub mod metric;
pub mod report;

pub use dataset::{CellValue, Column, Dataset, DistinctKey};
pub use errors::{DatasetError, ScoringError};
pub use metric::MetricName;
pub use report::{ScoreReport, UsabilityBreakdown};
