//! Application layer for the data quality scorer
//!
//! This crate turns a [`Dataset`](dataquality_domain::Dataset) into a
//! [`ScoreReport`](dataquality_domain::ScoreReport).
//!
//! ## Modules
//!
//! - `scoring` - metric evaluators, weighted aggregation and the scorer builder
//!
//! ```
//! use dataquality_application::Scorer;
//! use dataquality_domain::{CellValue, Column, Dataset};
//!
//! let dataset = Dataset::new(vec![
//!     Column::new("A", vec![CellValue::Int(1), CellValue::Int(1)]),
//!     Column::new("B ", vec![CellValue::Int(2), CellValue::Null]),
//! ])
//! .unwrap();
//!
//! let report = Scorer::default().score(&dataset).unwrap();
//! assert_eq!(report.completeness, 75.0);
//! ```

pub mod scoring;

pub use scoring::{
    FeatureValidator, MetricEvaluator, PlaceholderFeatureValidator, Scorer, ScorerBuilder,
    UsabilityEvaluator,
};
