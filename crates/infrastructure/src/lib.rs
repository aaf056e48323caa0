//! Infrastructure layer for the data quality scorer.
//!
//! This crate turns uploaded files into domain datasets:
//!
//! - **ingestion**: CSV and spreadsheet readers behind [`DatasetLoader`]

pub mod ingestion;

pub use ingestion::{
    dedupe_headers, DatasetLoader, IngestionError, IngestionFormat, IngestionResult,
    DEFAULT_NA_VALUES,
};
