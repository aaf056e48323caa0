//! File ingestion into a [`Dataset`].
//!
//! CSV files go through the `csv` crate, spreadsheets through `calamine`.
//! Both readers share the header clean-up and the missing-value rules.
//!
//! ## Design Principles
//! - Format is detected from the file extension
//! - The first row is always the header
//! - Short rows are padded with nulls; long rows are rejected
//! - Duplicate header names get `.1`, `.2`, ... suffixes

mod csv_reader;
mod excel;

use dataquality_common::IngestionConfig;
use dataquality_domain::{DatasetError, Dataset};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, instrument};

pub use csv_reader::DEFAULT_NA_VALUES;

/// Errors from file ingestion
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IngestionError {
    /// File does not exist
    #[error("File not found: {0}")]
    NotFound(String),

    /// IO error for file operations
    #[error("IO error: {0}")]
    Io(String),

    /// Extension is not a supported tabular format
    #[error("Unsupported file format: {0} (expected .csv, .xls or .xlsx)")]
    UnsupportedFormat(String),

    /// File exceeds the configured size limit
    #[error("File size {size} exceeds maximum allowed size {max}")]
    FileTooLarge { size: u64, max: u64 },

    /// Malformed CSV content
    #[error("Parse error: {0}")]
    Parse(String),

    /// Spreadsheet could not be read
    #[error("Excel error: {0}")]
    Excel(String),

    /// Requested worksheet is missing
    #[error("Worksheet not found: {0}")]
    SheetNotFound(String),

    /// Workbook has no worksheets
    #[error("Workbook contains no worksheets")]
    EmptyWorkbook,

    /// Parsed rows do not form a valid dataset
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Result type for ingestion
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestionFormat {
    /// CSV with a header row
    Csv,
    /// Any spreadsheet calamine reads (xls, xlsx, xlsm, xlsb, ods)
    Excel,
}

impl IngestionFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "csv" => Some(IngestionFormat::Csv),
                "xls" | "xlsx" | "xlsm" | "xlsb" | "ods" => Some(IngestionFormat::Excel),
                _ => None,
            })
    }
}

/// Loads CSV and spreadsheet files into datasets.
pub struct DatasetLoader {
    config: IngestionConfig,
    na_values: HashSet<String>,
}

impl DatasetLoader {
    pub fn new(config: IngestionConfig) -> Self {
        let mut na_values: HashSet<String> = config.na_values.iter().cloned().collect();
        if config.keep_default_na {
            na_values.extend(DEFAULT_NA_VALUES.iter().map(|s| s.to_string()));
        }
        Self { config, na_values }
    }

    pub fn config(&self) -> &IngestionConfig {
        &self.config
    }

    /// Load a file, detecting its format from the extension.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn load(&self, path: &Path) -> IngestionResult<Dataset> {
        let format = IngestionFormat::from_extension(path)
            .ok_or_else(|| IngestionError::UnsupportedFormat(path.display().to_string()))?;

        self.load_with_format(path, format)
    }

    /// Load a file with an explicit format.
    #[instrument(skip(self), fields(path = %path.display(), format = ?format))]
    pub fn load_with_format(&self, path: &Path, format: IngestionFormat) -> IngestionResult<Dataset> {
        if !path.exists() {
            return Err(IngestionError::NotFound(path.display().to_string()));
        }

        let metadata = std::fs::metadata(path)
            .map_err(|e| IngestionError::Io(format!("Failed to read file metadata: {}", e)))?;

        if metadata.len() > self.config.max_file_size_bytes {
            return Err(IngestionError::FileTooLarge {
                size: metadata.len(),
                max: self.config.max_file_size_bytes,
            });
        }

        let data = std::fs::read(path)
            .map_err(|e| IngestionError::Io(format!("Failed to read file: {}", e)))?;

        let dataset = self.load_bytes(&data, format)?;

        info!(
            columns = dataset.column_count(),
            rows = dataset.row_count(),
            "Loaded dataset"
        );

        Ok(dataset)
    }

    /// Parse in-memory file content.
    #[instrument(skip(self, data), fields(format = ?format, data_len = data.len()))]
    pub fn load_bytes(&self, data: &[u8], format: IngestionFormat) -> IngestionResult<Dataset> {
        let (headers, rows) = match format {
            IngestionFormat::Csv => csv_reader::parse_csv(data, self.config.delimiter, &self.na_values)?,
            IngestionFormat::Excel => excel::parse_workbook(data, self.config.sheet.as_deref())?,
        };

        debug!(columns = headers.len(), rows = rows.len(), "Parsed tabular content");

        Ok(Dataset::from_rows(dedupe_headers(headers), rows)?)
    }
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new(IngestionConfig::default())
    }
}

/// Make non-blank header names unique by suffixing `.1`, `.2`, ...
///
/// Blank names are left untouched rather than renamed to `Unnamed: N` the
/// way pandas does, so the meaningful-name proportion still sees them.
pub fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut result = Vec::with_capacity(headers.len());

    for name in headers {
        if name.trim().is_empty() {
            result.push(name);
            continue;
        }

        let mut candidate = name.clone();
        let mut suffix = 1;
        while seen.contains(&candidate) {
            candidate = format!("{}.{}", name, suffix);
            suffix += 1;
        }
        seen.insert(candidate.clone());
        result.push(candidate);
    }

    result
}
