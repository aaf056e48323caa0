//! Tabular dataset types.
//!
//! A [`Dataset`] is an ordered list of named [`Column`]s of equal length.
//! Cell typing and the missing-value policy live here so that every metric
//! agrees on what "empty" and "distinct" mean.

use crate::errors::DatasetError;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Missing value
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Whether this cell counts as empty.
    ///
    /// A cell is missing when it is `Null`, a NaN float, or text that is
    /// blank after trimming.
    pub fn is_missing(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Float(f) => f.is_nan(),
            Self::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Key used when counting distinct values in a column.
    ///
    /// Missing cells have no key and are left out of distinct counts.
    /// Integral floats share a key with the equal integer.
    pub fn distinct_key(&self) -> Option<DistinctKey> {
        let key = match self {
            _ if self.is_missing() => return None,
            Self::Null => return None,
            Self::Bool(b) => DistinctKey::Bool(*b),
            Self::Int(n) => DistinctKey::Integer(*n),
            Self::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 {
                    DistinctKey::Integer(*f as i64)
                } else {
                    DistinctKey::Float(f.to_bits())
                }
            }
            Self::Text(s) => DistinctKey::Text(s.clone()),
            Self::DateTime(dt) => DistinctKey::DateTime(*dt),
        };
        Some(key)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, ""),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(v) if v.is_nan() => write!(f, "NaN"),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(s) => write!(f, "{}", s),
            Self::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}

/// Hashable identity of a cell value for distinct counting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DistinctKey {
    Bool(bool),
    Integer(i64),
    Float(u64),
    Text(String),
    DateTime(NaiveDateTime),
}

/// A named column of cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    name: String,
    values: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[CellValue] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether the name is non-empty after trimming surrounding whitespace.
    pub fn has_meaningful_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Number of missing cells in this column.
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_missing()).count()
    }

    /// Number of distinct non-missing values.
    pub fn distinct_count(&self) -> usize {
        self.values
            .iter()
            .filter_map(CellValue::distinct_key)
            .collect::<HashSet<_>>()
            .len()
    }

    /// A column is constant when exactly one distinct non-missing value is
    /// observed. An all-missing column is not constant.
    pub fn is_constant(&self) -> bool {
        self.distinct_count() == 1
    }
}

/// An immutable table of equal-length columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    columns: Vec<Column>,
    row_count: usize,
}

impl Dataset {
    /// Build a dataset from columns, rejecting columns of unequal length.
    pub fn new(columns: Vec<Column>) -> Result<Self, DatasetError> {
        let row_count = columns.first().map(Column::len).unwrap_or(0);
        if let Some(ragged) = columns.iter().find(|c| c.len() != row_count) {
            return Err(DatasetError::RaggedColumns {
                column: ragged.name().to_string(),
                expected: row_count,
                actual: ragged.len(),
            });
        }
        Ok(Self { columns, row_count })
    }

    /// Build a dataset from a header and row-major records.
    ///
    /// Every record must have exactly as many cells as there are names.
    pub fn from_rows(names: Vec<String>, rows: Vec<Vec<CellValue>>) -> Result<Self, DatasetError> {
        let width = names.len();
        let mut columns: Vec<Vec<CellValue>> = (0..width)
            .map(|_| Vec::with_capacity(rows.len()))
            .collect();

        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(DatasetError::RowWidth {
                    row: index + 1,
                    expected: width,
                    actual: row.len(),
                });
            }
            for (column, value) in columns.iter_mut().zip(row) {
                column.push(value);
            }
        }

        Self::new(
            names
                .into_iter()
                .zip(columns)
                .map(|(name, values)| Column::new(name, values))
                .collect(),
        )
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// First column with the given name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Rows multiplied by columns.
    pub fn total_cells(&self) -> usize {
        self.row_count * self.columns.len()
    }

    /// Missing cells across the whole dataset.
    pub fn missing_cells(&self) -> usize {
        self.columns.iter().map(Column::missing_count).sum()
    }

    /// Cells of one row, in column order.
    pub fn row(&self, index: usize) -> Option<Vec<&CellValue>> {
        if index >= self.row_count {
            return None;
        }
        Some(
            self.columns
                .iter()
                .filter_map(|c| c.values().get(index))
                .collect(),
        )
    }

    /// Iterate rows in order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&CellValue>> + '_ {
        (0..self.row_count).filter_map(move |i| self.row(i))
    }

    pub fn is_empty(&self) -> bool {
        self.total_cells() == 0
    }
}
