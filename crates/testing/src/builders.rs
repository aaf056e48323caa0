//! Fluent builder pattern for constructing test datasets.

use dataquality_domain::{CellValue, Column, Dataset};

/// Builder for creating Dataset test instances
#[derive(Clone, Default)]
pub struct DatasetBuilder {
    columns: Vec<Column>,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column from anything convertible into cells.
    pub fn with_column<V: Into<CellValue>>(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        self.columns.push(Column::new(
            name,
            values.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Add a column of integers.
    pub fn with_ints(self, name: impl Into<String>, values: &[i64]) -> Self {
        self.with_column(name, values.iter().copied())
    }

    /// Add a column where `None` is a missing cell.
    pub fn with_optional_ints(self, name: impl Into<String>, values: &[Option<i64>]) -> Self {
        self.with_column(name, values.iter().copied())
    }

    /// Add a column holding the same value in every row.
    pub fn with_constant(self, name: impl Into<String>, value: CellValue, rows: usize) -> Self {
        self.with_column(name, std::iter::repeat(value).take(rows))
    }

    /// Add a column of missing cells.
    pub fn with_nulls(self, name: impl Into<String>, rows: usize) -> Self {
        self.with_constant(name, CellValue::Null, rows)
    }

    /// Build the dataset.
    ///
    /// # Panics
    ///
    /// Panics when columns have different lengths.
    pub fn build(self) -> Dataset {
        Dataset::new(self.columns).expect("builder columns must have equal length")
    }
}
