//! Test fixtures and proptest strategies for datasets.

use crate::builders::DatasetBuilder;
use dataquality_domain::{CellValue, Column, Dataset};
use proptest::prelude::*;

/// Columns `A = [1, 2]` and `B  = [1, null]`.
///
/// `B ` is constant because the missing cell is not a distinct value.
/// Scores to usability 66.67, completeness 75 and overall 0.7323.
pub fn create_example_dataset() -> Dataset {
    DatasetBuilder::new()
        .with_ints("A", &[1, 2])
        .with_optional_ints("B ", &[Some(1), None])
        .build()
}

/// A dataset without missing cells or constant columns.
pub fn create_complete_dataset() -> Dataset {
    DatasetBuilder::new()
        .with_ints("id", &[1, 2, 3, 4])
        .with_column("city", ["Dublin", "Cork", "Galway", "Limerick"])
        .with_column("area_km2", [117.8, 187.0, 54.0, 79.0])
        .build()
}

/// A dataset whose column names are all blank.
pub fn create_unnamed_dataset() -> Dataset {
    DatasetBuilder::new()
        .with_ints("", &[1, 2])
        .with_ints("   ", &[3, 4])
        .build()
}

/// Columns but no rows.
pub fn create_header_only_dataset() -> Dataset {
    DatasetBuilder::new()
        .with_ints("a", &[])
        .with_ints("b", &[])
        .build()
}

/// Any non-missing cell.
pub fn present_cell() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        any::<i64>().prop_map(CellValue::Int),
        (-1.0e9..1.0e9f64).prop_map(CellValue::Float),
        any::<bool>().prop_map(CellValue::Bool),
        "[A-Za-z0-9]{1,8}".prop_map(CellValue::Text),
    ]
}

/// Any cell, missing about a quarter of the time.
pub fn any_cell() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        3 => present_cell(),
        1 => Just(CellValue::Null),
    ]
}

/// Datasets with 1..`max_columns` columns and 1..`max_rows` rows.
pub fn arb_dataset(max_columns: usize, max_rows: usize) -> impl Strategy<Value = Dataset> {
    (1..=max_columns, 1..=max_rows).prop_flat_map(|(columns, rows)| {
        proptest::collection::vec(
            ("[ a-z]{0,6}", proptest::collection::vec(any_cell(), rows)),
            columns,
        )
        .prop_map(|cols| {
            let columns = cols
                .into_iter()
                .map(|(name, values)| Column::new(name, values))
                .collect();
            Dataset::new(columns).expect("generated columns share one length")
        })
    })
}
