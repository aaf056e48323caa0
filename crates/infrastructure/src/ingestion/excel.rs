//! Spreadsheet parsing through calamine.

use super::{IngestionError, IngestionResult};
use calamine::{open_workbook_auto_from_rs, Data, DataType, Reader};
use dataquality_domain::CellValue;
use std::io::Cursor;
use tracing::debug;

/// Read one worksheet into a header and rows.
///
/// Uses the named sheet when given, otherwise the first sheet.
pub(super) fn parse_workbook(
    data: &[u8],
    sheet: Option<&str>,
) -> IngestionResult<(Vec<String>, Vec<Vec<CellValue>>)> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(data.to_vec()))
        .map_err(|e| IngestionError::Excel(format!("Failed to open workbook: {}", e)))?;

    let sheet_names = workbook.sheet_names();
    let sheet_name = match sheet {
        Some(name) => sheet_names
            .iter()
            .find(|s| s.as_str() == name)
            .cloned()
            .ok_or_else(|| IngestionError::SheetNotFound(name.to_string()))?,
        None => sheet_names
            .first()
            .cloned()
            .ok_or(IngestionError::EmptyWorkbook)?,
    };

    debug!(sheet = %sheet_name, "Reading worksheet");

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| IngestionError::Excel(format!("Failed to read sheet '{}': {}", sheet_name, e)))?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(|c| convert_cell(c).to_string()).collect(),
        None => return Ok((Vec::new(), Vec::new())),
    };

    let records = rows
        .map(|row| row.iter().map(convert_cell).collect())
        .collect();

    Ok((headers, records))
}

/// Map a calamine cell to a domain cell.
///
/// Empty and error cells become `Null`.
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Null,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(n) => CellValue::Int(*n),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::DateTime(_) | Data::DateTimeIso(_) => match cell.as_datetime() {
            Some(dt) => CellValue::DateTime(dt),
            None => CellValue::Text(cell.to_string()),
        },
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}
