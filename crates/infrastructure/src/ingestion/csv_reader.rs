//! CSV parsing and cell typing.

use super::{IngestionError, IngestionResult};
use dataquality_domain::CellValue;
use std::collections::HashSet;

/// Strings read as missing unless `keep_default_na` is off.
pub const DEFAULT_NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Parse CSV bytes into a header and padded rows.
pub(super) fn parse_csv(
    data: &[u8],
    delimiter: char,
    na_values: &HashSet<String>,
) -> IngestionResult<(Vec<String>, Vec<Vec<CellValue>>)> {
    let delimiter = u8::try_from(delimiter).map_err(|_| {
        IngestionError::Parse(format!("Delimiter '{}' is not a single byte", delimiter))
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestionError::Parse(format!("Failed to read CSV header: {}", e)))?
        .iter()
        .map(str::to_string)
        .collect();
    let width = headers.len();

    let mut rows = Vec::new();
    for (row_num, record) in reader.records().enumerate() {
        let record = record.map_err(|e| {
            IngestionError::Parse(format!("Failed to parse CSV row {}: {}", row_num + 1, e))
        })?;

        if record.len() > width {
            return Err(IngestionError::Parse(format!(
                "Expected {} fields in row {}, saw {}",
                width,
                row_num + 1,
                record.len()
            )));
        }

        let mut row: Vec<CellValue> = record.iter().map(|f| parse_field(f, na_values)).collect();
        row.resize(width, CellValue::Null);
        rows.push(row);
    }

    Ok((headers, rows))
}

/// Type a single CSV field.
///
/// Missing sentinels win, then integers, floats and booleans. Anything else
/// is kept verbatim as text.
pub(super) fn parse_field(raw: &str, na_values: &HashSet<String>) -> CellValue {
    if na_values.contains(raw) {
        return CellValue::Null;
    }

    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return CellValue::Int(n);
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        return CellValue::Float(f);
    }
    if trimmed.eq_ignore_ascii_case("true") {
        return CellValue::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return CellValue::Bool(false);
    }

    CellValue::Text(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> HashSet<String> {
        DEFAULT_NA_VALUES.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_field_types() {
        let na = defaults();
        assert_eq!(parse_field("42", &na), CellValue::Int(42));
        assert_eq!(parse_field(" -7 ", &na), CellValue::Int(-7));
        assert_eq!(parse_field("2.5", &na), CellValue::Float(2.5));
        assert_eq!(parse_field("TRUE", &na), CellValue::Bool(true));
        assert_eq!(parse_field("false", &na), CellValue::Bool(false));
        assert_eq!(parse_field("Dublin", &na), CellValue::from("Dublin"));
    }

    #[test]
    fn test_parse_field_missing_sentinels() {
        let na = defaults();
        for sentinel in ["", "NA", "N/A", "null", "NaN", "None", "#N/A"] {
            assert_eq!(parse_field(sentinel, &na), CellValue::Null, "{:?}", sentinel);
        }
        // Sentinels match exactly
        assert_eq!(parse_field("na", &na), CellValue::from("na"));
    }

    #[test]
    fn test_short_rows_padded() {
        let (headers, rows) = parse_csv(b"a,b,c\n1\n1,2,3\n", ',', &defaults()).unwrap();
        assert_eq!(headers, vec!["a", "b", "c"]);
        assert_eq!(rows[0], vec![CellValue::Int(1), CellValue::Null, CellValue::Null]);
        assert_eq!(rows[1].len(), 3);
    }

    #[test]
    fn test_long_row_rejected() {
        let err = parse_csv(b"a,b\n1,2,3\n", ',', &defaults()).unwrap_err();
        assert_eq!(
            err,
            IngestionError::Parse("Expected 2 fields in row 1, saw 3".to_string())
        );
    }

    #[test]
    fn test_custom_delimiter_and_quotes() {
        let (headers, rows) =
            parse_csv(b"name;note\n\"Smith; J\";ok\n", ';', &defaults()).unwrap();
        assert_eq!(headers, vec!["name", "note"]);
        assert_eq!(rows[0][0], CellValue::from("Smith; J"));
    }

    #[test]
    fn test_header_only() {
        let (headers, rows) = parse_csv(b"a,b\n", ',', &defaults()).unwrap();
        assert_eq!(headers.len(), 2);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let (headers, rows) = parse_csv(b"", ',', &defaults()).unwrap();
        assert!(headers.is_empty());
        assert!(rows.is_empty());
    }

    #[test]
    fn test_non_byte_delimiter_rejected() {
        assert!(parse_csv(b"a\n", '€', &defaults()).is_err());
    }
}
