//! CSV loading into string row maps.
//!
//! The reader stays dumb on purpose: every value comes out as a trimmed
//! string keyed by its header. Type interpretation happens in
//! [`crate::normalize`], where a failed parse can degrade gracefully
//! instead of aborting the load.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use crate::error::{IngestError, Result};

/// A raw record: column header → trimmed string value.
///
/// Ephemeral; exists only between the CSV reader and the normalizer.
pub type RawRow = BTreeMap<String, String>;

/// Read a results file into a vector of row maps.
///
/// Handles a UTF-8 BOM on the first header and trims whitespace from
/// headers and values. Empty lines are skipped by the reader.
pub fn read_csv_rows(path: &Path) -> Result<Vec<RawRow>> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
    collect_rows(reader)
}

/// Read results from any reader (in-memory buffers, test fixtures).
pub fn read_csv_rows_from_reader<R: Read>(input: R) -> Result<Vec<RawRow>> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);
    collect_rows(reader)
}

fn collect_rows<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<RawRow>> {
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::NoHeader);
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row = RawRow::new();
        for (idx, value) in record.iter().enumerate() {
            let Some(key) = headers.get(idx) else {
                // Trailing value beyond the header width; nothing to key it by.
                continue;
            };
            row.insert(key.clone(), value.trim().to_string());
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Get a field value from a row, empty string if not present.
pub fn get_field<'a>(row: &'a RawRow, key: &str) -> &'a str {
    row.get(key).map_or("", String::as_str)
}

/// Get an optional field value (None if empty or missing).
pub fn get_optional<'a>(row: &'a RawRow, key: &str) -> Option<&'a str> {
    row.get(key).map(String::as_str).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_header_keyed_rows() {
        let data = "Name,Date\nAlice,2024-01-01\nBob,2024-02-01\n";
        let rows = read_csv_rows_from_reader(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(get_field(&rows[0], "Name"), "Alice");
        assert_eq!(get_field(&rows[1], "Date"), "2024-02-01");
    }

    #[test]
    fn strips_bom_and_whitespace() {
        let data = "\u{feff}Name, Date \n  Alice , 2024-01-01 \n";
        let rows = read_csv_rows_from_reader(data.as_bytes()).unwrap();
        assert_eq!(get_field(&rows[0], "Name"), "Alice");
        assert_eq!(get_field(&rows[0], "Date"), "2024-01-01");
    }

    #[test]
    fn zero_data_rows_is_a_valid_table() {
        let rows = read_csv_rows_from_reader("Name,Date\n".as_bytes()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn get_optional_treats_empty_as_missing() {
        let data = "Name,WeightClassKg\nAlice,\n";
        let rows = read_csv_rows_from_reader(data.as_bytes()).unwrap();
        assert_eq!(get_optional(&rows[0], "WeightClassKg"), None);
        assert_eq!(get_optional(&rows[0], "Name"), Some("Alice"));
    }
}
