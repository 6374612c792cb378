//! File-backed ingestion tests.

use std::io::Write;

use opl_ingest::{IngestError, normalize_rows, read_csv_rows, read_csv_rows_from_reader};
use opl_model::{Equipment, EventCode};

const SAMPLE: &str = "\
Name,Date,Event,Equipment,WeightClassKg,BodyweightKg,Best3SquatKg,Best3BenchKg,Best3DeadliftKg,TotalKg,Goodlift,Squat1Kg,Squat2Kg,Squat3Kg
Alice Example,2023-05-20,SBD,Raw,76,74.8,160,92.5,185,437.5,78.41,150,160,-167.5
Alice Example,2024-01-13,SBD,Raw,76,75.2,170,95,190,455,81.02,160,170,-177.5
";

#[test]
fn reads_and_normalizes_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();

    let rows = read_csv_rows(file.path()).unwrap();
    assert_eq!(rows.len(), 2);

    let table = normalize_rows(&rows);
    assert_eq!(table.len(), 2);
    let entry = &table[0];
    assert_eq!(entry.athlete_name, "Alice Example");
    assert_eq!(entry.event, EventCode::Sbd);
    assert_eq!(entry.equipment, Equipment::Raw);
    assert_eq!(entry.best_squat, Some(160.0));
    assert_eq!(entry.squat_attempts[2], Some(-167.5));
    assert_eq!(entry.total, Some(437.5));
}

#[test]
fn missing_file_is_an_error() {
    let err = read_csv_rows(std::path::Path::new("/nonexistent/results.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn short_rows_degrade_to_missing_fields() {
    // Second row stops after the date; flexible reading keeps it.
    let data = "Name,Date,Best3SquatKg\nAlice,2024-01-01,150\nBob,2024-02-01\n";
    let rows = read_csv_rows_from_reader(data.as_bytes()).unwrap();
    let table = normalize_rows(&rows);
    assert_eq!(table.len(), 2);
    assert_eq!(table[1].athlete_name, "Bob");
    assert_eq!(table[1].best_squat, None);
}
