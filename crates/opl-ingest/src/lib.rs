//! Results-file ingestion.
//!
//! Loads OpenPowerlifting-style CSV exports into string row maps and
//! normalizes them into typed [`opl_model::CompetitionResult`] entries.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use opl_ingest::{normalize_rows, read_csv_rows};
//!
//! let rows = read_csv_rows(Path::new("results.csv"))?;
//! let table = normalize_rows(&rows);
//! ```

mod csv;
mod error;
mod normalize;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{RawRow, get_field, get_optional, read_csv_rows, read_csv_rows_from_reader};

// === Normalization ===
pub use normalize::{normalize_row, normalize_rows, parse_date, parse_f64};
