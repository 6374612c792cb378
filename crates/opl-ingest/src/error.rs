//! Error types for results-file ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a results file.
///
/// Data-quality problems (bad dates, non-numeric weights) are not errors;
/// normalization degrades those per field or per row. Only structural
/// failures surface here.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Results file not found.
    #[error("results file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Malformed CSV framing (unbalanced quotes, ragged records).
    #[error("malformed CSV record: {source}")]
    Record {
        #[from]
        source: csv::Error,
    },

    /// File has no header row.
    #[error("no header row detected")]
    NoHeader,
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
