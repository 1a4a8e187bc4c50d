//! Error types for export ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or validating an export CSV.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input path does not exist.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Required column headings absent from the export.
    #[error(
        "export is not compatible: the first row must contain the column headings: {}",
        missing.join(", ")
    )]
    MalformedInput { missing: Vec<String> },

    /// CSV parse failure.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying I/O failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
