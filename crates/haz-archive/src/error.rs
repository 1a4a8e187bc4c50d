//! Error types for archive assembly.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while writing the output archive. Any of these aborts the
/// build; a partial artifact may remain on disk and must be discarded by the
/// caller.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// A mapped source file disappeared between validation and the build.
    #[error("file not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// Zip structure failure.
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Underlying I/O failure while creating or writing the archive.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ArchiveError>;
