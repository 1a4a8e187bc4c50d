//! Error types for record processing.

use thiserror::Error;

/// Errors raised while building the asset mapping. Every variant carries the
/// offending value so a defect can be found in an export with thousands of
/// rows.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    /// A row has no usable original filename.
    #[error("no original filename available in export for {location}")]
    MissingOriginalFilename { location: String },

    /// The same access copy location appears on more than one row.
    #[error("encountered duplicate access copy location: {location}")]
    DuplicateLocation { location: String },

    /// The same filename appears on more than one row, per the configured
    /// duplicate-detection policy.
    #[error("encountered duplicate file name: {name}")]
    DuplicateName { name: String },
}

pub type Result<T> = std::result::Result<T, MapError>;
