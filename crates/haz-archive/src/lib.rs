//! Zip assembly from a validated asset mapping.

#![deny(unsafe_code)]

pub mod error;
pub mod writer;

pub use error::{ArchiveError, Result};
pub use writer::write_archive;
