//! Record processing: filename derivation, duplicate detection, and mapping
//! construction.

#![deny(unsafe_code)]

pub mod derive;
pub mod error;
pub mod processor;

pub use derive::derive_output_filename;
pub use error::{MapError, Result};
pub use processor::{DedupePolicy, RecordProcessor, build_mapping};
