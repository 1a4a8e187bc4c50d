//! Export CSV reading and header validation.

#![deny(unsafe_code)]

pub mod csv_table;
pub mod error;
pub mod header;

pub use csv_table::read_export_table;
pub use error::{IngestError, Result};
pub use header::{HeaderScan, resolve_columns};
