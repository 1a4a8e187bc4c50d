//! Shared data model for the Hyacinth asset zip builder.

pub mod mapping;
pub mod table;

pub use mapping::{AssetMapping, MappingEntry};
pub use table::{
    ACCESS_COPY_LOCATION_COLUMN, ColumnIndex, ExportTable, ORIGINAL_FILENAME_COLUMN, Record,
    REQUIRED_COLUMNS,
};
