//! Header validation for export tables.

use haz_model::{
    ACCESS_COPY_LOCATION_COLUMN, ColumnIndex, ExportTable, ORIGINAL_FILENAME_COLUMN,
    REQUIRED_COLUMNS,
};

use crate::error::{IngestError, Result};

/// Which rows the validity scan may consider.
///
/// `FirstRow` is the strict check: the declared header row itself must carry
/// both required columns. `AnyRow` reproduces the legacy scan that accepted
/// a match anywhere in the file; field access still resolves against the
/// declared header row, so a file that only matches on a later row is still
/// rejected here rather than failing row by row downstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderScan {
    #[default]
    FirstRow,
    AnyRow,
}

fn row_has_required(row: &[String]) -> bool {
    REQUIRED_COLUMNS
        .iter()
        .all(|name| row.iter().any(|cell| cell == name))
}

fn missing_columns(headers: &[String]) -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .filter(|name| !headers.iter().any(|header| header == *name))
        .map(|name| (*name).to_string())
        .collect()
}

/// Validate the header row and resolve the required column positions.
///
/// Order and extra columns are irrelevant; only presence of both required
/// headings counts. On failure the error names every missing heading.
pub fn resolve_columns(table: &ExportTable, scan: HeaderScan) -> Result<ColumnIndex> {
    if scan == HeaderScan::AnyRow
        && !row_has_required(&table.headers)
        && !table.rows.iter().any(|row| row_has_required(row))
    {
        return Err(IngestError::MalformedInput {
            missing: missing_columns(&table.headers),
        });
    }

    let original_filename = table.column_position(ORIGINAL_FILENAME_COLUMN);
    let access_copy_location = table.column_position(ACCESS_COPY_LOCATION_COLUMN);
    match (original_filename, access_copy_location) {
        (Some(original_filename), Some(access_copy_location)) => Ok(ColumnIndex {
            original_filename,
            access_copy_location,
        }),
        _ => Err(IngestError::MalformedInput {
            missing: missing_columns(&table.headers),
        }),
    }
}
