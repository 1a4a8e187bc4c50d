//! Tabular view of a Hyacinth export CSV.

/// Column holding the asset's recorded source filename.
pub const ORIGINAL_FILENAME_COLUMN: &str = "_asset_data.original_filename";

/// Column holding the filesystem path of the access copy to archive.
pub const ACCESS_COPY_LOCATION_COLUMN: &str = "_asset_data.access_copy_location";

/// Column headings every export must carry.
pub const REQUIRED_COLUMNS: [&str; 2] = [ORIGINAL_FILENAME_COLUMN, ACCESS_COPY_LOCATION_COLUMN];

/// Raw export content after cell normalization, one header row plus data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    /// Position of a column heading in the declared header row.
    #[must_use]
    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }
}

/// Resolved positions of the two required columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub original_filename: usize,
    pub access_copy_location: usize,
}

impl ColumnIndex {
    /// Header-aware view of one data row. Cells beyond the row's width read
    /// as empty, matching short CSV records.
    #[must_use]
    pub fn record(&self, row: &[String]) -> Record {
        let cell = |idx: usize| row.get(idx).cloned().unwrap_or_default();
        Record {
            original_filename: cell(self.original_filename),
            access_copy_location: cell(self.access_copy_location),
        }
    }
}

/// One export data row, reduced to the two semantic fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub original_filename: String,
    pub access_copy_location: String,
}
