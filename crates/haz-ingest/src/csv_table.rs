//! Reading a single-header export CSV into an [`ExportTable`].

use std::path::Path;

use csv::ReaderBuilder;

use haz_model::ExportTable;

use crate::error::{IngestError, Result};

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read an export CSV into an [`ExportTable`].
///
/// The first record is taken as the declared header row; Hyacinth's optional
/// human-readable second header row is not supported and must be removed by
/// the caller. Fully blank records are dropped and data rows are padded to
/// the header width so downstream access never indexes past a short record.
pub fn read_export_table(path: &Path) -> Result<ExportTable> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut table = ExportTable::default();
    for record in reader.records() {
        let record = record?;
        let cells: Vec<String> = record.iter().map(normalize_cell).collect();
        if cells.iter().all(|value| value.is_empty()) {
            continue;
        }
        if table.headers.is_empty() {
            table.headers = cells;
            continue;
        }
        let mut row = Vec::with_capacity(table.headers.len());
        for idx in 0..table.headers.len() {
            row.push(cells.get(idx).cloned().unwrap_or_default());
        }
        table.rows.push(row);
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_csv(name: &str, content: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "haz-ingest-test-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn first_record_becomes_headers() {
        let path = temp_csv("export.csv", "a,b\n1,2\n3,4\n");
        let table = read_export_table(&path).unwrap();
        assert_eq!(table.headers, vec!["a", "b"]);
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn blank_records_are_dropped_and_short_rows_padded() {
        let path = temp_csv("export.csv", "a,b,c\n,,\n1,2\n");
        let table = read_export_table(&path).unwrap();
        assert_eq!(table.rows, vec![vec!["1", "2", ""]]);
    }

    #[test]
    fn bom_is_stripped_from_the_first_header() {
        let path = temp_csv("export.csv", "\u{feff}a,b\n1,2\n");
        let table = read_export_table(&path).unwrap();
        assert_eq!(table.headers[0], "a");
    }

    #[test]
    fn missing_input_names_the_path() {
        let path = std::env::temp_dir().join("haz-ingest-test-no-such-file.csv");
        let error = read_export_table(&path).unwrap_err();
        assert!(matches!(error, IngestError::FileNotFound { .. }));
        assert!(error.to_string().contains("haz-ingest-test-no-such-file.csv"));
    }

    #[test]
    fn empty_file_yields_empty_table() {
        let path = temp_csv("export.csv", "");
        let table = read_export_table(&path).unwrap();
        assert!(table.headers.is_empty());
        assert!(table.rows.is_empty());
    }
}
