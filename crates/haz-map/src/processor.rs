//! Row-by-row construction of the asset mapping.

use std::collections::HashSet;

use haz_model::{AssetMapping, ColumnIndex, ExportTable, MappingEntry, Record};

use crate::derive::derive_output_filename;
use crate::error::{MapError, Result};

/// Which value the duplicate-name check compares.
///
/// The legacy behavior compares the recorded original filename, which can
/// miss two distinct originals deriving the same archive member name.
/// `ByDerivedName` closes that gap; the choice is explicit rather than
/// inherited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DedupePolicy {
    #[default]
    ByOriginalName,
    ByDerivedName,
}

/// Builds the ordered mapping, enforcing uniqueness as it goes.
///
/// Seen-sets live on the processor, never in process-global state; a fresh
/// processor per run keeps the pipeline reentrant. `process` consumes the
/// processor so a half-failed run cannot be resumed.
#[derive(Debug, Default)]
pub struct RecordProcessor {
    policy: DedupePolicy,
    seen_locations: HashSet<String>,
    seen_names: HashSet<String>,
}

impl RecordProcessor {
    #[must_use]
    pub fn new(policy: DedupePolicy) -> Self {
        Self {
            policy,
            seen_locations: HashSet::new(),
            seen_names: HashSet::new(),
        }
    }

    /// Build the complete mapping in input row order, or fail on the first
    /// defective row. No partial mapping escapes on failure.
    pub fn process(mut self, table: &ExportTable, index: ColumnIndex) -> Result<AssetMapping> {
        let mut mapping = AssetMapping::new();
        for row in &table.rows {
            let record = index.record(row);
            mapping.push(self.process_record(&record)?);
        }
        Ok(mapping)
    }

    fn process_record(&mut self, record: &Record) -> Result<MappingEntry> {
        if record.original_filename.is_empty() {
            return Err(MapError::MissingOriginalFilename {
                location: record.access_copy_location.clone(),
            });
        }
        let output_filename =
            derive_output_filename(&record.original_filename, &record.access_copy_location);

        if self.seen_locations.contains(&record.access_copy_location) {
            return Err(MapError::DuplicateLocation {
                location: record.access_copy_location.clone(),
            });
        }
        let dedupe_name = match self.policy {
            DedupePolicy::ByOriginalName => record.original_filename.as_str(),
            DedupePolicy::ByDerivedName => output_filename.as_str(),
        };
        if self.seen_names.contains(dedupe_name) {
            return Err(MapError::DuplicateName {
                name: dedupe_name.to_string(),
            });
        }
        self.seen_locations
            .insert(record.access_copy_location.clone());
        self.seen_names.insert(dedupe_name.to_string());

        Ok(MappingEntry {
            access_copy_location: record.access_copy_location.clone(),
            output_filename,
        })
    }
}

/// Convenience wrapper: run a fresh processor over the whole table.
pub fn build_mapping(
    table: &ExportTable,
    index: ColumnIndex,
    policy: DedupePolicy,
) -> Result<AssetMapping> {
    RecordProcessor::new(policy).process(table, index)
}
