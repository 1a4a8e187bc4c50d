//! Writing the output zip.

use std::fs::File;
use std::io;
use std::path::Path;

use tracing::info;
use zip::{CompressionMethod, DateTime, ZipWriter, write::SimpleFileOptions};

use haz_model::AssetMapping;

use crate::error::{ArchiveError, Result};

/// Write one archive member per mapping entry, in mapping order.
///
/// Members carry a fixed modification timestamp and 0644 permissions so a
/// fixed input yields a deterministic member list. Returns the member count.
/// The caller must only invoke this after the full mapping has been
/// validated; a failure mid-write leaves a partial artifact behind.
pub fn write_archive(mapping: &AssetMapping, dest: &Path) -> Result<usize> {
    let file = File::create(dest)?;
    let mut writer = ZipWriter::new(file);
    // DateTime::default() is the zip epoch, 1980-01-01 00:00:00.
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(0o644);

    for entry in mapping {
        let source_path = Path::new(&entry.access_copy_location);
        info!(
            source = %source_path.display(),
            member = %entry.output_filename,
            "adding file to archive"
        );
        let mut source = File::open(source_path).map_err(|error| {
            if error.kind() == io::ErrorKind::NotFound {
                ArchiveError::SourceNotFound {
                    path: source_path.to_path_buf(),
                }
            } else {
                ArchiveError::Io(error)
            }
        })?;
        writer.start_file(entry.output_filename.as_str(), options)?;
        io::copy(&mut source, &mut writer)?;
    }

    writer.finish()?;
    Ok(mapping.len())
}
