//! The packaging pipeline, export read through archive write.
//!
//! Stages run strictly in order: read table, validate headers, build the
//! mapping, then (only after the whole mapping validated) touch the output
//! path. A validation failure therefore never leaves side effects.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use haz_archive::write_archive;
use haz_ingest::{HeaderScan, read_export_table, resolve_columns};
use haz_map::{DedupePolicy, build_mapping};

use crate::confirm::Confirmation;

/// Knobs for one pipeline run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub dedupe: DedupePolicy,
    pub header_scan: HeaderScan,
}

/// What a finished run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub records: usize,
    pub members: usize,
}

/// A run either completes or is cancelled at the overwrite prompt.
#[derive(Debug)]
pub enum RunOutcome {
    Completed(RunSummary),
    Cancelled,
}

/// Run the full pipeline for one export.
pub fn run(
    input: &Path,
    output: &Path,
    options: RunOptions,
    confirmation: &mut dyn Confirmation,
) -> Result<RunOutcome> {
    info!(input = %input.display(), "reading export");
    let table = read_export_table(input)?;
    let index = resolve_columns(&table, options.header_scan)?;
    let mapping = build_mapping(&table, index, options.dedupe)?;
    info!(records = mapping.len(), "found records");

    if output.exists() {
        let prompt = format!(
            "An existing file was found at: {}. Okay to delete it? (y/n) ",
            output.display()
        );
        if !confirmation.confirm(&prompt)? {
            return Ok(RunOutcome::Cancelled);
        }
        fs::remove_file(output)
            .with_context(|| format!("delete existing output: {}", output.display()))?;
        info!(output = %output.display(), "deleted existing output");
    }

    info!(output = %output.display(), "writing assets");
    let members = write_archive(&mapping, output)?;

    Ok(RunOutcome::Completed(RunSummary {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        records: mapping.len(),
        members,
    }))
}
