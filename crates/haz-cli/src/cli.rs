//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use haz_ingest::HeaderScan;
use haz_map::DedupePolicy;
use haz_model::REQUIRED_COLUMNS;

#[derive(Parser)]
#[command(
    name = "haz",
    version,
    about = "Build a zip of renamed access copies from a Hyacinth export CSV",
    long_about = "Read a single-header Hyacinth export CSV, derive an output \
                  filename for every asset row, and package the referenced \
                  access copies into one zip archive under those names.\n\n\
                  The export must not carry the optional human-readable \
                  second header row; delete that row before running."
)]
pub struct Cli {
    /// Path to the single-header Hyacinth export CSV.
    #[arg(value_name = "EXPORT_CSV")]
    pub input: Option<PathBuf>,

    /// Path of the zip archive to create.
    #[arg(value_name = "OUTPUT_ZIP")]
    pub output: Option<PathBuf>,

    /// Which filename the duplicate check compares.
    #[arg(long = "dedupe-by", value_enum, default_value = "original-name")]
    pub dedupe_by: DedupeByArg,

    /// Which rows may satisfy the required-header check.
    #[arg(long = "header-scan", value_enum, default_value = "first-row")]
    pub header_scan: HeaderScanArg,

    /// Overwrite an existing output archive without prompting.
    #[arg(short = 'y', long = "yes")]
    pub assume_yes: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI duplicate-detection policy choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum DedupeByArg {
    OriginalName,
    DerivedName,
}

impl From<DedupeByArg> for DedupePolicy {
    fn from(value: DedupeByArg) -> Self {
        match value {
            DedupeByArg::OriginalName => DedupePolicy::ByOriginalName,
            DedupeByArg::DerivedName => DedupePolicy::ByDerivedName,
        }
    }
}

/// CLI header-scan choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum HeaderScanArg {
    FirstRow,
    AnyRow,
}

impl From<HeaderScanArg> for HeaderScan {
    fn from(value: HeaderScanArg) -> Self {
        match value {
            HeaderScanArg::FirstRow => HeaderScan::FirstRow,
            HeaderScanArg::AnyRow => HeaderScan::AnyRow,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

/// Usage text shown when either positional argument is missing.
pub fn usage_text() -> String {
    format!(
        "usage:\n  haz <EXPORT_CSV> <OUTPUT_ZIP>\n  The provided CSV must contain the following headers: {}",
        REQUIRED_COLUMNS.join(", ")
    )
}

pub fn print_usage() {
    println!();
    println!("{}", usage_text());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_names_both_required_columns() {
        insta::assert_snapshot!(usage_text(), @r"
        usage:
          haz <EXPORT_CSV> <OUTPUT_ZIP>
          The provided CSV must contain the following headers: _asset_data.original_filename, _asset_data.access_copy_location
        ");
    }

    #[test]
    fn arguments_parse() {
        let cli = Cli::parse_from([
            "haz",
            "export.csv",
            "out.zip",
            "--dedupe-by",
            "derived-name",
            "--header-scan",
            "any-row",
            "-y",
        ]);
        assert!(matches!(
            DedupePolicy::from(cli.dedupe_by),
            DedupePolicy::ByDerivedName
        ));
        assert!(matches!(
            HeaderScan::from(cli.header_scan),
            HeaderScan::AnyRow
        ));
        assert!(cli.assume_yes);
    }
}
