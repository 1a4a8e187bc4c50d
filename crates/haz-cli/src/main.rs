//! Hyacinth asset zip builder CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use haz_cli::confirm::{AssumeYes, Confirmation, TerminalConfirmation};
use haz_cli::logging::{LogConfig, LogFormat, init_logging};
use haz_cli::pipeline::{RunOptions, RunOutcome, run};

mod cli;
mod summary;

use crate::cli::{Cli, LogFormatArg, LogLevelArg, print_usage};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    // Missing positionals show usage and exit cleanly, matching the legacy
    // tool.
    let (Some(input), Some(output)) = (cli.input.clone(), cli.output.clone()) else {
        print_usage();
        return;
    };

    let options = RunOptions {
        dedupe: cli.dedupe_by.into(),
        header_scan: cli.header_scan.into(),
    };
    let mut terminal = TerminalConfirmation;
    let mut assume = AssumeYes;
    let confirmation: &mut dyn Confirmation = if cli.assume_yes {
        &mut assume
    } else {
        &mut terminal
    };

    let exit_code = match run(&input, &output, options, confirmation) {
        Ok(RunOutcome::Completed(summary)) => {
            print_summary(&summary);
            0
        }
        Ok(RunOutcome::Cancelled) => {
            println!("A value other than \"y\" was entered. Exiting.");
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
