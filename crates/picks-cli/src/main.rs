//! top-picks CLI.

use clap::{ColorChoice, Parser};
use picks_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::Level;

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_report, run_resolve};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Some(config) = log_config_from_cli(&cli) {
        if let Err(error) = init_logging(&config) {
            eprintln!("error: failed to initialize logging: {error}");
            std::process::exit(1);
        }
    }
    let exit_code = match cli.command {
        Command::Run(args) => match run_report(&args) {
            Ok(result) => {
                print_summary(&result);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Resolve(args) => match run_resolve(&args) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
///
/// Returns `None` when logging is fully silenced (`-qqq` with no explicit
/// level).
fn log_config_from_cli(cli: &Cli) -> Option<LogConfig> {
    let level = match cli.log_level {
        Some(LogLevelArg::Error) => Some(Level::ERROR),
        Some(LogLevelArg::Warn) => Some(Level::WARN),
        Some(LogLevelArg::Info) => Some(Level::INFO),
        Some(LogLevelArg::Debug) => Some(Level::DEBUG),
        Some(LogLevelArg::Trace) => Some(Level::TRACE),
        None => cli.verbosity.tracing_level_filter().into_level(),
    };
    let mut config = LogConfig {
        level: level?,
        ..LogConfig::default()
    };
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
    Some(config)
}
