//! CLI argument definitions for the top-picks pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use picks_map::DEFAULT_CUTOFF;
use picks_report::{DEFAULT_MIN_RATING, DEFAULT_REPORT_NAME};

#[derive(Parser)]
#[command(
    name = "top-picks",
    version,
    about = "Generate a top-picks report from a movie catalog CSV",
    long_about = "Read a movie catalog CSV with unpredictable header names, resolve the\n\
                  title/genre/year/rating/regions columns by fuzzy matching, and write\n\
                  the highest-rated titles to a fixed-format text report."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full pipeline and write the report file.
    Run(RunArgs),

    /// Show how logical fields resolve onto the dataset's columns.
    Resolve(ResolveArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the catalog CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Report file to write.
    #[arg(long = "output", value_name = "PATH", default_value = DEFAULT_REPORT_NAME)]
    pub output: PathBuf,

    /// Keep rows whose rating is strictly greater than this.
    #[arg(long = "min-rating", value_name = "RATING", default_value_t = DEFAULT_MIN_RATING)]
    pub min_rating: f64,

    /// Similarity cutoff for fuzzy column resolution (0.0 to 1.0).
    #[arg(long = "cutoff", value_name = "SCORE", default_value_t = DEFAULT_CUTOFF)]
    pub cutoff: f64,

    /// Resolve and filter, but do not write the report file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ResolveArgs {
    /// Path to the catalog CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Similarity cutoff for fuzzy column resolution (0.0 to 1.0).
    #[arg(long = "cutoff", value_name = "SCORE", default_value_t = DEFAULT_CUTOFF)]
    pub cutoff: f64,

    /// Emit the resolution map as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
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

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_defaults_match_documented_constants() {
        let cli = Cli::try_parse_from(["top-picks", "run", "data.csv"]).unwrap();
        match cli.command {
            Command::Run(args) => {
                assert_eq!(args.output, PathBuf::from("HBO_Max_Top_Picks.txt"));
                assert!((args.min_rating - 7.5).abs() < f64::EPSILON);
                assert!((args.cutoff - 0.6).abs() < f64::EPSILON);
                assert!(!args.dry_run);
            }
            Command::Resolve(_) => panic!("expected run subcommand"),
        }
    }
}
