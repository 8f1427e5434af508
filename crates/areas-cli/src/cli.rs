//! CLI argument definitions for the service area builder.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "service-areas",
    version,
    about = "Build the service area dataset of states, districts and sub-districts",
    long_about = "Build the service area lookup dataset from the local government directory.\n\n\
                  Every district gets a slug unique across all districts and the reserved set;\n\
                  every sub-district gets a slug unique within its district."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

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
    /// Fetch the source tables and generate the dataset.
    Build(BuildArgs),

    /// Summarize a previously generated dataset.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Destination of the generated JSON document.
    #[arg(long = "output", short = 'o', value_name = "PATH", default_value = "service-areas.json")]
    pub output: PathBuf,

    /// File listing slugs already published (JSON, TXT, or a source module).
    ///
    /// A missing file means nothing is reserved.
    #[arg(long = "reserved", value_name = "PATH")]
    pub reserved: Option<PathBuf>,

    /// Read 1-state.csv, 2-district.csv and 3-subdistrict.csv from a local
    /// directory instead of fetching them.
    #[arg(long = "source-dir", value_name = "DIR", conflicts_with = "base_url")]
    pub source_dir: Option<PathBuf>,

    /// Base URL of the remote tables (default: $SERVICE_AREAS_BASE_URL or the
    /// upstream directory).
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Per-request timeout when fetching remote tables.
    #[arg(long = "timeout-secs", value_name = "SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Build and audit without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Refuse to write the output when the slug audit finds errors.
    #[arg(long = "strict")]
    pub strict: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to a generated dataset.
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// List the districts of this state (by slug) instead of the overview.
    #[arg(long = "state", value_name = "SLUG")]
    pub state: Option<String>,
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
