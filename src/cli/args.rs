//! CLI argument definitions.

use crate::cli::validators::parse_frame_rate;
use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Summarize music track usage from Premiere Pro XML timeline exports.
#[derive(Debug, Parser)]
#[command(name = "tracktally")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Timeline XML files or directories to analyze.
    pub inputs: Vec<PathBuf>,

    /// Common options for analysis.
    #[command(flatten)]
    pub analyze: AnalyzeArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for the analyze command.
#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct AnalyzeArgs {
    /// Timeline frame rate in frames per second (1-120).
    #[arg(short = 'r', long = "fps", value_parser = parse_frame_rate, env = "TRACKTALLY_FPS")]
    pub frame_rate: Option<f64>,

    /// Output formats (comma-separated: csv,json,table).
    #[arg(short, long, value_delimiter = ',', env = "TRACKTALLY_FORMAT")]
    pub format: Option<Vec<OutputFormat>>,

    /// Output directory (default: same as input).
    #[arg(short, long, env = "TRACKTALLY_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Path to an alternative config file.
    #[arg(long = "config", env = "TRACKTALLY_CONFIG")]
    pub config_file: Option<PathBuf>,

    /// Merge all inputs into one combined report instead of per-file reports.
    #[arg(long)]
    pub combine: bool,

    /// Write the CSV report to stdout instead of a file.
    #[arg(long)]
    pub stdout: bool,

    /// Rewrite reports even if they already exist.
    #[arg(long)]
    pub force: bool,

    /// Stop on first error.
    #[arg(long)]
    pub fail_fast: bool,

    /// Omit the UTF-8 BOM from CSV files.
    #[arg(long)]
    pub no_csv_bom: bool,

    /// Disable the progress bar.
    #[arg(long)]
    pub no_progress: bool,

    /// Suppress informational output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace with per-clip decisions).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
