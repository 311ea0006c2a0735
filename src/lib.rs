//! Tracktally - music usage reports from video editor timelines.
//!
//! This crate reads Premiere Pro (FCP7 XML) timeline exports and reports,
//! for every audio asset on the timeline, how often it is used and for how
//! long. The core lives in [`timeline`]; the rest is CLI, configuration and
//! report writing around it.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod timeline;

use clap::Parser;
use cli::{AnalyzeArgs, Cli, Command};
use config::{Config, config_file_path, load_default_config, save_default_config};
use pipeline::{
    ProcessCheck, ReportOptions, collect_input_files, combined_path_for, output_dir_for,
    process_file, scan_file, should_process, write_csv_to_stdout, write_outputs,
};
use std::path::{Path, PathBuf};
use std::time::Instant;
use timeline::{FrameRate, TrackTally};
use tracing::{debug, error, info, warn};

pub use error::{Error, Result};

/// Main entry point for tracktally CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.analyze.verbose, cli.analyze.quiet, cli.analyze.stdout);

    let config_path = cli.analyze.config_file.as_deref();

    if let Some(command) = cli.command {
        return handle_command(command, config_path);
    }

    let config = load_default_config(config_path)?;

    if cli.inputs.is_empty() {
        cli::help::print_smart_help(&config);
        return Ok(());
    }

    analyze_files(&cli.inputs, &cli.analyze, &config)
}

/// Resolve report settings from CLI arguments over configuration.
fn resolve_options(args: &AnalyzeArgs, config: &Config) -> Result<ReportOptions> {
    let frame_rate = FrameRate::new(args.frame_rate.unwrap_or(config.defaults.frame_rate))?;
    let formats = args
        .format
        .clone()
        .unwrap_or_else(|| config.defaults.formats.clone());

    if formats.is_empty() {
        return Err(Error::Usage {
            message: "at least one output format is required".to_string(),
        });
    }

    Ok(ReportOptions {
        formats,
        frame_rate,
        csv_bom: config.output.csv_bom && !args.no_csv_bom,
    })
}

/// Check `--stdout` against the other arguments.
fn validate_stdout_args(inputs: &[PathBuf], args: &AnalyzeArgs) -> Result<()> {
    let conflict = if inputs.len() != 1 {
        Some("--stdout requires exactly one input file")
    } else if args.output_dir.is_some() {
        Some("--stdout cannot be used with --output-dir")
    } else if args.combine {
        Some("--stdout cannot be used with --combine")
    } else if args.format.is_some() {
        Some("--stdout cannot be used with --format")
    } else {
        None
    };

    conflict.map_or(Ok(()), |message| {
        Err(Error::Usage {
            message: message.to_string(),
        })
    })
}

/// Analyze input files with the given options.
fn analyze_files(inputs: &[PathBuf], args: &AnalyzeArgs, config: &Config) -> Result<()> {
    if args.stdout {
        validate_stdout_args(inputs, args)?;
    }

    let options = resolve_options(args, config)?;

    let files = collect_input_files(inputs)?;
    if files.is_empty() {
        return Err(Error::NoTimelineFiles);
    }

    if args.stdout {
        let scan = scan_file(&files[0])?;
        return write_csv_to_stdout(&scan.tracks.finalize(options.frame_rate));
    }

    info!(
        "Found {} timeline file(s), frame rate {} fps",
        files.len(),
        options.frame_rate
    );

    if args.combine {
        let output_dir = args
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        return analyze_combined(&files, &output_dir, args, config, &options);
    }

    analyze_each(&files, args, &options)
}

/// Write one report per timeline.
fn analyze_each(files: &[PathBuf], args: &AnalyzeArgs, options: &ReportOptions) -> Result<()> {
    use crate::output::progress;

    let total_start = Instant::now();
    let progress_enabled = !args.quiet && !args.no_progress;
    let file_progress = progress::create_file_progress(files.len(), progress_enabled);

    let mut processed = 0;
    let mut skipped = 0;
    let mut errors = 0;
    let mut total_tracks = 0;

    for file in files {
        let file_output_dir = output_dir_for(file, args.output_dir.as_deref());
        progress::set_current(file_progress.as_ref(), &display_name(file));

        if should_process(file, &file_output_dir, &options.formats, args.force)
            == ProcessCheck::SkipExists
        {
            info!("Skipping (reports exist): {}", file.display());
            skipped += 1;
            progress::inc_progress(file_progress.as_ref());
            continue;
        }

        match process_file(file, &file_output_dir, options) {
            Ok(result) => {
                debug!(
                    "Finished {} in {:.2}s",
                    file.display(),
                    result.duration_secs
                );
                processed += 1;
                total_tracks += result.scan.tracks.len();
            }
            Err(e) => {
                error!("Failed to process {}: {}", file.display(), e);
                errors += 1;
                if args.fail_fast {
                    progress::finish_progress(file_progress, "Failed");
                    return Err(e);
                }
            }
        }
        progress::inc_progress(file_progress.as_ref());
    }

    progress::finish_progress(file_progress, "Complete");

    info!(
        "Complete: {} processed, {} skipped, {} errors, {} tracks in {:.2}s",
        processed,
        skipped,
        errors,
        total_tracks,
        total_start.elapsed().as_secs_f64()
    );

    if errors > 0 {
        warn!("{} file(s) had errors", errors);
        return Err(Error::ProcessingFailed {
            failed: errors,
            total: files.len(),
        });
    }

    Ok(())
}

/// Merge every timeline into one report.
///
/// Link deduplication stays per document; only the track totals are merged.
fn analyze_combined(
    files: &[PathBuf],
    output_dir: &Path,
    args: &AnalyzeArgs,
    config: &Config,
    options: &ReportOptions,
) -> Result<()> {
    let mut merged = TrackTally::new();
    let mut sources = Vec::with_capacity(files.len());
    let mut errors = 0;

    for file in files {
        match scan_file(file) {
            Ok(scan) => {
                merged.merge(scan.tracks);
                sources.push(file.display().to_string());
            }
            Err(e) => {
                error!("Failed to process {}: {}", file.display(), e);
                errors += 1;
                if args.fail_fast {
                    return Err(e);
                }
            }
        }
    }

    let name = config.output.combined_name.trim();
    let tracks = merged.finalize(options.frame_rate);
    let title = format!("Combined ({} timeline(s))", sources.len());

    write_outputs(
        &tracks,
        |format| combined_path_for(output_dir, name, format),
        &title,
        &sources,
        options,
    )?;

    info!(
        "Combined report: {} tracks from {} timeline(s) in {}",
        tracks.len(),
        sources.len(),
        output_dir.display()
    );

    if errors > 0 {
        return Err(Error::ProcessingFailed {
            failed: errors,
            total: files.len(),
        });
    }

    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

fn init_logging(verbose: u8, quiet: bool, to_stderr: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    // Report data owns stdout in --stdout mode.
    if to_stderr {
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt().with_env_filter(filter).init();
    }
}

#[allow(clippy::print_stdout)]
fn handle_command(command: Command, config_path: Option<&Path>) -> Result<()> {
    use cli::ConfigAction;

    let Command::Config { action } = command;
    match action {
        ConfigAction::Init => {
            let path = config_file_path(config_path)?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let saved_path = save_default_config(&Config::default(), config_path)?;
                println!("Created configuration file: {}", saved_path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_default_config(config_path)?;
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path(config_path)?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
