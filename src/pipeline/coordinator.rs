//! Input discovery and output placement.

use crate::config::OutputFormat;
use crate::constants::{TIMELINE_EXTENSION, output_extensions};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Result of checking whether a file should be processed.
#[derive(Debug, PartialEq, Eq)]
pub enum ProcessCheck {
    /// File should be processed.
    Process,
    /// Skip - every report file already exists.
    SkipExists,
}

/// Determine the output directory for a file.
pub fn output_dir_for(input: &Path, explicit_output_dir: Option<&Path>) -> PathBuf {
    explicit_output_dir.map_or_else(
        || {
            input
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
        },
        Path::to_path_buf,
    )
}

/// Get the report file path for a timeline and format.
///
/// Returns `None` for formats that print to the terminal.
pub fn output_path_for(input: &Path, output_dir: &Path, format: OutputFormat) -> Option<PathBuf> {
    let stem = input.file_stem().map_or_else(
        || std::borrow::Cow::Borrowed("timeline"),
        |s| s.to_string_lossy(),
    );

    let extension = match format {
        OutputFormat::Csv => output_extensions::CSV,
        OutputFormat::Json => output_extensions::JSON,
        OutputFormat::Table => return None,
    };

    Some(output_dir.join(format!("{stem}{extension}")))
}

/// Get the combined report file path for a format.
pub fn combined_path_for(output_dir: &Path, name: &str, format: OutputFormat) -> Option<PathBuf> {
    let extension = match format {
        OutputFormat::Csv => "csv",
        OutputFormat::Json => "json",
        OutputFormat::Table => return None,
    };

    Some(output_dir.join(format!("{name}.{extension}")))
}

/// Check if a file should be processed.
pub fn should_process(
    input: &Path,
    output_dir: &Path,
    formats: &[OutputFormat],
    force: bool,
) -> ProcessCheck {
    if force {
        return ProcessCheck::Process;
    }

    // Terminal-only reports are always produced.
    if !formats.iter().any(|fmt| fmt.writes_file()) {
        return ProcessCheck::Process;
    }

    if formats
        .iter()
        .filter_map(|fmt| output_path_for(input, output_dir, *fmt))
        .all(|path| path.exists())
    {
        ProcessCheck::SkipExists
    } else {
        ProcessCheck::Process
    }
}

/// Create the output directory if it does not exist yet.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| Error::OutputDirCreateFailed {
        path: dir.to_path_buf(),
        source: e,
    })
}

/// Collect timeline files from paths (files and directories).
///
/// Explicit files are taken as given whatever their extension; directories
/// are searched recursively for `.xml` files. The result is sorted and free
/// of duplicates. A path that does not exist fails the whole run.
pub fn collect_input_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            collect_timeline_files_recursive(path, &mut files)?;
        } else {
            return Err(Error::TimelineNotFound { path: path.clone() });
        }
    }

    files.sort();
    files.dedup();
    debug!("Collected {} timeline file(s)", files.len());
    Ok(files)
}

fn collect_timeline_files_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            collect_timeline_files_recursive(&path, files)?;
        } else if is_timeline_file(&path) {
            files.push(path);
        }
    }

    Ok(())
}

/// Check if a path looks like an XML timeline export.
fn is_timeline_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(std::ffi::OsStr::new(TIMELINE_EXTENSION)))
}
