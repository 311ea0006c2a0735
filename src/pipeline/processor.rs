//! Single timeline processing pipeline.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::{CsvWriter, JsonWriter, OutputWriter, TableWriter, write_report};
use crate::pipeline::{ensure_output_dir, output_path_for};
use crate::timeline::{FrameRate, TimelineScan, TrackSummary, read_timeline_file};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Settings shared by every report written in one run.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Output formats to generate.
    pub formats: Vec<OutputFormat>,
    /// Frame rate for frame to seconds conversion.
    pub frame_rate: FrameRate,
    /// Whether to include a UTF-8 BOM in CSV files.
    pub csv_bom: bool,
}

/// Result of processing a single file.
#[derive(Debug)]
pub struct ProcessResult {
    /// The traversal result, kept for combined reports.
    pub scan: TimelineScan,
    /// Processing duration in seconds.
    pub duration_secs: f64,
}

/// Read a timeline and log what was found.
pub fn scan_file(input_path: &Path) -> Result<TimelineScan> {
    info!("Processing: {}", input_path.display());

    let scan = read_timeline_file(input_path)?;
    info!(
        "Found {} track(s) in {} clip(s) ({} linked duplicates, {} skipped)",
        scan.tracks.len(),
        scan.stats.clips,
        scan.stats.duplicates,
        scan.stats.skipped
    );

    Ok(scan)
}

/// Read a timeline and write its per-file reports.
pub fn process_file(
    input_path: &Path,
    output_dir: &Path,
    options: &ReportOptions,
) -> Result<ProcessResult> {
    let start_time = Instant::now();

    let scan = scan_file(input_path)?;
    let tracks = scan.tracks.finalize(options.frame_rate);

    let title = input_path.display().to_string();
    write_outputs(
        &tracks,
        |format| output_path_for(input_path, output_dir, format),
        &title,
        std::slice::from_ref(&title),
        options,
    )?;

    Ok(ProcessResult {
        scan,
        duration_secs: start_time.elapsed().as_secs_f64(),
    })
}

/// Write `tracks` in every configured format.
///
/// `path_for` maps file formats to their destination; terminal formats go
/// to stdout under `title`.
pub fn write_outputs<F>(
    tracks: &[TrackSummary],
    path_for: F,
    title: &str,
    sources: &[String],
    options: &ReportOptions,
) -> Result<()>
where
    F: Fn(OutputFormat) -> Option<PathBuf>,
{
    for &format in &options.formats {
        let path = path_for(format);
        if let Some(parent) = path.as_deref().and_then(Path::parent) {
            ensure_output_dir(parent)?;
        }

        let mut writer: Box<dyn OutputWriter> = match (format, path) {
            (OutputFormat::Csv, Some(path)) => {
                debug!("Writing {} output: {}", format, path.display());
                Box::new(CsvWriter::create(&path, options.csv_bom)?)
            }
            (OutputFormat::Json, Some(path)) => {
                debug!("Writing {} output: {}", format, path.display());
                Box::new(JsonWriter::new(&path, sources.to_vec(), options.frame_rate))
            }
            _ => Box::new(TableWriter::new(std::io::stdout().lock(), title)),
        };

        write_report(writer.as_mut(), tracks)?;
    }

    Ok(())
}

/// Write a single CSV report to stdout, without BOM.
pub fn write_csv_to_stdout(tracks: &[TrackSummary]) -> Result<()> {
    let mut writer = CsvWriter::new(std::io::stdout().lock(), Path::new("-"), false)?;
    write_report(&mut writer, tracks)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const TIMELINE: &str = r"<?xml version='1.0' encoding='UTF-8'?>
<!DOCTYPE xmeml>
<xmeml version='4'>
  <sequence>
    <media><audio><track>
      <clipitem id='a1'>
        <name>lib_x_1_song_a-b.mp3</name>
        <in>0</in><out>250</out>
        <link><linkclipref>a1</linkclipref></link>
        <link><linkclipref>a2</linkclipref></link>
      </clipitem>
    </track><track>
      <clipitem id='a2'>
        <name>lib_x_1_song_a-b.mp3</name>
        <in>0</in><out>250</out>
        <link><linkclipref>a1</linkclipref></link>
        <link><linkclipref>a2</linkclipref></link>
      </clipitem>
    </track></audio></media>
  </sequence>
</xmeml>";

    fn options(formats: Vec<OutputFormat>) -> ReportOptions {
        ReportOptions {
            formats,
            frame_rate: FrameRate::default(),
            csv_bom: false,
        }
    }

    #[test]
    fn test_process_file_writes_reports() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("promo.xml");
        std::fs::write(&input, TIMELINE).unwrap();
        let out = dir.path().join("reports");

        let result = process_file(
            &input,
            &out,
            &options(vec![OutputFormat::Csv, OutputFormat::Json]),
        )
        .unwrap();
        assert_eq!(result.scan.stats.counted, 1);
        assert_eq!(result.scan.stats.duplicates, 1);

        let csv = std::fs::read_to_string(out.join("promo.tracks.csv")).unwrap();
        assert!(csv.contains("lib_x_1_,Song,A B,1,00:00:10,10,250"));
        assert!(out.join("promo.tracks.json").exists());
    }

    #[test]
    fn test_process_missing_file_fails() {
        let dir = tempdir().unwrap();
        let result = process_file(
            &dir.path().join("missing.xml"),
            dir.path(),
            &options(vec![OutputFormat::Csv]),
        );
        assert!(result.is_err());
        assert!(!dir.path().join("missing.tracks.csv").exists());
    }
}
