//! JSON output format writer.

use crate::error::{Error, Result};
use crate::output::OutputWriter;
use crate::timeline::{FrameRate, TrackSummary, format_hms, frames_to_seconds};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// JSON report file structure.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    /// Timeline document(s) the report was built from.
    pub sources: Vec<String>,
    /// Report timestamp.
    pub analysis_date: DateTime<Utc>,
    /// Frame rate used for duration conversion.
    pub frame_rate: f64,
    /// Per-track rows in first-seen order.
    pub tracks: Vec<TrackSummary>,
    /// Totals across all tracks.
    pub summary: JsonSummary,
}

/// Totals across all tracks.
#[derive(Debug, Serialize)]
pub struct JsonSummary {
    /// Number of distinct tracks.
    pub tracks: usize,
    /// Sum of track repeats.
    pub total_repeats: u64,
    /// Sum of track frames.
    pub total_frames: u64,
    /// `total_frames` in whole seconds.
    pub total_seconds: u64,
    /// `total_seconds` as `HH:MM:SS`.
    pub total_duration: String,
}

/// Writer for JSON report files.
///
/// Rows are buffered and the document is written on [`OutputWriter::finalize`].
pub struct JsonWriter {
    output_path: PathBuf,
    sources: Vec<String>,
    frame_rate: FrameRate,
    tracks: Vec<TrackSummary>,
}

impl JsonWriter {
    /// Create a JSON writer for `output_path`.
    pub fn new(output_path: &Path, sources: Vec<String>, frame_rate: FrameRate) -> Self {
        Self {
            output_path: output_path.to_path_buf(),
            sources,
            frame_rate,
            tracks: Vec::new(),
        }
    }

    fn build_report(&mut self) -> JsonReport {
        let tracks = std::mem::take(&mut self.tracks);
        let total_frames = tracks
            .iter()
            .fold(0_u64, |sum, t| sum.saturating_add(t.frames));
        let total_seconds = frames_to_seconds(total_frames, self.frame_rate);

        JsonReport {
            sources: self.sources.clone(),
            analysis_date: Utc::now(),
            frame_rate: self.frame_rate.fps(),
            summary: JsonSummary {
                tracks: tracks.len(),
                total_repeats: tracks
                    .iter()
                    .fold(0_u64, |sum, t| sum.saturating_add(t.repeats)),
                total_frames,
                total_seconds,
                total_duration: format_hms(total_seconds),
            },
            tracks,
        }
    }
}

impl OutputWriter for JsonWriter {
    fn write_header(&mut self) -> Result<()> {
        Ok(())
    }

    fn write_track(&mut self, track: &TrackSummary) -> Result<()> {
        self.tracks.push(track.clone());
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        let report = self.build_report();
        let file = File::create(&self.output_path).map_err(|e| Error::OutputCreate {
            path: self.output_path.clone(),
            source: e,
        })?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, &report).map_err(|e| Error::JsonWrite {
            path: self.output_path.clone(),
            source: e,
        })?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::output::write_report;
    use tempfile::tempdir;

    fn summary(track: &str, repeats: u64, frames: u64) -> TrackSummary {
        TrackSummary {
            prefix: "lib_x_1_".to_string(),
            track: track.to_string(),
            author: String::new(),
            repeats,
            duration: String::new(),
            seconds: 0,
            frames,
        }
    }

    #[test]
    fn test_json_report_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("project.tracks.json");

        let mut writer = JsonWriter::new(
            &path,
            vec!["project.xml".to_string()],
            FrameRate::default(),
        );
        write_report(
            &mut writer,
            &[summary("One", 2, 1500), summary("Two", 1, 90_000)],
        )
        .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

        assert_eq!(value["sources"][0], "project.xml");
        assert_eq!(value["frame_rate"], 25.0);
        assert_eq!(value["tracks"].as_array().unwrap().len(), 2);
        assert_eq!(value["tracks"][0]["track"], "One");
        assert_eq!(value["summary"]["tracks"], 2);
        assert_eq!(value["summary"]["total_repeats"], 3);
        assert_eq!(value["summary"]["total_frames"], 91_500);
        assert_eq!(value["summary"]["total_seconds"], 3660);
        assert_eq!(value["summary"]["total_duration"], "01:01:00");
    }

    #[test]
    fn test_json_summary_saturates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("huge.tracks.json");

        let mut writer = JsonWriter::new(&path, vec![], FrameRate::default());
        write_report(
            &mut writer,
            &[summary("One", u64::MAX, u64::MAX), summary("Two", 1, 1)],
        )
        .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["summary"]["total_frames"], u64::MAX);
        assert_eq!(value["summary"]["total_repeats"], u64::MAX);
    }

    #[test]
    fn test_json_create_error_names_the_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("promo.tracks.json");

        let mut writer = JsonWriter::new(&path, vec![], FrameRate::default());
        let err = write_report(&mut writer, &[]).unwrap_err();
        assert!(matches!(&err, Error::OutputCreate { path: p, .. } if *p == path));
    }

    #[test]
    fn test_json_empty_report() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.tracks.json");

        let mut writer = JsonWriter::new(&path, vec![], FrameRate::default());
        write_report(&mut writer, &[]).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(value["tracks"].as_array().unwrap().is_empty());
        assert_eq!(value["summary"]["total_duration"], "00:00:00");
    }
}
