//! CSV output format writer.

use crate::constants::{REPORT_HEADERS, UTF8_BOM};
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use crate::timeline::TrackSummary;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// CSV format output writer.
///
/// One header row, then one row per track:
/// `Prefix,Track,Author,Repeats,Duration (HH:MM:SS),Seconds,Frames`.
pub struct CsvWriter<W: Write> {
    writer: csv::Writer<W>,
    path: PathBuf,
}

impl CsvWriter<File> {
    /// Create a CSV file at `path`, optionally starting with a UTF-8 BOM.
    pub fn create(path: &Path, bom: bool) -> Result<Self> {
        let file = File::create(path).map_err(|e| Error::OutputCreate {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::new(file, path, bom)
    }
}

impl<W: Write> CsvWriter<W> {
    /// Wrap an arbitrary sink. `path` is only used in error messages.
    pub fn new(mut inner: W, path: &Path, bom: bool) -> Result<Self> {
        if bom {
            inner.write_all(UTF8_BOM)?;
        }
        Ok(Self {
            writer: csv::Writer::from_writer(inner),
            path: path.to_path_buf(),
        })
    }

    fn wrap(&self, source: csv::Error) -> Error {
        Error::CsvWrite {
            path: self.path.clone(),
            source,
        }
    }

    /// Flush and return the underlying sink.
    pub fn into_inner(self) -> Result<W> {
        let path = self.path;
        self.writer.into_inner().map_err(|e| Error::CsvWrite {
            path,
            source: e.into_error().into(),
        })
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_header(&mut self) -> Result<()> {
        self.writer
            .write_record(REPORT_HEADERS)
            .map_err(|e| self.wrap(e))
    }

    fn write_track(&mut self, track: &TrackSummary) -> Result<()> {
        let repeats = track.repeats.to_string();
        let seconds = track.seconds.to_string();
        let frames = track.frames.to_string();

        self.writer
            .write_record([
                track.prefix.as_str(),
                track.track.as_str(),
                track.author.as_str(),
                repeats.as_str(),
                track.duration.as_str(),
                seconds.as_str(),
                frames.as_str(),
            ])
            .map_err(|e| self.wrap(e))
    }

    fn finalize(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
