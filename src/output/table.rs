//! Numbered track listing for the terminal.

use crate::error::Result;
use crate::output::OutputWriter;
use crate::timeline::TrackSummary;
use std::io::Write;

/// Writes `01. [prefix] Track — HH:MM:SS (Author) ×N` lines.
pub struct TableWriter<W: Write> {
    out: W,
    title: String,
    row: usize,
}

impl<W: Write> TableWriter<W> {
    /// Create a listing titled `title` (usually the source file name).
    pub fn new(out: W, title: impl Into<String>) -> Self {
        Self {
            out,
            title: title.into(),
            row: 0,
        }
    }

    /// Return the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputWriter for TableWriter<W> {
    fn write_header(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}:", self.title)?;
        Ok(())
    }

    fn write_track(&mut self, track: &TrackSummary) -> Result<()> {
        self.row += 1;
        write!(
            self.out,
            "{:02}. [{}] {} — {}",
            self.row, track.prefix, track.track, track.duration
        )?;
        if !track.author.is_empty() {
            write!(self.out, " ({})", track.author)?;
        }
        writeln!(self.out, " ×{}", track.repeats)?;
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        if self.row == 0 {
            writeln!(self.out, "  (no tracks)")?;
        }
        self.out.flush()?;
        Ok(())
    }
}
