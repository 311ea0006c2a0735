//! Output writer trait definition.

use crate::error::Result;
use crate::timeline::TrackSummary;

/// Trait for writing track usage reports.
pub trait OutputWriter {
    /// Write the report header (if applicable).
    fn write_header(&mut self) -> Result<()>;

    /// Write a single track row.
    fn write_track(&mut self, track: &TrackSummary) -> Result<()>;

    /// Finalize the output (flush, close, etc.).
    fn finalize(&mut self) -> Result<()>;
}

/// Write a whole report through `writer`.
pub fn write_report(writer: &mut dyn OutputWriter, tracks: &[TrackSummary]) -> Result<()> {
    writer.write_header()?;
    for track in tracks {
        writer.write_track(track)?;
    }
    writer.finalize()
}
