//! Timeline usage extraction.
//!
//! This module turns a Premiere Pro XML export into per-track usage totals:
//! filenames are decomposed into prefix, title and author, linked audio
//! channels are counted once, and clip durations are summed per
//! `(prefix, title)` before conversion to wall-clock time.

mod aggregate;
mod duration;
mod filename;
mod reader;

pub use aggregate::{TrackAggregate, TrackKey, TrackSummary, TrackTally};
pub use duration::{FrameRate, format_hms, frames_to_seconds};
pub use filename::{ParsedAsset, decompose_filename};
pub use reader::{
    ClipOutcome, RawClip, ReadStats, TimelineReader, TimelineScan, read_timeline_file,
    read_timeline_str,
};
