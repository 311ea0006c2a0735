//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "tracktally";

/// Config file name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default timeline frame rate (PAL).
pub const DEFAULT_FRAME_RATE: f64 = 25.0;

/// Frame rate bounds accepted from the command line and config file.
pub mod frame_rate {
    /// Lowest accepted frame rate.
    pub const MIN: f64 = 1.0;
    /// Highest accepted frame rate.
    pub const MAX: f64 = 120.0;
}

/// Timeline document element and attribute names (Premiere Pro / FCP7 XML).
pub mod xml {
    /// One placement of a media asset on a track.
    pub const CLIP_ITEM: &str = "clipitem";
    /// Container for a single link cross-reference.
    pub const LINK: &str = "link";
    /// Identifier of a linked sibling clip.
    pub const LINK_CLIP_REF: &str = "linkclipref";
    /// File reference.
    pub const FILE: &str = "file";
    /// Name field (both on `file` and on the clip itself).
    pub const NAME: &str = "name";
    /// In point, in frames.
    pub const IN: &str = "in";
    /// Out point, in frames.
    pub const OUT: &str = "out";
    /// Clip identifier attribute.
    pub const ID: &str = "id";
}

/// File extension of timeline documents picked up from directories.
pub const TIMELINE_EXTENSION: &str = "xml";

/// Output file extensions by format.
pub mod output_extensions {
    /// CSV output extension.
    pub const CSV: &str = ".tracks.csv";
    /// JSON output extension.
    pub const JSON: &str = ".tracks.json";
}

/// Default stem of combined output files.
pub const DEFAULT_COMBINED_NAME: &str = "tracks_duration";

/// Report column headers, in output order.
pub const REPORT_HEADERS: [&str; 7] = [
    "Prefix",
    "Track",
    "Author",
    "Repeats",
    "Duration (HH:MM:SS)",
    "Seconds",
    "Frames",
];

/// UTF-8 Byte Order Mark for Excel compatibility in CSV files.
pub const UTF8_BOM: &[u8; 3] = b"\xEF\xBB\xBF";
