//! Error types for tracktally.

/// Result type alias for tracktally operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for tracktally.
///
/// Only whole-document failures live here. A malformed clip entry inside an
/// otherwise readable timeline is skipped by the reader and never surfaces
/// as an error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Frame rate is not a finite positive number in the accepted range.
    #[error("invalid frame rate: {value} (must be between {min} and {max})")]
    InvalidFrameRate {
        /// Rejected value.
        value: f64,
        /// Lowest accepted value.
        min: f64,
        /// Highest accepted value.
        max: f64,
    },

    /// Timeline document does not exist.
    #[error("timeline file not found: {path}")]
    TimelineNotFound {
        /// Path to the missing document.
        path: std::path::PathBuf,
    },

    /// Timeline document exists but could not be read.
    #[error("failed to read timeline file '{path}'")]
    TimelineRead {
        /// Path to the document.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Timeline document is not well-formed XML.
    #[error("failed to parse timeline XML from {origin}")]
    TimelineParse {
        /// Where the document came from (a path, or `<memory>`).
        origin: String,
        /// Underlying XML error.
        #[source]
        source: roxmltree::Error,
    },

    /// Conflicting or incomplete command-line arguments.
    #[error("{message}")]
    Usage {
        /// Description of the problem.
        message: String,
    },

    /// Some timelines could not be processed.
    #[error("{failed} of {total} timeline file(s) failed")]
    ProcessingFailed {
        /// Number of failed files.
        failed: usize,
        /// Number of files attempted.
        total: usize,
    },

    /// No timeline files found in the provided inputs.
    #[error("no timeline XML files found in the provided paths")]
    NoTimelineFiles,

    /// Failed to create a report file.
    #[error("failed to create output file '{path}'")]
    OutputCreate {
        /// Path to the report file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write CSV output.
    #[error("failed to write CSV output '{path}'")]
    CsvWrite {
        /// Path to the CSV file (`-` for stdout).
        path: std::path::PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// Failed to write JSON output file.
    #[error("failed to write JSON output file '{path}'")]
    JsonWrite {
        /// Path to the JSON file.
        path: std::path::PathBuf,
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to create output directory.
    #[error("failed to create output directory '{path}'")]
    OutputDirCreateFailed {
        /// Path to the output directory.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
