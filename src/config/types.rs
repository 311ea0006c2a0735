//! Configuration type definitions.

use crate::constants::{DEFAULT_COMBINED_NAME, DEFAULT_FRAME_RATE};
use serde::{Deserialize, Serialize};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default settings.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Default report settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Timeline frame rate used to convert frames to seconds.
    pub frame_rate: f64,

    /// Output formats.
    pub formats: Vec<OutputFormat>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            formats: vec![OutputFormat::Csv],
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Write a UTF-8 BOM at the start of CSV files.
    pub csv_bom: bool,

    /// File stem for combined reports.
    pub combined_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_bom: true,
            combined_name: DEFAULT_COMBINED_NAME.to_string(),
        }
    }
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-separated report.
    Csv,
    /// JSON report with summary.
    Json,
    /// Numbered listing on stdout.
    Table,
}

impl OutputFormat {
    /// Whether this format writes a file (as opposed to the terminal).
    pub const fn writes_file(self) -> bool {
        matches!(self, Self::Csv | Self::Json)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
            Self::Table => write!(f, "table"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "table" | "list" => Ok(Self::Table),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("csv".parse::<OutputFormat>().ok(), Some(OutputFormat::Csv));
        assert_eq!("JSON".parse::<OutputFormat>().ok(), Some(OutputFormat::Json));
        assert_eq!(
            "table".parse::<OutputFormat>().ok(),
            Some(OutputFormat::Table)
        );
        assert_eq!("list".parse::<OutputFormat>().ok(), Some(OutputFormat::Table));
        assert!("xlsx".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
        assert_eq!(OutputFormat::Table.to_string(), "table");
    }

    #[test]
    fn test_only_table_stays_on_terminal() {
        assert!(OutputFormat::Csv.writes_file());
        assert!(OutputFormat::Json.writes_file());
        assert!(!OutputFormat::Table.writes_file());
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_defaults_config_default_values() {
        let defaults = DefaultsConfig::default();
        assert_eq!(defaults.frame_rate, 25.0);
        assert_eq!(defaults.formats, vec![OutputFormat::Csv]);

        let output = OutputConfig::default();
        assert!(output.csv_bom);
        assert_eq!(output.combined_name, "tracks_duration");
    }
}
