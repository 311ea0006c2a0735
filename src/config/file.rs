//! Configuration file loading.

use crate::config::{Config, validate_config};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Load and validate configuration from a TOML file.
///
/// Returns default config if the file does not exist.
pub fn load_config_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!("No config file at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config: Config = toml::from_str(&contents).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    validate_config(&config)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Load configuration from `explicit` or the default platform-specific path.
///
/// Without an explicit path, an undeterminable config directory falls back
/// to defaults instead of failing.
pub fn load_default_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => load_config_file(path),
        None => super::config_file_path(None)
            .map_or_else(|_| Ok(Config::default()), |path| load_config_file(&path)),
    }
}

/// Save configuration to a TOML file.
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::ConfigWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let contents =
        toml::to_string_pretty(config).map_err(|e| Error::ConfigSerialize { source: e })?;

    std::fs::write(path, contents).map_err(|e| Error::ConfigWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Save configuration to `explicit` or the default platform-specific path.
pub fn save_default_config(config: &Config, explicit: Option<&Path>) -> Result<PathBuf> {
    let path = super::config_file_path(explicit)?;
    save_config(config, &path)?;
    Ok(path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    #[test]
    fn test_load_nonexistent_file_returns_default() {
        let config = load_config_file(Path::new("/nonexistent/path/config.toml")).unwrap();
        assert_eq!(config.defaults.frame_rate, 25.0);
        assert!(config.output.csv_bom);
    }

    #[test]
    fn test_load_valid_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[defaults]
frame_rate = 29.97
formats = ["csv", "json"]

[output]
csv_bom = false
"#
        )
        .unwrap();

        let config = load_config_file(file.path()).unwrap();
        assert_eq!(config.defaults.frame_rate, 29.97);
        assert_eq!(
            config.defaults.formats,
            vec![OutputFormat::Csv, OutputFormat::Json]
        );
        assert!(!config.output.csv_bom);
        assert_eq!(config.output.combined_name, "tracks_duration");
    }

    #[test]
    fn test_load_invalid_toml_returns_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "this is not valid toml {{{{").unwrap();

        let result = load_config_file(file.path());
        assert!(matches!(result, Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn test_load_out_of_range_frame_rate_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[defaults]\nframe_rate = 0.0").unwrap();

        let result = load_config_file(file.path());
        assert!(matches!(result, Err(Error::InvalidFrameRate { .. })));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.defaults.frame_rate = 24.0;
        save_config(&config, &path).unwrap();

        let loaded = load_config_file(&path).unwrap();
        assert_eq!(loaded.defaults.frame_rate, 24.0);
    }
}
