//! Configuration validation.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::timeline::FrameRate;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_defaults(config)?;
    validate_output(config)?;
    Ok(())
}

/// Validate default settings.
fn validate_defaults(config: &Config) -> Result<()> {
    FrameRate::new(config.defaults.frame_rate)?;

    if config.defaults.formats.is_empty() {
        return Err(Error::ConfigValidation {
            message: "formats must list at least one output format".to_string(),
        });
    }

    Ok(())
}

/// Validate output settings.
fn validate_output(config: &Config) -> Result<()> {
    let name = config.output.combined_name.trim();

    if name.is_empty() {
        return Err(Error::ConfigValidation {
            message: "combined_name must not be empty".to_string(),
        });
    }

    if name.contains(['/', '\\']) {
        return Err(Error::ConfigValidation {
            message: format!("combined_name must be a file stem, got '{name}'"),
        });
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_zero_frame_rate() {
        let mut config = Config::default();
        config.defaults.frame_rate = 0.0;
        let result = validate_config(&config);
        assert!(matches!(result.unwrap_err(), Error::InvalidFrameRate { .. }));
    }

    #[test]
    fn test_validate_frame_rate_too_high() {
        let mut config = Config::default();
        config.defaults.frame_rate = 240.0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_empty_formats() {
        let mut config = Config::default();
        config.defaults.formats.clear();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_combined_name() {
        let mut config = Config::default();
        config.output.combined_name = "  ".to_string();
        assert!(validate_config(&config).is_err());

        config.output.combined_name = "reports/all".to_string();
        assert!(validate_config(&config).is_err());

        config.output.combined_name = "royalties_q3".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
