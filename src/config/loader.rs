//! Configuration loader with TOML parsing

use super::schema::FixtureConfig;
use crate::domain::errors::AnonymizerError;
use crate::domain::result::Result;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Parses it into [`FixtureConfig`], filling in defaults
/// 3. Validates the configuration
///
/// # Errors
///
/// Returns [`AnonymizerError::Configuration`] if the file is missing or
/// unreadable, the TOML is malformed, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use fixture_anonymizer::config::loader::load_config;
///
/// let config = load_config("anonymize.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<FixtureConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(AnonymizerError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        AnonymizerError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let config = parse_config(&contents)?;

    tracing::debug!(path = %path.display(), "Configuration loaded");

    Ok(config)
}

/// Parses and validates configuration from TOML text
pub fn parse_config(contents: &str) -> Result<FixtureConfig> {
    let config: FixtureConfig = toml::from_str(contents)?;

    config.validate().map_err(|e| {
        AnonymizerError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}
