//! Domain error types
//!
//! This module defines the error hierarchy for the fixture anonymizer.
//! TOML parse errors are converted into string payloads so callers never
//! depend on the `toml` types directly.

use thiserror::Error;

/// Main anonymizer error type
///
/// Used by the domain, configuration and logging layers. The anonymization
/// passes wrap these in `anyhow` errors carrying the fixture path.
#[derive(Debug, Error)]
pub enum AnonymizerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A fixture file does not have the expected shape
    #[error("Invalid fixture: {0}")]
    InvalidFixture(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<toml::de::Error> for AnonymizerError {
    fn from(err: toml::de::Error) -> Self {
        AnonymizerError::Configuration(format!("TOML parse error: {err}"))
    }
}
