//! Configuration schema definitions
//!
//! Every section and field has a default, so an empty file (or no file at all)
//! yields the stock behaviour.

use crate::anonymization::config::{
    DEFAULT_EMAIL_PLACEHOLDER, DEFAULT_END_YEAR, DEFAULT_FIXTURES_DIR, DEFAULT_HTML_PATTERN,
    DEFAULT_JSON_PATTERN, DEFAULT_MAX_GRADE_DELAY_DAYS, DEFAULT_NEW_FIRSTNAME,
    DEFAULT_NEW_LASTNAME, DEFAULT_START_YEAR, DEFAULT_STUDENT_ID_PLACEHOLDER,
};
use crate::anonymization::generator::DEFAULT_SEED;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixtureConfig {
    /// Where fixtures live and how they are named
    #[serde(default)]
    pub fixtures: FixturesConfig,

    /// Substitute names
    #[serde(default)]
    pub names: NamesConfig,

    /// Substitute values and generator settings
    #[serde(default)]
    pub substitutes: SubstitutesConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl FixtureConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.fixtures.validate()?;
        self.names.validate()?;
        self.substitutes.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Fixture location configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixturesConfig {
    /// Directory containing the fixtures
    #[serde(default = "default_fixtures_dir")]
    pub dir: PathBuf,

    /// Glob for HTML fixtures
    #[serde(default = "default_html_pattern")]
    pub html_pattern: String,

    /// Glob for JSON fixtures
    #[serde(default = "default_json_pattern")]
    pub json_pattern: String,
}

impl Default for FixturesConfig {
    fn default() -> Self {
        Self {
            dir: default_fixtures_dir(),
            html_pattern: default_html_pattern(),
            json_pattern: default_json_pattern(),
        }
    }
}

impl FixturesConfig {
    fn validate(&self) -> Result<(), String> {
        for (field, pattern) in [
            ("fixtures.html_pattern", &self.html_pattern),
            ("fixtures.json_pattern", &self.json_pattern),
        ] {
            if pattern.trim().is_empty() {
                return Err(format!("{field} cannot be empty"));
            }
            glob::Pattern::new(pattern)
                .map_err(|e| format!("Invalid {field} '{pattern}': {e}"))?;
        }
        Ok(())
    }
}

/// Substitute name configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamesConfig {
    /// First name written in place of the original
    #[serde(default = "default_new_firstname")]
    pub new_firstname: String,

    /// Last name written in place of the original
    #[serde(default = "default_new_lastname")]
    pub new_lastname: String,
}

impl Default for NamesConfig {
    fn default() -> Self {
        Self {
            new_firstname: default_new_firstname(),
            new_lastname: default_new_lastname(),
        }
    }
}

impl NamesConfig {
    fn validate(&self) -> Result<(), String> {
        if self.new_firstname.trim().is_empty() {
            return Err("names.new_firstname cannot be empty".to_string());
        }
        if self.new_lastname.trim().is_empty() {
            return Err("names.new_lastname cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Substitute value configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubstitutesConfig {
    /// Address replacing every email in HTML fixtures
    #[serde(default = "default_email")]
    pub email: String,

    /// Value replacing every 7-8 digit student number
    #[serde(default = "default_student_id")]
    pub student_id: String,

    /// First year of the substitute date range
    #[serde(default = "default_start_year")]
    pub start_year: i32,

    /// Last year of the substitute date range
    #[serde(default = "default_end_year")]
    pub end_year: i32,

    /// Maximum days between submission and grading
    #[serde(default = "default_max_grade_delay_days")]
    pub max_grade_delay_days: u64,

    /// Generator seed
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for SubstitutesConfig {
    fn default() -> Self {
        Self {
            email: default_email(),
            student_id: default_student_id(),
            start_year: default_start_year(),
            end_year: default_end_year(),
            max_grade_delay_days: default_max_grade_delay_days(),
            seed: default_seed(),
        }
    }
}

impl SubstitutesConfig {
    fn validate(&self) -> Result<(), String> {
        if self.email.is_empty() {
            return Err("substitutes.email cannot be empty".to_string());
        }
        if self.student_id.is_empty() {
            return Err("substitutes.student_id cannot be empty".to_string());
        }
        if self.start_year > self.end_year {
            return Err(format!(
                "substitutes.start_year ({}) must not be after substitutes.end_year ({})",
                self.start_year, self.end_year
            ));
        }
        if !(1..=365).contains(&self.max_grade_delay_days) {
            return Err(format!(
                "substitutes.max_grade_delay_days must be between 1 and 365, got {}",
                self.max_grade_delay_days
            ));
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled = true".to_string());
        }
        Ok(())
    }
}

fn default_fixtures_dir() -> PathBuf {
    PathBuf::from(DEFAULT_FIXTURES_DIR)
}

fn default_html_pattern() -> String {
    DEFAULT_HTML_PATTERN.to_string()
}

fn default_json_pattern() -> String {
    DEFAULT_JSON_PATTERN.to_string()
}

fn default_new_firstname() -> String {
    DEFAULT_NEW_FIRSTNAME.to_string()
}

fn default_new_lastname() -> String {
    DEFAULT_NEW_LASTNAME.to_string()
}

fn default_email() -> String {
    DEFAULT_EMAIL_PLACEHOLDER.to_string()
}

fn default_student_id() -> String {
    DEFAULT_STUDENT_ID_PLACEHOLDER.to_string()
}

fn default_start_year() -> i32 {
    DEFAULT_START_YEAR
}

fn default_end_year() -> i32 {
    DEFAULT_END_YEAR
}

fn default_max_grade_delay_days() -> u64 {
    DEFAULT_MAX_GRADE_DELAY_DAYS
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
