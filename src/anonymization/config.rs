//! Anonymization run configuration
//!
//! [`AnonymizationConfig`] is the fully resolved set of options for one run,
//! assembled from built-in defaults, the optional TOML file and CLI flags.

use crate::anonymization::generator::DEFAULT_SEED;
use crate::domain::date::DateRange;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Default fixture directory, relative to the working directory
pub const DEFAULT_FIXTURES_DIR: &str = "tests/fixtures";
/// Default glob for HTML fixtures
pub const DEFAULT_HTML_PATTERN: &str = "curriculum_*.html";
/// Default glob for JSON fixtures
pub const DEFAULT_JSON_PATTERN: &str = "expected_output_*.json";
/// Default substitute first name
pub const DEFAULT_NEW_FIRSTNAME: &str = "Max";
/// Default substitute last name
pub const DEFAULT_NEW_LASTNAME: &str = "Mustermann";
/// Address every email in an HTML fixture is replaced with
pub const DEFAULT_EMAIL_PLACEHOLDER: &str = "max.mustermann@example.com";
/// Value every 7-8 digit student number is replaced with
pub const DEFAULT_STUDENT_ID_PLACEHOLDER: &str = "12345678";
/// First year substitute dates are drawn from
pub const DEFAULT_START_YEAR: i32 = 2023;
/// Last year substitute dates are drawn from
pub const DEFAULT_END_YEAR: i32 = 2025;
/// Maximum days between submission and grading
pub const DEFAULT_MAX_GRADE_DELAY_DAYS: u64 = 14;

/// A name token to replace and its substitute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameReplacement {
    pub old: String,
    pub new: String,
}

impl NameReplacement {
    /// Build a replacement only if both names are non-empty
    ///
    /// # Examples
    ///
    /// ```
    /// use fixture_anonymizer::anonymization::config::NameReplacement;
    ///
    /// assert!(NameReplacement::from_pair(Some("Jane"), "Max").is_some());
    /// assert!(NameReplacement::from_pair(None, "Max").is_none());
    /// assert!(NameReplacement::from_pair(Some("Jane"), "").is_none());
    /// ```
    pub fn from_pair(old: Option<&str>, new: &str) -> Option<Self> {
        match old {
            Some(old) if !old.is_empty() && !new.is_empty() => Some(Self {
                old: old.to_string(),
                new: new.to_string(),
            }),
            _ => None,
        }
    }
}

/// Resolved options for one anonymization run
#[derive(Debug, Clone)]
pub struct AnonymizationConfig {
    /// Directory scanned for fixtures (non-recursive)
    pub fixtures_dir: PathBuf,

    /// Glob matched against file names for the HTML pass
    pub html_pattern: String,

    /// Glob matched against file names for the JSON pass
    pub json_pattern: String,

    /// First name substitution, if requested
    pub first_name: Option<NameReplacement>,

    /// Last name substitution, if requested
    pub last_name: Option<NameReplacement>,

    /// Replacement for email addresses in HTML fixtures
    pub email_placeholder: String,

    /// Replacement for 7-8 digit student numbers in HTML fixtures
    pub student_id_placeholder: String,

    /// First year of the substitute date range
    pub start_year: i32,

    /// Last year of the substitute date range
    pub end_year: i32,

    /// Upper bound for the submission-to-grading gap
    pub max_grade_delay_days: u64,

    /// Seed for the substitute generator
    pub seed: u64,

    /// Process everything but write nothing
    pub dry_run: bool,
}

impl Default for AnonymizationConfig {
    fn default() -> Self {
        Self {
            fixtures_dir: PathBuf::from(DEFAULT_FIXTURES_DIR),
            html_pattern: DEFAULT_HTML_PATTERN.to_string(),
            json_pattern: DEFAULT_JSON_PATTERN.to_string(),
            first_name: None,
            last_name: None,
            email_placeholder: DEFAULT_EMAIL_PLACEHOLDER.to_string(),
            student_id_placeholder: DEFAULT_STUDENT_ID_PLACEHOLDER.to_string(),
            start_year: DEFAULT_START_YEAR,
            end_year: DEFAULT_END_YEAR,
            max_grade_delay_days: DEFAULT_MAX_GRADE_DELAY_DAYS,
            seed: DEFAULT_SEED,
            dry_run: false,
        }
    }
}

impl AnonymizationConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.html_pattern.trim().is_empty() {
            anyhow::bail!("html_pattern cannot be empty");
        }
        if self.json_pattern.trim().is_empty() {
            anyhow::bail!("json_pattern cannot be empty");
        }
        glob::Pattern::new(&self.html_pattern)
            .with_context(|| format!("Invalid html_pattern: {}", self.html_pattern))?;
        glob::Pattern::new(&self.json_pattern)
            .with_context(|| format!("Invalid json_pattern: {}", self.json_pattern))?;

        if self.email_placeholder.is_empty() {
            anyhow::bail!("email placeholder cannot be empty");
        }
        if self.student_id_placeholder.is_empty() {
            anyhow::bail!("student_id placeholder cannot be empty");
        }
        if self.max_grade_delay_days == 0 {
            anyhow::bail!("max_grade_delay_days must be at least 1");
        }

        self.date_range().context("Invalid substitute year range")?;

        Ok(())
    }

    /// The range substitute dates are drawn from
    pub fn date_range(&self) -> Result<DateRange> {
        Ok(DateRange::from_years(self.start_year, self.end_year)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnonymizationConfig::default();
        assert_eq!(config.fixtures_dir, PathBuf::from("tests/fixtures"));
        assert_eq!(config.html_pattern, "curriculum_*.html");
        assert_eq!(config.json_pattern, "expected_output_*.json");
        assert_eq!(config.seed, 42);
        assert!(config.first_name.is_none());
        assert!(!config.dry_run);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_inverted_years() {
        let config = AnonymizationConfig {
            start_year: 2026,
            end_year: 2023,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_delay() {
        let config = AnonymizationConfig {
            max_grade_delay_days: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_glob() {
        let config = AnonymizationConfig {
            html_pattern: "curriculum_[*.html".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_name_replacement_requires_both_names() {
        assert_eq!(
            NameReplacement::from_pair(Some("Erika"), "Max"),
            Some(NameReplacement {
                old: "Erika".to_string(),
                new: "Max".to_string()
            })
        );
        assert!(NameReplacement::from_pair(Some(""), "Max").is_none());
    }
}
