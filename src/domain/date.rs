//! Fixture dates in `DD.MM.YYYY` form
//!
//! Submission and grading dates in the JSON fixtures use the German day-first
//! notation. [`FixtureDate`] parses and renders that notation, and
//! [`DateRange`] bounds the substitute dates.

use super::errors::AnonymizerError;
use super::result::Result;
use chrono::{Days, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// chrono format string for fixture dates
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A calendar date rendered as `DD.MM.YYYY`
///
/// # Examples
///
/// ```
/// use fixture_anonymizer::domain::date::FixtureDate;
///
/// let date = FixtureDate::parse("31.12.2024").unwrap();
/// assert_eq!(date.checked_add_days(1).unwrap().to_string(), "01.01.2025");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixtureDate(NaiveDate);

impl FixtureDate {
    /// Parses a `DD.MM.YYYY` string
    pub fn parse(text: &str) -> Result<Self> {
        NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map(Self)
            .map_err(|e| AnonymizerError::Validation(format!("Invalid date '{text}': {e}")))
    }

    /// Adds `days` days, returning `None` on calendar overflow
    pub fn checked_add_days(&self, days: u64) -> Option<Self> {
        self.0.checked_add_days(Days::new(days)).map(Self)
    }

    /// Number of days from `earlier` to `self` (negative if `self` is earlier)
    pub fn days_since(&self, earlier: &FixtureDate) -> i64 {
        self.0.signed_duration_since(earlier.0).num_days()
    }
}

impl fmt::Display for FixtureDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for FixtureDate {
    type Err = AnonymizerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Inclusive range of dates substitutes are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: FixtureDate,
    end: FixtureDate,
}

impl DateRange {
    /// Creates the range `start_year-01-01 ..= end_year-12-31`
    ///
    /// # Errors
    ///
    /// Returns a validation error if `start_year > end_year` or a year cannot
    /// be represented.
    pub fn from_years(start_year: i32, end_year: i32) -> Result<Self> {
        if start_year > end_year {
            return Err(AnonymizerError::Validation(format!(
                "start_year {start_year} is after end_year {end_year}"
            )));
        }

        let start = NaiveDate::from_ymd_opt(start_year, 1, 1).ok_or_else(|| {
            AnonymizerError::Validation(format!("Unsupported start_year: {start_year}"))
        })?;
        let end = NaiveDate::from_ymd_opt(end_year, 12, 31).ok_or_else(|| {
            AnonymizerError::Validation(format!("Unsupported end_year: {end_year}"))
        })?;

        Ok(Self {
            start: FixtureDate(start),
            end: FixtureDate(end),
        })
    }

    /// First day of the range
    pub fn start(&self) -> FixtureDate {
        self.start
    }

    /// Last day of the range
    pub fn end(&self) -> FixtureDate {
        self.end
    }

    /// Number of days between the first and the last day
    pub fn span_days(&self) -> u64 {
        // start <= end is guaranteed by construction
        self.end.days_since(&self.start).unsigned_abs()
    }

    /// Returns true if `date` lies within the range
    pub fn contains(&self, date: &FixtureDate) -> bool {
        self.start <= *date && *date <= self.end
    }
}
