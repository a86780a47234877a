//! Seeded source of substitute grades and dates
//!
//! A single [`SubstituteGenerator`] is created per run and passed by `&mut`
//! through every pass, so the sequence of draws depends only on the seed and
//! the order in which fixtures are processed.

use crate::domain::date::{DateRange, FixtureDate};
use crate::domain::grade::PASSING_GRADES;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed used when none is configured
pub const DEFAULT_SEED: u64 = 42;

/// Deterministic generator for substitute values
pub struct SubstituteGenerator {
    rng: StdRng,
    range: DateRange,
    max_grade_delay_days: u64,
}

impl SubstituteGenerator {
    /// Create a generator seeded with `seed`
    ///
    /// `max_grade_delay_days` bounds the gap between a submission and its
    /// grading date; values below 1 are raised to 1.
    pub fn new(seed: u64, range: DateRange, max_grade_delay_days: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            range,
            max_grade_delay_days: max_grade_delay_days.max(1),
        }
    }

    /// Draw a passing grade uniformly
    pub fn grade(&mut self) -> &'static str {
        PASSING_GRADES[self.rng.gen_range(0..PASSING_GRADES.len())]
    }

    /// Draw a date uniformly from the configured range
    pub fn date(&mut self) -> FixtureDate {
        let offset = self.rng.gen_range(0..=self.range.span_days());
        // The offset never exceeds the span, so the sum stays within the range
        self.range
            .start()
            .checked_add_days(offset)
            .unwrap_or_else(|| self.range.end())
    }

    /// Draw a date 1..=max_grade_delay_days after `base`
    ///
    /// Returns `None` only if the result cannot be represented.
    pub fn date_after(&mut self, base: FixtureDate) -> Option<FixtureDate> {
        let delay = self.rng.gen_range(1..=self.max_grade_delay_days);
        base.checked_add_days(delay)
    }

    /// The range substitute dates are drawn from
    pub fn range(&self) -> &DateRange {
        &self.range
    }

    /// Upper bound for the grading delay in days
    pub fn max_grade_delay_days(&self) -> u64 {
        self.max_grade_delay_days
    }
}
