//! Fixture anonymizers
//!
//! One implementation per fixture kind. Each takes the full text of a fixture
//! and returns the rewritten text with substitution counts.

pub mod html;
pub mod json;

use crate::anonymization::generator::SubstituteGenerator;
use crate::anonymization::report::{FileStats, FixtureKind};
use anyhow::Result;

pub use html::HtmlAnonymizer;
pub use json::JsonAnonymizer;

/// Trait for per-kind fixture anonymizers
pub trait FixtureAnonymizer {
    /// Kind of fixture handled
    fn kind(&self) -> FixtureKind;

    /// Rewrite `content`, drawing substitutes from `generator`
    fn anonymize(
        &self,
        content: &str,
        generator: &mut SubstituteGenerator,
    ) -> Result<(String, FileStats)>;
}
