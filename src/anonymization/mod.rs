//! Anonymization of test fixtures
//!
//! This module rewrites personal data in the HTML and JSON fixtures of a test
//! suite with reproducible substitutes.
//!
//! # Architecture
//!
//! - **Discovery**: glob matching inside the fixtures directory
//! - **Anonymizers**: one [`FixtureAnonymizer`](anonymizer::FixtureAnonymizer)
//!   per fixture kind (HTML text substitution, JSON field editing)
//! - **Generator**: a seeded [`SubstituteGenerator`] threaded through both
//!   passes
//! - **Report**: per-file substitution counts
//!
//! # Usage
//!
//! ```rust,no_run
//! use fixture_anonymizer::anonymization::{AnonymizationConfig, AnonymizationEngine};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut engine = AnonymizationEngine::new(AnonymizationConfig::default())?;
//! let report = engine.run()?;
//! # Ok(())
//! # }
//! ```

pub mod anonymizer;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod generator;
pub mod report;

pub use config::AnonymizationConfig;
pub use engine::AnonymizationEngine;
pub use generator::SubstituteGenerator;
pub use report::{FileOutcome, FileStats, FixtureKind, RunReport};
