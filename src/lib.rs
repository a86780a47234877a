// Fixture Anonymizer - Scrub personal data from recorded test fixtures
// Copyright (c) 2025 Fixture Anonymizer Contributors
// Licensed under the MIT License

//! # Fixture Anonymizer
//!
//! Rewrites recorded HTML pages and JSON API responses of a university
//! exam portal so they can be committed as test fixtures without leaking
//! personal data.
//!
//! ## Overview
//!
//! A run makes two passes over the fixtures directory:
//!
//! - **HTML pass** replaces the student's first and last name (whole word,
//!   case-insensitive), every email address and every 7-8 digit student ID
//! - **JSON pass** replaces grades, submission dates and grading dates in the
//!   exam results document, keeps the HTML tooltips consistent with the new
//!   values and forces failed exams to the failing grade
//!
//! All random draws come from one seeded generator, so the same seed over the
//! same input always produces byte-identical output.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`anonymization`] - Engine, anonymizers, substitute generator and report
//! - [`domain`] - Grades, fixture dates and error types
//! - [`config`] - Optional TOML configuration
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fixture_anonymizer::anonymization::{AnonymizationConfig, AnonymizationEngine};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AnonymizationConfig {
//!         seed: 7,
//!         ..Default::default()
//!     };
//!
//!     let mut engine = AnonymizationEngine::new(config)?;
//!     let report = engine.run()?;
//!
//!     println!("{}", report.format_console());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Domain, configuration and logging operations return [`domain::Result`],
//! backed by [`domain::AnonymizerError`]. The engine and anonymizers return
//! `anyhow::Result` so errors carry the fixture path. The first unreadable,
//! malformed or structurally unexpected fixture aborts the run.

pub mod anonymization;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
