//! CLI interface and argument parsing
//!
//! The tool has a single action, so the anonymization flags sit directly on
//! [`Cli`] rather than behind a subcommand.

pub mod commands;

use crate::config::{load_config, FixtureConfig};
use crate::domain::Result;
use clap::Parser;
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  fixture-anonymizer --firstname John --lastname Doe
  fixture-anonymizer -f John -l Doe --new-firstname Max --new-lastname Mustermann
  fixture-anonymizer  # Just anonymize grades and dates without name changes";

/// Anonymize personal data in test fixtures
#[derive(Parser, Debug)]
#[command(name = "fixture-anonymizer")]
#[command(version, about, long_about = None)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(flatten)]
    pub anonymize: commands::anonymize::AnonymizeArgs,
}

impl Cli {
    /// Load the configuration file if one was given, otherwise defaults
    pub fn load_config(&self) -> Result<FixtureConfig> {
        match &self.config {
            Some(path) => load_config(path),
            None => Ok(FixtureConfig::default()),
        }
    }
}
