//! Anonymize command implementation
//!
//! Resolves CLI flags against the configuration file, runs the engine and
//! prints progress and the final report.

use crate::anonymization::config::{AnonymizationConfig, NameReplacement};
use crate::anonymization::{AnonymizationEngine, FixtureKind};
use crate::config::FixtureConfig;
use crate::domain::AnonymizerError;
use clap::Args;
use std::path::{Path, PathBuf};

/// Exit code for unusable options or a missing fixtures directory
pub const CONFIG_ERROR_EXIT_CODE: i32 = 2;

/// Arguments for anonymizing the fixtures
#[derive(Args, Debug, Default)]
pub struct AnonymizeArgs {
    /// Original first name to replace
    #[arg(short = 'f', long)]
    pub firstname: Option<String>,

    /// Original last name to replace
    #[arg(short = 'l', long)]
    pub lastname: Option<String>,

    /// New first name (default: Max)
    #[arg(long)]
    pub new_firstname: Option<String>,

    /// New last name (default: Mustermann)
    #[arg(long)]
    pub new_lastname: Option<String>,

    /// Random seed for reproducible results (default: 42)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory containing the fixtures (default: tests/fixtures)
    #[arg(long)]
    pub fixtures_dir: Option<PathBuf>,

    /// Process fixtures and print the report without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

impl AnonymizeArgs {
    /// Merge flags over the configuration file
    ///
    /// Flags win over file values, file values win over built-in defaults.
    pub fn to_anonymization_config(&self, config: &FixtureConfig) -> AnonymizationConfig {
        let new_firstname = self
            .new_firstname
            .as_deref()
            .unwrap_or(&config.names.new_firstname);
        let new_lastname = self
            .new_lastname
            .as_deref()
            .unwrap_or(&config.names.new_lastname);

        AnonymizationConfig {
            fixtures_dir: self
                .fixtures_dir
                .clone()
                .unwrap_or_else(|| config.fixtures.dir.clone()),
            html_pattern: config.fixtures.html_pattern.clone(),
            json_pattern: config.fixtures.json_pattern.clone(),
            first_name: NameReplacement::from_pair(self.firstname.as_deref(), new_firstname),
            last_name: NameReplacement::from_pair(self.lastname.as_deref(), new_lastname),
            email_placeholder: config.substitutes.email.clone(),
            student_id_placeholder: config.substitutes.student_id.clone(),
            start_year: config.substitutes.start_year,
            end_year: config.substitutes.end_year,
            max_grade_delay_days: config.substitutes.max_grade_delay_days,
            seed: self.seed.unwrap_or(config.substitutes.seed),
            dry_run: self.dry_run,
        }
    }

    /// Execute the anonymization
    pub fn execute(&self, config: &FixtureConfig) -> anyhow::Result<i32> {
        let options = self.to_anonymization_config(config);

        tracing::info!(
            fixtures_dir = %options.fixtures_dir.display(),
            seed = options.seed,
            replace_first_name = options.first_name.is_some(),
            replace_last_name = options.last_name.is_some(),
            dry_run = options.dry_run,
            "Anonymize command invoked"
        );

        println!("Starting anonymization of test fixtures...");
        if options.dry_run {
            println!("🔍 Dry run: no fixture will be written");
        }

        let mut engine = match AnonymizationEngine::new(options) {
            Ok(engine) => engine.with_progress(print_progress),
            Err(e) => {
                tracing::error!(error = %e, "Invalid anonymization options");
                eprintln!("Error: {e:#}");
                return Ok(CONFIG_ERROR_EXIT_CODE);
            }
        };

        let report = match engine.run() {
            Ok(report) => report,
            Err(e) if is_configuration_error(&e) => {
                tracing::error!(error = %e, "Anonymization could not start");
                eprintln!("Error: {e:#}");
                return Ok(CONFIG_ERROR_EXIT_CODE);
            }
            Err(e) => return Err(e),
        };

        println!("{}", report.format_console());
        println!("Anonymization complete!");
        println!("Please review the changes and re-run tests to ensure everything still works.");

        Ok(0)
    }
}

fn is_configuration_error(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<AnonymizerError>(),
            Some(AnonymizerError::Configuration(_))
        )
    })
}

fn print_progress(_kind: FixtureKind, path: &Path) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    println!("Anonymizing {name}...");
}
