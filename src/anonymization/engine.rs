//! Main anonymization engine
//!
//! [`AnonymizationEngine`] runs the HTML pass and then the JSON pass over the
//! fixtures directory, one file at a time. Every file is read as UTF-8,
//! rewritten in memory and written back to the same path. The first error
//! aborts the run; files already written stay written.
//!
//! # Examples
//!
//! ```no_run
//! use fixture_anonymizer::anonymization::{AnonymizationConfig, AnonymizationEngine};
//! use fixture_anonymizer::anonymization::config::NameReplacement;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = AnonymizationConfig {
//!     first_name: NameReplacement::from_pair(Some("Erika"), "Max"),
//!     ..Default::default()
//! };
//!
//! let mut engine = AnonymizationEngine::new(config)?;
//! let report = engine.run()?;
//! println!("{}", report.format_console());
//! # Ok(())
//! # }
//! ```

use crate::anonymization::{
    anonymizer::{FixtureAnonymizer, HtmlAnonymizer, JsonAnonymizer},
    config::AnonymizationConfig,
    discovery::find_fixtures,
    generator::SubstituteGenerator,
    report::{FileOutcome, FixtureKind, RunReport},
};
use crate::domain::errors::AnonymizerError;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Callback invoked before each fixture is processed
pub type ProgressHook = Box<dyn Fn(FixtureKind, &Path)>;

/// Main anonymization engine
///
/// Owns the single [`SubstituteGenerator`] for the run; both passes draw from
/// it in file order.
pub struct AnonymizationEngine {
    config: AnonymizationConfig,
    generator: SubstituteGenerator,
    html: HtmlAnonymizer,
    json: JsonAnonymizer,
    progress: Option<ProgressHook>,
}

impl AnonymizationEngine {
    /// Create a new anonymization engine
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or a pattern fails to
    /// compile.
    pub fn new(config: AnonymizationConfig) -> Result<Self> {
        config
            .validate()
            .context("Invalid anonymization configuration")?;

        let generator = SubstituteGenerator::new(
            config.seed,
            config.date_range()?,
            config.max_grade_delay_days,
        );

        let html = HtmlAnonymizer::new(
            config.first_name.as_ref(),
            config.last_name.as_ref(),
            config.email_placeholder.clone(),
            config.student_id_placeholder.clone(),
        )?;
        let json = JsonAnonymizer::new()?;

        Ok(Self {
            config,
            generator,
            html,
            json,
            progress: None,
        })
    }

    /// Register a callback invoked before each file is processed
    pub fn with_progress(mut self, hook: impl Fn(FixtureKind, &Path) + 'static) -> Self {
        self.progress = Some(Box::new(hook));
        self
    }

    /// Run the HTML pass followed by the JSON pass
    pub fn run(&mut self) -> Result<RunReport> {
        let dir = &self.config.fixtures_dir;
        if !dir.is_dir() {
            return Err(AnonymizerError::Configuration(format!(
                "Fixture directory not found: {}",
                dir.display()
            ))
            .into());
        }

        tracing::info!(
            fixtures_dir = %dir.display(),
            seed = self.config.seed,
            dry_run = self.config.dry_run,
            "Starting fixture anonymization"
        );

        let mut report = RunReport::new(self.config.seed, self.config.dry_run);

        let html_files = find_fixtures(dir, &self.config.html_pattern)?;
        let json_files = find_fixtures(dir, &self.config.json_pattern)?;

        Self::run_pass(
            &self.html,
            &html_files,
            &mut self.generator,
            self.config.dry_run,
            self.progress.as_ref(),
            &mut report,
        )?;
        Self::run_pass(
            &self.json,
            &json_files,
            &mut self.generator,
            self.config.dry_run,
            self.progress.as_ref(),
            &mut report,
        )?;

        tracing::info!(
            files = report.files.len(),
            changed = report.changed_files(),
            "Fixture anonymization completed"
        );

        Ok(report)
    }

    /// Process every file of one pass in order
    fn run_pass(
        anonymizer: &dyn FixtureAnonymizer,
        files: &[PathBuf],
        generator: &mut SubstituteGenerator,
        dry_run: bool,
        progress: Option<&ProgressHook>,
        report: &mut RunReport,
    ) -> Result<()> {
        tracing::debug!(kind = %anonymizer.kind(), count = files.len(), "Starting pass");

        for path in files {
            if let Some(hook) = progress {
                hook(anonymizer.kind(), path);
            }
            let outcome = Self::anonymize_file(anonymizer, path, generator, dry_run)?;
            report.add_file(outcome);
        }

        Ok(())
    }

    /// Read, rewrite and (unless `dry_run`) write back one fixture
    pub fn anonymize_file(
        anonymizer: &dyn FixtureAnonymizer,
        path: &Path,
        generator: &mut SubstituteGenerator,
        dry_run: bool,
    ) -> Result<FileOutcome> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixture: {}", path.display()))?;

        let (anonymized, stats) = anonymizer
            .anonymize(&content, generator)
            .with_context(|| format!("Failed to anonymize fixture: {}", path.display()))?;

        let changed = anonymized != content;

        if dry_run {
            tracing::info!(
                path = %path.display(),
                changed,
                substitutions = stats.total(),
                "Dry run, fixture not written"
            );
        } else {
            fs::write(path, anonymized.as_bytes())
                .with_context(|| format!("Failed to write fixture: {}", path.display()))?;
            tracing::info!(
                path = %path.display(),
                changed,
                substitutions = stats.total(),
                "Fixture anonymized"
            );
        }

        Ok(FileOutcome {
            path: path.to_path_buf(),
            stats,
            changed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymization::report::FileStats;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::tempdir;

    fn config_for(dir: &Path) -> AnonymizationConfig {
        AnonymizationConfig {
            fixtures_dir: dir.to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn test_engine_creation() {
        let engine = AnonymizationEngine::new(AnonymizationConfig::default());
        assert!(engine.is_ok());
    }

    #[test]
    fn test_engine_rejects_invalid_config() {
        let config = AnonymizationConfig {
            max_grade_delay_days: 0,
            ..Default::default()
        };
        assert!(AnonymizationEngine::new(config).is_err());
    }

    #[test]
    fn test_missing_directory_is_configuration_error() {
        let dir = tempdir().unwrap();
        let mut engine =
            AnonymizationEngine::new(config_for(&dir.path().join("missing"))).unwrap();
        let err = engine.run().unwrap_err();
        assert!(err.to_string().contains("Fixture directory not found"));
    }

    #[test]
    fn test_html_pass_runs_before_json_pass() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("expected_output_a.json"), r#"{"elements": []}"#).unwrap();
        fs::write(dir.path().join("curriculum_a.html"), "<p>1234567</p>").unwrap();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut engine = AnonymizationEngine::new(config_for(dir.path()))
            .unwrap()
            .with_progress(move |kind, _| sink.borrow_mut().push(kind));

        let report = engine.run().unwrap();

        assert_eq!(*seen.borrow(), vec![FixtureKind::Html, FixtureKind::Json]);
        assert_eq!(report.files.len(), 2);
        assert!(matches!(report.files[0].stats, FileStats::Html(_)));
        assert_eq!(
            fs::read_to_string(dir.path().join("curriculum_a.html")).unwrap(),
            "<p>12345678</p>"
        );
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("curriculum_a.html");
        fs::write(&path, "<p>mail: someone@example.org</p>").unwrap();

        let mut engine = AnonymizationEngine::new(AnonymizationConfig {
            dry_run: true,
            ..config_for(dir.path())
        })
        .unwrap();
        let report = engine.run().unwrap();

        assert!(report.dry_run);
        assert_eq!(report.changed_files(), 1);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "<p>mail: someone@example.org</p>"
        );
    }
}
