//! Run reporting for anonymization
//!
//! Collects per-file substitution counts and renders the summary printed at the
//! end of a run.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Kind of fixture a pass handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FixtureKind {
    /// `curriculum_*.html` pages
    Html,
    /// `expected_output_*.json` documents
    Json,
}

impl fmt::Display for FixtureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => write!(f, "HTML"),
            Self::Json => write!(f, "JSON"),
        }
    }
}

/// Substitutions made in one HTML fixture
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HtmlStats {
    pub first_names: usize,
    pub last_names: usize,
    pub emails: usize,
    pub student_ids: usize,
}

impl HtmlStats {
    /// Total number of replaced substrings
    pub fn total(&self) -> usize {
        self.first_names + self.last_names + self.emails + self.student_ids
    }
}

/// Substitutions made in one JSON fixture
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct JsonStats {
    /// Elements visited
    pub elements: usize,
    /// Elements carrying a `mark_and_points` object
    pub graded_elements: usize,
    pub grades: usize,
    pub send_dates: usize,
    pub grade_dates: usize,
    /// Grading dates drawn independently because no usable send date existed
    pub grade_date_fallbacks: usize,
    pub tooltips: usize,
    pub failed_overrides: usize,
}

impl JsonStats {
    /// Total number of rewritten fields
    pub fn total(&self) -> usize {
        self.grades + self.send_dates + self.grade_dates + self.tooltips + self.failed_overrides
    }
}

/// Statistics for one fixture file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FileStats {
    Html(HtmlStats),
    Json(JsonStats),
}

impl FileStats {
    /// Kind of fixture these statistics belong to
    pub fn kind(&self) -> FixtureKind {
        match self {
            Self::Html(_) => FixtureKind::Html,
            Self::Json(_) => FixtureKind::Json,
        }
    }

    /// Total substitutions regardless of kind
    pub fn total(&self) -> usize {
        match self {
            Self::Html(stats) => stats.total(),
            Self::Json(stats) => stats.total(),
        }
    }
}

/// Outcome of processing one fixture file
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub stats: FileStats,
    /// Whether the rewritten content differs from the original
    pub changed: bool,
}

/// Report for a complete run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub seed: u64,
    pub dry_run: bool,
    pub files: Vec<FileOutcome>,
}

impl RunReport {
    /// Create an empty report
    pub fn new(seed: u64, dry_run: bool) -> Self {
        Self {
            seed,
            dry_run,
            files: Vec::new(),
        }
    }

    /// Record a processed file
    pub fn add_file(&mut self, outcome: FileOutcome) {
        self.files.push(outcome);
    }

    /// Outcomes for one fixture kind, in processing order
    pub fn files_of_kind(&self, kind: FixtureKind) -> impl Iterator<Item = &FileOutcome> {
        self.files.iter().filter(move |f| f.stats.kind() == kind)
    }

    /// Number of files whose content changed (or would change in dry-run)
    pub fn changed_files(&self) -> usize {
        self.files.iter().filter(|f| f.changed).count()
    }

    /// Summed HTML statistics
    pub fn html_totals(&self) -> HtmlStats {
        self.files
            .iter()
            .fold(HtmlStats::default(), |mut acc, file| {
                if let FileStats::Html(s) = file.stats {
                    acc.first_names += s.first_names;
                    acc.last_names += s.last_names;
                    acc.emails += s.emails;
                    acc.student_ids += s.student_ids;
                }
                acc
            })
    }

    /// Summed JSON statistics
    pub fn json_totals(&self) -> JsonStats {
        self.files
            .iter()
            .fold(JsonStats::default(), |mut acc, file| {
                if let FileStats::Json(s) = file.stats {
                    acc.elements += s.elements;
                    acc.graded_elements += s.graded_elements;
                    acc.grades += s.grades;
                    acc.send_dates += s.send_dates;
                    acc.grade_dates += s.grade_dates;
                    acc.grade_date_fallbacks += s.grade_date_fallbacks;
                    acc.tooltips += s.tooltips;
                    acc.failed_overrides += s.failed_overrides;
                }
                acc
            })
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();
        let html = self.html_totals();
        let json = self.json_totals();
        let html_files = self.files_of_kind(FixtureKind::Html).count();
        let json_files = self.files_of_kind(FixtureKind::Json).count();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        if self.dry_run {
            output.push_str("              FIXTURE ANONYMIZATION DRY-RUN REPORT             \n");
        } else {
            output.push_str("                 FIXTURE ANONYMIZATION REPORT                  \n");
        }
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output.push_str("📊 SUMMARY\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!("  Seed:                        {}\n", self.seed));
        output.push_str(&format!("  HTML Fixtures:               {html_files}\n"));
        output.push_str(&format!("  JSON Fixtures:               {json_files}\n"));
        let changed_label = if self.dry_run {
            "Files That Would Change:"
        } else {
            "Files Changed:"
        };
        output.push_str(&format!(
            "  {changed_label:<28} {}\n",
            self.changed_files()
        ));
        output.push('\n');

        if html_files > 0 {
            output.push_str("📄 HTML SUBSTITUTIONS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            output.push_str(&format!("  First Names:                 {}\n", html.first_names));
            output.push_str(&format!("  Last Names:                  {}\n", html.last_names));
            output.push_str(&format!("  Email Addresses:             {}\n", html.emails));
            output.push_str(&format!("  Student Numbers:             {}\n", html.student_ids));
            output.push('\n');
        }

        if json_files > 0 {
            output.push_str("🗂  JSON SUBSTITUTIONS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            output.push_str(&format!("  Elements:                    {}\n", json.elements));
            output.push_str(&format!(
                "  Elements With Grades:        {}\n",
                json.graded_elements
            ));
            output.push_str(&format!("  Grades:                      {}\n", json.grades));
            output.push_str(&format!("  Submission Dates:            {}\n", json.send_dates));
            output.push_str(&format!("  Grading Dates:               {}\n", json.grade_dates));
            output.push_str(&format!("  Tooltips:                    {}\n", json.tooltips));
            output.push_str(&format!(
                "  Failed Exams Set To 5.0:     {}\n",
                json.failed_overrides
            ));
            output.push('\n');

            if json.grade_date_fallbacks > 0 {
                output.push_str("⚠️  WARNINGS\n");
                output.push_str(
                    "───────────────────────────────────────────────────────────────\n",
                );
                output.push_str(&format!(
                    "  {} grading date(s) had no usable submission date and were\n  drawn independently; they may precede their submission.\n",
                    json.grade_date_fallbacks
                ));
                output.push('\n');
            }
        }

        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output
    }
}
