//! HTML fixture anonymizer
//!
//! Treats the page as plain text: names, email addresses and student numbers
//! are found with regular expressions and replaced literally.

use super::FixtureAnonymizer;
use crate::anonymization::config::NameReplacement;
use crate::anonymization::generator::SubstituteGenerator;
use crate::anonymization::report::{FileStats, FixtureKind, HtmlStats};
use anyhow::{Context, Result};
use regex::{Captures, Regex};

const EMAIL_PATTERN: &str = r"[\w.-]+@[\w.-]+\.\w+";
const STUDENT_ID_PATTERN: &str = r"\b\d{7,8}\b";

/// A compiled name pattern with its substitute
struct NameRule {
    regex: Regex,
    replacement: String,
}

impl NameRule {
    fn compile(name: &NameReplacement) -> Result<Self> {
        let pattern = format!(r"(?i)\b{}\b", regex::escape(&name.old));
        let regex = Regex::new(&pattern)
            .with_context(|| format!("Invalid name pattern for '{}'", name.old))?;
        Ok(Self {
            regex,
            replacement: name.new.clone(),
        })
    }
}

/// Anonymizer for `curriculum_*.html` pages
pub struct HtmlAnonymizer {
    first_name: Option<NameRule>,
    last_name: Option<NameRule>,
    email: Regex,
    email_placeholder: String,
    student_id: Regex,
    student_id_placeholder: String,
}

impl HtmlAnonymizer {
    /// Compile the substitution patterns
    pub fn new(
        first_name: Option<&NameReplacement>,
        last_name: Option<&NameReplacement>,
        email_placeholder: impl Into<String>,
        student_id_placeholder: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            first_name: first_name.map(NameRule::compile).transpose()?,
            last_name: last_name.map(NameRule::compile).transpose()?,
            email: Regex::new(EMAIL_PATTERN).context("Invalid email pattern")?,
            email_placeholder: email_placeholder.into(),
            student_id: Regex::new(STUDENT_ID_PATTERN).context("Invalid student id pattern")?,
            student_id_placeholder: student_id_placeholder.into(),
        })
    }

    /// Apply all substitutions to `content`
    ///
    /// Order: first name, last name, email addresses, student numbers.
    pub fn anonymize_text(&self, content: &str) -> (String, HtmlStats) {
        let mut stats = HtmlStats::default();
        let mut text = content.to_string();

        if let Some(rule) = &self.first_name {
            let (replaced, count) = replace_counting(&rule.regex, &text, &rule.replacement);
            text = replaced;
            stats.first_names = count;
        }

        if let Some(rule) = &self.last_name {
            let (replaced, count) = replace_counting(&rule.regex, &text, &rule.replacement);
            text = replaced;
            stats.last_names = count;
        }

        let (replaced, count) = replace_counting(&self.email, &text, &self.email_placeholder);
        text = replaced;
        stats.emails = count;

        let (replaced, count) =
            replace_counting(&self.student_id, &text, &self.student_id_placeholder);
        text = replaced;
        stats.student_ids = count;

        (text, stats)
    }
}

impl FixtureAnonymizer for HtmlAnonymizer {
    fn kind(&self) -> FixtureKind {
        FixtureKind::Html
    }

    fn anonymize(
        &self,
        content: &str,
        _generator: &mut SubstituteGenerator,
    ) -> Result<(String, FileStats)> {
        let (text, stats) = self.anonymize_text(content);
        Ok((text, FileStats::Html(stats)))
    }
}

/// Replace every match with a literal string, returning the match count
fn replace_counting(regex: &Regex, text: &str, replacement: &str) -> (String, usize) {
    let mut count = 0;
    let replaced = regex.replace_all(text, |_: &Captures<'_>| {
        count += 1;
        replacement
    });
    (replaced.into_owned(), count)
}
