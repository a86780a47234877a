//! JSON fixture anonymizer
//!
//! Expected-output fixtures are objects with an `elements` array. Each element
//! may carry a `mark_and_points` object whose grade, dates and tooltip are
//! rewritten together so they stay consistent:
//!
//! 1. a numeric `mark` is replaced by a random passing grade (mirrored into
//!    `mark_label`)
//! 2. `esa_send_date` is replaced by a random date
//! 3. `esa_grade_date` becomes the send date plus 1..=N days
//! 4. dates inside `mark_and_points_tooltip` are rewritten to match
//! 5. exams flagged `examFailed` get `5.0`, whatever was drawn before
//!
//! Keys keep their original order and every other field is left untouched.

use super::FixtureAnonymizer;
use crate::anonymization::generator::SubstituteGenerator;
use crate::anonymization::report::{FileStats, FixtureKind, JsonStats};
use crate::domain::date::FixtureDate;
use crate::domain::errors::AnonymizerError;
use crate::domain::grade::{is_failed_exam, is_substitutable, FAILING_GRADE};
use anyhow::{Context, Result};
use regex::{NoExpand, Regex};
use serde_json::{Map, Value};

const ELEMENTS: &str = "elements";
const GRADE_INFO: &str = "mark_and_points";
const MARK: &str = "mark";
const MARK_LABEL: &str = "mark_label";
const SEND_DATE: &str = "esa_send_date";
const GRADE_DATE: &str = "esa_grade_date";
const TOOLTIP: &str = "mark_and_points_tooltip";
const EXAM_CSS_CLASS: &str = "exam_css_class";

/// Tooltip label preceding the submission date
pub const SEND_DATE_LABEL: &str = "Lösungseingang:</b> ";
/// Tooltip label preceding the grading date
pub const GRADE_DATE_LABEL: &str = "Benotungsdatum:</b> ";

/// A labelled `DD.MM.YYYY` date inside tooltip markup
struct TooltipMarker {
    label: &'static str,
    regex: Regex,
}

impl TooltipMarker {
    fn new(label: &'static str) -> Result<Self> {
        let pattern = format!(r"{}\d{{2}}\.\d{{2}}\.\d{{4}}", regex::escape(label));
        let regex = Regex::new(&pattern)
            .with_context(|| format!("Invalid tooltip pattern for '{label}'"))?;
        Ok(Self { label, regex })
    }

    fn rewrite(&self, tooltip: &str, date: &str) -> String {
        let replacement = format!("{}{}", self.label, date);
        self.regex
            .replace_all(tooltip, NoExpand(&replacement))
            .into_owned()
    }
}

/// Anonymizer for `expected_output_*.json` documents
pub struct JsonAnonymizer {
    send_date_marker: TooltipMarker,
    grade_date_marker: TooltipMarker,
}

impl JsonAnonymizer {
    /// Compile the tooltip patterns
    pub fn new() -> Result<Self> {
        Ok(Self {
            send_date_marker: TooltipMarker::new(SEND_DATE_LABEL)?,
            grade_date_marker: TooltipMarker::new(GRADE_DATE_LABEL)?,
        })
    }

    /// Anonymize a parsed document in place
    ///
    /// # Errors
    ///
    /// Fails if the top-level value is not an object, if `elements` is present
    /// but not an array, or if an element is not an object.
    pub fn anonymize_document(
        &self,
        document: &mut Value,
        generator: &mut SubstituteGenerator,
    ) -> Result<JsonStats> {
        let mut stats = JsonStats::default();

        let root = document.as_object_mut().ok_or_else(|| {
            AnonymizerError::InvalidFixture("top-level value is not an object".to_string())
        })?;

        let elements = match root.get_mut(ELEMENTS) {
            None | Some(Value::Null) => return Ok(stats),
            Some(Value::Array(elements)) => elements,
            Some(_) => {
                return Err(AnonymizerError::InvalidFixture(format!(
                    "`{ELEMENTS}` is not an array"
                ))
                .into())
            }
        };

        for (index, element) in elements.iter_mut().enumerate() {
            stats.elements += 1;

            let element = element.as_object_mut().ok_or_else(|| {
                AnonymizerError::InvalidFixture(format!("element {index} is not an object"))
            })?;

            let Some(Value::Object(grade_info)) = element.get_mut(GRADE_INFO) else {
                continue;
            };
            if grade_info.is_empty() {
                continue;
            }

            stats.graded_elements += 1;
            self.anonymize_grade_info(grade_info, generator, &mut stats);
        }

        Ok(stats)
    }

    /// Rewrite one `mark_and_points` object
    fn anonymize_grade_info(
        &self,
        info: &mut Map<String, Value>,
        generator: &mut SubstituteGenerator,
        stats: &mut JsonStats,
    ) {
        if text_field(info, MARK).is_some_and(is_substitutable) {
            let grade = generator.grade();
            set_text(info, MARK, grade);
            set_text(info, MARK_LABEL, grade);
            stats.grades += 1;
        }

        if text_field(info, SEND_DATE).is_some() {
            let send_date = generator.date();
            set_text(info, SEND_DATE, &send_date.to_string());
            stats.send_dates += 1;
        }

        if text_field(info, GRADE_DATE).is_some() {
            let after_send = text_field(info, SEND_DATE)
                .and_then(|text| FixtureDate::parse(text).ok())
                .and_then(|send_date| generator.date_after(send_date));

            let grade_date = match after_send {
                Some(date) => date,
                None => {
                    tracing::debug!(
                        "No usable submission date, drawing grading date independently"
                    );
                    stats.grade_date_fallbacks += 1;
                    generator.date()
                }
            };
            set_text(info, GRADE_DATE, &grade_date.to_string());
            stats.grade_dates += 1;
        }

        if let Some(tooltip) = text_field(info, TOOLTIP) {
            let mut rewritten = tooltip.to_string();
            if let Some(send_date) = text_field(info, SEND_DATE) {
                rewritten = self.send_date_marker.rewrite(&rewritten, send_date);
            }
            if let Some(grade_date) = text_field(info, GRADE_DATE) {
                rewritten = self.grade_date_marker.rewrite(&rewritten, grade_date);
            }
            set_text(info, TOOLTIP, &rewritten);
            stats.tooltips += 1;
        }

        if text_field(info, EXAM_CSS_CLASS).is_some_and(is_failed_exam) {
            set_text(info, MARK, FAILING_GRADE);
            set_text(info, MARK_LABEL, FAILING_GRADE);
            stats.failed_overrides += 1;
        }
    }
}

impl FixtureAnonymizer for JsonAnonymizer {
    fn kind(&self) -> FixtureKind {
        FixtureKind::Json
    }

    fn anonymize(
        &self,
        content: &str,
        generator: &mut SubstituteGenerator,
    ) -> Result<(String, FileStats)> {
        let mut document: Value =
            serde_json::from_str(content).context("Failed to parse JSON fixture")?;
        let stats = self.anonymize_document(&mut document, generator)?;
        let output =
            serde_json::to_string_pretty(&document).context("Failed to serialize JSON fixture")?;
        Ok((output, FileStats::Json(stats)))
    }
}

/// A field counts as present when it holds a non-empty string
fn text_field<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    map.get(key)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}

fn set_text(map: &mut Map<String, Value>, key: &str, value: &str) {
    map.insert(key.to_string(), Value::String(value.to_string()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::date::DateRange;
    use crate::domain::grade::PASSING_GRADES;
    use serde_json::json;

    fn generator(seed: u64) -> SubstituteGenerator {
        SubstituteGenerator::new(seed, DateRange::from_years(2023, 2025).unwrap(), 14)
    }

    fn grade_info<'a>(document: &'a Value, index: usize) -> &'a Value {
        &document["elements"][index]["mark_and_points"]
    }

    fn date(value: &Value) -> FixtureDate {
        FixtureDate::parse(value.as_str().unwrap()).unwrap()
    }

    #[test]
    fn test_passed_exam_gets_grade_and_ordered_dates() {
        let anonymizer = JsonAnonymizer::new().unwrap();
        let mut document = json!({
            "elements": [{
                "mark_and_points": {
                    "mark": "2.3",
                    "esa_send_date": "01.01.2024",
                    "esa_grade_date": "05.01.2024",
                    "exam_css_class": "examPassed"
                }
            }]
        });

        let stats = anonymizer
            .anonymize_document(&mut document, &mut generator(42))
            .unwrap();

        let info = grade_info(&document, 0);
        let mark = info["mark"].as_str().unwrap();
        assert!(PASSING_GRADES.contains(&mark));
        assert_eq!(info["mark_label"], info["mark"]);

        let send = date(&info["esa_send_date"]);
        let graded = date(&info["esa_grade_date"]);
        assert!(DateRange::from_years(2023, 2025).unwrap().contains(&send));
        assert!((1..=14).contains(&graded.days_since(&send)));

        assert_eq!(stats.grades, 1);
        assert_eq!(stats.send_dates, 1);
        assert_eq!(stats.grade_dates, 1);
        assert_eq!(stats.failed_overrides, 0);
    }

    #[test]
    fn test_failed_exam_forced_to_failing_grade() {
        let anonymizer = JsonAnonymizer::new().unwrap();
        let mut document = json!({
            "elements": [{
                "mark_and_points": {
                    "mark": "2.3",
                    "esa_send_date": "01.01.2024",
                    "esa_grade_date": "05.01.2024",
                    "exam_css_class": "examFailed"
                }
            }]
        });

        let stats = anonymizer
            .anonymize_document(&mut document, &mut generator(42))
            .unwrap();

        let info = grade_info(&document, 0);
        assert_eq!(info["mark"], "5.0");
        assert_eq!(info["mark_label"], "5.0");
        assert_eq!(stats.grades, 1);
        assert_eq!(stats.failed_overrides, 1);
    }

    #[test]
    fn test_failed_exam_without_mark_still_gets_failing_grade() {
        let anonymizer = JsonAnonymizer::new().unwrap();
        let mut document = json!({
            "elements": [{ "mark_and_points": { "exam_css_class": "examFailed" } }]
        });

        anonymizer
            .anonymize_document(&mut document, &mut generator(1))
            .unwrap();

        let info = grade_info(&document, 0);
        assert_eq!(info["mark"], "5.0");
        assert_eq!(info["mark_label"], "5.0");
    }

    #[test]
    fn test_preserved_marks_are_not_replaced() {
        let anonymizer = JsonAnonymizer::new().unwrap();
        let mut document = json!({
            "elements": [
                { "mark_and_points": { "mark": "ok", "mark_label": "ok" } },
                { "mark_and_points": { "mark": "nicht bestanden", "mark_label": "nicht bestanden" } },
                { "mark_and_points": { "mark": "", "mark_label": "" } }
            ]
        });

        let stats = anonymizer
            .anonymize_document(&mut document, &mut generator(3))
            .unwrap();

        assert_eq!(grade_info(&document, 0)["mark"], "ok");
        assert_eq!(grade_info(&document, 1)["mark"], "nicht bestanden");
        assert_eq!(grade_info(&document, 2)["mark"], "");
        assert_eq!(stats.grades, 0);
    }

    #[test]
    fn test_tooltip_follows_final_dates() {
        let anonymizer = JsonAnonymizer::new().unwrap();
        let mut document = json!({
            "elements": [{
                "mark_and_points": {
                    "mark": "1.7",
                    "esa_send_date": "03.02.2021",
                    "esa_grade_date": "10.02.2021",
                    "mark_and_points_tooltip": "<b>Note:</b> 1.7<br><b>Lösungseingang:</b> 03.02.2021<br><b>Benotungsdatum:</b> 10.02.2021"
                }
            }]
        });

        let stats = anonymizer
            .anonymize_document(&mut document, &mut generator(11))
            .unwrap();

        let info = grade_info(&document, 0);
        let send = info["esa_send_date"].as_str().unwrap();
        let graded = info["esa_grade_date"].as_str().unwrap();
        let tooltip = info["mark_and_points_tooltip"].as_str().unwrap();

        assert!(tooltip.starts_with("<b>Note:</b> 1.7<br>"));
        assert!(tooltip.contains(&format!("Lösungseingang:</b> {send}")));
        assert!(tooltip.contains(&format!("Benotungsdatum:</b> {graded}")));
        assert!(!tooltip.contains("2021"));
        assert_eq!(stats.tooltips, 1);
    }

    #[test]
    fn test_tooltip_without_send_date_keeps_send_marker() {
        let anonymizer = JsonAnonymizer::new().unwrap();
        let mut document = json!({
            "elements": [{
                "mark_and_points": {
                    "esa_grade_date": "10.02.2021",
                    "mark_and_points_tooltip": "<b>Lösungseingang:</b> 03.02.2021 <b>Benotungsdatum:</b> 10.02.2021"
                }
            }]
        });

        let stats = anonymizer
            .anonymize_document(&mut document, &mut generator(5))
            .unwrap();

        let info = grade_info(&document, 0);
        let graded = info["esa_grade_date"].as_str().unwrap();
        let tooltip = info["mark_and_points_tooltip"].as_str().unwrap();
        assert!(tooltip.contains("Lösungseingang:</b> 03.02.2021"));
        assert!(tooltip.contains(&format!("Benotungsdatum:</b> {graded}")));
        assert_eq!(stats.grade_date_fallbacks, 1);
    }

    #[test]
    fn test_missing_send_date_falls_back_to_independent_date() {
        let anonymizer = JsonAnonymizer::new().unwrap();
        let mut document = json!({
            "elements": [{ "mark_and_points": { "esa_send_date": "", "esa_grade_date": "05.01.2024" } }]
        });

        let stats = anonymizer
            .anonymize_document(&mut document, &mut generator(8))
            .unwrap();

        let info = grade_info(&document, 0);
        assert_eq!(info["esa_send_date"], "");
        let graded = date(&info["esa_grade_date"]);
        assert!(DateRange::from_years(2023, 2025).unwrap().contains(&graded));
        assert_eq!(stats.send_dates, 0);
        assert_eq!(stats.grade_date_fallbacks, 1);
    }

    #[test]
    fn test_non_string_send_date_kept_and_grade_date_drawn_from_range() {
        let anonymizer = JsonAnonymizer::new().unwrap();
        let mut document = json!({
            "elements": [{ "mark_and_points": { "esa_send_date": 20240101, "esa_grade_date": "05.01.2024" } }]
        });

        let stats = anonymizer
            .anonymize_document(&mut document, &mut generator(8))
            .unwrap();

        let info = grade_info(&document, 0);
        assert_eq!(info["esa_send_date"], json!(20240101));
        let graded = date(&info["esa_grade_date"]);
        assert!(DateRange::from_years(2023, 2025).unwrap().contains(&graded));
        assert_eq!(stats.send_dates, 0);
        assert_eq!(stats.grade_dates, 1);
        assert_eq!(stats.grade_date_fallbacks, 1);
    }

    #[test]
    fn test_elements_without_grade_info_are_skipped() {
        let anonymizer = JsonAnonymizer::new().unwrap();
        let mut document = json!({
            "elements": [
                { "title": "Module 1" },
                { "title": "Module 2", "mark_and_points": null },
                { "title": "Module 3", "mark_and_points": {} }
            ]
        });
        let original = document.clone();

        let stats = anonymizer
            .anonymize_document(&mut document, &mut generator(2))
            .unwrap();

        assert_eq!(document, original);
        assert_eq!(stats.elements, 3);
        assert_eq!(stats.graded_elements, 0);
    }

    #[test]
    fn test_key_order_and_unrelated_fields_preserved() {
        let anonymizer = JsonAnonymizer::new().unwrap();
        let content = r#"{
  "student": "Max",
  "elements": [
    {
      "title": "Mathematik für Informatiker",
      "mark_and_points": {
        "points": "87",
        "mark": "1.3",
        "mark_label": "1.3",
        "exam_css_class": "examPassed"
      }
    }
  ]
}"#;

        let (output, _) = anonymizer.anonymize(content, &mut generator(42)).unwrap();

        let student = output.find("\"student\"").unwrap();
        let elements = output.find("\"elements\"").unwrap();
        let points = output.find("\"points\"").unwrap();
        let mark = output.find("\"mark\"").unwrap();
        assert!(student < elements);
        assert!(points < mark);
        assert!(output.contains("Mathematik für Informatiker"));
        assert!(output.contains("\"points\": \"87\""));
    }

    #[test]
    fn test_missing_elements_is_noop() {
        let anonymizer = JsonAnonymizer::new().unwrap();
        let mut document = json!({ "title": "empty" });
        let stats = anonymizer
            .anonymize_document(&mut document, &mut generator(2))
            .unwrap();
        assert_eq!(stats, JsonStats::default());
    }

    #[test]
    fn test_invalid_shapes_are_rejected() {
        let anonymizer = JsonAnonymizer::new().unwrap();

        let mut not_object = json!([1, 2, 3]);
        assert!(anonymizer
            .anonymize_document(&mut not_object, &mut generator(1))
            .is_err());

        let mut bad_elements = json!({ "elements": "nope" });
        assert!(anonymizer
            .anonymize_document(&mut bad_elements, &mut generator(1))
            .is_err());

        let mut bad_element = json!({ "elements": ["nope"] });
        assert!(anonymizer
            .anonymize_document(&mut bad_element, &mut generator(1))
            .is_err());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let anonymizer = JsonAnonymizer::new().unwrap();
        let result = anonymizer.anonymize("{\"elements\": [", &mut generator(1));
        assert!(result.is_err());
    }
}
