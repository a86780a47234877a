//! Grade values as they appear in the `mark_and_points` fixture objects

/// Passing grades a substitute is drawn from
pub const PASSING_GRADES: [&str; 10] = [
    "1.0", "1.3", "1.7", "2.0", "2.3", "2.7", "3.0", "3.3", "3.7", "4.0",
];

/// Grade written for every failed exam
pub const FAILING_GRADE: &str = "5.0";

/// Pass/fail markers that are kept as-is
pub const PRESERVED_MARKS: [&str; 2] = ["ok", "nicht bestanden"];

/// `exam_css_class` value marking a failed exam
pub const FAILED_EXAM_CLASS: &str = "examFailed";

/// Returns true if `mark` holds a numeric grade that should be replaced
///
/// Empty marks and the pass/fail markers are left untouched.
///
/// # Examples
///
/// ```
/// use fixture_anonymizer::domain::grade::is_substitutable;
///
/// assert!(is_substitutable("2.3"));
/// assert!(!is_substitutable("ok"));
/// assert!(!is_substitutable(""));
/// ```
pub fn is_substitutable(mark: &str) -> bool {
    !mark.is_empty() && !PRESERVED_MARKS.contains(&mark)
}

/// Returns true if the css class flags the exam as failed
pub fn is_failed_exam(css_class: &str) -> bool {
    css_class == FAILED_EXAM_CLASS
}
