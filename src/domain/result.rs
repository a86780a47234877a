//! Result type alias for the fixture anonymizer

use super::errors::AnonymizerError;

/// Result type alias using [`AnonymizerError`] as the error type
///
/// # Examples
///
/// ```
/// use fixture_anonymizer::domain::result::Result;
/// use fixture_anonymizer::domain::errors::AnonymizerError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(AnonymizerError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, AnonymizerError>;
