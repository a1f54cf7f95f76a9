//! Numeric input validation for the free-text steps.

use crate::domain::foundation::ValidationError;

/// Parses a base-10 signed integer from user input.
///
/// Surrounding whitespace is tolerated; anything else beyond an optional
/// leading sign and digits is rejected. There is no retry cap; the engine
/// re-prompts until the input parses.
pub fn parse_signed_integer(field: &str, input: &str) -> Result<i64, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::not_an_integer(field, trimmed))
}
