// ============================================================================
// Blank-String Helpers
// ============================================================================

use super::errors::{TextError, TextResult};

/// Message used by [`require_non_blank`] when the caller does not supply one.
pub const DEFAULT_BLANK_MESSAGE: &str = "value must not be blank";

/// Check whether a string is empty or contains only ASCII whitespace.
///
/// Non-ASCII spaces (U+00A0, U+3000, ...) are content, not blank.
#[inline]
pub fn is_blank(value: &str) -> bool {
    value.trim_ascii().is_empty()
}

/// Convert a blank string into `None`.
///
/// Non-blank values are returned untouched (no trimming).
///
/// # Example
/// ```
/// use validation_utils::text::blank_to_none;
///
/// assert_eq!(blank_to_none("  "), None);
/// assert_eq!(blank_to_none(" a "), Some(" a "));
/// assert_eq!(blank_to_none(None), None);
/// ```
pub fn blank_to_none<'a>(value: impl Into<Option<&'a str>>) -> Option<&'a str> {
    value.into().filter(|v| !is_blank(v))
}

/// Require a string to be non-blank.
///
/// # Errors
/// Returns `BlankInput` carrying `message`, or [`DEFAULT_BLANK_MESSAGE`]
/// when no message is given.
pub fn require_non_blank<'a>(
    value: impl Into<Option<&'a str>>,
    message: Option<&str>,
) -> TextResult<&'a str> {
    match value.into() {
        Some(v) if !is_blank(v) => Ok(v),
        _ => {
            let message = message.unwrap_or(DEFAULT_BLANK_MESSAGE);
            tracing::debug!(reason = message, "rejected blank input");
            Err(TextError::BlankInput {
                message: message.to_string(),
            })
        },
    }
}
