// ============================================================================
// Email Errors
// ============================================================================

use std::fmt;

/// Errors that can occur while validating an email address.
///
/// Both variants are "invalid format" failures; they are kept apart so
/// diagnostics can tell blank input from a grammar mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EmailAddressError {
    /// Input was absent, empty, or only whitespace
    Blank,
    /// Normalized input did not match the address grammar
    InvalidFormat {
        /// The original, non-normalized input
        input: String,
    },
}

impl EmailAddressError {
    /// Every email error is a format error; kept for callers that only
    /// care about the coarse kind.
    #[inline]
    pub const fn is_invalid_format(&self) -> bool {
        true
    }

    /// Check if the failure was caused by blank input.
    #[inline]
    pub const fn is_blank(&self) -> bool {
        matches!(self, EmailAddressError::Blank)
    }
}

impl fmt::Display for EmailAddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmailAddressError::Blank => {
                write!(f, "invalid email address format: input is blank")
            },
            EmailAddressError::InvalidFormat { input } => {
                write!(f, "invalid email address format: '{}'", input)
            },
        }
    }
}

impl std::error::Error for EmailAddressError {}

/// Result type alias for email validation
pub type EmailResult<T> = Result<T, EmailAddressError>;
