// ============================================================================
// Text Errors
// Error types for string helper operations
// ============================================================================

use std::fmt;

/// Errors raised by the string helpers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TextError {
    /// A value required to be non-blank was absent, empty, or whitespace
    BlankInput {
        /// Caller-supplied or default diagnostic
        message: String,
    },
}

impl TextError {
    /// Get the diagnostic message carried by the error.
    pub fn message(&self) -> &str {
        match self {
            TextError::BlankInput { message } => message,
        }
    }
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextError::BlankInput { message } => write!(f, "blank input: {}", message),
        }
    }
}

impl std::error::Error for TextError {}

/// Result type alias for text operations
pub type TextResult<T> = Result<T, TextError>;
