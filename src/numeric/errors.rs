// ============================================================================
// Numeric Errors
// Error types for decimal helper operations
// ============================================================================

use super::MAX_PLACES;
use rust_decimal::Decimal;
use std::fmt;

/// Errors that can occur during decimal helper operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Value carries more significant fractional digits than allowed
    TooManyDecimalPlaces {
        /// The rejected value
        value: Decimal,
        /// Maximum number of fractional digits permitted
        max_places: u32,
    },
    /// Requested scale is beyond what `Decimal` can represent
    InvalidScale {
        /// The requested number of fractional digits
        places: u32,
    },
    /// Result exceeded the representable range
    Overflow,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::TooManyDecimalPlaces { value, max_places } => write!(
                f,
                "too many decimal places: {} has more than {} significant fractional digits",
                value, max_places
            ),
            NumericError::InvalidScale { places } => write!(
                f,
                "invalid scale: {} decimal places exceeds the maximum of {}",
                places, MAX_PLACES
            ),
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
