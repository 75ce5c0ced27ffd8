// ============================================================================
// Numeric Configuration
// Scales used by the percentage and monetary helpers
// ============================================================================

use super::decimal_ops::{fixed_scale, round_half_even};
use super::errors::{NumericError, NumericResult};
use super::MAX_PLACES;
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for scale-dependent decimal helpers.
///
/// The crate-level free functions use [`NumericConfig::STANDARD`]. Callers
/// that need other scales build their own config and call the same
/// operations as methods.
///
/// # Example
/// ```
/// use validation_utils::numeric::NumericConfig;
/// use rust_decimal::Decimal;
///
/// let config = NumericConfig::new().with_amount_places(3);
/// config.validate().unwrap();
///
/// let amount = config.scale_amount(Decimal::new(1005, 3)).unwrap();
/// assert_eq!(amount.to_string(), "1.005");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumericConfig {
    /// Fractional digits kept by percentage rounding
    pub percentage_places: u32,

    /// Fractional digits of a monetary amount
    pub amount_places: u32,
}

impl NumericConfig {
    /// Percentages at 4 places, amounts at 2 places.
    pub const STANDARD: Self = Self {
        percentage_places: 4,
        amount_places: 2,
    };

    /// Create the standard configuration.
    pub const fn new() -> Self {
        Self::STANDARD
    }

    /// Builder method: Set percentage rounding places
    pub fn with_percentage_places(mut self, places: u32) -> Self {
        self.percentage_places = places;
        self
    }

    /// Builder method: Set monetary amount places
    pub fn with_amount_places(mut self, places: u32) -> Self {
        self.amount_places = places;
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    /// Returns `InvalidScale` if either scale exceeds what `Decimal` supports.
    pub fn validate(&self) -> NumericResult<()> {
        for places in [self.percentage_places, self.amount_places] {
            if places > MAX_PLACES {
                return Err(NumericError::InvalidScale { places });
            }
        }
        Ok(())
    }

    /// Round to `percentage_places` using round-half-to-even.
    ///
    /// The result carries `percentage_places` fractional digits, or as many as
    /// fit when the magnitude is too large for all of them. Scales beyond the
    /// `Decimal` maximum are clamped.
    pub fn round_percentage(&self, value: Decimal) -> Decimal {
        round_half_even(value, self.percentage_places.min(MAX_PLACES))
    }

    /// Scale an amount to exactly `amount_places` fractional digits.
    ///
    /// Trailing zeros are not significant: `1.500` scales to `1.50`.
    ///
    /// # Errors
    /// - `TooManyDecimalPlaces` if rescaling would discard a non-zero digit
    /// - `InvalidScale` if `amount_places` exceeds the `Decimal` maximum
    /// - `Overflow` if the amount is too large to carry `amount_places` digits
    pub fn scale_amount(&self, amount: Decimal) -> NumericResult<Decimal> {
        let places = self.amount_places;
        if places > MAX_PLACES {
            return Err(NumericError::InvalidScale { places });
        }

        let normalized = amount.normalize();
        if normalized.scale() > places {
            tracing::debug!(%amount, max_places = places, "rejected amount scale");
            return Err(NumericError::TooManyDecimalPlaces {
                value: amount,
                max_places: places,
            });
        }

        fixed_scale(normalized, places)
    }
}

impl Default for NumericConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard() {
        let config = NumericConfig::default();
        assert_eq!(config, NumericConfig::STANDARD);
        assert_eq!(config.percentage_places, 4);
        assert_eq!(config.amount_places, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = NumericConfig::new()
            .with_percentage_places(6)
            .with_amount_places(0);
        assert_eq!(config.percentage_places, 6);
        assert_eq!(config.amount_places, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_oversized_scale() {
        let config = NumericConfig::new().with_amount_places(29);
        assert_eq!(
            config.validate(),
            Err(NumericError::InvalidScale { places: 29 })
        );

        let config = NumericConfig::new().with_percentage_places(30);
        assert_eq!(
            config.validate(),
            Err(NumericError::InvalidScale { places: 30 })
        );
    }

    #[test]
    fn test_custom_percentage_places() {
        let config = NumericConfig::new().with_percentage_places(2);
        let rounded = config.round_percentage(Decimal::new(12345, 4)); // 1.2345
        assert_eq!(rounded.to_string(), "1.23");

        // 1.235 ties to even -> 1.24
        let rounded = config.round_percentage(Decimal::new(1235, 3));
        assert_eq!(rounded.to_string(), "1.24");
    }

    #[test]
    fn test_custom_amount_places() {
        let config = NumericConfig::new().with_amount_places(0);
        assert_eq!(
            config.scale_amount(Decimal::new(500, 2)).unwrap().to_string(),
            "5"
        );
        assert_eq!(
            config.scale_amount(Decimal::new(550, 2)),
            Err(NumericError::TooManyDecimalPlaces {
                value: Decimal::new(550, 2),
                max_places: 0,
            })
        );
    }

    #[test]
    fn test_scale_amount_rejects_invalid_config() {
        let config = NumericConfig::new().with_amount_places(40);
        assert_eq!(
            config.scale_amount(Decimal::ONE),
            Err(NumericError::InvalidScale { places: 40 })
        );
    }
}
