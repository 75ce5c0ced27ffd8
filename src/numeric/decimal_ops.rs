// ============================================================================
// Decimal Helpers
// Rounding, comparison, and division policies over rust_decimal::Decimal
// ============================================================================

use super::config::NumericConfig;
use super::errors::{NumericError, NumericResult};
use super::MAX_PLACES;
use rust_decimal::{Decimal, RoundingStrategy};
use std::cmp::Ordering;

// ============================================================================
// Scale Primitives
// ============================================================================

/// Round half-to-even and pad the result to `places` digits.
///
/// Magnitudes too large to carry `places` fractional digits keep as many as
/// fit; the rounding itself still happens at `places`.
pub(crate) fn round_half_even(value: Decimal, places: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(places);
    rounded
}

/// Pad a value whose scale is at most `places` to exactly `places` digits.
///
/// # Errors
/// Returns `Overflow` if the mantissa cannot hold the extra digits.
pub(crate) fn fixed_scale(value: Decimal, places: u32) -> NumericResult<Decimal> {
    let mut scaled = value;
    scaled.rescale(places);
    if scaled.scale() != places {
        return Err(NumericError::Overflow);
    }
    Ok(scaled)
}

/// Divide `dividend` by a non-zero `divisor`, rounding half-to-even at `places`.
///
/// `Decimal` division already rounds at 28 digits, so rounding that quotient
/// again could turn a value just below a tie into a tie. The step is decided
/// from the remainder of the truncated quotient instead.
fn divide_half_even(dividend: Decimal, divisor: Decimal, places: u32) -> NumericResult<Decimal> {
    let negative = dividend.is_sign_negative() != divisor.is_sign_negative();
    let a = dividend.abs();
    let b = divisor.abs();
    let unit = Decimal::new(1, places);
    let shift = Decimal::from_i128_with_scale(10_i128.pow(places), 0);

    let mut quotient = a
        .checked_div(b)
        .ok_or(NumericError::Overflow)?
        .round_dp_with_strategy(places, RoundingStrategy::ToZero);
    let mut remainder = remainder_of(a, b, quotient)?;

    // The 28-digit quotient can round up onto the next step.
    if remainder < Decimal::ZERO {
        quotient = quotient.checked_sub(unit).ok_or(NumericError::Overflow)?;
        remainder = remainder_of(a, b, quotient)?;
    }

    // 2r against b * 10^-places, as r * 10^places against b - r * 10^places.
    let scaled_remainder = remainder
        .checked_mul(shift)
        .ok_or(NumericError::Overflow)?;
    let rest = b
        .checked_sub(scaled_remainder)
        .ok_or(NumericError::Overflow)?;

    let quotient = fixed_scale(quotient, places)?;
    let round_up = match scaled_remainder.cmp(&rest) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => quotient.mantissa() % 2 != 0,
    };

    let quotient = if round_up {
        quotient.checked_add(unit).ok_or(NumericError::Overflow)?
    } else {
        quotient
    };

    if negative && !quotient.is_zero() {
        Ok(-quotient)
    } else {
        Ok(quotient)
    }
}

fn remainder_of(a: Decimal, b: Decimal, quotient: Decimal) -> NumericResult<Decimal> {
    quotient
        .checked_mul(b)
        .and_then(|product| a.checked_sub(product))
        .ok_or(NumericError::Overflow)
}

// ============================================================================
// Rounding
// ============================================================================

/// Round a percentage to 4 decimal places (banker's rounding).
///
/// The result carries 4 fractional digits unless the magnitude is too large
/// for them (above roughly 7.9e24), in which case it keeps as many as fit.
///
/// # Example
/// ```
/// use validation_utils::numeric::round_percentage;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_percentage(Decimal::new(123449, 6)).to_string(), "0.1234");
/// assert_eq!(round_percentage(Decimal::new(5, 5)).to_string(), "0.0000");
/// assert_eq!(round_percentage(Decimal::new(15, 5)).to_string(), "0.0002");
/// ```
#[inline]
pub fn round_percentage(value: Decimal) -> Decimal {
    NumericConfig::STANDARD.round_percentage(value)
}

/// Scale a monetary amount to exactly 2 decimal places.
///
/// # Errors
/// Returns `TooManyDecimalPlaces` if the amount has more than 2 significant
/// fractional digits (`1.005` fails, `1.500` yields `1.50`).
#[inline]
pub fn scale_amount(amount: Decimal) -> NumericResult<Decimal> {
    NumericConfig::STANDARD.scale_amount(amount)
}

// ============================================================================
// Comparison
// ============================================================================

/// Compare two decimals by value, ignoring scale (`1.0 == 1.00`).
#[inline]
pub fn decimal_equals(a: Decimal, b: Decimal) -> bool {
    a == b
}

/// Check `a >= b` by value.
#[inline]
pub fn decimal_gte(a: Decimal, b: Decimal) -> bool {
    a >= b
}

// ============================================================================
// Clamping and Defaults
// ============================================================================

/// Clamp negative values to zero.
#[inline]
pub fn positive_or_zero(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// Substitute zero for an absent value.
#[inline]
pub fn null_to_zero(value: Option<Decimal>) -> Decimal {
    value.unwrap_or(Decimal::ZERO)
}

// ============================================================================
// Division
// ============================================================================

/// Divide, returning zero when the divisor is zero.
///
/// Non-zero quotients are rounded half-to-even to `places` fractional digits.
///
/// # Errors
/// - `InvalidScale` if `places` exceeds 28
/// - `Overflow` if the quotient is out of range or cannot carry `places`
///   fractional digits
///
/// A zero divisor always yields `Ok(0)`, whatever `places` is.
///
/// # Example
/// ```
/// use validation_utils::numeric::safe_divide;
/// use rust_decimal::Decimal;
///
/// let third = safe_divide(Decimal::ONE, Decimal::from(3), 4).unwrap();
/// assert_eq!(third.to_string(), "0.3333");
/// assert!(safe_divide(Decimal::TEN, Decimal::ZERO, 2).unwrap().is_zero());
/// ```
pub fn safe_divide(dividend: Decimal, divisor: Decimal, places: u32) -> NumericResult<Decimal> {
    if divisor.is_zero() {
        tracing::trace!(%dividend, "zero divisor, returning zero");
        return Ok(Decimal::new(0, places.min(MAX_PLACES)));
    }

    if places > MAX_PLACES {
        return Err(NumericError::InvalidScale { places });
    }

    divide_half_even(dividend, divisor, places)
}

// ============================================================================
// Tests
// ============================================================================
