// ============================================================================
// Numeric Module
// Decimal helpers for percentages, monetary amounts, and safe division
// ============================================================================
//
// This module provides:
// - NumericConfig: scales used by percentage rounding and amount scaling
// - Free helper functions over rust_decimal::Decimal
// - NumericError: Error types for the fallible helpers
//
// Design principles:
// - No floating-point operations
// - Rounding is always round-half-to-even
// - Fallible helpers return Result (no panics)
// - Comparisons are by value, never by representation

mod config;
mod decimal_ops;
mod errors;

pub use config::NumericConfig;
pub use decimal_ops::{
    decimal_equals, decimal_gte, null_to_zero, positive_or_zero, round_percentage, safe_divide,
    scale_amount,
};
pub use errors::{NumericError, NumericResult};

/// Largest number of fractional digits a `Decimal` can carry.
pub const MAX_PLACES: u32 = 28;
