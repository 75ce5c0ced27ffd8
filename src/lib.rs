// ============================================================================
// Validation Utilities Library
// Strict email address validation plus decimal and string helpers
// ============================================================================

//! # Validation Utilities
//!
//! Small, pure, synchronous helpers for validating and normalizing input.
//!
//! ## Features
//!
//! - **Strict email validation** with a grammar tighter than the mail RFCs
//!   (dot-atom local parts only, dotted ASCII domains, punycode for IDNs)
//! - **Always-valid values**: an [`EmailAddress`](email::EmailAddress) can only be
//!   obtained through validation
//! - **Decimal helpers** with banker's rounding and a zero-divisor policy
//! - **Blank-string helpers** for optional and required text
//!
//! ## Example
//!
//! ```rust
//! use validation_utils::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let email = validate_email_address(" Ada@Example.com ").unwrap();
//! assert_eq!(email.as_str(), "ada@example.com");
//!
//! assert!(validate_email_address("user@localhost").is_err());
//! assert!(validate_email_address("user@ñandú.com.ar").is_err());
//! assert!(validate_email_address("user@xn--and-6ma2c.com.ar").is_ok());
//!
//! let ratio = safe_divide(Decimal::ONE, Decimal::ZERO, 4).unwrap();
//! assert!(ratio.is_zero());
//!
//! assert_eq!(require_non_blank("  ", None).unwrap_err().message(), "value must not be blank");
//! ```

pub mod email;
pub mod numeric;
pub mod text;

// Re-exports for convenience
pub mod prelude {
    pub use crate::email::{
        is_valid_email_address, validate_email_address, EmailAddress, EmailAddressError,
        EmailResult,
    };
    pub use crate::numeric::{
        decimal_equals, decimal_gte, null_to_zero, positive_or_zero, round_percentage,
        safe_divide, scale_amount, NumericConfig, NumericError, NumericResult,
    };
    pub use crate::text::{blank_to_none, is_blank, require_non_blank, TextError, TextResult};
}
