// ============================================================================
// Email Module
// Strict, purely syntactic email address validation
// ============================================================================
//
// This module provides:
// - EmailAddress: immutable, always-valid normalized address
// - EmailAddressError: blank input or grammar mismatch
// - validate_email_address / is_valid_email_address entry points
//
// The grammar is deliberately stricter than RFC 5322:
// - Local part: dot-atoms only (no quoted strings, no escapes)
// - Domain: at least two labels, no bare hostnames, ASCII only
// - Internationalized domains must already be punycode (`xn--`) encoded

mod address;
mod errors;
mod grammar;

pub use address::{is_valid_email_address, validate_email_address, EmailAddress};
pub use errors::{EmailAddressError, EmailResult};
pub use grammar::PUNYCODE_PREFIX;
