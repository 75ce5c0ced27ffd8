// ============================================================================
// Email Address
// Validated, normalized email address value
// ============================================================================

use super::errors::{EmailAddressError, EmailResult};
use super::grammar::{self, PUNYCODE_PREFIX};
use crate::text::is_blank;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A syntactically valid email address.
///
/// The stored string is always lower-case, trimmed, and matches the strict
/// address grammar. The only way to obtain one is through [`EmailAddress::parse`]
/// (or a conversion that calls it), so holding an `EmailAddress` proves validity.
///
/// # Example
/// ```
/// use validation_utils::email::EmailAddress;
///
/// let email = EmailAddress::parse("  Ada.Lovelace@Example.COM ").unwrap();
/// assert_eq!(email.as_str(), "ada.lovelace@example.com");
/// assert_eq!(email.local_part(), "ada.lovelace");
/// assert_eq!(email.domain(), "example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Normalize and validate a raw address.
    ///
    /// Normalization lower-cases ASCII letters only (no locale-sensitive
    /// mapping) and trims surrounding ASCII whitespace. Non-ASCII spaces are
    /// left in place and fail the grammar.
    ///
    /// # Errors
    /// - `Blank` if the input is empty or ASCII-whitespace-only
    /// - `InvalidFormat` (carrying the raw input) if the normalized value does
    ///   not match the grammar
    pub fn parse(raw: &str) -> EmailResult<Self> {
        if is_blank(raw) {
            tracing::debug!(reason = "blank", "rejected email address");
            return Err(EmailAddressError::Blank);
        }

        let normalized = raw.to_ascii_lowercase();
        let normalized = normalized.trim_ascii();

        if !grammar::is_match(normalized) {
            tracing::debug!(
                reason = "grammar",
                input_len = raw.len(),
                "rejected email address"
            );
            return Err(EmailAddressError::InvalidFormat {
                input: raw.to_string(),
            });
        }

        Ok(Self(normalized.to_string()))
    }

    /// Get the normalized address.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the value, returning the normalized address.
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Portion before the `@`.
    pub fn local_part(&self) -> &str {
        self.split().0
    }

    /// Portion after the `@`.
    pub fn domain(&self) -> &str {
        self.split().1
    }

    /// Check if any domain label is punycode (`xn--`) encoded.
    pub fn has_punycode_domain(&self) -> bool {
        self.domain()
            .split('.')
            .any(|label| label.starts_with(PUNYCODE_PREFIX))
    }

    // The grammar admits exactly one '@'.
    fn split(&self) -> (&str, &str) {
        self.0.split_once('@').unwrap_or((self.0.as_str(), ""))
    }
}

/// Validate a possibly-absent raw address.
///
/// `None` is treated the same as blank input.
///
/// # Example
/// ```
/// use validation_utils::email::validate_email_address;
///
/// assert!(validate_email_address("user@example.com").is_ok());
/// assert!(validate_email_address(None).unwrap_err().is_blank());
/// ```
pub fn validate_email_address<'a>(raw: impl Into<Option<&'a str>>) -> EmailResult<EmailAddress> {
    match raw.into() {
        Some(raw) => EmailAddress::parse(raw),
        None => {
            tracing::debug!(reason = "absent", "rejected email address");
            Err(EmailAddressError::Blank)
        },
    }
}

/// Check whether a raw address would be accepted.
#[inline]
pub fn is_valid_email_address(raw: &str) -> bool {
    EmailAddress::parse(raw).is_ok()
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EmailAddress {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for EmailAddress {
    type Err = EmailAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = EmailAddressError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = EmailAddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<EmailAddress> for String {
    #[inline]
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_invalid(raw: &str) {
        let result = EmailAddress::parse(raw);
        assert!(result.is_err(), "should reject: {:?}", raw);
    }

    #[test]
    fn test_normalizes_case_and_whitespace() {
        let email = EmailAddress::parse("  TeSt@ExAmPlE.CoM\t").unwrap();
        assert_eq!(email.as_str(), "test@example.com");
        assert_eq!(email.to_string(), "test@example.com");
    }

    #[test]
    fn test_accepts_common_addresses() {
        for raw in [
            "user@example.com",
            "first.last@example.com",
            "user+tag@sub.example.org",
            "o'reilly@example.ie",
            "x@a.bc",
            "user@my-host.example.com",
        ] {
            assert!(is_valid_email_address(raw), "should accept: {}", raw);
        }
    }

    #[test]
    fn test_rejects_blank() {
        for raw in ["", " ", "\t\n", "   \r\n  "] {
            assert_eq!(EmailAddress::parse(raw), Err(EmailAddressError::Blank));
        }
        assert_eq!(validate_email_address(None), Err(EmailAddressError::Blank));
    }

    #[test]
    fn test_rejects_bare_hostnames() {
        assert_invalid("user@host");
        assert_invalid("user@localhost");
    }

    #[test]
    fn test_rejects_misplaced_dots_in_local_part() {
        assert_invalid(".user@host.com");
        assert_invalid("user.@host.com");
        assert_invalid("user..name@host.com");
    }

    #[test]
    fn test_rejects_quoted_and_escaped_local_parts() {
        assert_invalid("\"Fred Bloggs\"@example.com");
        assert_invalid("Abc\\@def@example.com");
        assert_invalid("\"joe\"@example.com");
    }

    #[test]
    fn test_rejects_non_ascii() {
        assert_invalid("user@ñandú.com.ar");
        assert_invalid("ñandú@example.com");
        assert_invalid("USER@ÑANDÚ.COM.AR");
    }

    #[test]
    fn test_rejects_non_ascii_whitespace_padding() {
        for raw in [
            "user@example.com\u{3000}",
            "\u{a0}user@example.com",
            "user@example.com\u{2028}",
        ] {
            assert_eq!(
                EmailAddress::parse(raw),
                Err(EmailAddressError::InvalidFormat {
                    input: raw.to_string()
                })
            );
        }

        let err = validate_email_address("\u{a0}").unwrap_err();
        assert!(!err.is_blank());
    }

    #[test]
    fn test_accepts_punycode_domain() {
        let email = EmailAddress::parse("user@xn--and-6ma2c.com.ar").unwrap();
        assert_eq!(email.domain(), "xn--and-6ma2c.com.ar");
        assert!(email.has_punycode_domain());

        let plain = EmailAddress::parse("user@example.com").unwrap();
        assert!(!plain.has_punycode_domain());
    }

    #[test]
    fn test_invalid_format_carries_original_input() {
        let err = EmailAddress::parse("  Not An Email ").unwrap_err();
        assert_eq!(
            err,
            EmailAddressError::InvalidFormat {
                input: "  Not An Email ".to_string()
            }
        );
        assert!(err.to_string().contains("  Not An Email "));
    }

    #[test]
    fn test_local_part_and_domain() {
        let email = EmailAddress::parse("a.b+c@mail.example.com").unwrap();
        assert_eq!(email.local_part(), "a.b+c");
        assert_eq!(email.domain(), "mail.example.com");
    }

    #[test]
    fn test_conversions() {
        let parsed: EmailAddress = "Bob@Example.com".parse().unwrap();
        let from_str = EmailAddress::try_from("bob@example.com").unwrap();
        let from_string = EmailAddress::try_from(String::from(" BOB@EXAMPLE.COM ")).unwrap();

        assert_eq!(parsed, from_str);
        assert_eq!(from_str, from_string);
        assert_eq!(parsed.as_ref(), "bob@example.com");
        assert_eq!(String::from(parsed), "bob@example.com");
        assert_eq!(from_string.into_inner(), "bob@example.com");

        assert!("not-an-email".parse::<EmailAddress>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_revalidates() {
        let email = EmailAddress::parse("user@example.com").unwrap();
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"user@example.com\"");

        let back: EmailAddress = serde_json::from_str("\" User@Example.com \"").unwrap();
        assert_eq!(back, email);

        let bad: Result<EmailAddress, _> = serde_json::from_str("\"user@localhost\"");
        assert!(bad.is_err());
    }

    proptest! {
        #[test]
        fn prop_revalidation_is_idempotent(
            local in "[A-Za-z0-9_+-]{1,10}(\\.[A-Za-z0-9_+-]{1,10}){0,2}",
            labels in prop::collection::vec("[A-Za-z0-9]([A-Za-z0-9-]{0,8}[A-Za-z0-9])?", 2..4),
            pad in "[ \t]{0,3}",
        ) {
            let raw = format!("{pad}{local}@{}{pad}", labels.join("."));
            let first = EmailAddress::parse(&raw).unwrap();
            let second = EmailAddress::parse(first.as_str()).unwrap();
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.as_str(), first.as_str().to_ascii_lowercase());
            prop_assert_eq!(first.as_str(), first.as_str().trim());
        }

        #[test]
        fn prop_blank_always_fails(raw in "[ \t\r\n]{0,16}") {
            prop_assert_eq!(EmailAddress::parse(&raw), Err(EmailAddressError::Blank));
        }

        #[test]
        fn prop_non_ascii_whitespace_padding_fails(
            local in "[a-z0-9]{1,10}",
            pad in "[\u{85}\u{a0}\u{1680}\u{2000}-\u{200a}\u{2028}\u{2029}\u{202f}\u{205f}\u{3000}]{1,3}",
            leading in any::<bool>(),
        ) {
            let raw = if leading {
                format!("{}{}@example.com", pad, local)
            } else {
                format!("{}@example.com{}", local, pad)
            };
            prop_assert_eq!(
                EmailAddress::parse(&raw),
                Err(EmailAddressError::InvalidFormat { input: raw.clone() })
            );
        }

        #[test]
        fn prop_dotless_domain_fails(local in "[a-z0-9]{1,10}", host in "[a-z0-9]{1,10}") {
            let raw = format!("{}@{}", local, host);
            prop_assert!(EmailAddress::parse(&raw).is_err());
        }

        #[test]
        fn prop_non_ascii_fails(local in "[a-z]{1,8}", c in "[\u{80}-\u{10FFFF}]") {
            let in_local = format!("{}{}@example.com", local, c);
            let in_domain = format!("{}@exa{}mple.com", local, c);
            prop_assert!(EmailAddress::parse(&in_local).is_err());
            prop_assert!(EmailAddress::parse(&in_domain).is_err());
        }
    }
}
