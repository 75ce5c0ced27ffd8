// ============================================================================
// Email Grammar
// The address pattern, applied to already-normalized input
// ============================================================================

use once_cell::sync::Lazy;
use regex::Regex;

/// ACE prefix marking a punycode-encoded domain label.
pub const PUNYCODE_PREFIX: &str = "xn--";

/// Characters allowed in a local-part atom.
const ATOM: &str = r"[a-z0-9!#$%&'*+/=?^_`{|}~-]+";

/// A domain label: alphanumeric at both ends, hyphens only inside.
const LABEL: &str = r"[a-z0-9](?:[a-z0-9-]*[a-z0-9])?";

/// Local part is dot-separated atoms; domain needs at least one dot.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"^{atom}(?:\.{atom})*@(?:{label}\.)+{label}$",
        atom = ATOM,
        label = LABEL
    );
    Regex::new(&pattern).expect("email grammar is a valid regex")
});

/// Match a lower-cased, trimmed candidate against the grammar.
#[inline]
pub(crate) fn is_match(normalized: &str) -> bool {
    EMAIL_PATTERN.is_match(normalized)
}
