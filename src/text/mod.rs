// ============================================================================
// Text Module
// Blank-string helpers shared by the validators
// ============================================================================
//
// "Blank" means absent, empty, or made only of ASCII whitespace. Helpers accept
// anything convertible into `Option<&str>` so that both `"x"` and `None`
// can be passed.

mod blank;
mod errors;

pub use blank::{blank_to_none, is_blank, require_non_blank, DEFAULT_BLANK_MESSAGE};
pub use errors::{TextError, TextResult};
