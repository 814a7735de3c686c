// ============================================================================
// Numeric Module
// Locale-aware formatting and parsing of user-entered numbers
// ============================================================================
//
// This module provides:
// - format / format_with: canonical value -> grouped display text
// - parse / parse_with: display or raw text -> finite f64
// - raw_text: canonical value -> ungrouped, unrounded editing text
// - LocaleConvention: grouping/decimal separator pair (Nordic by default)
// - FormatOptions: fraction-digit bounds
// - NumericError: error type shared by the whole crate
//
// Design principles:
// - format never fails; bad input renders as ""
// - parse never panics; bad input is NotANumber
// - Rounding happens in exact decimal arithmetic, half away from zero

mod display;
mod errors;
mod locale;
mod options;
mod parsing;

pub use display::{format, format_with, raw_text, try_format_with, FormatInput};
pub use errors::{NumericError, NumericResult};
pub use locale::LocaleConvention;
pub use options::{FormatOptions, DEFAULT_MAXIMUM_FRACTION_DIGITS, MAX_FRACTION_DIGITS};
pub use parsing::{parse, parse_with};
