// ============================================================================
// Numeric Errors
// Error types for locale number parsing and format configuration
// ============================================================================

use std::fmt;

/// Errors that can occur while parsing numbers or configuring formatting.
///
/// Only `NotANumber` shows up at editing time. The remaining variants are
/// raised when options or conventions are constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input text is empty, malformed, or not a finite number
    NotANumber,
    /// A fraction-digit bound is outside 0..=20
    FractionDigitsOutOfRange,
    /// Minimum fraction digits exceed the maximum
    FractionDigitsInverted,
    /// Grouping and decimal characters clash or are not separators
    InvalidConvention,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NotANumber => write!(f, "not a number: could not parse value"),
            NumericError::FractionDigitsOutOfRange => {
                write!(f, "fraction digits out of range: bounds must be within 0..=20")
            },
            NumericError::FractionDigitsInverted => write!(
                f,
                "invalid fraction digits: minimum exceeds maximum"
            ),
            NumericError::InvalidConvention => write!(
                f,
                "invalid locale convention: separators must be distinct non-digit characters"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
