// ============================================================================
// Locale Parsing
// Locale-grouped display text back to a finite number
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::locale::LocaleConvention;

/// Unicode minus sign, emitted by some locale formatters instead of `-`.
const MINUS_SIGN: char = '\u{2212}';

/// Parse Nordic-formatted text (`"1 234,5"`) into a number.
///
/// See [`parse_with`].
#[inline]
pub fn parse(text: &str) -> NumericResult<f64> {
    parse_with(text, &LocaleConvention::nordic())
}

/// Parse locale-formatted text into a finite number.
///
/// Whitespace and the convention's grouping character are dropped, the
/// decimal character becomes `.`, and the remainder must be a plain decimal
/// literal (optionally with an exponent).
///
/// Empty input is an expected state while the user is typing, so it is
/// reported as `NotANumber` rather than treated as zero.
///
/// # Errors
/// Returns `NotANumber` for empty, malformed or non-finite input.
///
/// # Examples
/// ```
/// use locale_numeric_editor::numeric::{parse, NumericError};
///
/// assert_eq!(parse("10 000 000"), Ok(10_000_000.0));
/// assert_eq!(parse("1 234,5"), Ok(1234.5));
/// assert_eq!(parse(""), Err(NumericError::NotANumber));
/// ```
pub fn parse_with(text: &str, convention: &LocaleConvention) -> NumericResult<f64> {
    let mut literal = String::with_capacity(text.len());

    for c in text.chars() {
        if convention.is_grouping(c) {
            continue;
        }

        let normalized = if convention.is_decimal(c) {
            '.'
        } else if c == MINUS_SIGN {
            '-'
        } else {
            c
        };

        // Keeps `inf`/`NaN` spellings away from the float parser
        if !matches!(normalized, '0'..='9' | '.' | '-' | '+' | 'e' | 'E') {
            return Err(NumericError::NotANumber);
        }

        literal.push(normalized);
    }

    literal
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(NumericError::NotANumber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grouped() {
        assert_eq!(parse("10 000 000"), Ok(10_000_000.0));
        assert_eq!(parse("1 234,5"), Ok(1234.5));
        assert_eq!(parse("0,25"), Ok(0.25));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse(""), Err(NumericError::NotANumber));
        assert_eq!(parse("   "), Err(NumericError::NotANumber));
    }

    #[test]
    fn test_parse_tolerates_surrounding_whitespace() {
        assert_eq!(parse("  42 "), Ok(42.0));
        assert_eq!(parse("\t1 000,5\n"), Ok(1000.5));
    }

    #[test]
    fn test_parse_no_break_spaces() {
        assert_eq!(parse("1\u{a0}234\u{a0}567"), Ok(1_234_567.0));
        assert_eq!(parse("12\u{202f}345,6"), Ok(12345.6));
    }

    #[test]
    fn test_parse_negative() {
        assert_eq!(parse("-42,3"), Ok(-42.3));
        assert_eq!(parse("\u{2212}1 000"), Ok(-1000.0));
    }

    #[test]
    fn test_parse_period_decimal_under_nordic() {
        assert_eq!(parse("1234.5"), Ok(1234.5));
    }

    #[test]
    fn test_parse_exponent() {
        assert_eq!(parse("1e3"), Ok(1000.0));
        assert_eq!(parse("2,5E-1"), Ok(0.25));
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse("abc"), Err(NumericError::NotANumber));
        assert_eq!(parse("12abc"), Err(NumericError::NotANumber));
        assert_eq!(parse("1,2,3"), Err(NumericError::NotANumber));
        assert_eq!(parse("-"), Err(NumericError::NotANumber));
        assert_eq!(parse(","), Err(NumericError::NotANumber));
        assert_eq!(parse("--1"), Err(NumericError::NotANumber));
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert_eq!(parse("inf"), Err(NumericError::NotANumber));
        assert_eq!(parse("NaN"), Err(NumericError::NotANumber));
        assert_eq!(parse("1e400"), Err(NumericError::NotANumber));
    }

    #[test]
    fn test_parse_other_conventions() {
        let english = LocaleConvention::english();
        assert_eq!(parse_with("1,234.5", &english), Ok(1234.5));
        assert_eq!(parse_with("1,234,567", &english), Ok(1_234_567.0));

        let continental = LocaleConvention::continental();
        assert_eq!(parse_with("1.234,5", &continental), Ok(1234.5));
        assert_eq!(parse_with("1.234.567", &continental), Ok(1_234_567.0));

        let swiss = LocaleConvention::swiss();
        assert_eq!(parse_with("1'234.5", &swiss), Ok(1234.5));
    }
}
