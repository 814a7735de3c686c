// ============================================================================
// Locale Formatting
// Canonical numbers to grouped display text and raw editing text
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::locale::LocaleConvention;
use super::options::FormatOptions;
use super::parsing::parse_with;
use rust_decimal::{Decimal, RoundingStrategy};
use smallvec::SmallVec;
use std::str::FromStr;

/// Anything a form may hand to the formatter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormatInput<'a> {
    /// No value entered (null / undefined)
    Absent,
    /// A number, possibly non-finite
    Number(f64),
    /// Numeric text, possibly empty or malformed
    Text(&'a str),
}

impl From<f64> for FormatInput<'_> {
    fn from(value: f64) -> Self {
        FormatInput::Number(value)
    }
}

impl From<i64> for FormatInput<'_> {
    fn from(value: i64) -> Self {
        FormatInput::Number(value as f64)
    }
}

impl From<i32> for FormatInput<'_> {
    fn from(value: i32) -> Self {
        FormatInput::Number(f64::from(value))
    }
}

impl From<Option<f64>> for FormatInput<'_> {
    fn from(value: Option<f64>) -> Self {
        value.map_or(FormatInput::Absent, FormatInput::Number)
    }
}

impl<'a> From<&'a str> for FormatInput<'a> {
    fn from(text: &'a str) -> Self {
        FormatInput::Text(text)
    }
}

impl<'a> From<&'a String> for FormatInput<'a> {
    fn from(text: &'a String) -> Self {
        FormatInput::Text(text.as_str())
    }
}

impl FormatInput<'_> {
    /// Resolve to a finite number.
    ///
    /// `Ok(None)` means "no value"; `Err` means a value was given but is not
    /// a finite number.
    pub fn to_number(&self, convention: &LocaleConvention) -> NumericResult<Option<f64>> {
        match *self {
            FormatInput::Absent => Ok(None),
            FormatInput::Number(value) if value.is_finite() => Ok(Some(value)),
            FormatInput::Number(_) => Err(NumericError::NotANumber),
            FormatInput::Text(text) if text.trim().is_empty() => Ok(None),
            FormatInput::Text(text) => parse_with(text, convention).map(Some),
        }
    }
}

/// Format with the Nordic convention.
///
/// See [`format_with`].
///
/// # Examples
/// ```
/// use locale_numeric_editor::numeric::{format, FormatInput, FormatOptions};
///
/// let opts = FormatOptions::default();
/// assert_eq!(format(10_000_000, &opts), "10 000 000");
/// assert_eq!(format(FormatInput::Absent, &opts), "");
/// assert_eq!(format("abc", &opts), "");
///
/// let one_digit = FormatOptions::default().with_maximum_fraction_digits(1);
/// assert_eq!(format(1234.5, &one_digit), "1 234,5");
/// ```
#[inline]
pub fn format<'a>(value: impl Into<FormatInput<'a>>, options: &FormatOptions) -> String {
    format_with(value, options, &LocaleConvention::nordic())
}

/// Render a value as locale-grouped display text.
///
/// Absent, empty and unparseable input all render as the empty string. Use
/// [`try_format_with`] to tell them apart.
pub fn format_with<'a>(
    value: impl Into<FormatInput<'a>>,
    options: &FormatOptions,
    convention: &LocaleConvention,
) -> String {
    try_format_with(value, options, convention)
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Strict variant of [`format_with`].
///
/// # Errors
/// Returns `NotANumber` when a value was given but could not be read as a
/// finite number. Absent or empty input yields `Ok(None)`.
pub fn try_format_with<'a>(
    value: impl Into<FormatInput<'a>>,
    options: &FormatOptions,
    convention: &LocaleConvention,
) -> NumericResult<Option<String>> {
    let number = value.into().to_number(convention)?;
    Ok(number.map(|n| render(n, options, convention)))
}

/// Raw editing text for a canonical value: shortest round-trip digits, no
/// grouping, no rounding, and the convention's decimal character.
///
/// ```
/// use locale_numeric_editor::numeric::{raw_text, LocaleConvention};
///
/// let nordic = LocaleConvention::nordic();
/// assert_eq!(raw_text(Some(1234.5), &nordic), "1234,5");
/// assert_eq!(raw_text(Some(10_000_000.0), &nordic), "10000000");
/// assert_eq!(raw_text(None, &nordic), "");
/// ```
pub fn raw_text(value: Option<f64>, convention: &LocaleConvention) -> String {
    match value {
        Some(v) if v.is_finite() => {
            // -0.0 displays as "-0"
            let v = if v == 0.0 { 0.0 } else { v };
            v.to_string().replace('.', &convention.decimal().to_string())
        },
        _ => String::new(),
    }
}

// ============================================================================
// Rendering
// ============================================================================

fn render(value: f64, options: &FormatOptions, convention: &LocaleConvention) -> String {
    let (min, max) = options.resolve();
    let plain = round_to_plain(value, min, max);

    let (negative, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, plain.as_str()),
    };

    let (int_digits, frac_digits) = match unsigned.split_once('.') {
        Some((int_digits, frac_digits)) => (int_digits, frac_digits),
        None => (unsigned, ""),
    };

    let mut out = String::with_capacity(plain.len() + int_digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    push_grouped(&mut out, int_digits, convention.grouping());
    if !frac_digits.is_empty() {
        out.push(convention.decimal());
        out.push_str(frac_digits);
    }
    out
}

/// Round half away from zero and return plain `-ddd.fff` text with between
/// `min` and `max` fraction digits.
fn round_to_plain(value: f64, min: u8, max: u8) -> String {
    match Decimal::from_str(&value.to_string()) {
        Ok(decimal) => {
            let mut rounded = decimal
                .round_dp_with_strategy(u32::from(max), RoundingStrategy::MidpointAwayFromZero)
                .normalize();

            if rounded.is_zero() {
                rounded.set_sign_positive(true);
            }
            if rounded.scale() < u32::from(min) {
                rounded.rescale(u32::from(min));
            }
            rounded.to_string()
        },
        // Beyond Decimal's range every f64 is a whole number
        Err(_) => {
            let mut plain = format!("{:.0}", value);
            if plain == "-0" {
                plain.remove(0);
            }
            if min > 0 {
                plain.push('.');
                plain.extend(std::iter::repeat_n('0', usize::from(min)));
            }
            plain
        },
    }
}

fn push_grouped(out: &mut String, digits: &str, separator: char) {
    let lead = match digits.len() % 3 {
        0 => 3,
        n => n,
    };

    let mut groups: SmallVec<[&str; 8]> = SmallVec::new();
    groups.push(&digits[..lead.min(digits.len())]);
    let mut start = lead;
    while start < digits.len() {
        groups.push(&digits[start..start + 3]);
        start += 3;
    }

    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        out.push_str(group);
    }
}
