// ============================================================================
// Format Options
// Fraction-digit bounds for locale display formatting
// ============================================================================

use super::errors::{NumericError, NumericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest fraction-digit bound accepted for either side.
pub const MAX_FRACTION_DIGITS: u8 = 20;

/// Maximum fraction digits used when the caller gives no maximum.
pub const DEFAULT_MAXIMUM_FRACTION_DIGITS: u8 = 3;

/// Caller-supplied fraction-digit bounds.
///
/// Unset bounds resolve like the browser's decimal number formatter: the
/// minimum defaults to 0 and the maximum to `max(minimum, 3)`.
///
/// # Example
/// ```
/// use locale_numeric_editor::numeric::FormatOptions;
///
/// let opts = FormatOptions::default().with_maximum_fraction_digits(1);
/// assert_eq!(opts.resolve(), (0, 1));
///
/// let opts = FormatOptions::default().with_minimum_fraction_digits(5);
/// assert_eq!(opts.resolve(), (5, 5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatOptions {
    /// Pad the fraction with zeros up to this many digits
    pub minimum_fraction_digits: Option<u8>,

    /// Round the fraction to at most this many digits
    pub maximum_fraction_digits: Option<u8>,
}

impl FormatOptions {
    /// Create validated options.
    ///
    /// # Errors
    /// - `FractionDigitsOutOfRange` if a bound exceeds 20
    /// - `FractionDigitsInverted` if both are given and minimum > maximum
    pub fn new(minimum: Option<u8>, maximum: Option<u8>) -> NumericResult<Self> {
        let options = Self {
            minimum_fraction_digits: minimum,
            maximum_fraction_digits: maximum,
        };
        options.validate()?;
        Ok(options)
    }

    /// Whole numbers only
    pub const fn integer() -> Self {
        Self {
            minimum_fraction_digits: Some(0),
            maximum_fraction_digits: Some(0),
        }
    }

    /// Exactly two fraction digits, as used for money amounts
    pub const fn currency() -> Self {
        Self {
            minimum_fraction_digits: Some(2),
            maximum_fraction_digits: Some(2),
        }
    }

    /// Up to `digits` fraction digits, no padding
    pub const fn decimal(digits: u8) -> Self {
        Self {
            minimum_fraction_digits: Some(0),
            maximum_fraction_digits: Some(digits),
        }
    }

    /// Builder method: set minimum fraction digits
    pub fn with_minimum_fraction_digits(mut self, digits: u8) -> Self {
        self.minimum_fraction_digits = Some(digits);
        self
    }

    /// Builder method: set maximum fraction digits
    pub fn with_maximum_fraction_digits(mut self, digits: u8) -> Self {
        self.maximum_fraction_digits = Some(digits);
        self
    }

    /// Validate the bounds.
    pub fn validate(&self) -> NumericResult<()> {
        let out_of_range = |bound: Option<u8>| bound.is_some_and(|d| d > MAX_FRACTION_DIGITS);

        if out_of_range(self.minimum_fraction_digits) || out_of_range(self.maximum_fraction_digits)
        {
            return Err(NumericError::FractionDigitsOutOfRange);
        }

        if let (Some(min), Some(max)) = (self.minimum_fraction_digits, self.maximum_fraction_digits)
        {
            if min > max {
                return Err(NumericError::FractionDigitsInverted);
            }
        }

        Ok(())
    }

    /// Resolve to concrete `(minimum, maximum)` bounds.
    ///
    /// Never fails: out-of-range bounds are clamped to 20 and an inverted
    /// pair is widened so that `maximum >= minimum`. Use `validate` to reject
    /// such options up front.
    pub fn resolve(&self) -> (u8, u8) {
        let min = self
            .minimum_fraction_digits
            .unwrap_or(0)
            .min(MAX_FRACTION_DIGITS);

        let max = self
            .maximum_fraction_digits
            .map(|d| d.min(MAX_FRACTION_DIGITS))
            .unwrap_or_else(|| min.max(DEFAULT_MAXIMUM_FRACTION_DIGITS))
            .max(min);

        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resolution() {
        assert_eq!(FormatOptions::default().resolve(), (0, 3));
    }

    #[test]
    fn test_minimum_only_widens_maximum() {
        let opts = FormatOptions::default().with_minimum_fraction_digits(2);
        assert_eq!(opts.resolve(), (2, 3));

        let opts = FormatOptions::default().with_minimum_fraction_digits(7);
        assert_eq!(opts.resolve(), (7, 7));
    }

    #[test]
    fn test_maximum_only() {
        let opts = FormatOptions::default().with_maximum_fraction_digits(1);
        assert_eq!(opts.resolve(), (0, 1));

        let opts = FormatOptions::default().with_maximum_fraction_digits(0);
        assert_eq!(opts.resolve(), (0, 0));
    }

    #[test]
    fn test_presets() {
        assert_eq!(FormatOptions::integer().resolve(), (0, 0));
        assert_eq!(FormatOptions::currency().resolve(), (2, 2));
        assert_eq!(FormatOptions::decimal(4).resolve(), (0, 4));
    }

    #[test]
    fn test_validation() {
        assert!(FormatOptions::new(Some(1), Some(2)).is_ok());
        assert!(FormatOptions::new(None, None).is_ok());
        assert_eq!(
            FormatOptions::new(Some(3), Some(1)),
            Err(NumericError::FractionDigitsInverted)
        );
        assert_eq!(
            FormatOptions::new(None, Some(21)),
            Err(NumericError::FractionDigitsOutOfRange)
        );
    }

    #[test]
    fn test_resolve_clamps_invalid_options() {
        let inverted = FormatOptions {
            minimum_fraction_digits: Some(4),
            maximum_fraction_digits: Some(1),
        };
        assert_eq!(inverted.resolve(), (4, 4));

        let oversized = FormatOptions {
            minimum_fraction_digits: None,
            maximum_fraction_digits: Some(99),
        };
        assert_eq!(oversized.resolve(), (0, 20));
    }
}
