// ============================================================================
// Locale Convention
// Grouping and decimal separator pair used for display and parsing
// ============================================================================

use super::errors::{NumericError, NumericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The pair of characters used to group integer digits and to separate the
/// fraction.
///
/// The default is the Nordic convention: `1 234 567,89`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocaleConvention {
    grouping: char,
    decimal: char,
}

impl LocaleConvention {
    /// Create a convention from a grouping and a decimal character.
    ///
    /// # Errors
    /// Returns `InvalidConvention` if the characters are equal, if either
    /// is an ASCII digit or a sign character, or if the decimal character
    /// is whitespace (whitespace is always read as grouping).
    pub fn new(grouping: char, decimal: char) -> NumericResult<Self> {
        let is_reserved = |c: char| c.is_ascii_digit() || c == '-' || c == '+';

        if grouping == decimal
            || is_reserved(grouping)
            || is_reserved(decimal)
            || decimal.is_whitespace()
        {
            return Err(NumericError::InvalidConvention);
        }

        Ok(Self { grouping, decimal })
    }

    /// Space grouping, comma decimal: `1 234,5`
    pub const fn nordic() -> Self {
        Self {
            grouping: ' ',
            decimal: ',',
        }
    }

    /// Comma grouping, period decimal: `1,234.5`
    pub const fn english() -> Self {
        Self {
            grouping: ',',
            decimal: '.',
        }
    }

    /// Period grouping, comma decimal: `1.234,5`
    pub const fn continental() -> Self {
        Self {
            grouping: '.',
            decimal: ',',
        }
    }

    /// Apostrophe grouping, period decimal: `1'234.5`
    pub const fn swiss() -> Self {
        Self {
            grouping: '\'',
            decimal: '.',
        }
    }

    #[inline]
    pub const fn grouping(&self) -> char {
        self.grouping
    }

    #[inline]
    pub const fn decimal(&self) -> char {
        self.decimal
    }

    /// Whether `c` is dropped before parsing.
    ///
    /// Whitespace always counts as grouping so that pasted values using
    /// no-break spaces still parse.
    #[inline]
    pub(crate) fn is_grouping(&self, c: char) -> bool {
        c == self.grouping || c.is_whitespace()
    }

    /// Whether `c` marks the decimal point on input.
    ///
    /// A period is accepted as well unless it is this convention's grouping
    /// character.
    #[inline]
    pub(crate) fn is_decimal(&self, c: char) -> bool {
        c == self.decimal || (c == '.' && self.grouping != '.')
    }
}

impl Default for LocaleConvention {
    fn default() -> Self {
        Self::nordic()
    }
}
