// ============================================================================
// Value Objects
// Canonical numeric value and field identity
// ============================================================================

use crate::numeric::{FormatInput, LocaleConvention, NumericError, NumericResult};
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifies one rendered numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldId(Uuid);

impl FieldId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for FieldId {
    fn default() -> Self {
        Self::new()
    }
}

/// The canonical value of a numeric field: absent, or a finite number.
///
/// Never holds NaN or an infinity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Option<f64>", into = "Option<f64>")
)]
pub struct NumericValue(Option<f64>);

impl NumericValue {
    /// No value entered
    pub const ABSENT: Self = Self(None);

    /// Create from a finite number.
    ///
    /// # Errors
    /// Returns `NotANumber` for NaN or infinite input.
    pub fn new(value: f64) -> NumericResult<Self> {
        if value.is_finite() {
            Ok(Self(Some(value)))
        } else {
            Err(NumericError::NotANumber)
        }
    }

    /// Read any form input. Absent or blank input gives `ABSENT`.
    ///
    /// # Errors
    /// Returns `NotANumber` if a value was given but is not a finite number.
    pub fn from_input<'a>(
        input: impl Into<FormatInput<'a>>,
        convention: &LocaleConvention,
    ) -> NumericResult<Self> {
        input.into().to_number(convention).map(Self)
    }

    #[inline]
    pub const fn get(&self) -> Option<f64> {
        self.0
    }

    #[inline]
    pub const fn is_absent(&self) -> bool {
        self.0.is_none()
    }
}

impl TryFrom<f64> for NumericValue {
    type Error = NumericError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<Option<f64>> for NumericValue {
    type Error = NumericError;

    fn try_from(value: Option<f64>) -> Result<Self, Self::Error> {
        value.map_or(Ok(Self::ABSENT), Self::new)
    }
}

impl From<NumericValue> for Option<f64> {
    fn from(value: NumericValue) -> Self {
        value.0
    }
}

impl From<NumericValue> for FormatInput<'_> {
    fn from(value: NumericValue) -> Self {
        value.0.into()
    }
}
