// ============================================================================
// Number Field Factory
// Creates field editors with validated configuration
// ============================================================================

use crate::domain::{BlurPolicy, EditorConfig, NumericValue};
use crate::editor::NumberField;
use crate::interfaces::FieldEventHandler;
use crate::numeric::{FormatOptions, LocaleConvention};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a number field from configuration
///
/// # Arguments
/// * `config` - Editor configuration
/// * `value` - Initial canonical value
/// * `event_handler` - Owner receiving field events
///
/// # Example
/// ```
/// use locale_numeric_editor::prelude::*;
/// use locale_numeric_editor::editor::factory::create_from_config;
/// use std::sync::Arc;
///
/// let field = create_from_config(
///     EditorConfig::nordic_currency(),
///     NumericValue::new(1500.0).unwrap(),
///     Arc::new(NoOpFieldHandler),
/// )
/// .unwrap();
/// assert_eq!(field.text(), "1 500,00");
/// ```
pub fn create_from_config(
    config: EditorConfig,
    value: NumericValue,
    event_handler: Arc<dyn FieldEventHandler>,
) -> Result<NumberField, String> {
    config.validate()?;
    Ok(NumberField::new(value, config, event_handler))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for number fields with fluent API
///
/// # Example
/// ```
/// use locale_numeric_editor::prelude::*;
/// use locale_numeric_editor::editor::factory::NumberFieldBuilder;
/// use std::sync::Arc;
///
/// let field = NumberFieldBuilder::new()
///     .maximum_fraction_digits(1)
///     .value(NumericValue::new(1234.5).unwrap())
///     .build(Arc::new(NoOpFieldHandler))
///     .unwrap();
/// assert_eq!(field.text(), "1 234,5");
/// ```
#[derive(Debug, Clone, Default)]
pub struct NumberFieldBuilder {
    config: EditorConfig,
    value: NumericValue,
}

impl NumberFieldBuilder {
    /// Nordic convention, default options, format on blur, no value
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: EditorConfig) -> Self {
        Self {
            config,
            value: NumericValue::ABSENT,
        }
    }

    // ========================================================================
    // Display Configuration
    // ========================================================================

    pub fn convention(mut self, convention: LocaleConvention) -> Self {
        self.config.convention = convention;
        self
    }

    pub fn options(mut self, options: FormatOptions) -> Self {
        self.config.options = options;
        self
    }

    pub fn minimum_fraction_digits(mut self, digits: u8) -> Self {
        self.config.options = self.config.options.with_minimum_fraction_digits(digits);
        self
    }

    pub fn maximum_fraction_digits(mut self, digits: u8) -> Self {
        self.config.options = self.config.options.with_maximum_fraction_digits(digits);
        self
    }

    /// Keep the typed text on blur instead of reformatting it
    pub fn keep_raw_on_blur(mut self) -> Self {
        self.config.blur_policy = BlurPolicy::KeepRaw;
        self
    }

    /// Initial canonical value
    pub fn value(mut self, value: NumericValue) -> Self {
        self.value = value;
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the field
    pub fn build(self, event_handler: Arc<dyn FieldEventHandler>) -> Result<NumberField, String> {
        create_from_config(self.config, self.value, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &EditorConfig {
        &self.config
    }
}
