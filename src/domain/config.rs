// ============================================================================
// Editor Configuration
// Convention, fraction-digit bounds and blur behaviour for one field
// ============================================================================

use super::edit_state::BlurPolicy;
use crate::numeric::{FormatOptions, LocaleConvention};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complete configuration for a numeric field editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EditorConfig {
    /// Grouping and decimal characters
    pub convention: LocaleConvention,

    /// Fraction-digit bounds for the idle display
    pub options: FormatOptions,

    /// Whether blur reformats the typed text
    pub blur_policy: BlurPolicy,
}

impl EditorConfig {
    /// Create a configuration using the given format options
    pub fn new(options: FormatOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Builder method: Set the locale convention
    pub fn with_convention(mut self, convention: LocaleConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Builder method: Set the format options
    pub fn with_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    /// Builder method: Set the blur policy
    pub fn with_blur_policy(mut self, policy: BlurPolicy) -> Self {
        self.blur_policy = policy;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.options
            .validate()
            .map_err(|e| format!("Invalid format options: {}", e))?;

        // Deserialized conventions bypass LocaleConvention::new
        LocaleConvention::new(self.convention.grouping(), self.convention.decimal())
            .map_err(|e| format!("Invalid convention: {}", e))?;

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl EditorConfig {
    /// Headcounts and other whole quantities: `1 250`
    pub fn nordic_integer() -> Self {
        Self::new(FormatOptions::integer())
    }

    /// Money amounts: `1 250 000,00`
    pub fn nordic_currency() -> Self {
        Self::new(FormatOptions::currency())
    }

    /// Percentages with at most one decimal: `12,5`
    pub fn nordic_percent() -> Self {
        Self::new(FormatOptions::decimal(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EditorConfig::default();
        assert_eq!(config.convention, LocaleConvention::nordic());
        assert_eq!(config.options, FormatOptions::default());
        assert_eq!(config.blur_policy, BlurPolicy::Format);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EditorConfig::nordic_currency()
            .with_convention(LocaleConvention::english())
            .with_blur_policy(BlurPolicy::KeepRaw);

        assert_eq!(config.options, FormatOptions::currency());
        assert_eq!(config.convention, LocaleConvention::english());
        assert_eq!(config.blur_policy, BlurPolicy::KeepRaw);
    }

    #[test]
    fn test_validation() {
        let config = EditorConfig::default().with_options(FormatOptions {
            minimum_fraction_digits: Some(3),
            maximum_fraction_digits: Some(1),
        });

        let err = config.validate().unwrap_err();
        assert!(err.starts_with("Invalid format options"));
    }

    #[test]
    fn test_preset_configs() {
        assert_eq!(EditorConfig::nordic_integer().options.resolve(), (0, 0));
        assert_eq!(EditorConfig::nordic_currency().options.resolve(), (2, 2));
        assert_eq!(EditorConfig::nordic_percent().options.resolve(), (0, 1));
    }
}
