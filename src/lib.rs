// ============================================================================
// Locale Numeric Editor Library
// Locale-aware numeric input: raw text while editing, grouped display while idle
// ============================================================================

//! # Locale Numeric Editor
//!
//! Numeric form fields that never fight the user's typing.
//!
//! ## Features
//!
//! - **Locale formatting** with a configurable grouping/decimal pair
//!   (Nordic `1 234 567,89` by default)
//! - **Forgiving parsing** of grouped, raw or pasted text
//! - **Format-on-blur editing**: the raw value while focused, the grouped
//!   display once the field is left
//! - **Owner notifications** on every keystroke through a pluggable handler
//!
//! ## Example
//!
//! ```rust
//! use locale_numeric_editor::prelude::*;
//! use std::sync::Arc;
//!
//! let mut field = NumberField::new(
//!     NumericValue::new(1234.5).unwrap(),
//!     EditorConfig::new(FormatOptions::default().with_maximum_fraction_digits(1)),
//!     Arc::new(NoOpFieldHandler),
//! );
//! assert_eq!(field.text(), "1 234,5");
//!
//! // Focus shows the raw value; keystrokes are shown verbatim
//! field.on_focus();
//! assert_eq!(field.text(), "1234,5");
//! field.on_change("98765,43");
//! assert_eq!(field.text(), "98765,43");
//!
//! // Blur commits and regroups
//! field.on_blur("98765,43");
//! assert_eq!(field.text(), "98 765,4");
//! ```

pub mod domain;
pub mod editor;
pub mod form;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        BlurPolicy, EditMode, EditState, EditorConfig, FieldId, FieldTransition, NumericValue,
    };
    pub use crate::editor::{create_from_config, NumberField, NumberFieldBuilder};
    pub use crate::form::FormValues;
    pub use crate::interfaces::{
        FieldEvent, FieldEventHandler, LoggingFieldHandler, NoOpFieldHandler,
    };
    pub use crate::numeric::{
        format, format_with, parse, parse_with, raw_text, try_format_with, FormatInput,
        FormatOptions, LocaleConvention, NumericError, NumericResult,
    };
}
