// ============================================================================
// Editor Module
// Contains the per-field numeric editing state machine
// ============================================================================

mod number_field;

pub mod factory;

pub use factory::{create_from_config, NumberFieldBuilder};
pub use number_field::NumberField;
