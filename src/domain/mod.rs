// ============================================================================
// Domain Models Module
// Contains the field value objects, edit state machine and configuration
// ============================================================================

pub mod config;
pub mod edit_state;
pub mod value;

pub use config::EditorConfig;
pub use edit_state::{BlurPolicy, EditMode, EditState, FieldTransition};
pub use value::{FieldId, NumericValue};
