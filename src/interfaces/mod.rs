// ============================================================================
// Interfaces Module
// Contains the contract between field editors and their owner
// ============================================================================

mod event_handler;

pub use event_handler::{FieldEvent, FieldEventHandler, LoggingFieldHandler, NoOpFieldHandler};
