// ============================================================================
// Field Event Handler Interface
// Defines the contract for owners receiving field editing events
// ============================================================================

use crate::domain::{FieldId, NumericValue};
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by a numeric field editor
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FieldEvent {
    /// Field focused; `raw` is the unformatted text now shown
    FocusGained {
        field_id: FieldId,
        raw: String,
        timestamp: DateTime<Utc>,
    },

    /// Keystroke-level text change
    RawTextChanged {
        field_id: FieldId,
        text: String,
        /// `None` when the text is empty or not a number
        parsed: Option<f64>,
        timestamp: DateTime<Utc>,
    },

    /// Field blurred, value committed
    FocusLost {
        field_id: FieldId,
        display: String,
        value: NumericValue,
        timestamp: DateTime<Utc>,
    },

    /// Owner pushed a new canonical value
    ValueSynced {
        field_id: FieldId,
        value: NumericValue,
        /// false when the field was being edited and kept its text
        applied: bool,
        timestamp: DateTime<Utc>,
    },
}

impl FieldEvent {
    pub fn field_id(&self) -> FieldId {
        match self {
            FieldEvent::FocusGained { field_id, .. }
            | FieldEvent::RawTextChanged { field_id, .. }
            | FieldEvent::FocusLost { field_id, .. }
            | FieldEvent::ValueSynced { field_id, .. } => *field_id,
        }
    }
}

/// Event handler trait for the owner of a field's canonical value.
/// Implementations can update form state, log, validate, etc.
///
/// Handlers are called synchronously from the editing call that caused the
/// event, once per keystroke, with no debouncing.
pub trait FieldEventHandler: Send + Sync {
    /// Handle a field event
    fn on_event(&self, event: FieldEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<FieldEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpFieldHandler;

impl FieldEventHandler for NoOpFieldHandler {
    fn on_event(&self, _event: FieldEvent) {}
}

/// Logging event handler
pub struct LoggingFieldHandler;

impl FieldEventHandler for LoggingFieldHandler {
    fn on_event(&self, event: FieldEvent) {
        tracing::debug!("Numeric field event: {:?}", event);
    }
}
