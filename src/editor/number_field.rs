// ============================================================================
// Number Field Editor
// Raw text while focused, locale-grouped display while idle
// ============================================================================

use crate::domain::{
    BlurPolicy, EditMode, EditState, EditorConfig, FieldId, FieldTransition, NumericValue,
};
use crate::interfaces::{FieldEvent, FieldEventHandler, NoOpFieldHandler};
use crate::numeric::{format_with, parse_with, raw_text};
use chrono::Utc;
use std::sync::Arc;

/// Editor for one rendered numeric input.
///
/// The canonical value belongs to the owner (the form state). The editor
/// keeps a copy of the last committed or synced value only to render it,
/// and reports every change to the owner through a [`FieldEventHandler`].
pub struct NumberField {
    /// Identity carried on every event
    id: FieldId,

    /// Convention, fraction digits, blur policy
    config: EditorConfig,

    /// Last committed or synced canonical value
    value: NumericValue,

    /// Visible text, tagged by edit mode
    state: EditState,

    /// Owner notified on every transition
    event_handler: Arc<dyn FieldEventHandler>,
}

impl NumberField {
    /// Create an idle editor showing `value` formatted per `config`
    pub fn new(
        value: NumericValue,
        config: EditorConfig,
        event_handler: Arc<dyn FieldEventHandler>,
    ) -> Self {
        let mut field = Self {
            id: FieldId::new(),
            config,
            value,
            state: EditState::default(),
            event_handler,
        };
        field.state = EditState::Idle {
            display: field.render(value),
        };
        field
    }

    /// Nordic convention, default options, no owner
    pub fn with_defaults(value: NumericValue) -> Self {
        Self::new(value, EditorConfig::default(), Arc::new(NoOpFieldHandler))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn value(&self) -> NumericValue {
        self.value
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn mode(&self) -> EditMode {
        self.state.mode()
    }

    /// Text the input should currently display
    pub fn text(&self) -> &str {
        self.state.text()
    }

    pub fn is_editing(&self) -> bool {
        self.state.is_editing()
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Focus gained: show the unrounded, ungrouped value for editing.
    ///
    /// A repeated focus while already editing keeps the typed text.
    pub fn on_focus(&mut self) -> FieldEvent {
        let mode = self.mode().transition(FieldTransition::Focus);
        debug_assert_eq!(mode, EditMode::Editing);

        if !self.is_editing() {
            self.state = EditState::Editing {
                raw: raw_text(self.value.get(), &self.config.convention),
            };
        }

        tracing::debug!("Field {:?} focused, raw text {:?}", self.id, self.text());

        self.emit(FieldEvent::FocusGained {
            field_id: self.id,
            raw: self.text().to_string(),
            timestamp: Utc::now(),
        })
    }

    /// Keystroke: show `raw` verbatim and notify the owner immediately.
    pub fn on_change(&mut self, raw: &str) -> FieldEvent {
        if !self.is_editing() {
            tracing::warn!(
                "Field {:?} changed without focus, entering edit mode",
                self.id
            );
        }
        debug_assert_eq!(
            self.mode().transition(FieldTransition::Change),
            EditMode::Editing
        );

        self.state = EditState::Editing {
            raw: raw.to_string(),
        };

        let parsed = parse_with(raw, &self.config.convention).ok();
        tracing::trace!("Field {:?} text {:?} parsed {:?}", self.id, raw, parsed);

        self.emit(FieldEvent::RawTextChanged {
            field_id: self.id,
            text: raw.to_string(),
            parsed,
            timestamp: Utc::now(),
        })
    }

    /// Focus lost: commit `raw` and, by default, re-render it grouped.
    ///
    /// Text that is not a number commits an absent value; under
    /// [`BlurPolicy::Format`] it also collapses to an empty display.
    pub fn on_blur(&mut self, raw: &str) -> FieldEvent {
        debug_assert_eq!(
            self.mode().transition(FieldTransition::Blur),
            EditMode::Idle
        );

        let value = NumericValue::from_input(raw, &self.config.convention)
            .unwrap_or(NumericValue::ABSENT);

        let shown = match self.config.blur_policy {
            BlurPolicy::Format => {
                format_with(raw, &self.config.options, &self.config.convention)
            },
            BlurPolicy::KeepRaw => raw.to_string(),
        };

        tracing::debug!(
            "Field {:?} blurred, committed {:?}, display {:?}",
            self.id,
            value,
            shown
        );

        self.value = value;
        self.state = EditState::Idle {
            display: shown.clone(),
        };

        self.emit(FieldEvent::FocusLost {
            field_id: self.id,
            display: shown,
            value,
            timestamp: Utc::now(),
        })
    }

    /// Owner changed the canonical value.
    ///
    /// While idle the display is re-rendered. While editing only the stored
    /// copy changes; the user's keystrokes stay on screen.
    pub fn sync_value(&mut self, value: NumericValue) -> FieldEvent {
        self.value = value;

        let applied = self.mode().transition(FieldTransition::Sync) == EditMode::Idle;
        if applied {
            self.state = EditState::Idle {
                display: self.render(value),
            };
        } else {
            tracing::debug!(
                "Field {:?} is being edited, deferring sync of {:?}",
                self.id,
                value
            );
        }

        self.emit(FieldEvent::ValueSynced {
            field_id: self.id,
            value,
            applied,
            timestamp: Utc::now(),
        })
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn render(&self, value: NumericValue) -> String {
        format_with(value, &self.config.options, &self.config.convention)
    }

    fn emit(&self, event: FieldEvent) -> FieldEvent {
        self.event_handler.on_event(event.clone());
        event
    }
}

impl std::fmt::Debug for NumberField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NumberField")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("value", &self.value)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
