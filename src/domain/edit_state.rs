// ============================================================================
// Edit State Machine
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether a field is being edited. Payload-free tag of [`EditState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EditMode {
    Idle,
    Editing,
}

/// Events that drive the edit state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTransition {
    Focus,
    Change,
    Blur,
    Sync,
}

impl EditMode {
    /// Mode after `transition`.
    ///
    /// A change without a preceding focus (e.g. autofill) still enters
    /// editing, so no keystroke is ever reformatted.
    pub fn transition(self, transition: FieldTransition) -> EditMode {
        match (self, transition) {
            (_, FieldTransition::Focus) | (_, FieldTransition::Change) => EditMode::Editing,
            (_, FieldTransition::Blur) => EditMode::Idle,
            (mode, FieldTransition::Sync) => mode,
        }
    }
}

/// Visible text of a field, tagged by mode.
///
/// `Idle` text is always a formatted rendering (or the kept raw text under
/// [`BlurPolicy::KeepRaw`]). `Editing` text is exactly what the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditState {
    Idle { display: String },
    Editing { raw: String },
}

impl EditState {
    #[inline]
    pub fn mode(&self) -> EditMode {
        match self {
            EditState::Idle { .. } => EditMode::Idle,
            EditState::Editing { .. } => EditMode::Editing,
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        match self {
            EditState::Idle { display } => display,
            EditState::Editing { raw } => raw,
        }
    }

    #[inline]
    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing { .. })
    }
}

impl Default for EditState {
    fn default() -> Self {
        EditState::Idle {
            display: String::new(),
        }
    }
}

/// What happens to the visible text when the field loses focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BlurPolicy {
    /// Re-render the raw text as grouped display text
    #[default]
    Format,
    /// Leave the raw text as typed
    KeepRaw,
}
