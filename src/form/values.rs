// ============================================================================
// Form Values
// Canonical values of a form step, kept current from field events
// ============================================================================

use crate::domain::{FieldId, NumericValue};
use crate::editor::NumberField;
use crate::interfaces::{FieldEvent, FieldEventHandler};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Default)]
struct FormState {
    /// Which named value each registered field edits
    names: HashMap<FieldId, String>,

    /// Canonical value per field name
    values: BTreeMap<String, NumericValue>,
}

/// Owner of the canonical values of one form step.
///
/// Share it as the event handler of every field on the step; each keystroke
/// and blur updates the named value immediately.
///
/// # Example
/// ```
/// use locale_numeric_editor::prelude::*;
/// use std::sync::Arc;
///
/// let form = Arc::new(FormValues::new());
/// let mut revenue = NumberField::new(
///     NumericValue::ABSENT,
///     EditorConfig::nordic_currency(),
///     form.clone(),
/// );
/// form.register("revenue", &revenue);
///
/// revenue.on_focus();
/// revenue.on_change("125000,5");
/// assert_eq!(form.get("revenue").get(), Some(125000.5));
///
/// revenue.on_blur("125000,5");
/// assert_eq!(revenue.text(), "125 000,50");
/// ```
#[derive(Debug, Default)]
pub struct FormValues {
    state: RwLock<FormState>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `field` to `name`, seeding the name with the field's value
    pub fn register(&self, name: impl Into<String>, field: &NumberField) {
        self.register_id(name, field.id(), field.value());
    }

    /// Bind a field id to `name` with an initial value
    pub fn register_id(&self, name: impl Into<String>, field_id: FieldId, value: NumericValue) {
        let name = name.into();
        let mut state = self.state.write();
        state.values.insert(name.clone(), value);
        state.names.insert(field_id, name);
    }

    /// Forget `field_id`, e.g. when its field unmounts.
    ///
    /// The named value is kept for the next field registered under the same
    /// name. Later events from the old id are ignored.
    pub fn unregister(&self, field_id: FieldId) -> Option<String> {
        let name = self.state.write().names.remove(&field_id);
        if name.is_none() {
            tracing::warn!("Unregister of unknown field {:?} ignored", field_id);
        }
        name
    }

    /// Current value of `name`; absent if unknown
    pub fn get(&self, name: &str) -> NumericValue {
        self.state
            .read()
            .values
            .get(name)
            .copied()
            .unwrap_or(NumericValue::ABSENT)
    }

    /// Overwrite a value directly, e.g. when loading a saved record.
    ///
    /// Fields showing the value must be told separately via
    /// [`NumberField::sync_value`].
    pub fn set(&self, name: impl Into<String>, value: NumericValue) {
        self.state.write().values.insert(name.into(), value);
    }

    /// Name bound to `field_id`, if registered
    pub fn name_of(&self, field_id: FieldId) -> Option<String> {
        self.state.read().names.get(&field_id).cloned()
    }

    /// Copy of all values, ordered by name
    pub fn snapshot(&self) -> BTreeMap<String, NumericValue> {
        self.state.read().values.clone()
    }

    pub fn len(&self) -> usize {
        self.state.read().values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().values.is_empty()
    }

    fn update(&self, field_id: FieldId, value: NumericValue) {
        let mut state = self.state.write();
        let Some(name) = state.names.get(&field_id).cloned() else {
            tracing::warn!("Event for unregistered field {:?} ignored", field_id);
            return;
        };
        state.values.insert(name, value);
    }
}

impl FieldEventHandler for FormValues {
    fn on_event(&self, event: FieldEvent) {
        match event {
            FieldEvent::RawTextChanged {
                field_id, parsed, ..
            } => {
                let value = parsed
                    .and_then(|p| NumericValue::new(p).ok())
                    .unwrap_or(NumericValue::ABSENT);
                self.update(field_id, value);
            },
            FieldEvent::FocusLost {
                field_id, value, ..
            }
            | FieldEvent::ValueSynced {
                field_id, value, ..
            } => self.update(field_id, value),
            FieldEvent::FocusGained { .. } => {},
        }
    }
}

// ============================================================================
// Persistence
// ============================================================================

#[cfg(feature = "serde")]
impl FormValues {
    /// Serialize all values as a JSON object keyed by field name.
    /// Absent values are written as `null`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.state.read().values)
    }

    /// Load values saved by [`FormValues::to_json`]. Fields must be
    /// registered again before their events are tracked.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let values: BTreeMap<String, NumericValue> = serde_json::from_str(json)?;
        Ok(Self {
            state: RwLock::new(FormState {
                names: HashMap::new(),
                values,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EditorConfig;
    use crate::interfaces::NoOpFieldHandler;
    use chrono::Utc;
    use std::sync::Arc;

    fn value(v: f64) -> NumericValue {
        NumericValue::new(v).unwrap()
    }

    #[test]
    fn test_register_seeds_value() {
        let form = FormValues::new();
        let field = NumberField::with_defaults(value(42.0));
        form.register("employees", &field);

        assert_eq!(form.get("employees"), value(42.0));
        assert_eq!(form.name_of(field.id()).as_deref(), Some("employees"));
        assert_eq!(form.len(), 1);
    }

    #[test]
    fn test_unknown_name_is_absent() {
        let form = FormValues::new();
        assert!(form.get("missing").is_absent());
        assert!(form.is_empty());
    }

    #[test]
    fn test_tracks_keystrokes_and_blur() {
        let form = Arc::new(FormValues::new());
        let mut field =
            NumberField::new(NumericValue::ABSENT, EditorConfig::default(), form.clone());
        form.register("cost", &field);

        field.on_focus();
        field.on_change("1");
        assert_eq!(form.get("cost"), value(1.0));
        field.on_change("15");
        assert_eq!(form.get("cost"), value(15.0));
        field.on_change("15x");
        assert!(form.get("cost").is_absent());
        field.on_change("15 000,25");
        assert_eq!(form.get("cost"), value(15000.25));

        field.on_blur("15 000,25");
        assert_eq!(form.get("cost"), value(15000.25));
        assert_eq!(field.text(), "15 000,25");
    }

    #[test]
    fn test_multiple_fields_share_one_owner() {
        let form = Arc::new(FormValues::new());
        let mut revenue = NumberField::new(
            NumericValue::ABSENT,
            EditorConfig::nordic_currency(),
            form.clone(),
        );
        let mut headcount = NumberField::new(
            NumericValue::ABSENT,
            EditorConfig::nordic_integer(),
            form.clone(),
        );
        form.register("revenue", &revenue);
        form.register("headcount", &headcount);

        revenue.on_focus();
        revenue.on_blur("2500000");
        headcount.on_focus();
        headcount.on_blur("37");

        let snapshot = form.snapshot();
        assert_eq!(snapshot.get("revenue"), Some(&value(2_500_000.0)));
        assert_eq!(snapshot.get("headcount"), Some(&value(37.0)));
        assert_eq!(revenue.text(), "2 500 000,00");
        assert_eq!(headcount.text(), "37");
    }

    #[test]
    fn test_sync_updates_owner() {
        let form = Arc::new(FormValues::new());
        let mut field = NumberField::new(value(1.0), EditorConfig::default(), form.clone());
        form.register("gain", &field);

        field.sync_value(value(9.5));
        assert_eq!(form.get("gain"), value(9.5));
    }

    #[test]
    fn test_unregistered_field_is_ignored() {
        let form = FormValues::new();
        form.on_event(FieldEvent::FocusLost {
            field_id: FieldId::new(),
            display: "1".to_string(),
            value: value(1.0),
            timestamp: Utc::now(),
        });
        assert!(form.is_empty());
    }

    #[test]
    fn test_unregister_keeps_value_and_ignores_old_id() {
        let form = Arc::new(FormValues::new());
        let field = NumberField::new(value(10.0), EditorConfig::default(), form.clone());
        let old_id = field.id();
        form.register("revenue", &field);
        drop(field);

        assert_eq!(form.unregister(old_id).as_deref(), Some("revenue"));
        assert_eq!(form.name_of(old_id), None);
        assert_eq!(form.get("revenue"), value(10.0));

        form.on_event(FieldEvent::FocusLost {
            field_id: old_id,
            display: "99".to_string(),
            value: value(99.0),
            timestamp: Utc::now(),
        });
        assert_eq!(form.get("revenue"), value(10.0));
        assert_eq!(form.unregister(old_id), None);
    }

    #[test]
    fn test_remounted_field_takes_over_name() {
        let form = Arc::new(FormValues::new());
        let mut ids = Vec::new();
        for _ in 0..3 {
            let field =
                NumberField::new(form.get("revenue"), EditorConfig::default(), form.clone());
            form.register("revenue", &field);
            ids.push(field.id());
            form.unregister(field.id());
        }

        assert_eq!(form.len(), 1);
        assert!(ids.iter().all(|id| form.name_of(*id).is_none()));

        let mut field =
            NumberField::new(form.get("revenue"), EditorConfig::default(), form.clone());
        form.register("revenue", &field);
        field.on_focus();
        field.on_blur("250");
        assert_eq!(form.get("revenue"), value(250.0));
    }

    #[test]
    fn test_set_does_not_require_registration() {
        let form = FormValues::new();
        form.set("loaded", value(3.0));
        assert_eq!(form.get("loaded"), value(3.0));

        let field = NumberField::new(
            form.get("loaded"),
            EditorConfig::default(),
            Arc::new(NoOpFieldHandler),
        );
        assert_eq!(field.text(), "3");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_persistence() {
        let form = FormValues::new();
        form.set("revenue", value(1250.5));
        form.set("headcount", NumericValue::ABSENT);

        let json = form.to_json().unwrap();
        assert_eq!(json, r#"{"headcount":null,"revenue":1250.5}"#);

        let restored = FormValues::from_json(&json).unwrap();
        assert_eq!(restored.get("revenue"), value(1250.5));
        assert!(restored.get("headcount").is_absent());
        assert_eq!(restored.len(), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_rejects_text_values() {
        assert!(FormValues::from_json(r#"{"x":"abc"}"#).is_err());
    }
}
