//! Input bindings.

use serde::Serialize;

use super::{ControlType, EventTarget, EventType, InputEvent};
use crate::model::Value;

/// Descriptor handed to whatever renders an input control.
///
/// Instead of holding callbacks, the binding builds the [`InputEvent`]s a
/// control emits; the renderer routes them back to
/// [`FormStore::on_input_event`](super::FormStore::on_input_event) or
/// [`Form::dispatch`](crate::Form::dispatch).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputBinding {
    /// Field name.
    pub name: String,
    /// Current field value, or the empty string when the field is absent.
    pub value: Value,
}

impl InputBinding {
    /// Change event carrying a new value.
    pub fn change(&self, value: impl Into<Value>) -> InputEvent {
        InputEvent::change(EventTarget::new(&self.name).with_value(value))
    }

    /// Change event from a control of a specific type.
    pub fn change_from(&self, control_type: ControlType, value: impl Into<Value>) -> InputEvent {
        InputEvent::change(
            EventTarget::new(&self.name)
                .with_control_type(control_type)
                .with_value(value),
        )
    }

    /// Change event from a checkbox in a group bound to this field.
    pub fn check(&self, value: impl Into<Value>, checked: bool) -> InputEvent {
        InputEvent::change(
            EventTarget::new(&self.name)
                .with_value(value)
                .checkbox(checked),
        )
    }

    pub fn blur(&self) -> InputEvent {
        self.event(EventType::Blur)
    }

    pub fn focus(&self) -> InputEvent {
        self.event(EventType::Focus)
    }

    fn event(&self, event_type: EventType) -> InputEvent {
        InputEvent::new(
            event_type,
            EventTarget::new(&self.name).with_value(self.value.clone()),
        )
    }
}
