//! Input event types

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::model::Value;

/// Kind of interaction reported by an input control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// The control's value changed.
    #[default]
    Change,
    /// The control lost focus.
    Blur,
    /// The control received focus.
    Focus,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Change => "change",
            EventType::Blur => "blur",
            EventType::Focus => "focus",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of control that fired an event.
///
/// Only checkboxes change how a value is stored; every other control
/// replaces the field value outright.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlType {
    #[default]
    Text,
    Checkbox,
    Radio,
    Select,
    Textarea,
}

/// The control an event originated from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTarget {
    /// Field name the control is bound to.
    pub name: String,
    /// Kind of control.
    pub control_type: ControlType,
    /// Current value of the control.
    pub value: Value,
    /// Checked state (checkboxes only).
    pub checked: bool,
}

impl EventTarget {
    /// Creates a text control target with a null value.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the control value.
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the control type.
    pub fn with_control_type(mut self, control_type: ControlType) -> Self {
        self.control_type = control_type;
        self
    }

    /// Turns the target into a checkbox with the given checked state.
    pub fn checkbox(mut self, checked: bool) -> Self {
        self.control_type = ControlType::Checkbox;
        self.checked = checked;
        self
    }
}

/// An interaction delivered to [`FormStore::on_input_event`](super::FormStore::on_input_event).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputEvent {
    pub event_type: EventType,
    pub target: EventTarget,
}

impl InputEvent {
    pub fn new(event_type: EventType, target: EventTarget) -> Self {
        Self { event_type, target }
    }

    /// Creates a change event.
    pub fn change(target: EventTarget) -> Self {
        Self::new(EventType::Change, target)
    }

    /// Creates a blur event for a field.
    pub fn blur(name: impl Into<String>) -> Self {
        Self::new(EventType::Blur, EventTarget::new(name))
    }

    /// Creates a focus event for a field.
    pub fn focus(name: impl Into<String>) -> Self {
        Self::new(EventType::Focus, EventTarget::new(name))
    }

    /// Field name of the event target.
    pub fn name(&self) -> &str {
        &self.target.name
    }
}

/// The most recent interaction across the whole form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastInputEvent {
    pub name: String,
    pub event_type: EventType,
    pub target: EventTarget,
}

impl LastInputEvent {
    /// Returns `true` if the event targeted `name` with the given type.
    pub fn matches(&self, name: &str, event_type: EventType) -> bool {
        self.name == name && self.event_type == event_type
    }
}

impl From<&InputEvent> for LastInputEvent {
    fn from(event: &InputEvent) -> Self {
        Self {
            name: event.target.name.clone(),
            event_type: event.event_type,
            target: event.target.clone(),
        }
    }
}
