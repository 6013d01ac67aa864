//! Form state store and its mutations.

use log::trace;

use super::{
    ControlType, EventType, FlagsPatch, FormSnapshot, InputBinding, InputEvent, InputFlags,
    LastInputEvent,
};
use crate::model::{Model, Value};

/// Owner of a form's mutable state.
///
/// The store holds exactly one current model, one flag map and one last
/// input event. Mutations replace them with new values; none of them
/// triggers validation by itself.
#[derive(Debug, Clone, Default)]
pub struct FormStore {
    model: Model,
    last_input_event: Option<LastInputEvent>,
    input_flags: InputFlags,
}

impl FormStore {
    /// Create a store seeded with initial values.
    pub fn new(initial_model: Model) -> Self {
        Self {
            model: initial_model,
            ..Default::default()
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn last_input_event(&self) -> Option<&LastInputEvent> {
        self.last_input_event.as_ref()
    }

    pub fn input_flags(&self) -> &InputFlags {
        &self.input_flags
    }

    /// Borrow the current state for validation.
    pub fn snapshot(&self) -> FormSnapshot<'_> {
        FormSnapshot::new(
            &self.model,
            self.last_input_event.as_ref(),
            &self.input_flags,
        )
    }

    /// Replace the whole model.
    pub fn set_model(&mut self, model: Model) -> &Model {
        self.model = model;
        &self.model
    }

    /// Replace the model with a copy where `name` maps to `value`.
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &Model {
        let next = self.model.with(name, value);
        self.set_model(next)
    }

    /// Merge `patch` into the flags of `name`.
    pub fn set_input_flags(&mut self, name: &str, patch: FlagsPatch) -> &InputFlags {
        self.input_flags = self.input_flags.merged(name, patch);
        &self.input_flags
    }

    /// Bind a field to an input control.
    ///
    /// The first call for a name initializes its flags to both-false.
    pub fn bind_input(&mut self, name: &str) -> InputBinding {
        if !self.input_flags.contains(name) {
            self.set_input_flags(name, FlagsPatch::default());
        }

        InputBinding {
            name: name.to_string(),
            value: self
                .model
                .get(name)
                .cloned()
                .unwrap_or_else(|| Value::from("")),
        }
    }

    /// Single entry point for change, blur and focus events.
    pub fn on_input_event(&mut self, event: InputEvent) {
        trace!("{} event on '{}'", event.event_type, event.name());
        self.last_input_event = Some(LastInputEvent::from(&event));

        match event.event_type {
            EventType::Change => self.bind_to_change_event(&event),
            EventType::Focus => {
                self.set_input_flags(event.name(), FlagsPatch::TOUCHED);
            }
            EventType::Blur => {}
        }
    }

    /// Apply a change event to the model and mark the field dirty.
    ///
    /// Checkbox groups accumulate checked values in a list; every other
    /// control replaces the value outright.
    pub fn bind_to_change_event(&mut self, event: &InputEvent) {
        let target = &event.target;

        let value = match target.control_type {
            ControlType::Checkbox => {
                checkbox_value(self.model.get(&target.name), &target.value, target.checked)
            }
            _ => target.value.clone(),
        };
        self.set_property(target.name.clone(), value);

        if !self.input_flags.get(&target.name).dirty {
            self.set_input_flags(&target.name, FlagsPatch::DIRTY);
        }
    }
}

/// Next list for a checkbox group.
///
/// Checking appends even when the value is already present; unchecking
/// removes every occurrence.
fn checkbox_value(current: Option<&Value>, value: &Value, checked: bool) -> Value {
    let mut items = match current {
        Some(Value::List(items)) => items.clone(),
        Some(other) if other.is_truthy() => vec![other.clone()],
        _ => Vec::new(),
    };

    if checked {
        items.push(value.clone());
    } else {
        items.retain(|item| item != value);
    }

    Value::List(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkbox_value_appends_duplicates() {
        let current = Value::from(vec!["red"]);
        let next = checkbox_value(Some(&current), &Value::from("red"), true);
        assert_eq!(next, Value::from(vec!["red", "red"]));

        let cleared = checkbox_value(Some(&next), &Value::from("red"), false);
        assert_eq!(cleared, Value::List(vec![]));
    }

    #[test]
    fn test_checkbox_value_from_scalar() {
        let next = checkbox_value(Some(&Value::from("red")), &Value::from("blue"), true);
        assert_eq!(next, Value::from(vec!["red", "blue"]));

        let next = checkbox_value(Some(&Value::from("")), &Value::from("blue"), true);
        assert_eq!(next, Value::from(vec!["blue"]));

        let next = checkbox_value(None, &Value::from("blue"), false);
        assert_eq!(next, Value::List(vec![]));
    }
}
