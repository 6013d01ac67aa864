//! Scenario files.
//!
//! A scenario declares a schema, the initial model, the fields to bind and
//! the events to replay:
//!
//! ```json
//! {
//!   "schema": { "email": { "required": true } },
//!   "initialModel": { "newsletter": [] },
//!   "bind": ["email", "newsletter"],
//!   "events": [
//!     { "type": "focus", "name": "email" },
//!     { "type": "change", "name": "email", "value": "a@b.com" },
//!     { "type": "change", "name": "newsletter", "control": "checkbox", "value": "weekly", "checked": true }
//!   ]
//! }
//! ```

use serde::Deserialize;

use reformed_lib::Form;
use reformed_lib::config::SchemaConfig;
use reformed_lib::model::{Model, Value};
use reformed_lib::state::{ControlType, EventTarget, EventType, InputEvent};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub schema: SchemaConfig,
    #[serde(default)]
    pub initial_model: Model,
    #[serde(default)]
    pub bind: Vec<String>,
    #[serde(default)]
    pub events: Vec<ScenarioEvent>,
}

/// One recorded interaction.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioEvent {
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub name: String,
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub control: ControlType,
    #[serde(default)]
    pub checked: bool,
}

impl From<ScenarioEvent> for InputEvent {
    fn from(event: ScenarioEvent) -> Self {
        let mut target = EventTarget::new(event.name)
            .with_control_type(event.control)
            .with_value(event.value);
        target.checked = event.checked;
        InputEvent::new(event.event_type, target)
    }
}

impl Scenario {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Build the form (with its inputs bound) and the events to replay.
    pub fn into_form(self) -> (Form, Vec<InputEvent>) {
        let mut form = Form::new(self.schema.into_schema()).with_initial_model(self.initial_model);
        for name in &self.bind {
            form.bind_input(name);
        }

        let events = self.events.into_iter().map(InputEvent::from).collect();
        (form, events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIGNUP: &str = r#"{
        "schema": {
            "email": { "required": true },
            "newsletter": { "required": true }
        },
        "initialModel": { "newsletter": [] },
        "bind": ["email", "newsletter"],
        "events": [
            { "type": "focus", "name": "email" },
            { "type": "change", "name": "email", "value": "" },
            { "type": "change", "name": "email", "value": "a@b.com" },
            { "type": "change", "name": "newsletter", "control": "checkbox", "value": "weekly", "checked": true }
        ]
    }"#;

    #[test]
    fn test_parse_scenario() {
        let scenario = Scenario::from_json_str(SIGNUP).unwrap();

        assert_eq!(scenario.schema.len(), 2);
        assert_eq!(scenario.bind, ["email", "newsletter"]);
        assert_eq!(scenario.events.len(), 4);
        assert_eq!(scenario.events[3].control, ControlType::Checkbox);
        assert!(scenario.events[3].checked);
        assert_eq!(scenario.events[0].value, Value::Null);
    }

    #[test]
    fn test_replay_scenario() {
        let (mut form, events) = Scenario::from_json_str(SIGNUP).unwrap().into_form();
        assert!(form.store().input_flags().contains("email"));

        let mut props = form.render().unwrap();
        assert!(!props.schema.is_valid);

        for event in events {
            props = form.dispatch(event).unwrap();
        }

        assert_eq!(
            props.model.get("newsletter"),
            Some(&Value::from(vec!["weekly"]))
        );
        assert!(props.schema.is_valid);
    }

    #[test]
    fn test_unknown_event_field_rejected() {
        let json = r#"{ "schema": {}, "events": [{ "type": "change", "name": "a", "bogus": 1 }] }"#;
        assert!(Scenario::from_json_str(json).is_err());
    }
}
