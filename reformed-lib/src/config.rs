//! Declarative schema configuration.
//!
//! Lets a schema be declared as data (JSON) instead of through the
//! [`FieldRules`] builder. Callbacks cannot be declared; attach them to the
//! resulting rules afterwards.
//!
//! # Example
//!
//! ```
//! use reformed_lib::config::SchemaConfig;
//!
//! let config = SchemaConfig::from_json_str(r#"{
//!     "email": { "required": true, "type": "string", "updateOn": "blur" },
//!     "bio": { "maxLength": 280 }
//! }"#).unwrap();
//!
//! let schema = config.into_schema();
//! assert!(schema.get("email").unwrap().required);
//! ```

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;
use crate::model::ValueKind;
use crate::state::EventType;
use crate::validation::{FieldRules, Schema};

/// Declared rules of one field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RuleConfig {
    #[serde(default)]
    pub required: bool,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<ValueKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_on: Option<EventType>,
}

impl From<RuleConfig> for FieldRules {
    fn from(config: RuleConfig) -> Self {
        let mut rules = FieldRules::new();
        rules.required = config.required;
        rules.value_type = config.value_type;
        rules.min_length = config.min_length;
        rules.max_length = config.max_length;
        rules.update_on = config.update_on;
        rules
    }
}

/// Declared schema: field name → rules, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaConfig(IndexMap<String, RuleConfig>);

impl SchemaConfig {
    /// Parse a schema declaration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn get(&self, name: &str) -> Option<&RuleConfig> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Build the runtime schema.
    pub fn into_schema(self) -> Schema {
        self.0
            .into_iter()
            .map(|(name, rules)| (name, FieldRules::from(rules)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_declaration() {
        let config = SchemaConfig::from_json_str(
            r#"{
                "name": {
                    "required": true,
                    "type": "string",
                    "minLength": 2,
                    "maxLength": 40,
                    "updateOn": "blur"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(
            config.get("name"),
            Some(&RuleConfig {
                required: true,
                value_type: Some(ValueKind::String),
                min_length: Some(2),
                max_length: Some(40),
                update_on: Some(EventType::Blur),
            })
        );
    }

    #[test]
    fn test_object_type_tag() {
        let config =
            SchemaConfig::from_json_str(r#"{ "address": { "type": "object", "required": true } }"#)
                .unwrap();

        let schema = config.into_schema();
        assert_eq!(
            schema.get("address").unwrap().value_type,
            Some(ValueKind::Object)
        );
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = SchemaConfig::from_json_str(r#"{ "name": { "pattern": "^a" } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_into_schema_keeps_order() {
        let config =
            SchemaConfig::from_json_str(r#"{ "b": {}, "a": { "required": true } }"#).unwrap();
        let schema = config.into_schema();

        assert_eq!(schema.keys().collect::<Vec<_>>(), ["b", "a"]);
        assert_eq!(schema.get("a").unwrap().trigger(), EventType::Change);
        assert!(schema.get("a").unwrap().required);
        assert!(!schema.get("b").unwrap().required);
    }
}
