//! Error message formatting.

use std::fmt;

use serde::Serialize;

use super::{FieldRules, Schema};
use crate::model::{Model, Value};

/// Built-in rule that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Condition {
    Required,
    Type,
    MinLength,
    MaxLength,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Required => "required",
            Condition::Type => "type",
            Condition::MinLength => "minLength",
            Condition::MaxLength => "maxLength",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a custom formatter may need to build a message.
#[derive(Debug, Clone, Copy)]
pub struct FormatContext<'a> {
    /// Field name.
    pub key: &'a str,
    /// Value that failed.
    pub value: &'a Value,
    /// Rule that failed.
    pub condition: Condition,
    /// Rules of the field.
    pub rules: &'a FieldRules,
    /// Whole schema.
    pub schema: &'a Schema,
    /// Whole model.
    pub model: &'a Model,
}

impl FormatContext<'_> {
    /// The message used when the field declares no formatter.
    pub fn default_message(&self) -> String {
        let key = self.key;
        match self.condition {
            Condition::Required => format!("{key} is required"),
            Condition::Type => format!(
                "{key} must be of type {}, but got {}",
                self.rules
                    .value_type
                    .map_or("unknown", |kind| kind.as_str()),
                self.value.kind()
            ),
            Condition::MinLength => format!(
                "{key} must have at least {} characters",
                self.rules.min_length.unwrap_or_default()
            ),
            Condition::MaxLength => format!(
                "{key} must not have more than {} characters",
                self.rules.max_length.unwrap_or_default()
            ),
        }
    }
}
