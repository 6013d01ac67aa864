//! Rule declarations.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use super::FormatContext;
use crate::error::CallbackError;
use crate::model::{Value, ValueKind};
use crate::state::EventType;

/// Custom check called with the field value and a [`Reporter`].
pub type TestFn = Arc<dyn Fn(&Value, &mut Reporter) -> Result<(), CallbackError> + Send + Sync>;

/// Message formatter for built-in rule failures.
pub type FormatFn =
    Arc<dyn Fn(&FormatContext<'_>) -> Result<String, CallbackError> + Send + Sync>;

/// Collects the message a `test` rule reports.
///
/// Only one message is kept per test run: reporting again replaces the
/// previous message, and an empty message counts as no error.
#[derive(Debug, Default)]
pub struct Reporter {
    message: Option<String>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a validation error.
    pub fn error(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub(crate) fn into_message(self) -> Option<String> {
        self.message.filter(|m| !m.is_empty())
    }
}

/// Validation rules for a single field.
///
/// # Example
///
/// ```
/// use reformed_lib::prelude::*;
///
/// let rules = FieldRules::new()
///     .required()
///     .value_type(ValueKind::String)
///     .min_length(8)
///     .update_on(EventType::Blur)
///     .test(|value, report| {
///         if value.as_str().is_some_and(|s| !s.chars().any(|c| c.is_ascii_digit())) {
///             report.error("password needs a digit");
///         }
///     });
/// ```
#[derive(Clone, Default)]
pub struct FieldRules {
    /// Fail when the value is empty.
    pub required: bool,
    /// Fail when the value has a different kind.
    pub value_type: Option<ValueKind>,
    /// Minimum length in characters (or list items). Zero disables the rule.
    pub min_length: Option<usize>,
    /// Maximum length in characters (or list items). Zero disables the rule.
    pub max_length: Option<usize>,
    /// Event type that triggers re-validation. Defaults to change.
    pub update_on: Option<EventType>,
    test: Option<TestFn>,
    format_error: Option<FormatFn>,
}

impl FieldRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn value_type(mut self, kind: ValueKind) -> Self {
        self.value_type = Some(kind);
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn update_on(mut self, event_type: EventType) -> Self {
        self.update_on = Some(event_type);
        self
    }

    /// Add a custom check.
    pub fn test<F>(self, f: F) -> Self
    where
        F: Fn(&Value, &mut Reporter) + Send + Sync + 'static,
    {
        self.try_test(move |value, report| {
            f(value, report);
            Ok(())
        })
    }

    /// Add a custom check that can fail.
    ///
    /// An `Err` aborts the whole evaluation with
    /// [`ValidationError::Test`](crate::error::ValidationError::Test).
    pub fn try_test<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value, &mut Reporter) -> Result<(), CallbackError> + Send + Sync + 'static,
    {
        self.test = Some(Arc::new(f));
        self
    }

    /// Override the messages of the built-in rules.
    pub fn format_error<F>(self, f: F) -> Self
    where
        F: Fn(&FormatContext<'_>) -> String + Send + Sync + 'static,
    {
        self.try_format_error(move |ctx| Ok(f(ctx)))
    }

    /// Override the messages of the built-in rules with a formatter that can fail.
    pub fn try_format_error<F>(mut self, f: F) -> Self
    where
        F: Fn(&FormatContext<'_>) -> Result<String, CallbackError> + Send + Sync + 'static,
    {
        self.format_error = Some(Arc::new(f));
        self
    }

    /// The event type that triggers re-validation.
    pub fn trigger(&self) -> EventType {
        self.update_on.unwrap_or_default()
    }

    pub fn test_fn(&self) -> Option<&TestFn> {
        self.test.as_ref()
    }

    pub fn format_fn(&self) -> Option<&FormatFn> {
        self.format_error.as_ref()
    }
}

impl fmt::Debug for FieldRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRules")
            .field("required", &self.required)
            .field("value_type", &self.value_type)
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("update_on", &self.update_on)
            .field("test", &self.test.is_some())
            .field("format_error", &self.format_error.is_some())
            .finish()
    }
}

/// Rules for every validated field, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: IndexMap<String, FieldRules>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the rules of a field.
    pub fn field(mut self, name: impl Into<String>, rules: FieldRules) -> Self {
        self.fields.insert(name.into(), rules);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldRules> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRules)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, FieldRules)> for Schema {
    fn from_iter<I: IntoIterator<Item = (K, FieldRules)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
