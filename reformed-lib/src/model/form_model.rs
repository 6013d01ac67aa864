//! Form model (field name → value)

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

use super::Value;

/// The current values of a form, keyed by field name.
///
/// A model is never edited behind a snapshot: every change produces a new
/// model (see [`Model::with`]) which then replaces the old one by value.
///
/// # Example
///
/// ```
/// use reformed_lib::model::{Model, Value};
///
/// let before = Model::new().with("name", "Ada");
/// let after = before.with("name", "Grace");
///
/// assert_eq!(before.get("name"), Some(&Value::from("Ada")));
/// assert_eq!(after.get("name"), Some(&Value::from("Grace")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Model(IndexMap<String, Value>);

impl Model {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a field, if present.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Returns the value of a field, reading absent fields as [`Value::Null`].
    pub fn value(&self, name: &str) -> Value {
        self.get(name).cloned().unwrap_or_default()
    }

    /// Returns `true` if the field is present.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns a copy of this model with `name` set to `value`.
    pub fn with(&self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut next = self.0.clone();
        next.insert(name.into(), value.into());
        Self(next)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for Model
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
