//! Validation results.

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

/// Validation outcome of a single field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldResult {
    /// The field has been run through its rules at least once.
    pub is_checked: bool,
    /// No rule failed. Always equal to `errors.is_empty()`.
    pub is_valid: bool,
    /// Failure messages in rule order.
    pub errors: Vec<String>,
}

impl FieldResult {
    /// Result of a field that has not been checked yet.
    ///
    /// Provisionally valid, but not checked, so it still keeps the form
    /// as a whole invalid.
    pub fn unchecked() -> Self {
        Self {
            is_checked: false,
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Result of a field that has just been checked.
    pub fn checked(errors: Vec<String>) -> Self {
        Self {
            is_checked: true,
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Checked and valid.
    pub fn is_passing(&self) -> bool {
        self.is_checked && self.is_valid
    }
}

/// Validation outcome of the whole form.
///
/// The results of one cycle are the input of the next one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsSet {
    /// Every field in `fields` is checked and valid.
    pub is_valid: bool,
    /// Per-field results, in schema order.
    pub fields: IndexMap<String, FieldResult>,
}

impl Default for ResultsSet {
    fn default() -> Self {
        Self {
            is_valid: true,
            fields: IndexMap::new(),
        }
    }
}

impl ResultsSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, name: &str) -> Option<&FieldResult> {
        self.fields.get(name)
    }

    /// Error messages of a field (empty when unknown or valid).
    pub fn errors(&self, name: &str) -> &[String] {
        self.field(name).map_or(&[], |result| result.errors.as_slice())
    }

    /// Fields that have been checked and failed.
    pub fn invalid_fields(&self) -> impl Iterator<Item = (&str, &FieldResult)> {
        self.fields
            .iter()
            .filter(|(_, result)| result.is_checked && !result.is_valid)
            .map(|(name, result)| (name.as_str(), result))
    }

    /// Recompute `is_valid` from `fields`.
    pub(crate) fn refresh_validity(&mut self) {
        self.is_valid = self.fields.values().all(FieldResult::is_passing);
    }
}
