//! Error types

use crate::validation::Condition;

/// Error returned by user-supplied `test` and `format_error` callbacks.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error raised while evaluating a schema.
///
/// Failed rules are not errors; they end up in
/// [`FieldResult::errors`](crate::validation::FieldResult::errors). This type
/// only carries failures of the schema's own callbacks, which indicate a
/// misconfigured schema and are never swallowed.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// A `test` callback returned an error.
    #[error("test rule for field '{field}' failed")]
    Test {
        field: String,
        #[source]
        source: CallbackError,
    },

    /// A `format_error` callback returned an error.
    #[error("error formatter for field '{field}' failed on {condition}")]
    Format {
        field: String,
        condition: Condition,
        #[source]
        source: CallbackError,
    },
}

impl ValidationError {
    /// Returns the name of the field whose callback failed.
    pub fn field(&self) -> &str {
        match self {
            Self::Test { field, .. } | Self::Format { field, .. } => field,
        }
    }
}

/// Error raised while loading a declarative schema.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid schema declaration: {0}")]
    Parse(#[from] serde_json::Error),
}
