//! Incremental schema validation.
//!
//! [`evaluate`] folds a [`Schema`] over a [`FormSnapshot`](crate::state::FormSnapshot)
//! and the [`ResultsSet`] of the previous cycle. Each field is re-checked
//! only when the last event concerns it (or it holds a value nobody has
//! touched yet); otherwise its previous result is carried forward.
//!
//! # Example
//!
//! ```
//! use reformed_lib::state::FormStore;
//! use reformed_lib::validation::{FieldRules, ResultsSet, Schema, evaluate};
//!
//! let schema = Schema::new()
//!     .field("username", FieldRules::new().required().min_length(3));
//!
//! let mut store = FormStore::default();
//! let username = store.bind_input("username");
//! store.on_input_event(username.change("ab"));
//!
//! let results = evaluate(&schema, &store.snapshot(), &ResultsSet::default()).unwrap();
//! assert_eq!(
//!     results.errors("username"),
//!     ["username must have at least 3 characters"]
//! );
//! ```

mod engine;
mod format;
mod result;
mod rules;

pub use engine::{FieldDecision, evaluate, validate_field};
pub use format::{Condition, FormatContext};
pub use result::{FieldResult, ResultsSet};
pub use rules::{FieldRules, FormatFn, Reporter, Schema, TestFn};
