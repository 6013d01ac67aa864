//! Form state and incremental schema validation.
//!
//! A [`Form`] owns the field values, the last input event and the per-field
//! interaction flags, and re-runs a [`Schema`](validation::Schema) against
//! them after every state change. Only fields affected by the change are
//! re-checked; everything else carries its previous result forward.
//!
//! # Example
//!
//! ```
//! use reformed_lib::prelude::*;
//!
//! let schema = Schema::new().field("email", FieldRules::new().required());
//! let mut form = Form::new(schema);
//!
//! let props = form.render().unwrap();
//! assert!(!props.schema.is_valid);
//!
//! let email = form.bind_input("email");
//! let props = form.dispatch(email.change("")).unwrap();
//! assert_eq!(props.schema.errors("email"), ["email is required"]);
//!
//! let props = form.dispatch(email.change("a@b.com")).unwrap();
//! assert!(props.schema.is_valid);
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod state;
pub mod validation;

pub use form::{Form, FormProps, Middleware};

pub mod prelude {
    pub use crate::config::{RuleConfig, SchemaConfig};
    pub use crate::error::{CallbackError, ConfigError, ValidationError};
    pub use crate::form::{Form, FormProps};
    pub use crate::model::{Model, Value, ValueKind};
    pub use crate::state::{
        ControlType, EventTarget, EventType, FieldFlags, FlagsPatch, FormSnapshot, FormStore,
        InputBinding, InputEvent, InputFlags, LastInputEvent,
    };
    pub use crate::validation::{
        Condition, FieldResult, FieldRules, FormatContext, Reporter, ResultsSet, Schema, evaluate,
    };
}
