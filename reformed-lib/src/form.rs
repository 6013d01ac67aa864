//! Form driver: state store + validation cycle + middleware.

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::error::ValidationError;
use crate::model::{Model, Value};
use crate::state::{FlagsPatch, FormStore, InputBinding, InputEvent, InputFlags, LastInputEvent};
use crate::validation::{ResultsSet, Schema, evaluate};

/// Hook applied to the assembled props before they are handed downstream.
pub type Middleware = Box<dyn Fn(FormProps) -> FormProps + Send + Sync>;

/// Props handed to the rendering layer after every state change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormProps {
    pub model: Model,
    pub last_input_event: Option<LastInputEvent>,
    pub input_flags: InputFlags,
    /// Validation results of this cycle.
    pub schema: ResultsSet,
}

/// A form instance.
///
/// Every state-changing call updates the [`FormStore`] and then runs one
/// validation cycle against the retained [`ResultsSet`], which the new
/// results replace. All of them take `&mut self`, so cycles of one form are
/// strictly sequential.
///
/// # Example
///
/// ```
/// use reformed_lib::prelude::*;
///
/// let schema = Schema::new().field(
///     "password",
///     FieldRules::new().min_length(8).update_on(EventType::Blur),
/// );
/// let mut form = Form::new(schema);
/// let password = form.bind_input("password");
///
/// // Typing alone does not validate a blur-triggered field.
/// let props = form.dispatch(password.change("short")).unwrap();
/// assert!(!props.schema.field("password").unwrap().is_checked);
///
/// let props = form.dispatch(password.blur()).unwrap();
/// assert_eq!(
///     props.schema.errors("password"),
///     ["password must have at least 8 characters"]
/// );
/// ```
pub struct Form {
    store: FormStore,
    schema: Schema,
    results: ResultsSet,
    middleware: Option<Middleware>,
}

impl Form {
    /// Create a form with an empty model.
    pub fn new(schema: Schema) -> Self {
        Self {
            store: FormStore::default(),
            schema,
            results: ResultsSet::default(),
            middleware: None,
        }
    }

    /// Seed the model with initial values.
    pub fn with_initial_model(mut self, model: Model) -> Self {
        self.store = FormStore::new(model);
        self
    }

    /// Transform the props of every cycle before they are returned.
    pub fn with_middleware<F>(mut self, middleware: F) -> Self
    where
        F: Fn(FormProps) -> FormProps + Send + Sync + 'static,
    {
        self.middleware = Some(Box::new(middleware));
        self
    }

    pub fn store(&self) -> &FormStore {
        &self.store
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Results retained from the last successful cycle.
    pub fn results(&self) -> &ResultsSet {
        &self.results
    }

    /// Bind a field to an input control. Does not run a cycle.
    pub fn bind_input(&mut self, name: &str) -> InputBinding {
        self.store.bind_input(name)
    }

    /// Feed an input event and run a cycle.
    pub fn dispatch(&mut self, event: InputEvent) -> Result<FormProps, ValidationError> {
        self.store.on_input_event(event);
        self.render()
    }

    /// Apply a change event without recording it as the last event, then
    /// run a cycle.
    pub fn bind_to_change_event(
        &mut self,
        event: &InputEvent,
    ) -> Result<FormProps, ValidationError> {
        self.store.bind_to_change_event(event);
        self.render()
    }

    /// Merge interaction flags into one field and run a cycle.
    pub fn set_input_flags(
        &mut self,
        name: &str,
        patch: FlagsPatch,
    ) -> Result<FormProps, ValidationError> {
        self.store.set_input_flags(name, patch);
        self.render()
    }

    /// Set one field programmatically and run a cycle.
    pub fn set_property(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<FormProps, ValidationError> {
        self.store.set_property(name, value);
        self.render()
    }

    /// Replace the model and run a cycle.
    pub fn set_model(&mut self, model: Model) -> Result<FormProps, ValidationError> {
        self.store.set_model(model);
        self.render()
    }

    /// Run a validation cycle on the current state.
    ///
    /// On error the retained results stay as they were.
    pub fn render(&mut self) -> Result<FormProps, ValidationError> {
        let results = evaluate(&self.schema, &self.store.snapshot(), &self.results)?;
        self.results = results;

        let props = FormProps {
            model: self.store.model().clone(),
            last_input_event: self.store.last_input_event().cloned(),
            input_flags: self.store.input_flags().clone(),
            schema: self.results.clone(),
        };

        Ok(match &self.middleware {
            Some(middleware) => {
                debug!("applying props middleware");
                middleware(props)
            }
            None => props,
        })
    }
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("store", &self.store)
            .field("schema", &self.schema)
            .field("results", &self.results)
            .field("middleware", &self.middleware.is_some())
            .finish()
    }
}
