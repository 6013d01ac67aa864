//! Form model types

mod form_model;
mod value;

pub use form_model::Model;
pub use value::{Value, ValueKind};
