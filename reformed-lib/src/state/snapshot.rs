//! Borrowed view of the store.

use super::{InputFlags, LastInputEvent};
use crate::model::Model;

/// Read-only view of the form state handed to the validation engine.
#[derive(Debug, Clone, Copy)]
pub struct FormSnapshot<'a> {
    pub model: &'a Model,
    pub last_input_event: Option<&'a LastInputEvent>,
    pub input_flags: &'a InputFlags,
}

impl<'a> FormSnapshot<'a> {
    pub fn new(
        model: &'a Model,
        last_input_event: Option<&'a LastInputEvent>,
        input_flags: &'a InputFlags,
    ) -> Self {
        Self {
            model,
            last_input_event,
            input_flags,
        }
    }
}
