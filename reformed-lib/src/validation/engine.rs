//! Per-field decision and check pipeline.

use log::{debug, trace};

use super::{Condition, FieldResult, FieldRules, FormatContext, Reporter, ResultsSet, Schema};
use crate::error::ValidationError;
use crate::model::{Model, Value};
use crate::state::FormSnapshot;

static NULL: Value = Value::Null;

/// Inputs of the skip/evaluate decision for one field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldDecision {
    /// The field has no previous result.
    pub is_first_evaluation: bool,
    /// The user has changed the field's value.
    pub is_interacted: bool,
    /// The last input event targeted this field.
    pub is_related_event: bool,
    /// The last input event has the field's trigger type.
    pub is_valid_event_type: bool,
    /// The previous result exists and is invalid.
    pub is_currently_invalid: bool,
    /// The current value is truthy.
    pub is_not_empty: bool,
}

impl FieldDecision {
    pub fn new(
        key: &str,
        rules: &FieldRules,
        snapshot: &FormSnapshot<'_>,
        previous: Option<&FieldResult>,
    ) -> Self {
        let flags = snapshot.input_flags.get(key);
        let event = snapshot.last_input_event;

        Self {
            is_first_evaluation: previous.is_none(),
            is_interacted: flags.dirty,
            is_related_event: event.is_some_and(|e| e.name == key),
            is_valid_event_type: event.is_some_and(|e| e.event_type == rules.trigger()),
            // A missing result is not invalid, only a checked failing one is.
            is_currently_invalid: previous.is_some_and(|r| !r.is_valid),
            is_not_empty: snapshot.model.get(key).is_some_and(Value::is_truthy),
        }
    }

    /// Whether the field must be run through its rules.
    ///
    /// Interacted fields are re-checked on their trigger event, or on any
    /// event targeting them while they are invalid. Untouched fields are
    /// checked as soon as they hold a value.
    pub fn should_validate(&self) -> bool {
        (self.is_interacted
            && self.is_related_event
            && (self.is_valid_event_type || self.is_currently_invalid))
            || (!self.is_interacted && self.is_not_empty)
    }
}

/// Run one validation cycle.
///
/// Starts from `previous`, re-checks the fields whose [`FieldDecision`]
/// asks for it, seeds never-seen fields with [`FieldResult::unchecked`] and
/// leaves every other entry as it was. `is_valid` is recomputed over all
/// entries.
///
/// # Errors
///
/// Returns the first error raised by a `test` or `format_error` callback.
pub fn evaluate(
    schema: &Schema,
    snapshot: &FormSnapshot<'_>,
    previous: &ResultsSet,
) -> Result<ResultsSet, ValidationError> {
    let mut results = previous.clone();

    for (key, rules) in schema.iter() {
        let prev = previous.field(key);
        let decision = FieldDecision::new(key, rules, snapshot, prev);
        trace!("decision for '{key}': {decision:?}");

        if decision.should_validate() {
            let result = validate_field(key, rules, schema, snapshot.model)?;
            debug!("validated '{key}': {} error(s)", result.errors.len());
            results.fields.insert(key.to_string(), result);
        } else if decision.is_first_evaluation {
            results
                .fields
                .insert(key.to_string(), FieldResult::unchecked());
        }
    }

    results.refresh_validity();
    debug!(
        "validation cycle done: {} field(s), form {}",
        results.fields.len(),
        if results.is_valid { "valid" } else { "invalid" }
    );

    Ok(results)
}

/// Run every rule of a field against the model, collecting all failures.
pub fn validate_field(
    key: &str,
    rules: &FieldRules,
    schema: &Schema,
    model: &Model,
) -> Result<FieldResult, ValidationError> {
    let value = model.get(key).unwrap_or(&NULL);
    let mut errors = Vec::new();

    let message = |condition: Condition| -> Result<String, ValidationError> {
        let ctx = FormatContext {
            key,
            value,
            condition,
            rules,
            schema,
            model,
        };
        match rules.format_fn() {
            Some(formatter) => formatter(&ctx).map_err(|source| ValidationError::Format {
                field: key.to_string(),
                condition,
                source,
            }),
            None => Ok(ctx.default_message()),
        }
    };

    if rules.required && !value.is_truthy() {
        errors.push(message(Condition::Required)?);
    }

    if rules.value_type.is_some_and(|kind| value.kind() != kind) {
        errors.push(message(Condition::Type)?);
    }

    if let Some(min) = rules.min_length.filter(|&min| min > 0) {
        if !value.is_truthy() || value.len().is_some_and(|len| len < min) {
            errors.push(message(Condition::MinLength)?);
        }
    }

    if let Some(max) = rules.max_length.filter(|&max| max > 0) {
        if value.is_truthy() && value.len().is_some_and(|len| len > max) {
            errors.push(message(Condition::MaxLength)?);
        }
    }

    if let Some(test) = rules.test_fn() {
        let mut reporter = Reporter::new();
        test(value, &mut reporter).map_err(|source| ValidationError::Test {
            field: key.to_string(),
            source,
        })?;
        if let Some(msg) = reporter.into_message() {
            errors.push(msg);
        }
    }

    Ok(FieldResult::checked(errors))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decision(
        is_interacted: bool,
        is_related_event: bool,
        is_valid_event_type: bool,
        is_currently_invalid: bool,
        is_not_empty: bool,
    ) -> FieldDecision {
        FieldDecision {
            is_first_evaluation: false,
            is_interacted,
            is_related_event,
            is_valid_event_type,
            is_currently_invalid,
            is_not_empty,
        }
    }

    #[test]
    fn test_should_validate_truth_table() {
        // interacted, related, matching trigger
        assert!(decision(true, true, true, false, false).should_validate());
        // interacted, related, wrong trigger but invalid
        assert!(decision(true, true, false, true, false).should_validate());
        // interacted, related, wrong trigger, valid
        assert!(!decision(true, true, false, false, true).should_validate());
        // interacted, unrelated event
        assert!(!decision(true, false, true, true, true).should_validate());
        // untouched with value
        assert!(decision(false, false, false, false, true).should_validate());
        // untouched and empty
        assert!(!decision(false, true, true, true, false).should_validate());
    }

    #[test]
    fn test_validate_field_collects_all_failures() {
        let rules = FieldRules::new()
            .required()
            .value_type(crate::model::ValueKind::String)
            .min_length(3)
            .test(|_, report| report.error("custom"));
        let schema = Schema::new().field("code", rules.clone());

        let result = validate_field("code", &rules, &schema, &Model::new()).unwrap();

        assert_eq!(
            result.errors,
            [
                "code is required",
                "code must be of type string, but got null",
                "code must have at least 3 characters",
                "custom",
            ]
        );
        assert!(result.is_checked);
        assert!(!result.is_valid);
    }

    #[test]
    fn test_zero_bounds_are_disabled() {
        let rules = FieldRules::new().min_length(0).max_length(0);
        let schema = Schema::new().field("note", rules.clone());
        let model = Model::new().with("note", "anything");

        let result = validate_field("note", &rules, &schema, &model).unwrap();
        assert!(result.is_valid);

        let result = validate_field("note", &rules, &schema, &Model::new()).unwrap();
        assert!(result.is_valid);
    }
}
