//! Rule engine: dispatches a field value to the matching checker.
//!
//! - int → numeric checker
//! - int sequence → numeric checker per element, first failing element wins
//! - text → textual checker
//! - text sequence → textual checker per element, first failing element wins
//! - anything else → no failure

use crate::observability::{log_event, Event};

use super::config::ValidatorConfig;
use super::errors::FieldFailure;
use super::numeric::check_int;
use super::parser::{parse_with, Clause};
use super::textual::check_text;
use super::types::{FieldDescriptor, FieldValue};

/// Checks one field against its annotation.
pub fn check(field: &FieldDescriptor<'_>, config: &ValidatorConfig) -> Option<FieldFailure> {
    let clauses = parse_with(field.annotation, config);
    check_value(field.name, &field.value, &clauses, config)
}

/// Checks a field value against already-parsed clauses.
pub fn check_value(
    field: &str,
    value: &FieldValue<'_>,
    clauses: &[Clause<'_>],
    config: &ValidatorConfig,
) -> Option<FieldFailure> {
    match value {
        FieldValue::Int(n) => check_int(field, clauses, *n, config),
        FieldValue::IntSeq(items) => items
            .iter()
            .find_map(|n| check_int(field, clauses, *n, config)),
        FieldValue::Text(s) => check_text(field, clauses, s, config),
        FieldValue::TextSeq(items) => items
            .iter()
            .find_map(|s| check_text(field, clauses, s, config)),
        FieldValue::Unsupported => {
            log_event(Event::UnsupportedValue, &[("field", field)]);
            None
        }
    }
}

/// Builds a malformed-rule failure for a clause whose argument did not parse.
pub(super) fn malformed(field: &str, clause: &Clause<'_>) -> FieldFailure {
    log_event(
        Event::MalformedRule,
        &[("field", field), ("clause", clause.text)],
    );
    FieldFailure::malformed(field, clause.rule, clause.text)
}

pub(super) fn unknown_rule(field: &str, clause: &Clause<'_>, checker: &str) {
    log_event(
        Event::UnknownRule,
        &[("field", field), ("rule", clause.rule), ("checker", checker)],
    );
}
