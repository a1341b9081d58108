//! Textual checker
//!
//! Rules (length is the UTF-8 byte length):
//! - `len:<int>`: length must equal the bound; a negative bound always fails
//! - `min:<int>`: length must be >= bound; a negative bound never fails
//! - `max:<int>`: length must be <= bound; a negative bound always fails
//! - `in:<str,str,...>`: text must equal one of the listed strings; an empty
//!   list always fails
//! - `email`: text must look like an email address
//!
//! Unknown rule names are ignored.

use std::sync::LazyLock;

use regex::Regex;

use super::config::ValidatorConfig;
use super::engine::{malformed, unknown_rule};
use super::errors::{FieldFailure, Violation};
use super::parser::{parse_int, split_list, Clause};

/// Local part of unreserved/punctuation characters, then a domain of
/// dot-separated labels, 1-63 characters each, alphanumeric at both ends.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

/// Returns whether `text` matches the email pattern.
pub fn is_email(text: &str) -> bool {
    EMAIL_RE.is_match(text)
}

/// Checks one text value against the clauses. First failing clause wins.
pub fn check_text(
    field: &str,
    clauses: &[Clause<'_>],
    value: &str,
    config: &ValidatorConfig,
) -> Option<FieldFailure> {
    clauses
        .iter()
        .find_map(|clause| check_clause(field, clause, value, config))
}

fn check_clause(
    field: &str,
    clause: &Clause<'_>,
    value: &str,
    config: &ValidatorConfig,
) -> Option<FieldFailure> {
    let length = value.len() as i64;

    match clause.rule {
        "len" => {
            let Some(len) = parse_int(clause.arg) else {
                return Some(malformed(field, clause));
            };
            (len < 0 || length != len)
                .then(|| FieldFailure::violation(field, clause.rule, Violation::LenNotEqual { len }))
        }
        "min" => {
            let Some(min) = parse_int(clause.arg) else {
                return Some(malformed(field, clause));
            };
            (length < min)
                .then(|| FieldFailure::violation(field, clause.rule, Violation::LenLessThan { min }))
        }
        "max" => {
            let Some(max) = parse_int(clause.arg) else {
                return Some(malformed(field, clause));
            };
            (max < 0 || length > max)
                .then(|| FieldFailure::violation(field, clause.rule, Violation::LenGreaterThan { max }))
        }
        "in" => {
            if clause.arg.is_empty() {
                return Some(FieldFailure::violation(field, clause.rule, Violation::NotInEmpty));
            }

            let allowed = split_list(clause.arg, config);
            if allowed.contains(&value) {
                None
            } else {
                Some(FieldFailure::violation(
                    field,
                    clause.rule,
                    Violation::NotIn {
                        allowed: allowed.into_iter().map(String::from).collect(),
                    },
                ))
            }
        }
        "email" => {
            (!is_email(value)).then(|| FieldFailure::violation(field, clause.rule, Violation::NotEmail))
        }
        _ => {
            unknown_rule(field, clause, "text");
            None
        }
    }
}
