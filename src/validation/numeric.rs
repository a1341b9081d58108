//! Numeric checker
//!
//! Rules:
//! - `min:<int>`: value must be >= bound
//! - `max:<int>`: value must be <= bound
//! - `in:<int,int,...>`: value must equal one of the listed integers
//!
//! Every list element is parsed before membership is decided, so one bad
//! element makes the whole rule malformed even if the value matches another.
//! Bounds are `i64`; values are compared as `i128` so every Rust integer
//! width is checked. Unknown rule names are ignored.

use super::config::ValidatorConfig;
use super::errors::{FieldFailure, Violation};
use super::parser::{parse_int, split_list, Clause};
use super::engine::{malformed, unknown_rule};

/// Checks one integer against the clauses. First failing clause wins.
pub fn check_int(
    field: &str,
    clauses: &[Clause<'_>],
    value: i128,
    config: &ValidatorConfig,
) -> Option<FieldFailure> {
    clauses
        .iter()
        .find_map(|clause| check_clause(field, clause, value, config))
}

fn check_clause(
    field: &str,
    clause: &Clause<'_>,
    value: i128,
    config: &ValidatorConfig,
) -> Option<FieldFailure> {
    match clause.rule {
        "min" => {
            let Some(min) = parse_int(clause.arg) else {
                return Some(malformed(field, clause));
            };
            (value < i128::from(min)).then(|| FieldFailure::violation(field, clause.rule, Violation::LessThan { min }))
        }
        "max" => {
            let Some(max) = parse_int(clause.arg) else {
                return Some(malformed(field, clause));
            };
            (value > i128::from(max)).then(|| FieldFailure::violation(field, clause.rule, Violation::GreaterThan { max }))
        }
        "in" => {
            let elements = split_list(clause.arg, config);
            let Some(allowed) = elements
                .iter()
                .map(|e| parse_int(e))
                .collect::<Option<Vec<i64>>>()
            else {
                return Some(malformed(field, clause));
            };

            if allowed.iter().any(|&n| i128::from(n) == value) {
                None
            } else {
                Some(FieldFailure::violation(
                    field,
                    clause.rule,
                    Violation::NotIn {
                        allowed: elements.iter().map(|e| e.to_string()).collect(),
                    },
                ))
            }
        }
        _ => {
            unknown_rule(field, clause, "int");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::errors::ErrorCode;
    use crate::validation::parser::parse;

    fn check(annotation: &str, value: i128) -> Option<FieldFailure> {
        check_int("N", &parse(annotation), value, &ValidatorConfig::default())
    }

    #[test]
    fn test_min_boundaries() {
        assert!(check("min:10", 10).is_none());
        assert!(check("min:10", 11).is_none());
        let failure = check("min:10", 9).unwrap();
        assert_eq!(failure.violation_detail(), Some(&Violation::LessThan { min: 10 }));
        assert_eq!(failure.to_string(), "N: value is less than 10");
    }

    #[test]
    fn test_max_boundaries() {
        assert!(check("max:20", 20).is_none());
        assert!(check("max:20", -5).is_none());
        let failure = check("max:20", 21).unwrap();
        assert_eq!(failure.violation_detail(), Some(&Violation::GreaterThan { max: 20 }));
    }

    #[test]
    fn test_negative_bounds_not_special() {
        assert!(check("min:-10", -9).is_none());
        assert!(check("min:-12", -22).is_some());
        assert!(check("max:-2", -3).is_none());
        assert!(check("max:-12", 22).is_some());
    }

    #[test]
    fn test_values_beyond_i64() {
        let huge = i128::from(u64::MAX);
        let failure = check("max:100", huge).unwrap();
        assert_eq!(failure.violation_detail(), Some(&Violation::GreaterThan { max: 100 }));
        assert!(check("min:0", huge).is_none());
        assert!(check(&format!("in:{}", i64::MAX), huge).is_some());
        assert!(check("min:0", i128::from(i64::MIN) - 1).is_some());
    }

    #[test]
    fn test_in_list() {
        assert!(check("in:20,25,30", 25).is_none());
        assert!(check("in:-20,-25,-30", -25).is_none());
        let failure = check("in:-1,-3,5,7", 2).unwrap();
        assert_eq!(failure.to_string(), "N: value is not in [-1, -3, 5, 7]");
    }

    #[test]
    fn test_malformed_bounds() {
        for annotation in ["min:", "min:5-", "max:", "max:5-", "in:5-", "in:", "min"] {
            let failure = check(annotation, 12).unwrap();
            assert_eq!(failure.code(), ErrorCode::MalformedRule, "{}", annotation);
        }
    }

    #[test]
    fn test_in_malformed_even_when_value_listed() {
        let failure = check("in:12,x", 12).unwrap();
        assert!(failure.is_malformed());
    }

    #[test]
    fn test_first_failing_clause_wins() {
        let failure = check("min:10;max:5", 7).unwrap();
        assert_eq!(failure.rule(), "min");

        let failure = check("min:1;max:5", 7).unwrap();
        assert_eq!(failure.rule(), "max");
    }

    #[test]
    fn test_unknown_rules_ignored() {
        assert!(check("len:3;email;bogus:1", 7).is_none());
    }
}
