//! Validation error types
//!
//! Error codes:
//! - VLD_NOT_A_RECORD (aborts the call)
//! - VLD_HIDDEN_FIELD_ANNOTATED (aborts the call)
//! - VLD_MALFORMED_RULE (per field)
//! - VLD_CONSTRAINT_VIOLATION (per field)

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

/// Validation error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Input is not a record
    NotARecord,
    /// A non-exported field carries rules
    AnnotationOnHiddenField,
    /// Rule argument could not be parsed
    MalformedRule,
    /// Field value breaks a well-formed rule
    ConstraintViolation,
}

impl ErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::NotARecord => "VLD_NOT_A_RECORD",
            ErrorCode::AnnotationOnHiddenField => "VLD_HIDDEN_FIELD_ANNOTATED",
            ErrorCode::MalformedRule => "VLD_MALFORMED_RULE",
            ErrorCode::ConstraintViolation => "VLD_CONSTRAINT_VIOLATION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// What a well-formed rule found wrong with a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Number below `min`
    LessThan { min: i64 },
    /// Number above `max`
    GreaterThan { max: i64 },
    /// Value outside the `in` list
    NotIn { allowed: Vec<String> },
    /// Text `in` rule given an empty list
    NotInEmpty,
    /// Text length differs from `len`
    LenNotEqual { len: i64 },
    /// Text shorter than `min`
    LenLessThan { min: i64 },
    /// Text longer than `max`, or `max` is negative
    LenGreaterThan { max: i64 },
    /// Text is not an email address
    NotEmail,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::LessThan { min } => write!(f, "value is less than {}", min),
            Violation::GreaterThan { max } => write!(f, "value is greater than {}", max),
            Violation::NotIn { allowed } => write!(f, "value is not in [{}]", allowed.join(", ")),
            Violation::NotInEmpty => write!(f, "value is not in empty list"),
            Violation::LenNotEqual { len } => write!(f, "len is not equal to {}", len),
            Violation::LenLessThan { min } => write!(f, "len is less than {}", min),
            Violation::LenGreaterThan { max } => write!(f, "len is greater than {}", max),
            Violation::NotEmail => write!(f, "value is not email address"),
        }
    }
}

/// Field-level failure kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The rule argument is unusable. An annotation bug, not a data bug.
    MalformedRule {
        /// Clause as written in the annotation
        clause: String,
    },
    /// The value does not satisfy the rule
    ConstraintViolation(Violation),
}

impl FailureKind {
    /// Returns the error code for this kind
    pub fn code(&self) -> ErrorCode {
        match self {
            FailureKind::MalformedRule { .. } => ErrorCode::MalformedRule,
            FailureKind::ConstraintViolation(_) => ErrorCode::ConstraintViolation,
        }
    }
}

/// A single field that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFailure {
    field: String,
    rule: String,
    kind: FailureKind,
}

impl FieldFailure {
    /// Create a constraint violation failure
    pub fn violation(field: impl Into<String>, rule: impl Into<String>, violation: Violation) -> Self {
        Self {
            field: field.into(),
            rule: rule.into(),
            kind: FailureKind::ConstraintViolation(violation),
        }
    }

    /// Create a malformed rule failure
    pub fn malformed(field: impl Into<String>, rule: impl Into<String>, clause: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rule: rule.into(),
            kind: FailureKind::MalformedRule {
                clause: clause.into(),
            },
        }
    }

    /// Returns the field name
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the rule name that failed
    pub fn rule(&self) -> &str {
        &self.rule
    }

    /// Returns the failure kind
    pub fn kind(&self) -> &FailureKind {
        &self.kind
    }

    /// Returns the violation if the value itself was rejected
    pub fn violation_detail(&self) -> Option<&Violation> {
        match &self.kind {
            FailureKind::ConstraintViolation(v) => Some(v),
            FailureKind::MalformedRule { .. } => None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Returns whether the annotation itself is broken
    pub fn is_malformed(&self) -> bool {
        self.code() == ErrorCode::MalformedRule
    }

    /// Returns the human-readable message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FieldFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            FailureKind::MalformedRule { clause } => {
                write!(f, "{}: invalid validator syntax '{}'", self.field, clause)
            }
            FailureKind::ConstraintViolation(v) => write!(f, "{}: {}", self.field, v),
        }
    }
}

impl Serialize for FieldFailure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FieldFailure", 4)?;
        state.serialize_field("field", &self.field)?;
        state.serialize_field("rule", &self.rule)?;
        state.serialize_field("code", self.code().code())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

/// Ordered aggregate of field failures, at most one per field
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldFailure>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, failure: FieldFailure) {
        self.0.push(failure);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldFailure> {
        self.0.iter()
    }

    /// Returns the failure recorded for a field, if any
    pub fn get(&self, field: &str) -> Option<&FieldFailure> {
        self.0.iter().find(|f| f.field == field)
    }

    /// Returns the failing field names in declaration order
    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|f| f.field.as_str()).collect()
    }

    /// Renders the aggregate as a JSON array
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    /// Empty aggregate is success, never an empty error
    pub fn into_result(self) -> ValidationResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Fields(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", failure)?;
        }
        Ok(())
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldFailure;
    type IntoIter = std::vec::IntoIter<FieldFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldFailure;
    type IntoIter = std::slice::Iter<'a, FieldFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Outcome of a failed `validate` call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Input was not a record
    #[error("wrong argument given, should be a struct (got {type_name})")]
    NotARecord { type_name: String },

    /// A hidden field carries rules; nothing else is checked
    #[error("validation rules on unexported field '{field}' are not allowed")]
    AnnotationOnHiddenField { field: String },

    /// One or more fields failed
    #[error("{0}")]
    Fields(ValidationErrors),
}

impl ValidationError {
    /// Returns the error code. Aggregates report the first failure's code.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::NotARecord { .. } => ErrorCode::NotARecord,
            ValidationError::AnnotationOnHiddenField { .. } => ErrorCode::AnnotationOnHiddenField,
            ValidationError::Fields(errors) => errors
                .iter()
                .next()
                .map(|f| f.code())
                .unwrap_or(ErrorCode::ConstraintViolation),
        }
    }

    /// Returns the aggregated field failures, if this is a field-level error
    pub fn field_errors(&self) -> Option<&ValidationErrors> {
        match self {
            ValidationError::Fields(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_codes() {
        assert_eq!(ErrorCode::NotARecord.code(), "VLD_NOT_A_RECORD");
        assert_eq!(ErrorCode::AnnotationOnHiddenField.code(), "VLD_HIDDEN_FIELD_ANNOTATED");
        assert_eq!(ErrorCode::MalformedRule.code(), "VLD_MALFORMED_RULE");
        assert_eq!(ErrorCode::ConstraintViolation.code(), "VLD_CONSTRAINT_VIOLATION");
    }

    #[test]
    fn test_failure_messages() {
        let f = FieldFailure::violation("Age", "min", Violation::LessThan { min: 18 });
        assert_eq!(f.to_string(), "Age: value is less than 18");

        let f = FieldFailure::violation(
            "Role",
            "in",
            Violation::NotIn {
                allowed: vec!["admin".into(), "user".into()],
            },
        );
        assert_eq!(f.to_string(), "Role: value is not in [admin, user]");

        let f = FieldFailure::malformed("Name", "len", "len:abc");
        assert_eq!(f.to_string(), "Name: invalid validator syntax 'len:abc'");
        assert!(f.is_malformed());
        assert!(f.violation_detail().is_none());
    }

    #[test]
    fn test_aggregate_display_is_comma_joined() {
        let mut errors = ValidationErrors::new();
        errors.push(FieldFailure::violation("A", "max", Violation::GreaterThan { max: 2 }));
        errors.push(FieldFailure::violation("B", "email", Violation::NotEmail));

        assert_eq!(
            errors.to_string(),
            "A: value is greater than 2, B: value is not email address"
        );
        assert_eq!(errors.fields(), vec!["A", "B"]);
    }

    #[test]
    fn test_empty_aggregate_is_success() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }

    #[test]
    fn test_aggregate_to_json() {
        let mut errors = ValidationErrors::new();
        errors.push(FieldFailure::violation("Code", "len", Violation::LenNotEqual { len: 3 }));

        assert_eq!(
            errors.to_json(),
            json!([{
                "field": "Code",
                "rule": "len",
                "code": "VLD_CONSTRAINT_VIOLATION",
                "message": "Code: len is not equal to 3"
            }])
        );
    }

    #[test]
    fn test_validation_error_code() {
        let err = ValidationError::AnnotationOnHiddenField { field: "secret".into() };
        assert_eq!(err.code(), ErrorCode::AnnotationOnHiddenField);
        assert!(err.field_errors().is_none());

        let mut errors = ValidationErrors::new();
        errors.push(FieldFailure::malformed("X", "min", "min:"));
        let err = ValidationError::Fields(errors);
        assert_eq!(err.code(), ErrorCode::MalformedRule);
        assert_eq!(err.field_errors().map(|e| e.len()), Some(1));
    }
}
