//! Validation driver
//!
//! Walks the fields of a record in declaration order:
//! - hidden field with rules: abort the whole call
//! - visible field with rules: check it, collect any failure, continue
//! - field without rules: skip
//!
//! Forbidden behaviors:
//! - Validating anything that is not a record
//! - Reporting more than one failure per field
//! - Returning an empty aggregate as an error
//! - Writing to stdout or stderr

use crate::observability::{log_event, Event};

use super::config::{ConfigError, ValidatorConfig};
use super::engine;
use super::errors::{ValidationError, ValidationErrors, ValidationResult};
use super::types::{Reflect, Shape};

/// Record validator.
///
/// Holds only configuration; every call builds its own state, so one
/// validator can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Creates a validator with the default annotation syntax.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with the given configuration.
    ///
    /// # Errors
    ///
    /// `AmbiguousSeparators` if two separators are the same character.
    pub fn with_config(config: ValidatorConfig) -> Result<Self, ConfigError> {
        config.check()?;
        Ok(Self { config })
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates a record against the annotations on its fields.
    ///
    /// # Errors
    ///
    /// - `NotARecord` if `value` is not a record
    /// - `AnnotationOnHiddenField` if a non-exported field carries rules
    /// - `Fields` with one failure per failing field otherwise
    pub fn validate<T: Reflect + ?Sized>(&self, value: &T) -> ValidationResult<()> {
        let (type_name, fields) = match value.shape() {
            Shape::Record { type_name, fields } => (type_name, fields),
            Shape::Other { type_name } => {
                log_event(Event::NotARecord, &[("type", type_name)]);
                return Err(ValidationError::NotARecord {
                    type_name: type_name.to_string(),
                });
            }
        };

        log_event(Event::ValidationStart, &[("record", type_name)]);

        let mut errors = ValidationErrors::new();

        for field in &fields {
            if !field.is_annotated() {
                log_event(Event::FieldSkipped, &[("field", field.name)]);
                continue;
            }

            if !field.visibility.is_exported() {
                log_event(Event::HiddenFieldAnnotated, &[("field", field.name)]);
                return Err(ValidationError::AnnotationOnHiddenField {
                    field: field.name.to_string(),
                });
            }

            if let Some(failure) = engine::check(field, &self.config) {
                log_event(
                    Event::FieldRejected,
                    &[("field", field.name), ("rule", failure.rule())],
                );
                errors.push(failure);
            }
        }

        let failed = errors.len().to_string();
        log_event(
            Event::ValidationComplete,
            &[("record", type_name), ("failed", failed.as_str())],
        );

        errors.into_result()
    }
}

/// Validates a record with the default annotation syntax.
pub fn validate<T: Reflect + ?Sized>(value: &T) -> ValidationResult<()> {
    Validator::new().validate(value)
}

/// Returns whether a record passes validation with the default syntax.
pub fn is_valid<T: Reflect + ?Sized>(value: &T) -> bool {
    validate(value).is_ok()
}
