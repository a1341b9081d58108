//! Annotation-driven record validation
//!
//! Fields carry rule annotations such as `min:1;max:10` or `email`. A single
//! call checks every annotated field and reports all failing fields at once.
//!
//! # Design Principles
//!
//! - One failure per field, from its first failing clause
//! - Field failures aggregate; record-level errors abort the call
//! - Non-exported fields may not carry rules
//! - Unknown rule names and unsupported value shapes are ignored
//! - No output, no shared state, deterministic

mod config;
mod engine;
mod errors;
mod numeric;
mod parser;
mod record;
mod textual;
mod types;
mod validator;

pub use config::{ConfigError, ValidatorConfig};
pub use engine::{check, check_value};
pub use errors::{
    ErrorCode, FailureKind, FieldFailure, ValidationError, ValidationErrors, ValidationResult,
    Violation,
};
pub use numeric::check_int;
pub use parser::{parse, parse_with, Clause};
pub use textual::{check_text, is_email};
pub use types::{AsFieldValue, FieldDescriptor, FieldValue, Reflect, Shape, Visibility};
pub use validator::{is_valid, validate, Validator};
