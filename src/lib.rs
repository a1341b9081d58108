//! vld - declarative record field validation
//!
//! Annotate struct fields with rules, then validate a value in one pass:
//!
//! ```
//! vld::record! {
//!     pub struct User {
//!         #[validate("len:5")]
//!         pub code: String,
//!         #[validate("min:18;max:120")]
//!         pub age: i64,
//!     }
//! }
//!
//! let user = User { code: "abc".into(), age: 10 };
//! let err = vld::validate(&user).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "code: len is not equal to 5, age: value is less than 18"
//! );
//! ```

pub mod observability;
pub mod validation;

pub use validation::{
    is_valid, validate, ConfigError, ErrorCode, FieldFailure, ValidationError, ValidationErrors,
    ValidationResult, Validator, ValidatorConfig,
};
