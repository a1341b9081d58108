//! Diagnostic events emitted during validation
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable validation events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Driver
    /// Validation of a record begins
    ValidationStart,
    /// Validation finished, with or without failures
    ValidationComplete,
    /// Input was not a record
    NotARecord,
    /// Hidden field carries rules; call aborted
    HiddenFieldAnnotated,
    /// Field has no annotation
    FieldSkipped,
    /// Field failed one of its rules
    FieldRejected,

    // Rules
    /// Rule argument could not be parsed
    MalformedRule,
    /// Rule name not known to the checker
    UnknownRule,
    /// Field value shape has no checker
    UnsupportedValue,

    // Configuration
    /// Configuration loaded from disk
    ConfigLoaded,
}

impl Event {
    /// Returns the event name
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ValidationStart => "VALIDATION_START",
            Event::ValidationComplete => "VALIDATION_COMPLETE",
            Event::NotARecord => "NOT_A_RECORD",
            Event::HiddenFieldAnnotated => "HIDDEN_FIELD_ANNOTATED",
            Event::FieldSkipped => "FIELD_SKIPPED",
            Event::FieldRejected => "FIELD_REJECTED",
            Event::MalformedRule => "MALFORMED_RULE",
            Event::UnknownRule => "UNKNOWN_RULE",
            Event::UnsupportedValue => "UNSUPPORTED_VALUE",
            Event::ConfigLoaded => "CONFIG_LOADED",
        }
    }

    /// Returns whether the event reports an annotation bug
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Event::NotARecord | Event::HiddenFieldAnnotated | Event::MalformedRule
        )
    }

    /// Returns whether the event fires once per field or clause
    pub fn is_per_field(&self) -> bool {
        matches!(
            self,
            Event::FieldSkipped
                | Event::FieldRejected
                | Event::UnknownRule
                | Event::UnsupportedValue
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
