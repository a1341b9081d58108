//! Validator configuration
//!
//! Controls the separators of the annotation syntax. Defaults give the
//! `rule:arg;rule:a,b,c` form.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::{log_event, Event};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config content is not valid JSON for this type
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two separators are the same character
    #[error("separators must be distinct: clause '{clause}', argument '{argument}', list '{list}'")]
    AmbiguousSeparators { clause: char, argument: char, list: char },
}

/// Annotation syntax configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Separates clauses (default: ';')
    #[serde(default = "default_clause_separator")]
    pub clause_separator: char,

    /// Separates a rule name from its argument (default: ':')
    #[serde(default = "default_argument_separator")]
    pub argument_separator: char,

    /// Separates `in` list elements (default: ',')
    #[serde(default = "default_list_separator")]
    pub list_separator: char,
}

fn default_clause_separator() -> char {
    ';'
}

fn default_argument_separator() -> char {
    ':'
}

fn default_list_separator() -> char {
    ','
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            clause_separator: default_clause_separator(),
            argument_separator: default_argument_separator(),
            list_separator: default_list_separator(),
        }
    }
}

impl ValidatorConfig {
    /// Parse a config from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Load a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&content)?;

        let path = path.display().to_string();
        log_event(Event::ConfigLoaded, &[("path", path.as_str())]);
        Ok(config)
    }

    /// Rejects configurations where separators collide.
    pub fn check(&self) -> Result<(), ConfigError> {
        let (c, a, l) = (self.clause_separator, self.argument_separator, self.list_separator);
        if c == a || c == l || a == l {
            return Err(ConfigError::AmbiguousSeparators {
                clause: c,
                argument: a,
                list: l,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ValidatorConfig::default();
        assert_eq!(config.clause_separator, ';');
        assert_eq!(config.argument_separator, ':');
        assert_eq!(config.list_separator, ',');
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ValidatorConfig::from_json(r#"{"list_separator": "|"}"#).unwrap();
        assert_eq!(config.clause_separator, ';');
        assert_eq!(config.argument_separator, ':');
        assert_eq!(config.list_separator, '|');
    }

    #[test]
    fn test_ambiguous_separators_rejected() {
        let result = ValidatorConfig::from_json(r#"{"list_separator": ";"}"#);
        assert!(matches!(result, Err(ConfigError::AmbiguousSeparators { .. })));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = ValidatorConfig::from_json("{not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"clause_separator": "&", "argument_separator": "="}}"#).unwrap();

        let config = ValidatorConfig::load(file.path()).unwrap();
        assert_eq!(config.clause_separator, '&');
        assert_eq!(config.argument_separator, '=');
        assert_eq!(config.list_separator, ',');
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = ValidatorConfig::load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
