//! Per-form configuration.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::Result;
use crate::validation::PatternTable;

/// Marker classes and pattern overrides shared by every node of one form.
///
/// ```rust
/// use formwork_forms::FormConfig;
///
/// let config = FormConfig::from_json_str(
///     r#"{"validClass": "is-valid", "patterns": {"text": "^[a-z]+$"}}"#,
/// ).unwrap();
/// assert_eq!(config.valid_class, "is-valid");
/// assert_eq!(config.invalid_class, "invalid");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormConfig {
    /// Class added to a field that passed validation.
    pub valid_class: String,
    /// Class added to a field that failed validation.
    pub invalid_class: String,
    /// Class of the container wrapping an input and its label.
    pub wrapper_class: String,
    /// Kind name to regex source, layered over the built-in table.
    pub patterns: BTreeMap<String, String>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            valid_class: "valid".to_string(),
            invalid_class: "invalid".to_string(),
            wrapper_class: "input-field".to_string(),
            patterns: BTreeMap::new(),
        }
    }
}

impl FormConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the valid/invalid marker classes.
    #[must_use]
    pub fn markers(mut self, valid: impl Into<String>, invalid: impl Into<String>) -> Self {
        self.valid_class = valid.into();
        self.invalid_class = invalid.into();
        self
    }

    /// Sets the wrapper class.
    #[must_use]
    pub fn wrapper_class(mut self, class: impl Into<String>) -> Self {
        self.wrapper_class = class.into();
        self
    }

    /// Adds or replaces the pattern for a kind.
    #[must_use]
    pub fn pattern(mut self, kind: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.patterns.insert(kind.into(), pattern.into());
        self
    }

    pub(crate) fn compile(&self) -> Result<Settings> {
        let mut patterns = PatternTable::new();
        for (kind, pattern) in &self.patterns {
            patterns.insert(kind.as_str(), pattern)?;
        }
        Ok(Settings {
            valid_class: self.valid_class.clone(),
            invalid_class: self.invalid_class.clone(),
            wrapper_class: self.wrapper_class.clone(),
            patterns,
        })
    }
}

/// Compiled form of [`FormConfig`].
#[derive(Debug)]
pub(crate) struct Settings {
    pub(crate) valid_class: String,
    pub(crate) invalid_class: String,
    pub(crate) wrapper_class: String,
    pub(crate) patterns: PatternTable,
}
