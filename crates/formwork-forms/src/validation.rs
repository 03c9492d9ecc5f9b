//! Validation patterns keyed by input kind.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer};

use crate::error::Result;
use crate::fields::InputKind;

/// Built-in patterns. Kinds missing here need an explicit pattern.
pub const DEFAULT_PATTERNS: &[(&str, &str)] = &[
    ("password", "[_@a-zA-Z0-9]{8,}"),
    ("tel", "^[0-9]{11}$"),
    (
        "email",
        r"^([a-z0-9_]+)@([a-z0-9]+)\.([a-z]{2,8})(\.[a-z]{2,8})?$",
    ),
    ("url", "^(https?://)([A-Za-z0-9_]+)"),
];

static DEFAULTS: LazyLock<PatternTable> = LazyLock::new(|| {
    let patterns = DEFAULT_PATTERNS
        .iter()
        .map(|(kind, pattern)| {
            let regex = Regex::new(pattern).expect("built-in pattern compiles");
            (InputKind::from(*kind), regex)
        })
        .collect();
    PatternTable { patterns }
});

/// Kind to pattern lookup used when a field has no explicit pattern.
#[derive(Debug, Clone)]
pub struct PatternTable {
    patterns: HashMap<InputKind, Regex>,
}

impl Default for PatternTable {
    fn default() -> Self {
        DEFAULTS.clone()
    }
}

impl PatternTable {
    /// The built-in table.
    pub fn new() -> Self {
        Self::default()
    }

    /// A table with no patterns at all.
    pub fn empty() -> Self {
        Self {
            patterns: HashMap::new(),
        }
    }

    /// Compiles `pattern` and registers it for `kind`, replacing any previous entry.
    pub fn insert(&mut self, kind: impl Into<InputKind>, pattern: &str) -> Result<()> {
        self.patterns.insert(kind.into(), Regex::new(pattern)?);
        Ok(())
    }

    /// Pattern for `kind`, if any.
    pub fn get(&self, kind: &InputKind) -> Option<&Regex> {
        self.patterns.get(kind)
    }

    /// Number of registered kinds.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns whether no kind has a pattern.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Deserializes an optional regex from its source string.
pub(crate) fn deserialize_pattern<'de, D>(deserializer: D) -> std::result::Result<Option<Regex>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|pattern| Regex::new(&pattern).map_err(serde::de::Error::custom))
        .transpose()
}
