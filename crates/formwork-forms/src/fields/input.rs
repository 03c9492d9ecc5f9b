//! Text-like input fields.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use formwork_dom::{ElementId, Host};
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::{Field, FieldBase, FieldOptions};
use crate::config::Settings;
use crate::error::{FormError, Result};
use crate::layout::expect_object;
use crate::validation::deserialize_pattern;

/// The `type` of an input element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum InputKind {
    Text,
    Password,
    Tel,
    Email,
    Url,
    Submit,
    /// Any other input type, kept verbatim.
    Other(String),
}

impl InputKind {
    /// The `type` attribute value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Tel => "tel",
            Self::Email => "email",
            Self::Url => "url",
            Self::Submit => "submit",
            Self::Other(kind) => kind,
        }
    }
}

impl From<&str> for InputKind {
    fn from(kind: &str) -> Self {
        match kind.to_ascii_lowercase().as_str() {
            "text" => Self::Text,
            "password" => Self::Password,
            "tel" => Self::Tel,
            "email" => Self::Email,
            "url" => Self::Url,
            "submit" => Self::Submit,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for InputKind {
    fn from(kind: String) -> Self {
        Self::from(kind.as_str())
    }
}

impl FromStr for InputKind {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to create an [`InputField`].
///
/// ```rust
/// use formwork_forms::{InputFieldSpec, InputKind};
///
/// let spec = InputFieldSpec::new(InputKind::Email, "email")
///     .required()
///     .label("E-mail");
/// assert_eq!(spec.name, None);
/// assert!(spec.with_label);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputFieldSpec {
    /// Input type.
    #[serde(alias = "type")]
    pub kind: InputKind,
    /// Element id.
    pub id: String,
    /// `name` attribute; the id when absent.
    #[serde(default)]
    pub name: Option<String>,
    /// Whether the field is required.
    #[serde(default)]
    pub required: bool,
    /// Class attribute of the control.
    #[serde(default)]
    pub class_name: String,
    /// Whether to create a label.
    #[serde(default)]
    pub with_label: bool,
    /// Label content.
    #[serde(default)]
    pub label_text: String,
    /// Explicit pattern, overriding the kind's default.
    #[serde(default, deserialize_with = "deserialize_pattern")]
    pub pattern: Option<Regex>,
}

impl InputFieldSpec {
    /// Creates a spec with the given kind and id.
    pub fn new(kind: impl Into<InputKind>, id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
            name: None,
            required: false,
            class_name: String::new(),
            with_label: false,
            label_text: String::new(),
            pattern: None,
        }
    }

    /// Reads a spec from a JSON object.
    pub fn from_json(value: &Value) -> Result<Self> {
        expect_object(value, "input field")?;
        Ok(Self::deserialize(value)?)
    }

    /// Sets the `name` attribute.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Marks the field required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the class attribute.
    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Requests a label with the given text.
    #[must_use]
    pub fn label(mut self, text: impl Into<String>) -> Self {
        self.with_label = true;
        self.label_text = text.into();
        self
    }

    /// Sets an explicit pattern.
    #[must_use]
    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Compiles and sets an explicit pattern.
    pub fn try_pattern(self, pattern: &str) -> Result<Self> {
        Ok(self.pattern(Regex::new(pattern)?))
    }
}

/// A field backed by an `<input>` element.
#[derive(Debug)]
pub struct InputField {
    base: FieldBase,
    kind: InputKind,
    pattern: Option<Regex>,
}

impl InputField {
    pub(crate) fn mount<H: Host + ?Sized>(
        host: &mut H,
        parent: ElementId,
        spec: InputFieldSpec,
        settings: Arc<Settings>,
    ) -> Result<Self> {
        let pattern = spec
            .pattern
            .or_else(|| settings.patterns.get(&spec.kind).cloned());
        if pattern.is_none() && spec.kind != InputKind::Submit {
            return Err(FormError::MissingPattern {
                id: spec.id,
                kind: spec.kind,
            });
        }

        let element = host.create_element("input");
        host.set_attribute(element, "type", spec.kind.as_str())?;

        let options = FieldOptions {
            id: &spec.id,
            name: spec.name.as_deref(),
            required: spec.required,
            class_name: &spec.class_name,
            label_text: spec.with_label.then_some(spec.label_text.as_str()),
            wrapped: spec.kind != InputKind::Submit,
        };
        let base = FieldBase::mount(host, parent, element, &options, settings)?;
        debug!(id = %spec.id, kind = %spec.kind, "mounted input field");

        Ok(Self {
            base,
            kind: spec.kind,
            pattern,
        })
    }

    /// The input type.
    pub fn kind(&self) -> &InputKind {
        &self.kind
    }
}

impl Field for InputField {
    fn base(&self) -> &FieldBase {
        &self.base
    }

    fn pattern(&self) -> Option<&Regex> {
        match self.kind {
            InputKind::Submit => None,
            _ => self.pattern.as_ref(),
        }
    }
}
