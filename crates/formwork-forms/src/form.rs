//! The root of a form tree.

use std::collections::HashMap;
use std::sync::Arc;

use formwork_dom::{ElementId, Host};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::composite::{Composite, Container, NodeRef};
use crate::config::FormConfig;
use crate::error::Result;
use crate::fields::Field;
use crate::layout::expect_object;

/// Options for [`Form::new`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormOptions {
    /// Form id.
    pub id: String,
    /// Submission URL.
    #[serde(default)]
    pub action: String,
    /// Submission method.
    #[serde(default)]
    pub method: String,
    /// Class attribute.
    #[serde(default)]
    pub class_name: String,
    /// Mount container; the host body when `None`.
    #[serde(skip)]
    pub target: Option<ElementId>,
}

impl FormOptions {
    /// Creates options with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Reads options from a JSON object.
    pub fn from_json(value: &Value) -> Result<Self> {
        expect_object(value, "form")?;
        Ok(Self::deserialize(value)?)
    }

    /// Sets the submission URL.
    #[must_use]
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    /// Sets the submission method.
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Sets the class attribute.
    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Mounts the form inside `target` instead of the body.
    #[must_use]
    pub fn target(mut self, target: ElementId) -> Self {
        self.target = Some(target);
        self
    }
}

/// A `<form>` element owning a tree of field sets and fields.
#[derive(Debug)]
pub struct Form {
    composite: Composite,
    action: String,
    method: String,
}

impl Form {
    /// Creates a hidden form with the default configuration.
    pub fn new<H: Host + ?Sized>(host: &mut H, options: FormOptions) -> Result<Self> {
        Self::with_config(host, options, &FormConfig::default())
    }

    /// Creates a hidden form whose nodes share `config`.
    pub fn with_config<H: Host + ?Sized>(
        host: &mut H,
        options: FormOptions,
        config: &FormConfig,
    ) -> Result<Self> {
        let settings = Arc::new(config.compile()?);
        let parent = options.target.unwrap_or_else(|| host.body());
        let composite = Composite::create(
            host,
            "form",
            parent,
            &options.id,
            &options.class_name,
            settings,
        )?;
        if !options.action.is_empty() {
            host.set_attribute(composite.element(), "action", &options.action)?;
        }
        if !options.method.is_empty() {
            host.set_attribute(composite.element(), "method", &options.method)?;
        }
        host.append_child(parent, composite.element())?;
        debug!(id = %options.id, "mounted form");

        Ok(Self {
            composite,
            action: options.action,
            method: options.method,
        })
    }

    /// Creates a form from a JSON options object.
    pub fn from_json<H: Host + ?Sized>(host: &mut H, value: &Value) -> Result<Self> {
        Self::new(host, FormOptions::from_json(value)?)
    }

    /// The submission URL.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// The submission method.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Field name to current value, in pre-order; later duplicates of a name win.
    pub fn values<H: Host + ?Sized>(&self, host: &H) -> Result<HashMap<String, String>> {
        let mut values = HashMap::new();
        for field in self.fields() {
            values.insert(field.name().to_string(), field.value(host)?);
        }
        Ok(values)
    }
}

impl Container for Form {
    fn composite(&self) -> &Composite {
        &self.composite
    }

    fn composite_mut(&mut self) -> &mut Composite {
        &mut self.composite
    }

    fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::Form(self)
    }
}
