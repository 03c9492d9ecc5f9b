//! Building whole form trees from JSON layouts.

use formwork_dom::Host;
use serde::Deserialize;
use serde_json::Value;

use crate::composite::Container;
use crate::config::FormConfig;
use crate::error::{FormError, Result};
use crate::fields::InputFieldSpec;
use crate::form::{Form, FormOptions};

/// A form together with its nested children.
///
/// ```rust
/// use formwork_dom::Document;
/// use formwork_forms::{Container, Layout};
///
/// let layout = Layout::from_json_str(r#"{
///     "id": "signup",
///     "action": "/signup",
///     "method": "post",
///     "children": [
///         {"node": "fieldSet", "id": "account", "children": [
///             {"node": "input", "type": "email", "id": "email"}
///         ]},
///         {"node": "input", "type": "submit", "id": "send"}
///     ]
/// }"#).unwrap();
///
/// let mut doc = Document::new();
/// let form = layout.build(&mut doc).unwrap();
/// assert_eq!(form.fields().len(), 2);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// The form itself.
    #[serde(flatten)]
    pub form: FormOptions,
    /// Configuration shared by the tree.
    #[serde(default)]
    pub config: FormConfig,
    /// Top-level children in order.
    #[serde(default)]
    pub children: Vec<LayoutNode>,
}

/// One entry of a layout, tagged by `"node"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "node", rename_all = "camelCase")]
pub enum LayoutNode {
    FieldSet(FieldSetLayout),
    Input(InputFieldSpec),
}

/// A field set entry and its children.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSetLayout {
    pub id: String,
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub children: Vec<LayoutNode>,
}

impl Layout {
    /// Parses a layout from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json(&value)
    }

    /// Reads a layout from a JSON object.
    pub fn from_json(value: &Value) -> Result<Self> {
        expect_object(value, "form layout")?;
        Ok(Self::deserialize(value)?)
    }

    /// Creates the form and every child, in document order.
    pub fn build<H: Host + ?Sized>(self, host: &mut H) -> Result<Form> {
        let mut form = Form::with_config(host, self.form, &self.config)?;
        add_nodes(&mut form, host, self.children)?;
        Ok(form)
    }
}

impl Form {
    /// Builds a form tree from a JSON layout object.
    pub fn from_layout<H: Host + ?Sized>(host: &mut H, value: &Value) -> Result<Self> {
        Layout::from_json(value)?.build(host)
    }
}

fn add_nodes<C, H>(parent: &mut C, host: &mut H, nodes: Vec<LayoutNode>) -> Result<()>
where
    C: Container,
    H: Host + ?Sized,
{
    for node in nodes {
        match node {
            LayoutNode::FieldSet(layout) => {
                let field_set = parent.add_field_set(host, &layout.id, &layout.class_name)?;
                add_nodes(field_set, host, layout.children)?;
            }
            LayoutNode::Input(spec) => {
                parent.add_input_field(host, spec)?;
            }
        }
    }
    Ok(())
}

/// Rejects anything but a JSON object where an options object is required.
pub(crate) fn expect_object(value: &Value, what: &str) -> Result<()> {
    if value.is_object() {
        return Ok(());
    }
    let found = match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    };
    Err(FormError::Configuration(format!(
        "{what} options must be a JSON object, found {found}"
    )))
}
