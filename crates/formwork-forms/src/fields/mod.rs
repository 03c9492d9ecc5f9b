//! Leaf fields.

mod input;

pub use input::{InputField, InputFieldSpec, InputKind};

use std::sync::Arc;

use formwork_dom::{ElementId, Host};
use regex::Regex;
use tracing::trace;

use crate::config::Settings;
use crate::error::Result;

/// State shared by every field: the control, its optional wrapper and label.
///
/// Invariant: a label only exists inside a wrapper.
#[derive(Debug)]
pub struct FieldBase {
    id: String,
    name: String,
    required: bool,
    element: ElementId,
    wrapper: Option<ElementId>,
    label: Option<ElementId>,
    parent: ElementId,
    settings: Arc<Settings>,
}

/// Construction options for [`FieldBase::mount`].
pub(crate) struct FieldOptions<'a> {
    pub(crate) id: &'a str,
    pub(crate) name: Option<&'a str>,
    pub(crate) required: bool,
    pub(crate) class_name: &'a str,
    pub(crate) label_text: Option<&'a str>,
    pub(crate) wrapped: bool,
}

impl FieldBase {
    /// Decorates `element`, builds wrapper and label, and attaches the result to
    /// `parent`, hidden.
    pub(crate) fn mount<H: Host + ?Sized>(
        host: &mut H,
        parent: ElementId,
        element: ElementId,
        options: &FieldOptions<'_>,
        settings: Arc<Settings>,
    ) -> Result<Self> {
        let wrapped = options.wrapped || options.label_text.is_some();
        let wrapper = if wrapped {
            let wrapper = host.create_element("div");
            host.set_attribute(wrapper, "class", &settings.wrapper_class)?;
            host.append_child(wrapper, element)?;
            host.hide(wrapper)?;
            Some(wrapper)
        } else {
            None
        };

        let name = options.name.unwrap_or(options.id);
        host.hide(element)?;
        host.set_attribute(element, "id", options.id)?;
        host.set_attribute(element, "name", name)?;
        if !options.class_name.is_empty() {
            host.set_attribute(element, "class", options.class_name)?;
        }
        if options.required {
            host.set_attribute(element, "required", "required")?;
        }

        let label = match (options.label_text, wrapper) {
            (Some(text), Some(wrapper)) => {
                let label = host.create_element("label");
                host.set_attribute(label, "for", options.id)?;
                host.set_text(label, text)?;
                host.append_child(wrapper, label)?;
                Some(label)
            }
            _ => None,
        };

        host.append_child(parent, wrapper.unwrap_or(element))?;

        Ok(Self {
            id: options.id.to_string(),
            name: name.to_string(),
            required: options.required,
            element,
            wrapper,
            label,
            parent,
            settings,
        })
    }
}

/// A single data-entry control.
///
/// Implementors supply [`Field::base`] and [`Field::pattern`]; everything else is
/// provided.
pub trait Field {
    /// Shared field state.
    fn base(&self) -> &FieldBase;

    /// Pattern the value must match, or `None` when the field is always valid.
    fn pattern(&self) -> Option<&Regex>;

    /// The field id.
    fn id(&self) -> &str {
        &self.base().id
    }

    /// The `name` attribute.
    fn name(&self) -> &str {
        &self.base().name
    }

    /// Whether the field was declared required.
    fn required(&self) -> bool {
        self.base().required
    }

    /// The control element.
    fn element(&self) -> ElementId {
        self.base().element
    }

    /// The wrapper container, if any.
    fn wrapper(&self) -> Option<ElementId> {
        self.base().wrapper
    }

    /// The label element, if any.
    fn label(&self) -> Option<ElementId> {
        self.base().label
    }

    /// The container the field was attached to.
    fn parent(&self) -> ElementId {
        self.base().parent
    }

    /// Current value of the control.
    fn value<H: Host + ?Sized>(&self, host: &H) -> Result<String> {
        Ok(host.value(self.element())?)
    }

    /// Replaces the value of the control.
    fn set_value<H: Host + ?Sized>(&self, host: &mut H, value: &str) -> Result<()> {
        Ok(host.set_value(self.element(), value)?)
    }

    /// Returns `self` when the id matches.
    fn find_by_id(&self, id: &str) -> Option<&Self>
    where
        Self: Sized,
    {
        (self.id() == id).then_some(self)
    }

    /// Whether the current value matches the pattern.
    fn is_valid<H: Host + ?Sized>(&self, host: &H) -> Result<bool> {
        match self.pattern() {
            None => Ok(true),
            Some(pattern) => Ok(pattern.is_match(&self.value(host)?)),
        }
    }

    /// Swaps the valid/invalid marker classes according to [`Field::is_valid`].
    fn validate<H: Host + ?Sized>(&self, host: &mut H) -> Result<bool> {
        let valid = self.is_valid(&*host)?;
        let settings = &self.base().settings;
        let (add, remove) = if valid {
            (&settings.valid_class, &settings.invalid_class)
        } else {
            (&settings.invalid_class, &settings.valid_class)
        };
        host.remove_class(self.element(), remove)?;
        host.add_class(self.element(), add)?;
        trace!(id = self.id(), valid, "validated field");
        Ok(valid)
    }

    /// Shows the control and its wrapper.
    fn render<H: Host + ?Sized>(&self, host: &mut H) -> Result<()> {
        host.show(self.element())?;
        if let Some(wrapper) = self.wrapper() {
            host.show(wrapper)?;
        }
        Ok(())
    }

    /// Hides the wrapper, or the control when there is none.
    fn unmount<H: Host + ?Sized>(&self, host: &mut H) -> Result<()> {
        host.hide(self.wrapper().unwrap_or(self.element()))?;
        Ok(())
    }

    /// Whether both the wrapper (if any) and the control are displayed.
    fn is_mounted<H: Host + ?Sized>(&self, host: &H) -> Result<bool> {
        if let Some(wrapper) = self.wrapper() {
            if !host.is_displayed(wrapper)? {
                return Ok(false);
            }
        }
        Ok(host.is_displayed(self.element())?)
    }
}
