//! In-memory document backing the [`Host`] trait.

use std::fmt;

use tracing::trace;

use crate::error::{DomError, Result};
use crate::host::{ElementId, Event, Host, Listener};

/// Element state kept by the arena.
#[derive(Default)]
pub(crate) struct ElementData {
    pub(crate) tag: String,
    pub(crate) attributes: Vec<(String, String)>,
    pub(crate) classes: Vec<String>,
    pub(crate) style: Vec<(String, String)>,
    pub(crate) value: String,
    pub(crate) text: Option<String>,
    pub(crate) parent: Option<ElementId>,
    pub(crate) children: Vec<ElementId>,
    listeners: Vec<(String, Listener)>,
}

impl ElementData {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }
}

/// Arena-backed DOM with an `html > body` root.
///
/// Elements are never deallocated; detached elements simply have no parent.
pub struct Document {
    elements: Vec<ElementData>,
    root: ElementId,
    body: ElementId,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("elements", &self.elements.len())
            .field("root", &self.root)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty document containing `html` and `body`.
    pub fn new() -> Self {
        let mut doc = Self {
            elements: vec![ElementData::new("html"), ElementData::new("body")],
            root: ElementId::from_index(0),
            body: ElementId::from_index(1),
        };
        doc.elements[1].parent = Some(doc.root);
        doc.elements[0].children.push(doc.body);
        doc
    }

    /// The `html` element.
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Number of elements ever created, attached or not.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns whether the arena holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub(crate) fn get(&self, el: ElementId) -> Result<&ElementData> {
        self.elements
            .get(el.index())
            .ok_or(DomError::UnknownElement(el))
    }

    fn get_mut(&mut self, el: ElementId) -> Result<&mut ElementData> {
        self.elements
            .get_mut(el.index())
            .ok_or(DomError::UnknownElement(el))
    }

    /// Lowercased tag name.
    pub fn tag(&self, el: ElementId) -> Result<&str> {
        Ok(&self.get(el)?.tag)
    }

    /// Children in document order.
    pub fn children(&self, el: ElementId) -> Result<&[ElementId]> {
        Ok(&self.get(el)?.children)
    }

    /// Parent, if attached.
    pub fn parent(&self, el: ElementId) -> Result<Option<ElementId>> {
        Ok(self.get(el)?.parent)
    }

    /// Text content set with [`Host::set_text`].
    pub fn text(&self, el: ElementId) -> Result<Option<&str>> {
        Ok(self.get(el)?.text.as_deref())
    }

    /// Class list in insertion order.
    pub fn classes(&self, el: ElementId) -> Result<&[String]> {
        Ok(&self.get(el)?.classes)
    }

    /// First attached element with the given `id` attribute, in document order.
    pub fn get_element_by_id(&self, id: &str) -> Option<ElementId> {
        let mut stack = vec![self.root];
        while let Some(el) = stack.pop() {
            let data = &self.elements[el.index()];
            if data
                .attributes
                .iter()
                .any(|(name, value)| name == "id" && value == id)
            {
                return Some(el);
            }
            stack.extend(data.children.iter().rev().copied());
        }
        None
    }

    /// Whether `el` and all of its ancestors are displayed.
    pub fn is_visible(&self, el: ElementId) -> Result<bool> {
        let mut current = Some(el);
        while let Some(id) = current {
            if !self.is_displayed(id)? {
                return Ok(false);
            }
            current = self.get(id)?.parent;
        }
        Ok(true)
    }

    /// Runs the listeners registered for `event` on `el` in registration order.
    ///
    /// Returns how many listeners ran. Events do not bubble.
    pub fn dispatch_event(&self, el: ElementId, event: &str) -> Result<usize> {
        let data = self.get(el)?;
        let payload = Event {
            kind: event.to_string(),
            target: el,
        };
        let mut fired = 0;
        for (kind, listener) in &data.listeners {
            if kind == event {
                listener(&payload);
                fired += 1;
            }
        }
        trace!(%el, event, fired, "dispatched event");
        Ok(fired)
    }

    fn is_ancestor_or_self(&self, candidate: ElementId, el: ElementId) -> Result<bool> {
        let mut current = Some(el);
        while let Some(id) = current {
            if id == candidate {
                return Ok(true);
            }
            current = self.get(id)?.parent;
        }
        Ok(false)
    }

    fn detach(&mut self, child: ElementId) -> Result<()> {
        if let Some(old_parent) = self.get(child)?.parent {
            self.get_mut(old_parent)?.children.retain(|c| *c != child);
            self.get_mut(child)?.parent = None;
        }
        Ok(())
    }
}

fn parse_style(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|decl| {
            let (prop, value) = decl.split_once(':')?;
            let prop = prop.trim();
            let value = value.trim();
            (!prop.is_empty() && !value.is_empty()).then(|| (prop.to_string(), value.to_string()))
        })
        .collect()
}

impl Host for Document {
    fn body(&self) -> ElementId {
        self.body
    }

    fn create_element(&mut self, tag: &str) -> ElementId {
        let id = ElementId::from_index(self.elements.len());
        self.elements.push(ElementData::new(tag));
        trace!(%id, tag, "created element");
        id
    }

    fn append_child(&mut self, parent: ElementId, child: ElementId) -> Result<()> {
        self.get(parent)?;
        self.get(child)?;
        if self.is_ancestor_or_self(child, parent)? {
            return Err(DomError::HierarchyRequest { parent, child });
        }
        self.detach(child)?;
        self.get_mut(parent)?.children.push(child);
        self.get_mut(child)?.parent = Some(parent);
        Ok(())
    }

    fn remove_child(&mut self, parent: ElementId, child: ElementId) -> Result<()> {
        self.get(parent)?;
        if self.get(child)?.parent != Some(parent) {
            return Err(DomError::NotAChild { parent, child });
        }
        self.detach(child)
    }

    fn set_style_property(&mut self, el: ElementId, prop: &str, value: &str) -> Result<()> {
        let style = &mut self.get_mut(el)?.style;
        let existing = style.iter().position(|(p, _)| p == prop);
        match (existing, value.is_empty()) {
            (Some(i), true) => {
                style.remove(i);
            }
            (Some(i), false) => style[i].1 = value.to_string(),
            (None, true) => {}
            (None, false) => style.push((prop.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn style_property(&self, el: ElementId, prop: &str) -> Result<Option<String>> {
        Ok(self
            .get(el)?
            .style
            .iter()
            .find(|(p, _)| p == prop)
            .map(|(_, v)| v.clone()))
    }

    fn set_attribute(&mut self, el: ElementId, name: &str, value: &str) -> Result<()> {
        let data = self.get_mut(el)?;
        match name {
            "class" => {
                data.classes = value.split_whitespace().map(str::to_string).collect();
            }
            "style" => data.style = parse_style(value),
            "value" => data.value = value.to_string(),
            _ => match data.attributes.iter_mut().find(|(n, _)| n == name) {
                Some(slot) => slot.1 = value.to_string(),
                None => data
                    .attributes
                    .push((name.to_string(), value.to_string())),
            },
        }
        Ok(())
    }

    fn attribute(&self, el: ElementId, name: &str) -> Result<Option<String>> {
        let data = self.get(el)?;
        Ok(match name {
            "class" => (!data.classes.is_empty()).then(|| data.classes.join(" ")),
            "style" => (!data.style.is_empty()).then(|| {
                data.style
                    .iter()
                    .map(|(p, v)| format!("{p}: {v};"))
                    .collect::<Vec<_>>()
                    .join(" ")
            }),
            "value" => Some(data.value.clone()),
            _ => data
                .attributes
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.clone()),
        })
    }

    fn remove_attribute(&mut self, el: ElementId, name: &str) -> Result<()> {
        let data = self.get_mut(el)?;
        match name {
            "class" => data.classes.clear(),
            "style" => data.style.clear(),
            "value" => data.value.clear(),
            _ => data.attributes.retain(|(n, _)| n != name),
        }
        Ok(())
    }

    fn add_class(&mut self, el: ElementId, class: &str) -> Result<()> {
        let classes = &mut self.get_mut(el)?.classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
        Ok(())
    }

    fn remove_class(&mut self, el: ElementId, class: &str) -> Result<()> {
        self.get_mut(el)?.classes.retain(|c| c != class);
        Ok(())
    }

    fn toggle_class(&mut self, el: ElementId, class: &str) -> Result<bool> {
        if self.has_class(el, class)? {
            self.remove_class(el, class)?;
            Ok(false)
        } else {
            self.add_class(el, class)?;
            Ok(true)
        }
    }

    fn has_class(&self, el: ElementId, class: &str) -> Result<bool> {
        Ok(self.get(el)?.classes.iter().any(|c| c == class))
    }

    fn value(&self, el: ElementId) -> Result<String> {
        Ok(self.get(el)?.value.clone())
    }

    fn set_value(&mut self, el: ElementId, value: &str) -> Result<()> {
        self.get_mut(el)?.value = value.to_string();
        Ok(())
    }

    fn set_text(&mut self, el: ElementId, text: &str) -> Result<()> {
        self.get_mut(el)?.text = Some(text.to_string());
        Ok(())
    }

    fn add_event_listener(
        &mut self,
        el: ElementId,
        event: &str,
        listener: Listener,
    ) -> Result<()> {
        self.get_mut(el)?
            .listeners
            .push((event.to_string(), listener));
        Ok(())
    }
}
