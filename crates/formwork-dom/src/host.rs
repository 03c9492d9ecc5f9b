//! The capability set a UI environment supplies to the form tree.

use std::fmt;

use crate::error::Result;

/// Handle to an element owned by a [`Host`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    /// Wraps a raw index. Hosts decide what the index refers to.
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An event delivered to listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Event type, e.g. `input` or `submit`.
    pub kind: String,
    /// The element the event was dispatched on.
    pub target: ElementId,
}

/// Callback registered with [`Host::add_event_listener`].
pub type Listener = Box<dyn Fn(&Event)>;

/// Primitive element operations provided by the UI environment.
///
/// All methods fail with [`DomError::UnknownElement`](crate::DomError::UnknownElement)
/// when handed a handle the host does not know.
pub trait Host {
    /// Returns the default mount container.
    fn body(&self) -> ElementId;

    /// Creates a detached element with the given tag.
    fn create_element(&mut self, tag: &str) -> ElementId;

    /// Appends `child` as the last child of `parent`, detaching it first if needed.
    fn append_child(&mut self, parent: ElementId, child: ElementId) -> Result<()>;

    /// Detaches `child` from `parent`.
    fn remove_child(&mut self, parent: ElementId, child: ElementId) -> Result<()>;

    /// Sets an inline style property. An empty value removes the property.
    fn set_style_property(&mut self, el: ElementId, prop: &str, value: &str) -> Result<()>;

    /// Reads an inline style property.
    fn style_property(&self, el: ElementId, prop: &str) -> Result<Option<String>>;

    /// Sets an attribute.
    fn set_attribute(&mut self, el: ElementId, name: &str, value: &str) -> Result<()>;

    /// Reads an attribute.
    fn attribute(&self, el: ElementId, name: &str) -> Result<Option<String>>;

    /// Removes an attribute if present.
    fn remove_attribute(&mut self, el: ElementId, name: &str) -> Result<()>;

    /// Adds a class to the class list.
    fn add_class(&mut self, el: ElementId, class: &str) -> Result<()>;

    /// Removes a class from the class list.
    fn remove_class(&mut self, el: ElementId, class: &str) -> Result<()>;

    /// Toggles a class and returns whether it is now present.
    fn toggle_class(&mut self, el: ElementId, class: &str) -> Result<bool>;

    /// Returns whether the class list contains `class`.
    fn has_class(&self, el: ElementId, class: &str) -> Result<bool>;

    /// Current value of an input-like element.
    fn value(&self, el: ElementId) -> Result<String>;

    /// Sets the value of an input-like element.
    fn set_value(&mut self, el: ElementId, value: &str) -> Result<()>;

    /// Replaces the text content.
    fn set_text(&mut self, el: ElementId, text: &str) -> Result<()>;

    /// Registers a listener for `event` on `el`.
    fn add_event_listener(&mut self, el: ElementId, event: &str, listener: Listener)
        -> Result<()>;

    /// Clears `display`, letting the element show.
    fn show(&mut self, el: ElementId) -> Result<()> {
        self.set_style_property(el, "display", "")
    }

    /// Sets `display: none`.
    fn hide(&mut self, el: ElementId) -> Result<()> {
        self.set_style_property(el, "display", "none")
    }

    /// Returns false only when the element itself carries `display: none`.
    fn is_displayed(&self, el: ElementId) -> Result<bool> {
        Ok(self.style_property(el, "display")?.as_deref() != Some("none"))
    }
}
