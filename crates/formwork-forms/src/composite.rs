//! Container nodes and the tree they own.

use std::collections::HashMap;
use std::sync::Arc;

use formwork_dom::{ElementId, Host};
use tracing::debug;

use crate::config::Settings;
use crate::error::Result;
use crate::fields::{Field, InputField, InputFieldSpec};
use crate::fieldset::FieldSet;
use crate::form::Form;

/// State shared by [`Form`] and [`FieldSet`]: the container element and its
/// children in insertion order.
#[derive(Debug)]
pub struct Composite {
    id: String,
    class_name: String,
    element: ElementId,
    parent: ElementId,
    children: Vec<Node>,
    settings: Arc<Settings>,
}

impl Composite {
    /// Creates the hidden container element. Attaching it is up to the caller.
    pub(crate) fn create<H: Host + ?Sized>(
        host: &mut H,
        tag: &str,
        parent: ElementId,
        id: &str,
        class_name: &str,
        settings: Arc<Settings>,
    ) -> Result<Self> {
        let element = host.create_element(tag);
        host.set_attribute(element, "id", id)?;
        if !class_name.is_empty() {
            host.set_attribute(element, "class", class_name)?;
        }
        host.hide(element)?;
        Ok(Self {
            id: id.to_string(),
            class_name: class_name.to_string(),
            element,
            parent,
            children: Vec::new(),
            settings,
        })
    }

    /// The container id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The container class attribute.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// The container element.
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// The element this container was attached to.
    pub fn parent(&self) -> ElementId {
        self.parent
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

/// A child of a container.
#[derive(Debug)]
pub enum Node {
    FieldSet(FieldSet),
    Input(InputField),
}

impl Node {
    /// The node id.
    pub fn id(&self) -> &str {
        match self {
            Self::FieldSet(field_set) => field_set.id(),
            Self::Input(field) => field.id(),
        }
    }

    /// The outermost element of the node.
    pub fn element(&self) -> ElementId {
        match self {
            Self::FieldSet(field_set) => field_set.element(),
            Self::Input(field) => field.element(),
        }
    }

    /// Borrowed view of this node.
    pub fn as_node_ref(&self) -> NodeRef<'_> {
        match self {
            Self::FieldSet(field_set) => NodeRef::FieldSet(field_set),
            Self::Input(field) => NodeRef::Input(field),
        }
    }

    /// Pre-order search starting at this node.
    pub fn find_by_id(&self, id: &str) -> Option<NodeRef<'_>> {
        match self {
            Self::FieldSet(field_set) => field_set.find_by_id(id),
            Self::Input(field) => field.find_by_id(id).map(NodeRef::Input),
        }
    }

    /// Validity of the node or of its whole subtree.
    pub fn is_valid<H: Host + ?Sized>(&self, host: &H) -> Result<bool> {
        match self {
            Self::FieldSet(field_set) => field_set.is_all_valid(host),
            Self::Input(field) => field.is_valid(host),
        }
    }

    /// Updates validity markers on the node or its subtree.
    pub fn validate<H: Host + ?Sized>(&self, host: &mut H) -> Result<()> {
        match self {
            Self::FieldSet(field_set) => field_set.validate_all(host),
            Self::Input(field) => field.validate(host).map(drop),
        }
    }

    /// Shows the node and its subtree.
    pub fn render<H: Host + ?Sized>(&self, host: &mut H) -> Result<()> {
        match self {
            Self::FieldSet(field_set) => field_set.render(host),
            Self::Input(field) => field.render(host),
        }
    }

    /// Hides the node and its subtree.
    pub fn unmount<H: Host + ?Sized>(&self, host: &mut H) -> Result<()> {
        match self {
            Self::FieldSet(field_set) => field_set.unmount(host),
            Self::Input(field) => field.unmount(host),
        }
    }

    /// Whether the node itself is showing.
    pub fn is_mounted<H: Host + ?Sized>(&self, host: &H) -> Result<bool> {
        match self {
            Self::FieldSet(field_set) => field_set.is_mounted(host),
            Self::Input(field) => field.is_mounted(host),
        }
    }

    fn collect_fields<'a>(&'a self, out: &mut Vec<&'a InputField>) {
        match self {
            Self::FieldSet(field_set) => field_set.composite().collect_fields(out),
            Self::Input(field) => out.push(field),
        }
    }
}

impl Composite {
    fn collect_fields<'a>(&'a self, out: &mut Vec<&'a InputField>) {
        for child in &self.children {
            child.collect_fields(out);
        }
    }
}

/// Any node of the tree, borrowed. Returned by lookups.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Form(&'a Form),
    FieldSet(&'a FieldSet),
    Input(&'a InputField),
}

impl<'a> NodeRef<'a> {
    /// The node id.
    pub fn id(&self) -> &'a str {
        match *self {
            Self::Form(form) => form.id(),
            Self::FieldSet(field_set) => field_set.id(),
            Self::Input(field) => field.id(),
        }
    }

    /// The node's own element.
    pub fn element(&self) -> ElementId {
        match *self {
            Self::Form(form) => form.element(),
            Self::FieldSet(field_set) => field_set.element(),
            Self::Input(field) => field.element(),
        }
    }

    pub fn as_form(self) -> Option<&'a Form> {
        match self {
            Self::Form(form) => Some(form),
            _ => None,
        }
    }

    pub fn as_field_set(self) -> Option<&'a FieldSet> {
        match self {
            Self::FieldSet(field_set) => Some(field_set),
            _ => None,
        }
    }

    pub fn as_input(self) -> Option<&'a InputField> {
        match self {
            Self::Input(field) => Some(field),
            _ => None,
        }
    }
}

/// Operations shared by container nodes.
///
/// Implementors only expose their [`Composite`]; traversal, construction of
/// children and visibility handling are provided.
pub trait Container {
    /// Shared container state.
    fn composite(&self) -> &Composite;

    /// Shared container state, mutably.
    fn composite_mut(&mut self) -> &mut Composite;

    /// Borrowed view of this container.
    fn as_node_ref(&self) -> NodeRef<'_>;

    /// The container id.
    fn id(&self) -> &str {
        self.composite().id()
    }

    /// The container element.
    fn element(&self) -> ElementId {
        self.composite().element()
    }

    /// Children in insertion order.
    fn children(&self) -> &[Node] {
        self.composite().children()
    }

    /// Creates a field set under this container and returns it for further nesting.
    ///
    /// Ids are not checked for uniqueness.
    fn add_field_set<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        id: &str,
        class_name: &str,
    ) -> Result<&mut FieldSet> {
        let composite = self.composite_mut();
        let settings = Arc::clone(&composite.settings);
        let field_set = FieldSet::mount(host, composite.element, id, class_name, settings)?;
        composite.children.push(Node::FieldSet(field_set));
        let Some(Node::FieldSet(field_set)) = composite.children.last_mut() else {
            unreachable!("a field set was just pushed");
        };
        Ok(field_set)
    }

    /// Creates an input field under this container.
    fn add_input_field<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        spec: InputFieldSpec,
    ) -> Result<&mut InputField> {
        let composite = self.composite_mut();
        let settings = Arc::clone(&composite.settings);
        let field = InputField::mount(host, composite.element, spec, settings)?;
        composite.children.push(Node::Input(field));
        let Some(Node::Input(field)) = composite.children.last_mut() else {
            unreachable!("an input field was just pushed");
        };
        Ok(field)
    }

    /// Pre-order search: this container first, then each child in order.
    ///
    /// With duplicate ids the first node encountered wins.
    fn find_by_id(&self, id: &str) -> Option<NodeRef<'_>> {
        if self.id() == id {
            return Some(self.as_node_ref());
        }
        self.children()
            .iter()
            .find_map(|child| child.find_by_id(id))
    }

    /// Input fields of the subtree in pre-order.
    fn fields(&self) -> Vec<&InputField> {
        let mut out = Vec::new();
        self.composite().collect_fields(&mut out);
        out
    }

    /// Updates validity markers on every field of the subtree.
    fn validate_all<H: Host + ?Sized>(&self, host: &mut H) -> Result<()> {
        for child in self.children() {
            child.validate(host)?;
        }
        Ok(())
    }

    /// Whether every child is valid, recursing into field sets.
    ///
    /// Validity is memoized by id among the direct children of this container, so a
    /// later sibling sharing an id with an earlier one reuses the earlier result
    /// instead of being checked itself.
    fn is_all_valid<H: Host + ?Sized>(&self, host: &H) -> Result<bool> {
        let mut memo: HashMap<&str, bool> = HashMap::new();
        let mut all_valid = true;
        for child in self.children() {
            let valid = match memo.get(child.id()) {
                Some(&valid) => {
                    debug!(id = child.id(), valid, "duplicate id, reusing validity");
                    valid
                }
                None => {
                    let valid = child.is_valid(host)?;
                    memo.insert(child.id(), valid);
                    valid
                }
            };
            all_valid &= valid;
        }
        Ok(all_valid)
    }

    /// Shows this container, then each child in insertion order.
    fn render<H: Host + ?Sized>(&self, host: &mut H) -> Result<()> {
        host.show(self.element())?;
        for child in self.children() {
            child.render(host)?;
        }
        debug!(id = self.id(), "rendered");
        Ok(())
    }

    /// Hides every child first, then this container.
    fn unmount<H: Host + ?Sized>(&self, host: &mut H) -> Result<()> {
        for child in self.children() {
            child.unmount(host)?;
        }
        host.hide(self.element())?;
        debug!(id = self.id(), "unmounted");
        Ok(())
    }

    /// Whether this container is showing.
    fn is_mounted<H: Host + ?Sized>(&self, host: &H) -> Result<bool> {
        Ok(host.is_displayed(self.element())?)
    }
}
