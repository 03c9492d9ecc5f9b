//! Grouping containers.

use std::sync::Arc;

use formwork_dom::{ElementId, Host};
use tracing::debug;

use crate::composite::{Composite, Container, NodeRef};
use crate::config::Settings;
use crate::error::Result;

/// A `<div>` grouping fields and nested field sets.
///
/// Created through [`Container::add_field_set`].
#[derive(Debug)]
pub struct FieldSet {
    composite: Composite,
}

impl FieldSet {
    pub(crate) fn mount<H: Host + ?Sized>(
        host: &mut H,
        parent: ElementId,
        id: &str,
        class_name: &str,
        settings: Arc<Settings>,
    ) -> Result<Self> {
        let composite = Composite::create(host, "div", parent, id, class_name, settings)?;
        host.append_child(parent, composite.element())?;
        debug!(id, "mounted field set");
        Ok(Self { composite })
    }
}

impl Container for FieldSet {
    fn composite(&self) -> &Composite {
        &self.composite
    }

    fn composite_mut(&mut self) -> &mut Composite {
        &mut self.composite
    }

    fn as_node_ref(&self) -> NodeRef<'_> {
        NodeRef::FieldSet(self)
    }
}
