//! Error types for host operations.

use thiserror::Error;

use crate::ElementId;

/// Errors raised by a [`Host`](crate::Host) implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// The handle does not refer to an element of this host.
    #[error("unknown element: {0}")]
    UnknownElement(ElementId),

    /// The element is not a child of the given parent.
    #[error("element {child} is not a child of {parent}")]
    NotAChild { parent: ElementId, child: ElementId },

    /// Appending would make an element its own ancestor.
    #[error("cannot append {child} under its own descendant {parent}")]
    HierarchyRequest { parent: ElementId, child: ElementId },
}

/// Result type alias for host operations.
pub type Result<T> = std::result::Result<T, DomError>;
