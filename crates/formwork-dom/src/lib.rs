//! # formwork-dom
//!
//! The primitive UI operations the form tree is built on.
//!
//! This crate provides:
//! - The [`Host`] trait: element creation, tree mutation, inline style, attributes,
//!   class list, input values and event listeners
//! - [`Document`], an in-memory host for headless use and tests
//! - HTML serialization of a document subtree
//!
//! ## Quick Start
//!
//! ```rust
//! use formwork_dom::{Document, Host};
//!
//! let mut doc = Document::new();
//! let input = doc.create_element("input");
//! doc.set_attribute(input, "type", "email").unwrap();
//! doc.append_child(doc.body(), input).unwrap();
//! doc.hide(input).unwrap();
//!
//! assert!(!doc.is_displayed(input).unwrap());
//! assert_eq!(
//!     doc.to_html(input).unwrap(),
//!     r#"<input type="email" style="display: none;">"#,
//! );
//! ```

mod document;
mod error;
mod host;
mod html;

pub use document::Document;
pub use error::{DomError, Result};
pub use host::{ElementId, Event, Host, Listener};
pub use html::html_escape;
