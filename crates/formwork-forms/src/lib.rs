//! # formwork-forms
//!
//! A composite form tree: a [`Form`] owns nested [`FieldSet`]s and
//! [`InputField`]s, each backed by elements of a [`formwork_dom::Host`].
//!
//! This crate provides:
//! - Container nodes ([`Form`], [`FieldSet`]) sharing the [`Container`] operations
//! - Leaf fields sharing the [`Field`] operations, with per-kind default patterns
//! - Recursive validation, validity aggregation and mount/unmount
//! - JSON layouts and configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use formwork_dom::Document;
//! use formwork_forms::{Container, Field, Form, FormOptions, InputFieldSpec, InputKind};
//!
//! let mut doc = Document::new();
//! let mut form = Form::new(
//!     &mut doc,
//!     FormOptions::new("signup").action("/signup").method("post"),
//! ).unwrap();
//!
//! let account = form.add_field_set(&mut doc, "account", "group").unwrap();
//! let email = account
//!     .add_input_field(
//!         &mut doc,
//!         InputFieldSpec::new(InputKind::Email, "email").required().label("E-mail"),
//!     )
//!     .unwrap();
//! email.set_value(&mut doc, "a@b.co").unwrap();
//! form.add_input_field(&mut doc, InputFieldSpec::new(InputKind::Submit, "send"))
//!     .unwrap();
//!
//! form.render(&mut doc).unwrap();
//! form.validate_all(&mut doc).unwrap();
//! assert!(form.is_all_valid(&doc).unwrap());
//! ```
//!
//! ## Lookup
//!
//! [`Container::find_by_id`] walks the tree in pre-order and returns the first
//! match, so with duplicate ids the shallowest, leftmost node wins:
//!
//! ```rust
//! use formwork_dom::Document;
//! use formwork_forms::{Container, Field, Form, FormOptions, InputFieldSpec};
//!
//! let mut doc = Document::new();
//! let mut form = Form::new(&mut doc, FormOptions::new("f")).unwrap();
//! let first = form
//!     .add_field_set(&mut doc, "a", "")
//!     .unwrap()
//!     .add_input_field(&mut doc, InputFieldSpec::new("tel", "x"))
//!     .unwrap()
//!     .element();
//! form.add_input_field(&mut doc, InputFieldSpec::new("tel", "x")).unwrap();
//!
//! assert_eq!(form.find_by_id("x").unwrap().element(), first);
//! ```

mod composite;
mod config;
mod error;
pub mod fields;
mod fieldset;
mod form;
mod layout;
pub mod validation;

pub use composite::{Composite, Container, Node, NodeRef};
pub use config::FormConfig;
pub use error::{FormError, Result};
pub use fields::{Field, FieldBase, InputField, InputFieldSpec, InputKind};
pub use fieldset::FieldSet;
pub use form::{Form, FormOptions};
pub use layout::{FieldSetLayout, Layout, LayoutNode};
