//! Integration tests for the form tree.
//!
//! These tests drive a complete tree against the in-memory document and check:
//! - construction state and placement of elements
//! - render/unmount visibility across the subtree
//! - lookup order and validity aggregation with duplicate ids

use formwork_dom::{Document, ElementId, Host};
use formwork_forms::{
    Container, Field, Form, FormConfig, FormError, FormOptions, InputFieldSpec, InputKind, Node,
};

fn signup(doc: &mut Document) -> Form {
    let mut form = Form::new(
        doc,
        FormOptions::new("signup")
            .action("/signup")
            .method("post")
            .class_name("card"),
    )
    .unwrap();

    let account = form.add_field_set(doc, "account", "group").unwrap();
    account
        .add_input_field(
            doc,
            InputFieldSpec::new(InputKind::Email, "email")
                .required()
                .label("E-mail"),
        )
        .unwrap();
    account
        .add_input_field(doc, InputFieldSpec::new(InputKind::Password, "password"))
        .unwrap();
    let contact = account.add_field_set(doc, "contact", "").unwrap();
    contact
        .add_input_field(doc, InputFieldSpec::new(InputKind::Tel, "phone"))
        .unwrap();

    form.add_input_field(doc, InputFieldSpec::new(InputKind::Url, "homepage"))
        .unwrap();
    form.add_input_field(doc, InputFieldSpec::new(InputKind::Submit, "send"))
        .unwrap();
    form
}

fn fill(form: &Form, doc: &mut Document, values: &[(&str, &str)]) {
    for (id, value) in values {
        let field = form.find_by_id(id).and_then(|n| n.as_input()).unwrap();
        field.set_value(doc, value).unwrap();
    }
}

fn all_mounted(form: &Form, doc: &Document) -> Vec<bool> {
    fn walk(nodes: &[Node], doc: &Document, out: &mut Vec<bool>) {
        for node in nodes {
            out.push(node.is_mounted(doc).unwrap());
            if let Node::FieldSet(field_set) = node {
                walk(field_set.children(), doc, out);
            }
        }
    }
    let mut out = vec![form.is_mounted(doc).unwrap()];
    walk(form.children(), doc, &mut out);
    out
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_form_attaches_to_body() {
    let mut doc = Document::new();
    let form = signup(&mut doc);
    assert_eq!(doc.children(doc.body()).unwrap(), &[form.element()]);
    assert_eq!(doc.tag(form.element()).unwrap(), "form");
    assert_eq!(
        doc.attribute(form.element(), "action").unwrap(),
        Some("/signup".into())
    );
    assert_eq!(
        doc.attribute(form.element(), "method").unwrap(),
        Some("post".into())
    );
    assert_eq!(form.action(), "/signup");
    assert_eq!(form.method(), "post");
}

#[test]
fn test_form_attaches_to_target() {
    let mut doc = Document::new();
    let body = doc.body();
    let host_el = doc.create_element("section");
    doc.append_child(body, host_el).unwrap();
    let form = Form::new(&mut doc, FormOptions::new("f").target(host_el)).unwrap();
    assert_eq!(doc.children(host_el).unwrap(), &[form.element()]);
    assert_eq!(form.composite().parent(), host_el);
}

#[test]
fn test_children_in_insertion_order() {
    let mut doc = Document::new();
    let form = signup(&mut doc);
    let ids: Vec<&str> = form.children().iter().map(Node::id).collect();
    assert_eq!(ids, ["account", "homepage", "send"]);

    let dom_children: Vec<ElementId> = doc.children(form.element()).unwrap().to_vec();
    let homepage_wrapper = form
        .find_by_id("homepage")
        .and_then(|n| n.as_input())
        .and_then(|f| f.wrapper())
        .unwrap();
    let send = form.find_by_id("send").unwrap().element();
    assert_eq!(
        dom_children,
        [form.children()[0].element(), homepage_wrapper, send]
    );
}

#[test]
fn test_fresh_tree_is_hidden() {
    let mut doc = Document::new();
    let form = signup(&mut doc);
    assert!(all_mounted(&form, &doc).iter().all(|mounted| !mounted));
}

#[test]
fn test_name_defaults_to_id() {
    let mut doc = Document::new();
    let mut form = Form::new(&mut doc, FormOptions::new("f")).unwrap();
    let named = form
        .add_input_field(&mut doc, InputFieldSpec::new("email", "e1").name("contact"))
        .unwrap()
        .element();
    let unnamed = form
        .add_input_field(&mut doc, InputFieldSpec::new("email", "e2"))
        .unwrap()
        .element();
    assert_eq!(doc.attribute(named, "name").unwrap(), Some("contact".into()));
    assert_eq!(doc.attribute(unnamed, "name").unwrap(), Some("e2".into()));
}

#[test]
fn test_missing_pattern_leaves_tree_unchanged() {
    let mut doc = Document::new();
    let mut form = Form::new(&mut doc, FormOptions::new("f")).unwrap();
    let err = form
        .add_input_field(&mut doc, InputFieldSpec::new("text", "nick"))
        .unwrap_err();
    assert!(matches!(err, FormError::MissingPattern { .. }));
    assert!(form.children().is_empty());
    assert!(doc.children(form.element()).unwrap().is_empty());
}

#[test]
fn test_invalid_config_pattern() {
    let mut doc = Document::new();
    let err = Form::with_config(
        &mut doc,
        FormOptions::new("f"),
        &FormConfig::new().pattern("tel", "[0-9"),
    )
    .unwrap_err();
    assert!(matches!(err, FormError::InvalidPattern(_)));
}

// =============================================================================
// Render / unmount
// =============================================================================

#[test]
fn test_render_shows_subtree() {
    let mut doc = Document::new();
    let form = signup(&mut doc);
    form.render(&mut doc).unwrap();
    assert!(all_mounted(&form, &doc).iter().all(|mounted| *mounted));

    let phone = form.find_by_id("phone").unwrap().element();
    assert!(doc.is_visible(phone).unwrap());
}

#[test]
fn test_render_then_unmount_hides_subtree() {
    let mut doc = Document::new();
    let form = signup(&mut doc);
    form.render(&mut doc).unwrap();
    form.unmount(&mut doc).unwrap();
    assert!(all_mounted(&form, &doc).iter().all(|mounted| !mounted));

    form.render(&mut doc).unwrap();
    assert!(all_mounted(&form, &doc).iter().all(|mounted| *mounted));
}

#[test]
fn test_unmount_nested_field_set_only() {
    let mut doc = Document::new();
    let form = signup(&mut doc);
    form.render(&mut doc).unwrap();

    let account = form.find_by_id("account").and_then(|n| n.as_field_set()).unwrap();
    account.unmount(&mut doc).unwrap();
    assert!(form.is_mounted(&doc).unwrap());
    assert!(!account.is_mounted(&doc).unwrap());
    let phone = form.find_by_id("phone").and_then(|n| n.as_input()).unwrap();
    assert!(!phone.is_mounted(&doc).unwrap());
    let homepage = form.find_by_id("homepage").and_then(|n| n.as_input()).unwrap();
    assert!(homepage.is_mounted(&doc).unwrap());
}

#[test]
fn test_rendered_markup() {
    let mut doc = Document::new();
    let mut form = Form::new(&mut doc, FormOptions::new("f").method("get")).unwrap();
    form.add_input_field(
        &mut doc,
        InputFieldSpec::new("email", "mail").label("Mail"),
    )
    .unwrap();
    form.render(&mut doc).unwrap();
    assert_eq!(
        doc.to_html(form.element()).unwrap(),
        concat!(
            r#"<form id="f" method="get">"#,
            r#"<div class="input-field">"#,
            r#"<input type="email" id="mail" name="mail">"#,
            r#"<label for="mail">Mail</label>"#,
            "</div></form>"
        )
    );
}

// =============================================================================
// Lookup
// =============================================================================

#[test]
fn test_find_by_id_self_and_missing() {
    let mut doc = Document::new();
    let form = signup(&mut doc);
    assert!(form.find_by_id("signup").and_then(|n| n.as_form()).is_some());
    assert!(form.find_by_id("contact").and_then(|n| n.as_field_set()).is_some());
    assert!(form.find_by_id("nope").is_none());
}

#[test]
fn test_find_by_id_returns_leftmost_preorder_match() {
    let mut doc = Document::new();
    let mut form = Form::new(&mut doc, FormOptions::new("f")).unwrap();
    let nested = form
        .add_field_set(&mut doc, "a", "")
        .unwrap()
        .add_input_field(&mut doc, InputFieldSpec::new("tel", "x"))
        .unwrap()
        .element();
    let top = form
        .add_input_field(&mut doc, InputFieldSpec::new("tel", "x"))
        .unwrap()
        .element();

    let found = form.find_by_id("x").unwrap();
    assert_eq!(found.element(), nested);
    assert_ne!(found.element(), top);
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_is_all_valid() {
    let mut doc = Document::new();
    let form = signup(&mut doc);
    fill(
        &form,
        &mut doc,
        &[
            ("email", "a@b.co"),
            ("password", "abcdefgh"),
            ("phone", "01234567890"),
            ("homepage", "https://example"),
        ],
    );
    assert!(form.is_all_valid(&doc).unwrap());

    fill(&form, &mut doc, &[("phone", "123")]);
    assert!(!form.is_all_valid(&doc).unwrap());
    let contact = form.find_by_id("contact").and_then(|n| n.as_field_set()).unwrap();
    assert!(!contact.is_all_valid(&doc).unwrap());
    let account = form.find_by_id("account").and_then(|n| n.as_field_set()).unwrap();
    assert!(!account.is_all_valid(&doc).unwrap());
}

#[test]
fn test_validate_all_sets_markers() {
    let mut doc = Document::new();
    let form = signup(&mut doc);
    fill(
        &form,
        &mut doc,
        &[
            ("email", "a@b"),
            ("password", "abcdefgh"),
            ("phone", "123"),
            ("homepage", "https://example"),
        ],
    );
    form.validate_all(&mut doc).unwrap();

    let marker = |id: &str, class: &str| {
        let el = form.find_by_id(id).unwrap().element();
        doc.has_class(el, class).unwrap()
    };
    assert!(marker("email", "invalid") && !marker("email", "valid"));
    assert!(marker("password", "valid") && !marker("password", "invalid"));
    assert!(marker("phone", "invalid"));
    assert!(marker("homepage", "valid"));
    assert!(marker("send", "valid"));
    assert!(!marker("account", "valid") && !marker("account", "invalid"));
}

#[test]
fn test_custom_markers() {
    let mut doc = Document::new();
    let mut form = Form::with_config(
        &mut doc,
        FormOptions::new("f"),
        &FormConfig::new().markers("is-valid", "is-invalid"),
    )
    .unwrap();
    let el = form
        .add_input_field(&mut doc, InputFieldSpec::new("tel", "phone"))
        .unwrap()
        .element();
    form.validate_all(&mut doc).unwrap();
    assert!(doc.has_class(el, "is-invalid").unwrap());
    assert!(!doc.has_class(el, "invalid").unwrap());
}

#[test]
fn test_submit_always_valid() {
    let mut doc = Document::new();
    let mut form = Form::new(&mut doc, FormOptions::new("f")).unwrap();
    form.add_input_field(&mut doc, InputFieldSpec::new("submit", "go"))
        .unwrap();
    assert!(form.is_all_valid(&doc).unwrap());
}

#[test]
fn test_empty_form_is_valid() {
    let mut doc = Document::new();
    let form = Form::new(&mut doc, FormOptions::new("f")).unwrap();
    assert!(form.is_all_valid(&doc).unwrap());
}

#[test]
fn test_duplicate_sibling_reuses_first_validity() {
    // The second "x" is never checked: its sibling with the same id was valid.
    let mut doc = Document::new();
    let mut form = Form::new(&mut doc, FormOptions::new("f")).unwrap();
    form.add_input_field(&mut doc, InputFieldSpec::new("tel", "x"))
        .unwrap()
        .set_value(&mut doc, "01234567890")
        .unwrap();
    form.add_input_field(&mut doc, InputFieldSpec::new("tel", "x"))
        .unwrap()
        .set_value(&mut doc, "bad")
        .unwrap();

    assert!(form.is_all_valid(&doc).unwrap());
    let second = &form.children()[1];
    assert!(!second.is_valid(&doc).unwrap());
}

#[test]
fn test_duplicate_id_at_different_depths_is_checked() {
    let mut doc = Document::new();
    let mut form = Form::new(&mut doc, FormOptions::new("f")).unwrap();
    form.add_field_set(&mut doc, "a", "")
        .unwrap()
        .add_input_field(&mut doc, InputFieldSpec::new("tel", "x"))
        .unwrap()
        .set_value(&mut doc, "01234567890")
        .unwrap();
    form.add_input_field(&mut doc, InputFieldSpec::new("tel", "x"))
        .unwrap()
        .set_value(&mut doc, "bad")
        .unwrap();

    assert!(!form.is_all_valid(&doc).unwrap());
}

#[test]
fn test_values() {
    let mut doc = Document::new();
    let form = signup(&mut doc);
    fill(&form, &mut doc, &[("email", "a@b.co"), ("phone", "01234567890")]);
    let values = form.values(&doc).unwrap();
    assert_eq!(values.len(), 5);
    assert_eq!(values["email"], "a@b.co");
    assert_eq!(values["phone"], "01234567890");
    assert_eq!(values["password"], "");
}
