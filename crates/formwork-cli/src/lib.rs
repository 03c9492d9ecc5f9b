//! # formwork-cli
//!
//! Library side of the `formwork` binary: load a JSON layout, apply values,
//! validate, and report.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context};
use formwork_dom::Document;
use formwork_forms::{Container, Field, FormConfig, Layout, NodeRef};
use tracing::{debug, info};

/// What to do with a layout.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Layout file.
    pub layout: PathBuf,
    /// Configuration file replacing the layout's own `config`.
    pub config: Option<PathBuf>,
    /// `(id, value)` pairs applied before validation.
    pub values: Vec<(String, String)>,
    /// Show the tree before validating.
    pub render: bool,
}

/// Outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Serialized form element.
    pub markup: String,
    /// Every input in pre-order with its validity.
    pub fields: Vec<(String, bool)>,
    /// Aggregated validity of the form.
    pub all_valid: bool,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.markup)?;
        for (id, valid) in &self.fields {
            let state = if *valid { "valid" } else { "invalid" };
            writeln!(f, "{id}: {state}")?;
        }
        writeln!(f, "all valid: {}", self.all_valid)
    }
}

/// Parses an `id=value` assignment. The value may be empty or contain `=`.
pub fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((id, value)) if !id.is_empty() => Ok((id.to_string(), value.to_string())),
        _ => Err(format!("expected ID=VALUE, got '{raw}'")),
    }
}

/// Builds the form described by `options` and validates it.
pub fn run(options: &Options) -> anyhow::Result<Report> {
    let text = fs::read_to_string(&options.layout)
        .with_context(|| format!("reading layout {}", options.layout.display()))?;
    let mut layout = Layout::from_json_str(&text)
        .with_context(|| format!("loading layout {}", options.layout.display()))?;

    if let Some(path) = &options.config {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        layout.config = FormConfig::from_json_str(&text)
            .with_context(|| format!("loading config {}", path.display()))?;
    }

    let mut doc = Document::new();
    let form = layout.build(&mut doc)?;
    info!(id = form.id(), fields = form.fields().len(), "built form");

    for (id, value) in &options.values {
        let field = form
            .find_by_id(id)
            .and_then(NodeRef::as_input)
            .ok_or_else(|| anyhow!("no input field with id '{id}'"))?;
        field.set_value(&mut doc, value)?;
        debug!(id = %id, "applied value");
    }

    if options.render {
        form.render(&mut doc)?;
    }
    form.validate_all(&mut doc)?;

    let mut fields = Vec::new();
    for field in form.fields() {
        fields.push((field.id().to_string(), field.is_valid(&doc)?));
    }
    let all_valid = form.is_all_valid(&doc)?;
    info!(all_valid, "validated form");

    Ok(Report {
        markup: doc.to_html(form.element())?,
        fields,
        all_valid,
    })
}
