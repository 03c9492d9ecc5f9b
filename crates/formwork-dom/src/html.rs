//! HTML serialization of a [`Document`] subtree.

use crate::document::Document;
use crate::error::Result;
use crate::host::ElementId;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

impl Document {
    /// Serializes `el` and its descendants.
    ///
    /// Attributes come out in insertion order, followed by `class`, `style` and a
    /// non-empty `value`.
    pub fn to_html(&self, el: ElementId) -> Result<String> {
        let mut out = String::new();
        self.write_html(el, &mut out)?;
        Ok(out)
    }

    fn write_html(&self, el: ElementId, out: &mut String) -> Result<()> {
        let data = self.get(el)?;
        out.push('<');
        out.push_str(&data.tag);

        for (name, value) in &data.attributes {
            push_attr(out, name, value);
        }
        if !data.classes.is_empty() {
            push_attr(out, "class", &data.classes.join(" "));
        }
        if !data.style.is_empty() {
            let style = data
                .style
                .iter()
                .map(|(p, v)| format!("{p}: {v};"))
                .collect::<Vec<_>>()
                .join(" ");
            push_attr(out, "style", &style);
        }
        if !data.value.is_empty() {
            push_attr(out, "value", &data.value);
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&data.tag.as_str()) {
            return Ok(());
        }

        if let Some(text) = &data.text {
            out.push_str(&html_escape(text));
        }
        for child in &data.children {
            self.write_html(*child, out)?;
        }
        out.push_str("</");
        out.push_str(&data.tag);
        out.push('>');
        Ok(())
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&html_escape(value));
    out.push('"');
}
