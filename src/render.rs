//! Serialise a resolved document, emitting each heading marker under its degree's tag.

use crate::document::{Document, NodeKind};
use clap::ValueEnum;
use indextree::NodeId;
use serde_json::{json, Map, Value};
use std::fmt::Write;
use std::path::PathBuf;

/// Elements that never take content or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
/// Serialisation used for resolved documents.
pub enum Output {
    /// HTML markup.
    Html,
    /// JSON node tree.
    Json,
}

/// Render a batch of loaded documents the way the command line prints them.
///
/// A single document renders on its own. Several documents render as HTML fragments each
/// preceded by an `<!-- path -->` comment, or as a JSON array of `{"path", "document"}`
/// objects.
///
/// # Errors
///
/// Returns an error if JSON serialisation fails.
pub fn render_documents(
    documents: &[(PathBuf, Document)],
    output: Output,
) -> serde_json::Result<String> {
    match output {
        Output::Html => {
            if let [(_, document)] = documents {
                return Ok(to_html(document));
            }
            let mut out = String::new();
            for (index, (path, document)) in documents.iter().enumerate() {
                if index > 0 {
                    out.push('\n');
                }
                let _ = writeln!(out, "<!-- {} -->", escape_comment(&path.display().to_string()));
                out.push_str(&to_html(document));
            }
            Ok(out)
        }
        Output::Json => {
            let value = if let [(_, document)] = documents {
                to_json(document)
            } else {
                documents
                    .iter()
                    .map(|(path, document)| {
                        json!({
                            "path": path.display().to_string(),
                            "document": to_json(document),
                        })
                    })
                    .collect()
            };
            serde_json::to_string_pretty(&value)
        }
    }
}

fn escape_comment(text: &str) -> String {
    text.replace("--", "- -")
}

/// Render the document as HTML markup.
#[must_use]
pub fn to_html(document: &Document) -> String {
    let mut out = String::new();
    for child in document.children(document.root()) {
        write_html(document, child, &mut out);
    }
    out
}

fn write_html(document: &Document, node: NodeId, out: &mut String) {
    let Some(kind) = document.get(node) else {
        return;
    };
    let (tag, attrs) = match kind {
        NodeKind::Document => {
            for child in document.children(node) {
                write_html(document, child, out);
            }
            return;
        }
        NodeKind::Text { text } => {
            out.push_str(&escape(text, false));
            return;
        }
        NodeKind::Element { tag, attrs } => (tag.as_str(), attrs),
        NodeKind::Heading(heading) => (heading.tag(), &heading.attributes),
    };

    out.push('<');
    out.push_str(tag);
    for (name, value) in attrs {
        if !is_valid_attribute_name(name) {
            log::warn!("dropping attribute {name:?} on <{tag}>: not a valid attribute name");
            continue;
        }
        let _ = write!(out, " {name}=\"{}\"", escape(value, true));
    }
    out.push('>');

    if VOID_ELEMENTS.iter().any(|void| void.eq_ignore_ascii_case(tag)) {
        return;
    }
    for child in document.children(node) {
        write_html(document, child, out);
    }
    let _ = write!(out, "</{tag}>");
}

fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '<' | '/' | '=')
        })
}

fn escape(text: &str, attribute: bool) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' if attribute => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the document back into the JSON node schema, markers becoming `hN` elements.
#[must_use]
pub fn to_json(document: &Document) -> Value {
    node_to_json(document, document.root())
}

fn node_to_json(document: &Document, node: NodeId) -> Value {
    let children: Vec<Value> = document
        .children(node)
        .map(|child| node_to_json(document, child))
        .collect();

    match document.get(node) {
        Some(NodeKind::Document) => json!({ "type": "document", "children": children }),
        Some(NodeKind::Text { text }) => json!({ "type": "text", "text": text }),
        Some(NodeKind::Element { tag, attrs }) => element_json(tag, attrs, children),
        Some(NodeKind::Heading(heading)) => element_json(heading.tag(), &heading.attributes, children),
        None => Value::Null,
    }
}

fn element_json(tag: &str, attrs: &[(String, String)], children: Vec<Value>) -> Value {
    let attrs: Map<String, Value> = attrs
        .iter()
        .map(|(name, value)| (name.clone(), Value::String(value.clone())))
        .collect();
    json!({
        "type": "element",
        "tag": tag,
        "attrs": attrs,
        "children": children,
    })
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;
