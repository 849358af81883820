//! JSON document trees.
//!
//! Documents are nested node objects tagged by `type`:
//!
//! ```json
//! {"type": "document", "children": [
//!   {"type": "element", "tag": "section", "attrs": {"id": "intro"}, "children": [
//!     {"type": "element", "tag": "h", "attrs": {"max": 3}, "children": [
//!       {"type": "text", "text": "Introduction"}
//!     ]}
//!   ]}
//! ]}
//! ```
//!
//! Elements whose tag matches the marker tag become [`SmartHeading`] components. Their `min`
//! and `max` attributes are consumed as bounds; all other attributes are forwarded.

use crate::degree::{HeadingDegree, ResolutionBounds};
use crate::document::Document;
use crate::error::{Error, Result};
use crate::formats::Format;
use crate::heading::SmartHeading;
use indextree::NodeId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
/// One node of the JSON tree schema.
pub enum JsonNode {
    /// Document root; only valid at the top level.
    Document {
        #[serde(default)]
        /// Top-level nodes.
        children: Vec<JsonNode>,
    },
    /// Element with a tag, attributes and children.
    Element {
        /// Tag name.
        tag: String,
        #[serde(default)]
        /// Attribute values by name, in source order.
        attrs: Map<String, Value>,
        #[serde(default)]
        /// Child nodes in order.
        children: Vec<JsonNode>,
    },
    /// Text content.
    Text {
        /// Raw text.
        text: String,
    },
}

/// Attribute value as written, forwarded as text.
///
/// Strings pass through unchanged, other scalars use their JSON spelling and `null` becomes
/// an empty value.
fn attr_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn attr_degree(name: &str, value: Value) -> Result<HeadingDegree> {
    let number = match &value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    };
    match number {
        Some(number) => HeadingDegree::try_from(number),
        None => Err(Error::InvalidAttribute {
            name: name.to_string(),
            value: attr_text(value),
        }),
    }
}

/// Reads JSON node trees, turning marker elements into smart headings.
pub struct JsonFormat {
    /// Tag that marks a generic heading.
    pub marker_tag: String,
    /// Bounds for markers that leave `min` or `max` unset.
    pub defaults: ResolutionBounds,
}

impl Default for JsonFormat {
    fn default() -> Self {
        Self {
            marker_tag: "h".to_string(),
            defaults: ResolutionBounds::default(),
        }
    }
}

impl JsonFormat {
    fn build(&self, document: &mut Document, parent: NodeId, node: JsonNode) -> Result<()> {
        match node {
            JsonNode::Document { .. } => {
                return Err(Error::Malformed(
                    "a document node can only appear at the top level".to_string(),
                ))
            }
            JsonNode::Text { text } => {
                document.append_text(parent, text);
            }
            JsonNode::Element {
                tag,
                attrs,
                children,
            } => {
                let id = if tag.eq_ignore_ascii_case(&self.marker_tag) {
                    let heading = self.marker(attrs)?;
                    document.append_heading(parent, heading)
                } else {
                    let attrs = attrs
                        .into_iter()
                        .map(|(name, value)| (name, attr_text(value)))
                        .collect();
                    document.append_element(parent, tag, attrs)
                };
                for child in children {
                    self.build(document, id, child)?;
                }
            }
        }
        Ok(())
    }

    fn marker(&self, attrs: Map<String, Value>) -> Result<SmartHeading> {
        let mut min = self.defaults.min();
        let mut max = self.defaults.max();
        let mut forwarded = Vec::with_capacity(attrs.len());

        for (name, value) in attrs {
            match name.as_str() {
                "min" => min = attr_degree(&name, value)?,
                "max" => max = attr_degree(&name, value)?,
                _ => forwarded.push((name, attr_text(value))),
            }
        }

        Ok(SmartHeading::new(ResolutionBounds::new(min, max), forwarded))
    }
}

impl Format for JsonFormat {
    fn file_extension(&self) -> &'static str {
        "json"
    }

    fn parse(&self, source: &str) -> Result<Document> {
        let tree: JsonNode = serde_json::from_str(source)?;
        let mut document = Document::new();
        let root = document.root();

        match tree {
            JsonNode::Document { children } => {
                for child in children {
                    self.build(&mut document, root, child)?;
                }
            }
            other => self.build(&mut document, root, other)?,
        }

        Ok(document)
    }
}

#[cfg(test)]
#[path = "../tests/json.rs"]
mod tests;
