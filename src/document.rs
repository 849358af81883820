//! Arena-backed host document tree.
//!
//! Nodes live in an [`indextree::Arena`] and are addressed by [`NodeId`]. The tree plays the
//! role of the rendering host: it owns every node, including the [`SmartHeading`] components
//! attached to generic heading markers, and answers the [`DocumentTree`] queries used during
//! resolution.

use crate::degree::HeadingDegree;
use crate::diagnostics::DiagnosticSink;
use crate::heading::SmartHeading;
use crate::tree::DocumentTree;
use indextree::{Arena, NodeId};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// What a node in the document represents.
pub enum NodeKind {
    #[default]
    /// The document root.
    Document,
    /// An ordinary element such as `section` or `h2`.
    Element {
        /// Tag name as written in the source.
        tag: String,
        /// Attributes in source order.
        attrs: Vec<(String, String)>,
    },
    /// Character data.
    Text {
        /// Raw, unescaped text.
        text: String,
    },
    /// A generic heading marker.
    Heading(SmartHeading),
}

impl NodeKind {
    #[must_use]
    /// Whether this node counts as a heading: a marker, or an `h1`..`h6` element.
    pub fn is_heading(&self) -> bool {
        match self {
            Self::Heading(_) => true,
            Self::Element { tag, .. } => HeadingDegree::from_tag(tag).is_some(),
            Self::Document | Self::Text { .. } => false,
        }
    }

    #[must_use]
    /// Whether this node appears in an element-children collection.
    pub const fn is_element(&self) -> bool {
        matches!(self, Self::Element { .. } | Self::Heading(_))
    }
}

#[derive(Clone, Debug)]
/// A tree of document nodes rooted at a [`NodeKind::Document`].
pub struct Document {
    arena: Arena<NodeKind>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    #[must_use]
    /// Create a document holding only its root.
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.new_node(NodeKind::Document);
        Self { arena, root }
    }

    #[must_use]
    /// The root node.
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Append a node of any kind as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let node = self.arena.new_node(kind);
        parent.append(node, &mut self.arena);
        node
    }

    /// Append an element as the last child of `parent`.
    pub fn append_element(
        &mut self,
        parent: NodeId,
        tag: impl Into<String>,
        attrs: Vec<(String, String)>,
    ) -> NodeId {
        self.append(
            parent,
            NodeKind::Element {
                tag: tag.into(),
                attrs,
            },
        )
    }

    /// Append a text node as the last child of `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        self.append(parent, NodeKind::Text { text: text.into() })
    }

    /// Append a generic heading marker as the last child of `parent`.
    pub fn append_heading(&mut self, parent: NodeId, heading: SmartHeading) -> NodeId {
        self.append(parent, NodeKind::Heading(heading))
    }

    #[must_use]
    /// The node's kind, or `None` for an unknown or removed id.
    pub fn get(&self, node: NodeId) -> Option<&NodeKind> {
        self.arena
            .get(node)
            .filter(|n| !n.is_removed())
            .map(indextree::Node::get)
    }

    /// Children of `node` in order.
    pub fn children(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        node.children(&self.arena)
    }

    #[must_use]
    /// Every heading marker in document order.
    pub fn headings(&self) -> Vec<NodeId> {
        self.root
            .descendants(&self.arena)
            .filter(|&id| matches!(self.get(id), Some(NodeKind::Heading(_))))
            .collect()
    }

    #[must_use]
    /// The component attached to a heading marker.
    pub fn heading(&self, node: NodeId) -> Option<&SmartHeading> {
        match self.get(node) {
            Some(NodeKind::Heading(heading)) => Some(heading),
            _ => None,
        }
    }

    /// Mutable access to the component attached to a heading marker.
    pub fn heading_mut(&mut self, node: NodeId) -> Option<&mut SmartHeading> {
        match self.arena.get_mut(node).map(indextree::Node::get_mut) {
            Some(NodeKind::Heading(heading)) => Some(heading),
            _ => None,
        }
    }

    /// Mount every heading marker, returning how many changed their rendered degree.
    ///
    /// Degrees only depend on which nodes are headings, never on a heading's current degree,
    /// so mount order does not affect the outcome.
    pub fn mount_headings<S: DiagnosticSink + ?Sized>(&mut self, sink: &mut S) -> usize {
        let mut rerenders: Vec<(NodeId, HeadingDegree)> = Vec::new();
        for node in self.headings() {
            let Some(mut heading) = self.heading(node).cloned() else {
                continue;
            };
            heading.mount(&*self, node, sink, &mut rerenders);
            if let Some(slot) = self.heading_mut(node) {
                *slot = heading;
            }
        }
        log::debug!("mounted headings, {} re-rendered", rerenders.len());
        rerenders.len()
    }
}

impl DocumentTree for Document {
    type Node = NodeId;

    fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        self.arena.get(node)?.parent()
    }

    fn first_child_is_heading(&self, node: NodeId) -> bool {
        node.children(&self.arena)
            .filter_map(|child| self.get(child))
            .find(|kind| kind.is_element())
            .is_some_and(NodeKind::is_heading)
    }
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
