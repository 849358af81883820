//! The read-only view of a host document that degree resolution needs.
//!
//! Resolution only ever asks two questions of a tree, so any node representation (an arena, a
//! DOM binding, a parsed markup tree) can take part by answering them.

/// Parent lookup and first-child heading inspection over a host tree.
pub trait DocumentTree {
    /// Handle used to address a node; cheap to copy.
    type Node: Copy + Eq;

    /// The node's parent, or `None` at the root.
    fn parent_of(&self, node: Self::Node) -> Option<Self::Node>;

    /// Whether the first element child of `node` is a heading marker.
    ///
    /// Only that one child is considered, never the rest of the child set.
    fn first_child_is_heading(&self, node: Self::Node) -> bool;
}
