//! Upward traversal over the "uncle groups" of a node.
//!
//! The walker keeps a cursor that starts at the node's parent. Each step yields the cursor's
//! parent (the grandparent of the level below) and moves the cursor onto it, so the first node
//! produced is `parent(parent(start))` and every following node sits one generation higher.

use crate::tree::DocumentTree;
use std::iter::FusedIterator;

/// Iterator over the grandparent chain of a start node.
pub struct AncestorWalker<'t, T: DocumentTree + ?Sized> {
    tree: &'t T,
    cursor: Option<T::Node>,
}

impl<'t, T: DocumentTree + ?Sized> AncestorWalker<'t, T> {
    #[must_use]
    /// Begin walking from `start`.
    pub fn new(tree: &'t T, start: T::Node) -> Self {
        Self {
            tree,
            cursor: tree.parent_of(start),
        }
    }
}

impl<T: DocumentTree + ?Sized> Iterator for AncestorWalker<'_, T> {
    type Item = T::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor?;
        let grandparent = self.tree.parent_of(current);
        self.cursor = grandparent;
        grandparent
    }
}

impl<T: DocumentTree + ?Sized> FusedIterator for AncestorWalker<'_, T> {}

#[cfg(test)]
#[path = "tests/walker.rs"]
mod tests;
