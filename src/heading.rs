//! The smart heading component: props, the last rendered degree, and its recompute hooks.
//!
//! A host framework calls [`SmartHeading::mount`] when the heading is attached and
//! [`SmartHeading::set_bounds`] whenever its `min`/`max` props change. Both resolve the degree
//! afresh and fire the [`RenderTrigger`] only when the rendered tag actually has to change.

use crate::degree::{HeadingDegree, ResolutionBounds};
use crate::diagnostics::DiagnosticSink;
use crate::resolver::DegreeResolver;
use crate::tree::DocumentTree;

/// Told to re-render a heading once its degree changes.
pub trait RenderTrigger<N> {
    /// Re-render the heading at `node` with `degree`.
    fn rerender(&mut self, node: N, degree: HeadingDegree);
}

impl<N> RenderTrigger<N> for Vec<(N, HeadingDegree)> {
    fn rerender(&mut self, node: N, degree: HeadingDegree) {
        self.push((node, degree));
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A generic heading marker whose tag is chosen from its position in the document.
pub struct SmartHeading {
    bounds: ResolutionBounds,
    /// Attributes forwarded untouched to the rendered element, in source order.
    pub attributes: Vec<(String, String)>,
    degree: HeadingDegree,
}

impl SmartHeading {
    #[must_use]
    /// Create an unmounted heading; it renders at `min` until first resolved.
    pub fn new(bounds: ResolutionBounds, attributes: Vec<(String, String)>) -> Self {
        Self {
            bounds,
            attributes,
            degree: bounds.min(),
        }
    }

    #[must_use]
    /// Current `min`/`max` props.
    pub const fn bounds(&self) -> ResolutionBounds {
        self.bounds
    }

    #[must_use]
    /// Last rendered degree.
    pub const fn degree(&self) -> HeadingDegree {
        self.degree
    }

    #[must_use]
    /// Tag name the heading currently renders as.
    pub const fn tag(&self) -> &'static str {
        self.degree.tag()
    }

    /// Resolve the degree on attach, re-rendering if it moved off the initial `min`.
    pub fn mount<T, S, R>(&mut self, tree: &T, node: T::Node, sink: &mut S, trigger: &mut R) -> HeadingDegree
    where
        T: DocumentTree + ?Sized,
        S: DiagnosticSink + ?Sized,
        R: RenderTrigger<T::Node> + ?Sized,
    {
        self.recompute(tree, node, sink, trigger)
    }

    /// Apply new `min`/`max` props and resolve again.
    ///
    /// Unchanged bounds leave the heading alone without walking the tree.
    pub fn set_bounds<T, S, R>(
        &mut self,
        bounds: ResolutionBounds,
        tree: &T,
        node: T::Node,
        sink: &mut S,
        trigger: &mut R,
    ) -> HeadingDegree
    where
        T: DocumentTree + ?Sized,
        S: DiagnosticSink + ?Sized,
        R: RenderTrigger<T::Node> + ?Sized,
    {
        if bounds == self.bounds {
            return self.degree;
        }
        self.bounds = bounds;
        self.recompute(tree, node, sink, trigger)
    }

    fn recompute<T, S, R>(&mut self, tree: &T, node: T::Node, sink: &mut S, trigger: &mut R) -> HeadingDegree
    where
        T: DocumentTree + ?Sized,
        S: DiagnosticSink + ?Sized,
        R: RenderTrigger<T::Node> + ?Sized,
    {
        let degree = DegreeResolver::new(tree).resolve(node, self.bounds, sink);
        if degree != self.degree {
            self.degree = degree;
            trigger.rerender(node, degree);
        }
        degree
    }
}

#[cfg(test)]
#[path = "tests/heading.rs"]
mod tests;
