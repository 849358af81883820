//! Degree resolution: how deep is this heading among the heading groups above it?
//!
//! Starting from `min`, the resolver visits each grandparent in turn (see
//! [`AncestorWalker`](crate::walker::AncestorWalker)) and bumps the degree whenever that
//! ancestor's first element child is a heading. It stops at the top of the tree or once the
//! degree reaches `max`.

use crate::degree::{HeadingDegree, ResolutionBounds};
use crate::diagnostics::DiagnosticSink;
use crate::tree::DocumentTree;
use crate::walker::AncestorWalker;

/// Computes heading degrees against one tree snapshot.
pub struct DegreeResolver<'t, T: DocumentTree + ?Sized> {
    tree: &'t T,
}

impl<'t, T: DocumentTree + ?Sized> DegreeResolver<'t, T> {
    #[must_use]
    /// Resolve against `tree`.
    pub fn new(tree: &'t T) -> Self {
        Self { tree }
    }

    /// Resolve the degree for a heading at `start`.
    ///
    /// Inverted bounds are reported to `sink` once and otherwise used as given. The counter
    /// never passes 6 even then, so the result is always a valid degree.
    pub fn resolve<S>(&self, start: T::Node, bounds: ResolutionBounds, sink: &mut S) -> HeadingDegree
    where
        S: DiagnosticSink + ?Sized,
    {
        if let Some(warning) = bounds.check() {
            sink.report(warning);
        }

        let max = bounds.max().get();
        let mut degree = bounds.min().get();

        for (step, grandparent) in AncestorWalker::new(self.tree, start).enumerate() {
            if degree == max || degree == HeadingDegree::MAX.get() {
                break;
            }
            if self.tree.first_child_is_heading(grandparent) {
                degree += 1;
            }
            log::trace!("resolution step {step}: degree now {degree}");
        }

        let resolved = HeadingDegree::saturating(degree);
        log::debug!(
            "resolved heading degree {resolved} within [{}, {}]",
            bounds.min(),
            bounds.max()
        );
        resolved
    }
}

#[cfg(test)]
#[path = "tests/resolver.rs"]
mod tests;
