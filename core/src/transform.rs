//! Translation between the coordinate spaces of two views.
//!
//! Every view's frame is expressed in its parent's space, so moving a
//! rectangle from one view's space to another's is a sequence of translations:
//! up from the source to a shared space, then down to the destination. A
//! [`TransformStack`] records that sequence.
//!
//! Where the steps come from is up to the host. An attached host can answer
//! [`Host::surface_origin`] directly, which collapses the sequence to two
//! steps; otherwise the stack is built by walking parents. Either way the
//! result is applied the same way.

use crate::{Host, Point, Rect, ViewId};

/// Ordered translations that map one view's coordinate space onto another's.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformStack {
    steps: Vec<Point>,
}

impl TransformStack {
    /// Creates an identity transform.
    #[must_use]
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Pushes a translation onto the stack.
    pub fn push(&mut self, offset: Point) {
        self.steps.push(offset);
    }

    /// Number of recorded translations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true for the identity transform.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Net translation of the whole stack.
    #[must_use]
    pub fn offset(&self) -> Point {
        self.steps
            .iter()
            .fold(Point::zero(), |acc, step| acc.offset(*step))
    }

    /// Applies the stack to `rect`. Sizes are unchanged.
    #[must_use]
    pub fn apply(&self, rect: Rect) -> Rect {
        rect.translate(self.offset())
    }

    /// Builds the transform from `from`'s coordinate space to `to`'s.
    ///
    /// Returns `None` if either view is gone or the two views have no common
    /// ancestor.
    pub fn between<H: Host + ?Sized>(host: &H, from: ViewId, to: ViewId) -> Option<Self> {
        if !host.contains(from) || !host.contains(to) {
            return None;
        }
        let mut stack = Self::new();
        if from == to {
            return Some(stack);
        }

        if let (Some(source), Some(destination)) =
            (host.surface_origin(from), host.surface_origin(to))
        {
            stack.push(source);
            stack.push(destination.negated());
            return Some(stack);
        }

        let up = ancestry(host, from);
        let down = ancestry(host, to);
        let shared = up.iter().position(|view| down.contains(view))?;
        let common = up[shared];

        for view in &up[..shared] {
            stack.push(host.frame(*view).origin());
        }
        for view in down.iter().take_while(|view| **view != common) {
            stack.push(host.frame(*view).origin().negated());
        }
        Some(stack)
    }
}

/// `view` followed by each of its ancestors, nearest first.
fn ancestry<H: Host + ?Sized>(host: &H, view: ViewId) -> Vec<ViewId> {
    let mut chain = vec![view];
    let mut current = view;
    while let Some(parent) = host.parent(current) {
        // a malformed host could hand back a cycle
        if chain.contains(&parent) {
            break;
        }
        chain.push(parent);
        current = parent;
    }
    chain
}
