//! Drives layout passes over the view tree.

use boxwright_core::{Host, LayoutCtx, Rect, Size, ViewId};
use tracing::{debug, warn};

use crate::ViewTree;

/// Passes a single [`LayoutEngine::run`] may take before giving up.
pub const DEFAULT_MAX_PASSES: usize = 32;

/// Layout executor that runs queued negotiators until the tree settles.
///
/// Each pass drains the dirty queue and arranges every negotiator in it,
/// shallowest first. Arranging writes target frames, and a nested
/// negotiator whose frame changed queues itself for the next pass.
#[derive(Debug)]
pub struct LayoutEngine<'a> {
    tree: &'a mut ViewTree,
    max_passes: usize,
}

impl<'a> LayoutEngine<'a> {
    /// Creates a new engine bound to the provided view tree.
    pub const fn new(tree: &'a mut ViewTree) -> Self {
        Self {
            tree,
            max_passes: DEFAULT_MAX_PASSES,
        }
    }

    /// Overrides the pass bound.
    #[must_use]
    pub const fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Measures the root against `available`, gives it that size and runs
    /// layout. Returns the root's size, or `None` for an empty tree.
    pub fn fit(&mut self, available: Size) -> Option<Size> {
        let root = self.tree.root()?;
        let size = self.tree.size_that_fits(root, available);
        let origin = self.tree.frame(root).origin();
        debug!(?root, ?available, ?size, "fitting root");
        self.tree.set_frame(root, Rect::new(origin, size));
        self.run();
        Some(size)
    }

    /// Runs passes until nothing is queued or the pass bound is hit.
    ///
    /// Returns the number of passes taken. Hitting the bound drops whatever is
    /// still queued.
    pub fn run(&mut self) -> usize {
        let mut passes = 0;
        while self.tree.has_pending() {
            if passes == self.max_passes {
                let dropped = self.tree.drain_dirty();
                warn!(
                    passes,
                    dropped = dropped.len(),
                    "layout did not settle, giving up"
                );
                break;
            }
            passes += 1;

            let dirty = self.tree.drain_dirty();
            debug!(pass = passes, views = dirty.len(), "layout pass");
            for view in dirty {
                self.arrange(view);
            }
        }
        passes
    }

    fn arrange(&mut self, view: ViewId) {
        let Some(negotiator) = self.tree.negotiator(view) else {
            return;
        };
        let container = Rect::from_size(self.tree.frame(view).size());
        let Some(placement) = negotiator.place(LayoutCtx::new(&*self.tree, view), container) else {
            return;
        };
        debug!(
            ?view,
            target = ?placement.target,
            frame = ?placement.frame,
            "placing target"
        );
        placement.commit(&mut *self.tree);
    }
}
