//! An arena-backed view hierarchy for `boxwright` frame negotiators.
//!
//! [`ViewTree`] implements [`Host`](boxwright_core::Host): it stores views by
//! [`ViewId`](boxwright_core::ViewId), answers size queries by dispatching to
//! leaf [`Content`] or to nested negotiators, and rejects invalid frames at
//! the assignment boundary. [`LayoutEngine`] drains the tree's dirty queue and
//! arranges each queued negotiator until the hierarchy settles.

mod content;
mod engine;
mod error;
mod tree;

pub use content::{Content, Flexible, Measured};
pub use engine::{DEFAULT_MAX_PASSES, LayoutEngine};
pub use error::TreeError;
pub use tree::{Node, ViewTree};
