//! Errors reported by [`ViewTree`](crate::ViewTree) operations.

use boxwright_core::{GeometryError, ViewId};

/// Reason a tree operation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The view was never inserted or has been removed.
    #[error("view {0:?} is not part of the tree")]
    UnknownView(ViewId),
    /// A frame failed validation and was not assigned.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(#[from] GeometryError),
    /// The view exists but does not hold a frame negotiator.
    #[error("view {0:?} is not a frame negotiator")]
    NotANegotiator(ViewId),
    /// The target would lead measurement back to the negotiator itself.
    #[error("{target:?} cannot be the target of {negotiator:?}: the layout would loop")]
    CyclicTarget {
        /// Negotiator being configured.
        negotiator: ViewId,
        /// Refused target.
        target: ViewId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_error_display() {
        assert_eq!(
            TreeError::UnknownView(ViewId::new(3)).to_string(),
            "view ViewId(3) is not part of the tree"
        );
        assert_eq!(
            TreeError::from(GeometryError::NotFinite).to_string(),
            "invalid geometry: geometry contains a non-finite component"
        );
        assert_eq!(
            TreeError::CyclicTarget {
                negotiator: ViewId::new(1),
                target: ViewId::new(0),
            }
            .to_string(),
            "ViewId(0) cannot be the target of ViewId(1): the layout would loop"
        );
    }
}
