//! Errors raised when geometry fails validation.

/// Reason a size or rectangle was refused at an assignment boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// The rectangle is the null rectangle (origin at positive infinity).
    #[error("rectangle is null")]
    Null,
    /// A component is NaN or infinite.
    #[error("geometry contains a non-finite component")]
    NotFinite,
    /// A width or height is below zero.
    #[error("size has a negative dimension")]
    NegativeSize,
}
