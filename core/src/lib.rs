//! Shared building blocks for `boxwright`.
//!
//! This crate holds everything a frame negotiator and its host have to agree
//! on, without any layout policy of its own:
//!
//! - the geometry types ([`Point`], [`Size`], [`Rect`], [`EdgeInsets`]),
//! - [`GeometryError`], produced when geometry is rejected at an assignment
//!   boundary,
//! - the [`Host`] trait through which layout code reads and writes the view
//!   hierarchy it does not own,
//! - [`TransformStack`], the single coordinate translation used when a target
//!   is not a direct child of the view arranging it.
//!
//! # Logical Pixels (Points)
//!
//! All values are logical pixels. Hosts convert to physical pixels when they
//! paint; the negotiator only snaps placed rectangles to whole points.

pub mod error;
pub mod geometry;
pub mod host;
pub mod transform;

pub use error::GeometryError;
pub use geometry::{EdgeInsets, Point, Rect, Size};
pub use host::{Host, LayoutCtx, ViewId};
pub use transform::TransformStack;
