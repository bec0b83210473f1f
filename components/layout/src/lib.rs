//! Single-target frame negotiation for `boxwright`.
//!
//! A [`FrameNegotiator`] owns one box and manages one target view inside it.
//! It answers two questions for its host:
//!
//! - **measure**: given the space on offer, how large should the box be?
//!   Insets, min/max clamps, a fixed size and a height-to-width ratio all
//!   feed into the answer.
//! - **arrange**: given the box's final rectangle, where does the target go?
//!   Each axis has its own [`HorizontalAlignment`] / [`VerticalAlignment`]
//!   policy plus growth and shrink permissions ([`Axes`]).
//!
//! Negotiators nest: a target may itself be a negotiator's view, in which case
//! the host routes [`Host::size_that_fits`] back into that negotiator's
//! [`measure`](FrameNegotiator::measure).
//!
//! # Example
//!
//! ```rust,ignore
//! use boxwright_layout::{Alignment, Axes, FrameNegotiator, LayoutCtx, Size};
//!
//! let negotiator = FrameNegotiator::new()
//!     .with_target(label)
//!     .insets(8.0)
//!     .aligned(Alignment::LEFT)
//!     .shrinking(Axes::HORIZONTAL);
//!
//! let wanted = negotiator.measure(LayoutCtx::new(&tree, frame), Size::new(320.0, 44.0));
//! ```

pub use boxwright_core::*;

pub mod alignment;
pub use alignment::{Alignment, AxisAlignment, Axes, HorizontalAlignment, VerticalAlignment, resolve_axis};

mod arrange;
pub use arrange::Placement;

pub mod cache;
pub use cache::{CacheStats, SizeCache};

pub mod config;
pub use config::FrameConfig;

mod measure;

mod negotiator;
pub use negotiator::FrameNegotiator;

pub use boxwright_color::{ColorChooser, PALETTE, PaletteCycle, Srgb};

#[cfg(test)]
mod testing;
