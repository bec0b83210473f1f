//! Contracts between a negotiator and the view hierarchy hosting it.
//!
//! A negotiator never owns the views it lays out. Everything it needs from the
//! hierarchy (visibility, parents, frames, intrinsic sizes) goes through
//! [`Host`], keyed by [`ViewId`].

use crate::{Point, Rect, Size, TransformStack};

/// Identifier for a view inside a [`Host`].
///
/// Holding an id does not keep the view alive; a removed view simply stops
/// being [`Host::contains`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewId(usize);

impl ViewId {
    /// Creates a new [`ViewId`] from the raw index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index backing this identifier.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// The view hierarchy as seen from layout code.
///
/// Layout is synchronous and single-threaded: every call completes before the
/// next one starts, and nested negotiators recurse through
/// [`size_that_fits`](Self::size_that_fits) at most as deep as the hierarchy.
pub trait Host {
    /// Whether `view` is still part of the hierarchy.
    fn contains(&self, view: ViewId) -> bool;

    /// The direct parent of `view`, if any.
    fn parent(&self, view: ViewId) -> Option<ViewId>;

    /// Whether `view` is hidden.
    fn is_hidden(&self, view: ViewId) -> bool;

    /// The current frame of `view`, in its parent's coordinate space.
    fn frame(&self, view: ViewId) -> Rect;

    /// Asks `view` how large it would like to be for a candidate size.
    fn size_that_fits(&self, view: ViewId, proposal: Size) -> Size;

    /// Assigns a new frame to `view`.
    ///
    /// Implementations must ignore invalid geometry (see
    /// [`Rect::validate`]) and keep the previous frame.
    fn set_frame(&mut self, view: ViewId, frame: Rect);

    /// Schedules `view` for another layout pass.
    fn request_layout(&mut self, view: ViewId);

    /// Origin of `view`'s coordinate space on the rendering surface, when the
    /// host can answer that directly.
    ///
    /// Hosts whose views are not attached to a surface return `None` (the
    /// default) and translation falls back to walking the ancestor chain.
    fn surface_origin(&self, view: ViewId) -> Option<Point> {
        let _ = view;
        None
    }

    /// Converts `rect` from the coordinate space of `from` into that of `to`.
    ///
    /// Returns `None` when the two views share no coordinate space.
    fn convert_rect(&self, rect: Rect, from: ViewId, to: ViewId) -> Option<Rect> {
        TransformStack::between(self, from, to).map(|stack| stack.apply(rect))
    }
}

/// Context handed to a negotiator during a layout pass.
#[derive(Debug)]
pub struct LayoutCtx<'a, H: ?Sized> {
    host: &'a H,
    view: ViewId,
}

impl<H: ?Sized> Clone for LayoutCtx<'_, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: ?Sized> Copy for LayoutCtx<'_, H> {}

impl<'a, H: Host + ?Sized> LayoutCtx<'a, H> {
    /// Creates a context for the negotiator living at `view`.
    #[must_use]
    pub const fn new(host: &'a H, view: ViewId) -> Self {
        Self { host, view }
    }

    /// The hierarchy this pass runs against.
    #[must_use]
    pub const fn host(&self) -> &'a H {
        self.host
    }

    /// The view that owns the negotiator.
    #[must_use]
    pub const fn view(&self) -> ViewId {
        self.view
    }

    /// Whether the negotiator's own view is hidden.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.host.is_hidden(self.view)
    }
}
