//! Leaf views that only know how large they want to be.

use core::fmt::{self, Debug};

use boxwright_core::Size;
use boxwright_layout::Axes;

/// Trait implemented by every leaf stored in the view tree.
///
/// Content has no say in where it goes; it only answers size queries. An
/// infinite extent on an axis means "whatever you offer".
pub trait Content: Debug {
    /// Returns the size this content wants for a candidate size.
    fn size_that_fits(&self, proposal: Size) -> Size;
}

/// A fixed size, whatever the proposal.
impl Content for Size {
    fn size_that_fits(&self, _proposal: Size) -> Size {
        *self
    }
}

/// Content that takes the whole proposal on some axes and a fixed extent on
/// the others.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flexible {
    axes: Axes,
    intrinsic: Size,
}

impl Flexible {
    /// Expands on `axes`, keeps `intrinsic` elsewhere.
    #[must_use]
    pub const fn new(axes: Axes, intrinsic: Size) -> Self {
        Self { axes, intrinsic }
    }

    /// Expands on both axes.
    #[must_use]
    pub const fn both() -> Self {
        Self::new(Axes::BOTH, Size::zero())
    }
}

impl Content for Flexible {
    fn size_that_fits(&self, _proposal: Size) -> Size {
        Size::new(
            if self.axes.contains(Axes::HORIZONTAL) {
                f32::INFINITY
            } else {
                self.intrinsic.width
            },
            if self.axes.contains(Axes::VERTICAL) {
                f32::INFINITY
            } else {
                self.intrinsic.height
            },
        )
    }
}

/// Content measured by a closure, e.g. wrapped text.
pub struct Measured<F> {
    label: &'static str,
    measure: F,
}

impl<F: Fn(Size) -> Size> Measured<F> {
    /// Wraps `measure`; `label` only shows up in debug output.
    pub const fn new(label: &'static str, measure: F) -> Self {
        Self { label, measure }
    }
}

impl<F> Debug for Measured<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Measured").field("label", &self.label).finish()
    }
}

impl<F: Fn(Size) -> Size> Content for Measured<F> {
    fn size_that_fits(&self, proposal: Size) -> Size {
        (self.measure)(proposal)
    }
}
