//! Plain configuration of a frame negotiator.

use crate::{Alignment, Axes, EdgeInsets, HorizontalAlignment, Size, VerticalAlignment};

/// Every tunable of a [`FrameNegotiator`](crate::FrameNegotiator).
///
/// Plain data: it can be built up front, cloned between negotiators and, with
/// the `serde` feature, loaded from a file. Changes take effect on the next
/// layout pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FrameConfig {
    /// Space removed from every edge before the target is measured or placed.
    pub edge_insets: EdgeInsets,
    /// Lower clamp for the content size. Active per axis when > 0.
    pub min_size: Size,
    /// Upper clamp for the content size. Active per axis when > 0 and not
    /// below `min_size`.
    pub max_size: Size,
    /// When > 0, desired height is the available content width times this.
    pub height_ratio: f32,
    /// Placement along the x axis.
    pub horizontal_alignment: HorizontalAlignment,
    /// Placement along the y axis.
    pub vertical_alignment: VerticalAlignment,
    /// Axes on which the placed size may exceed the inner rectangle.
    pub allow_growing: Axes,
    /// Axes on which the placed size may fall below the inner rectangle.
    pub allow_shrinking: Axes,
    /// Treat a hidden target as absent.
    pub ignore_hidden_target: bool,
    /// Memoize content measurements.
    pub cache_enabled: bool,
    /// Ask the host to outline this negotiator's frame.
    pub show_debug_outline: bool,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            edge_insets: EdgeInsets::ZERO,
            min_size: Size::zero(),
            max_size: Size::zero(),
            height_ratio: 0.0,
            horizontal_alignment: HorizontalAlignment::Center,
            vertical_alignment: VerticalAlignment::Center,
            allow_growing: Axes::empty(),
            allow_shrinking: Axes::empty(),
            ignore_hidden_target: true,
            cache_enabled: false,
            show_debug_outline: false,
        }
    }
}

impl FrameConfig {
    /// Both alignment policies.
    #[must_use]
    pub const fn alignment(&self) -> Alignment {
        Alignment::new(self.horizontal_alignment, self.vertical_alignment)
    }

    /// The fixed size, when `min_size == max_size` and both dimensions are
    /// positive.
    #[must_use]
    pub fn fixed_size(&self) -> Option<Size> {
        (self.min_size == self.max_size && self.min_size.is_positive()).then_some(self.min_size)
    }

    /// Applies the active min and max clamps to `size`.
    ///
    /// A max below the min on the same axis is ignored, so the min wins.
    #[must_use]
    pub fn clamp(&self, size: Size) -> Size {
        Size::new(
            clamp_extent(size.width, self.min_size.width, self.max_size.width),
            clamp_extent(size.height, self.min_size.height, self.max_size.height),
        )
    }
}

fn clamp_extent(value: f32, min: f32, max: f32) -> f32 {
    let mut value = value;
    if min > 0.0 {
        value = value.max(min);
    }
    if max > 0.0 && max >= min {
        value = value.min(max);
    }
    value
}
