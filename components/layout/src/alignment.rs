//! Per-axis alignment policies and the arithmetic that resolves them.
//!
//! Horizontal and vertical placement are independent. Each axis is resolved by
//! the same function, [`resolve_axis`], which only needs to know whether the
//! policy pins the content to the leading edge, the trailing edge, the middle,
//! or stretches it.

// ============================================================================
// Axes
// ============================================================================

bitflags::bitflags! {
    /// A set of layout axes.
    ///
    /// Used for the per-axis growth and shrink permissions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Axes: u8 {
        /// The x axis.
        const HORIZONTAL = 0b01;
        /// The y axis.
        const VERTICAL = 0b10;
        /// Both axes.
        const BOTH = Self::HORIZONTAL.bits() | Self::VERTICAL.bits();
    }
}

// ============================================================================
// Alignment policies
// ============================================================================

/// How content is placed along the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAlignment {
    /// Centered on the inner rectangle.
    #[default]
    Center,
    /// Pinned to the left edge.
    Left,
    /// Pinned to the right edge.
    Right,
    /// Stretched to the inner width; intrinsic width is ignored.
    Fill,
    /// Grown or shrunk towards the inner width and kept centered.
    Fit,
}

/// How content is placed along the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalAlignment {
    /// Centered on the inner rectangle.
    #[default]
    Center,
    /// Pinned to the top edge.
    Top,
    /// Pinned to the bottom edge.
    Bottom,
    /// Stretched to the inner height; intrinsic height is ignored.
    Fill,
    /// Grown or shrunk towards the inner height and kept centered.
    Fit,
}

/// Axis-neutral form of the two policies above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisAlignment {
    /// Left or top.
    Leading,
    /// Right or bottom.
    Trailing,
    /// Middle of the axis.
    Center,
    /// Full inner extent.
    Fill,
    /// Inner extent approached from either side, centered.
    Fit,
}

impl From<HorizontalAlignment> for AxisAlignment {
    fn from(value: HorizontalAlignment) -> Self {
        match value {
            HorizontalAlignment::Center => Self::Center,
            HorizontalAlignment::Left => Self::Leading,
            HorizontalAlignment::Right => Self::Trailing,
            HorizontalAlignment::Fill => Self::Fill,
            HorizontalAlignment::Fit => Self::Fit,
        }
    }
}

impl From<VerticalAlignment> for AxisAlignment {
    fn from(value: VerticalAlignment) -> Self {
        match value {
            VerticalAlignment::Center => Self::Center,
            VerticalAlignment::Top => Self::Leading,
            VerticalAlignment::Bottom => Self::Trailing,
            VerticalAlignment::Fill => Self::Fill,
            VerticalAlignment::Fit => Self::Fit,
        }
    }
}

/// Both axis policies at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    /// Policy for the x axis.
    pub horizontal: HorizontalAlignment,
    /// Policy for the y axis.
    pub vertical: VerticalAlignment,
}

impl Alignment {
    /// Top left corner.
    pub const TOP_LEFT: Self = Self::new(HorizontalAlignment::Left, VerticalAlignment::Top);
    /// Top edge, horizontally centered.
    pub const TOP: Self = Self::new(HorizontalAlignment::Center, VerticalAlignment::Top);
    /// Top right corner.
    pub const TOP_RIGHT: Self = Self::new(HorizontalAlignment::Right, VerticalAlignment::Top);
    /// Left edge, vertically centered.
    pub const LEFT: Self = Self::new(HorizontalAlignment::Left, VerticalAlignment::Center);
    /// Centered on both axes.
    pub const CENTER: Self = Self::new(HorizontalAlignment::Center, VerticalAlignment::Center);
    /// Right edge, vertically centered.
    pub const RIGHT: Self = Self::new(HorizontalAlignment::Right, VerticalAlignment::Center);
    /// Bottom left corner.
    pub const BOTTOM_LEFT: Self = Self::new(HorizontalAlignment::Left, VerticalAlignment::Bottom);
    /// Bottom edge, horizontally centered.
    pub const BOTTOM: Self = Self::new(HorizontalAlignment::Center, VerticalAlignment::Bottom);
    /// Bottom right corner.
    pub const BOTTOM_RIGHT: Self =
        Self::new(HorizontalAlignment::Right, VerticalAlignment::Bottom);
    /// Stretched on both axes.
    pub const FILL: Self = Self::new(HorizontalAlignment::Fill, VerticalAlignment::Fill);
    /// Fitted on both axes.
    pub const FIT: Self = Self::new(HorizontalAlignment::Fit, VerticalAlignment::Fit);

    /// Combines two axis policies.
    #[must_use]
    pub const fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Returns true when neither axis needs the content's intrinsic size.
    #[must_use]
    pub const fn is_fill(&self) -> bool {
        matches!(self.horizontal, HorizontalAlignment::Fill)
            && matches!(self.vertical, VerticalAlignment::Fill)
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolves one axis of a placement.
///
/// Takes the inner rectangle's origin and extent on the axis, the content's
/// desired extent and the axis' grow/shrink permissions. Returns the placed
/// `(origin, extent)`.
///
/// Growing is checked before shrinking. Without either permission the content
/// keeps its exact extent, even when that overflows the inner rectangle.
/// `Center` offsets by the content extent while `Fit` offsets by the placed
/// extent, so only `Fit` stays centered once growth or shrinking kicks in.
#[must_use]
pub fn resolve_axis(
    alignment: AxisAlignment,
    inner_origin: f32,
    inner_extent: f32,
    content_extent: f32,
    grow: bool,
    shrink: bool,
) -> (f32, f32) {
    let flexed = if grow {
        inner_extent.max(content_extent)
    } else if shrink {
        inner_extent.min(content_extent)
    } else {
        content_extent
    };

    let (origin, extent) = match alignment {
        AxisAlignment::Fill => (inner_origin, inner_extent),
        AxisAlignment::Leading => (inner_origin, flexed),
        AxisAlignment::Trailing => (inner_origin + inner_extent - flexed, flexed),
        AxisAlignment::Center => (
            inner_origin + (inner_extent - content_extent) / 2.0,
            flexed,
        ),
        AxisAlignment::Fit => {
            let fitted = if grow {
                inner_extent.max(content_extent)
            } else {
                inner_extent.min(content_extent)
            };
            (inner_origin + (inner_extent - fitted) / 2.0, fitted)
        }
    };
    (origin, extent.max(0.0))
}
