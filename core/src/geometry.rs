//! Geometry types shared by negotiators and hosts.

use crate::GeometryError;

// ============================================================================
// Point
// ============================================================================

/// Coordinate relative to the origin of some view's coordinate space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The x-coordinate in points.
    pub x: f32,
    /// The y-coordinate in points.
    pub y: f32,
}

impl Point {
    /// Constructs a [`Point`] at the given `x` and `y`.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a [`Point`] at the origin (0, 0).
    #[must_use]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Returns this point shifted by `other`.
    #[must_use]
    pub const fn offset(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Returns the point mirrored through the origin.
    #[must_use]
    pub const fn negated(self) -> Self {
        Self::new(-self.x, -self.y)
    }

    /// Returns true if both coordinates are finite.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

// ============================================================================
// Size
// ============================================================================

/// Two-dimensional size expressed in points.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// The width in points.
    pub width: f32,
    /// The height in points.
    pub height: f32,
}

impl Size {
    /// Constructs a [`Size`] with the given `width` and `height`.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Creates a [`Size`] with zero width and height.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Returns true if both dimensions are zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Returns true if both dimensions are strictly positive.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Replaces NaN and negative dimensions with zero.
    ///
    /// Positive infinity survives; it is how a host says "unconstrained".
    #[must_use]
    pub fn non_negative(self) -> Self {
        let floor = |v: f32| if v.is_nan() { 0.0 } else { v.max(0.0) };
        Self::new(floor(self.width), floor(self.height))
    }

    /// Shrinks the size by `insets`, never going below zero.
    #[must_use]
    pub fn inset(self, insets: &EdgeInsets) -> Self {
        Self::new(
            self.width - insets.horizontal(),
            self.height - insets.vertical(),
        )
        .non_negative()
    }

    /// Grows each non-zero dimension by `insets`.
    ///
    /// A zero dimension means "no content on this axis" and stays zero.
    #[must_use]
    pub fn outset_nonzero(self, insets: &EdgeInsets) -> Self {
        Self::new(
            if self.width > 0.0 {
                self.width + insets.horizontal()
            } else {
                self.width
            },
            if self.height > 0.0 {
                self.height + insets.vertical()
            } else {
                self.height
            },
        )
    }

    /// Componentwise minimum.
    #[must_use]
    pub const fn min(self, other: Self) -> Self {
        Self::new(self.width.min(other.width), self.height.min(other.height))
    }

    /// Componentwise maximum.
    #[must_use]
    pub const fn max(self, other: Self) -> Self {
        Self::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// Checks that the size can be assigned to a view.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NotFinite`] for NaN or infinite dimensions and
    /// [`GeometryError::NegativeSize`] for negative ones.
    pub const fn validate(&self) -> Result<(), GeometryError> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(GeometryError::NotFinite);
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(GeometryError::NegativeSize);
        }
        Ok(())
    }
}

// ============================================================================
// EdgeInsets
// ============================================================================

/// Distances removed from the four edges of a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    /// Top inset in points.
    pub top: f32,
    /// Left inset in points.
    pub left: f32,
    /// Bottom inset in points.
    pub bottom: f32,
    /// Right inset in points.
    pub right: f32,
}

impl EdgeInsets {
    /// Zero insets.
    pub const ZERO: Self = Self::all(0.0);

    /// Creates insets with explicit edges.
    #[must_use]
    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Returns equal insets on every edge.
    #[must_use]
    pub const fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Returns symmetric vertical and horizontal insets.
    #[must_use]
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Sum of the left and right insets.
    #[must_use]
    pub const fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Sum of the top and bottom insets.
    #[must_use]
    pub const fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Returns true if every edge is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.top == 0.0 && self.left == 0.0 && self.bottom == 0.0 && self.right == 0.0
    }
}

#[allow(clippy::cast_possible_truncation)]
impl From<f64> for EdgeInsets {
    fn from(value: f64) -> Self {
        Self::all(value as f32)
    }
}

impl From<f32> for EdgeInsets {
    fn from(value: f32) -> Self {
        Self::all(value)
    }
}

// ============================================================================
// Rect
// ============================================================================

/// Axis-aligned rectangle in some view's coordinate space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    origin: Point,
    size: Size,
}

impl Rect {
    /// The null rectangle: "no rectangle at all". Never assignable.
    pub const NULL: Self = Self {
        origin: Point::new(f32::INFINITY, f32::INFINITY),
        size: Size::zero(),
    };

    /// Creates a new [`Rect`] with the provided `origin` and `size`.
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle from its four scalar components.
    #[must_use]
    pub const fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Point::new(x, y), Size::new(width, height))
    }

    /// Creates a rectangle at origin (0, 0) with the given size.
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self {
            origin: Point::zero(),
            size,
        }
    }

    /// Returns the rectangle's origin (top-left corner).
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the rectangle's size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Returns the rectangle's x-coordinate (left edge).
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.origin.x
    }

    /// Returns the rectangle's y-coordinate (top edge).
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.origin.y
    }

    /// Returns the rectangle's width.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.size.width
    }

    /// Returns the rectangle's height.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.size.height
    }

    /// Returns the maximum x-coordinate (right edge).
    #[must_use]
    pub const fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Returns the maximum y-coordinate (bottom edge).
    #[must_use]
    pub const fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Returns true for [`Rect::NULL`] and anything else whose origin sits at
    /// positive infinity.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.origin.x == f32::INFINITY || self.origin.y == f32::INFINITY
    }

    /// Returns the rectangle moved by `offset`.
    #[must_use]
    pub const fn translate(&self, offset: Point) -> Self {
        Self::new(self.origin.offset(offset), self.size)
    }

    /// Shrinks the rectangle by `insets`; the size never goes below zero.
    #[must_use]
    pub fn inset_by(&self, insets: &EdgeInsets) -> Self {
        Self::new(
            Point::new(self.origin.x + insets.left, self.origin.y + insets.top),
            self.size.inset(insets),
        )
    }

    /// Smallest rectangle with integral edges that contains this one.
    ///
    /// Min edges are floored, max edges are ceiled.
    #[must_use]
    pub fn integral(&self) -> Self {
        if self.is_null() {
            return *self;
        }
        let x = self.x().floor();
        let y = self.y().floor();
        Self::from_xywh(x, y, self.max_x().ceil() - x, self.max_y().ceil() - y)
    }

    /// Checks that the rectangle can be assigned to a view.
    ///
    /// # Errors
    ///
    /// [`GeometryError::Null`] for the null rectangle,
    /// [`GeometryError::NotFinite`] for NaN or infinite components and
    /// [`GeometryError::NegativeSize`] for negative dimensions.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.is_null() {
            return Err(GeometryError::Null);
        }
        if !self.origin.is_finite() {
            return Err(GeometryError::NotFinite);
        }
        self.size.validate()
    }
}
