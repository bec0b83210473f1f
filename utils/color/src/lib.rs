//! # Colors
//!
//! Small sRGB color support for `boxwright`. Layout itself never paints; the
//! only color a negotiator carries is the one its debug outline is drawn with,
//! picked from [`PALETTE`] by a [`ColorChooser`] the host injects.

mod parse;
mod srgb;
pub use srgb::Srgb;

/// Error returned when parsing a hexadecimal color string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HexColorError {
    /// The provided string does not have the expected 6 hexadecimal digits.
    #[error("expected exactly 6 hexadecimal digits")]
    InvalidLength,
    /// A non-hexadecimal character was encountered at the provided index.
    #[error("invalid hexadecimal digit at byte index {0}")]
    InvalidDigit(usize),
}

/// Colors handed out for debug outlines, in the order they are handed out.
pub const PALETTE: [Srgb; 8] = [
    Srgb::RED,
    Srgb::BLUE,
    Srgb::GREEN,
    Srgb::ORANGE,
    Srgb::PURPLE,
    Srgb::TEAL,
    Srgb::PINK,
    Srgb::AMBER,
];

/// Source of debug-outline colors.
///
/// Called once per negotiator when it joins a hierarchy. Anything that yields
/// colors works, including plain closures.
pub trait ColorChooser {
    /// Returns the next color to use.
    fn choose(&mut self) -> Srgb;
}

impl<F: FnMut() -> Srgb> ColorChooser for F {
    fn choose(&mut self) -> Srgb {
        self()
    }
}

/// Default chooser: walks [`PALETTE`] and wraps around.
#[derive(Debug, Clone, Default)]
pub struct PaletteCycle {
    next: usize,
}

impl PaletteCycle {
    /// Starts the cycle at the first palette entry.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 0 }
    }
}

impl ColorChooser for PaletteCycle {
    fn choose(&mut self) -> Srgb {
        let color = PALETTE[self.next % PALETTE.len()];
        self.next = (self.next + 1) % PALETTE.len();
        color
    }
}
