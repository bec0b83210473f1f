use core::str::FromStr;

use crate::{HexColorError, parse::parse_hex};

/// Represents a color in the sRGB color space.
///
/// Component values are in the range 0.0 to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Srgb {
    /// Red component (0.0 to 1.0)
    pub red: f32,
    /// Green component (0.0 to 1.0)
    pub green: f32,
    /// Blue component (0.0 to 1.0)
    pub blue: f32,
}

impl Srgb {
    /// Material red.
    pub const RED: Self = Self::from_hex("#F44336");
    /// Material pink.
    pub const PINK: Self = Self::from_hex("#E91E63");
    /// Material purple.
    pub const PURPLE: Self = Self::from_hex("#9C27B0");
    /// Material blue.
    pub const BLUE: Self = Self::from_hex("#2196F3");
    /// Material teal.
    pub const TEAL: Self = Self::from_hex("#009688");
    /// Material green.
    pub const GREEN: Self = Self::from_hex("#4CAF50");
    /// Material amber.
    pub const AMBER: Self = Self::from_hex("#FFC107");
    /// Material orange.
    pub const ORANGE: Self = Self::from_hex("#FF9800");
    /// Black color.
    pub const BLACK: Self = Self::from_hex("#000000");
    /// White color.
    pub const WHITE: Self = Self::from_hex("#FFFFFF");

    /// Creates a new sRGB color from red, green, and blue components.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    /// Creates a new sRGB color from 8-bit red, green, and blue components.
    #[must_use]
    pub const fn new_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
        }
    }

    /// Creates a new sRGB color from a hexadecimal color string.
    ///
    /// # Panics
    ///
    /// Panics if `hex` is not a six-digit hexadecimal color. Intended for
    /// constants; use [`Srgb::try_from_hex`] for runtime input.
    #[must_use]
    pub const fn from_hex(hex: &str) -> Self {
        match parse_hex(hex) {
            Ok([red, green, blue]) => Self::new_u8(red, green, blue),
            Err(_) => panic!("invalid hex color"),
        }
    }

    /// Attempts to create a new sRGB color from a hexadecimal string without panicking.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not contain exactly six hexadecimal digits
    /// or contains invalid characters.
    pub const fn try_from_hex(hex: &str) -> Result<Self, HexColorError> {
        match parse_hex(hex) {
            Ok([red, green, blue]) => Ok(Self::new_u8(red, green, blue)),
            Err(error) => Err(error),
        }
    }
}

impl From<(u8, u8, u8)> for Srgb {
    fn from(value: (u8, u8, u8)) -> Self {
        Self::new_u8(value.0, value.1, value.2)
    }
}

impl From<[f32; 3]> for Srgb {
    fn from(value: [f32; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl FromStr for Srgb {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_hex(s)
    }
}
