//! Shared color and palette types for the swatch crates.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

pub mod palette;

pub use palette::{Palette, PaletteEntry, VariantKind};

/// Length of a canonical `#rrggbb` color string.
pub const HEX_COLOR_LEN: usize = 7;

/// An sRGB color triple with 8 bits per channel.
///
/// Channels are stored as `u8`, so every `Rgb` is within `[0, 255]` by
/// construction. Use the engine's codec to move between `Rgb` and hex strings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Apply `f` to each channel, keeping channel order.
    #[must_use]
    #[inline]
    pub fn map(self, f: impl Fn(u8) -> u8) -> Self {
        Self {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// The rule a color string broke when it failed to decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatViolation {
    /// The string is not exactly seven bytes long.
    InvalidLength,
    /// The string does not start with `#`.
    MissingHash,
    /// One of the six digits after `#` is not an ASCII hex digit.
    InvalidHex,
}

impl fmt::Display for FormatViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::InvalidLength => "expected exactly 7 characters",
            Self::MissingHash => "expected a leading '#'",
            Self::InvalidHex => "expected hex digits after '#'",
        };
        f.write_str(msg)
    }
}

/// Errors surfaced while decoding color strings.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The value could not be parsed as `#RRGGBB`.
    #[error("invalid color format '{value}': {violation}")]
    InvalidColorFormat { value: String, violation: FormatViolation },
}

impl ColorError {
    pub fn invalid(value: impl Into<String>, violation: FormatViolation) -> Self {
        Self::InvalidColorFormat {
            value: value.into(),
            violation,
        }
    }

    /// The offending input string.
    pub fn value(&self) -> &str {
        match self {
            Self::InvalidColorFormat { value, .. } => value,
        }
    }
}
