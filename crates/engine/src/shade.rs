//! Channel math for derived colors.
//!
//! The formulas are `c + (255 - c) * 0.25` (lighter), `c * 0.75` (darker) and
//! `255 - c` (complementary), each floored. They are evaluated in integer
//! arithmetic, which gives the same floored result for every `u8` input.

use swatch_types::{Rgb, VariantKind};

#[inline]
fn lighten_channel(c: u8) -> u8 {
    let c = u16::from(c);
    (c + (255 - c) / 4).min(255) as u8
}

#[inline]
fn darken_channel(c: u8) -> u8 {
    (u16::from(c) * 3 / 4) as u8
}

/// Move each channel a quarter of the way toward 255.
#[must_use]
pub fn lighter(rgb: Rgb) -> Rgb {
    rgb.map(lighten_channel)
}

/// Scale each channel to three quarters of its value.
#[must_use]
pub fn darker(rgb: Rgb) -> Rgb {
    rgb.map(darken_channel)
}

/// Invert each channel.
#[must_use]
pub fn complementary(rgb: Rgb) -> Rgb {
    rgb.map(|c| 255 - c)
}

/// Compute the variant of `rgb` named by `kind`. `Base` returns `rgb`.
#[must_use]
pub fn derive(rgb: Rgb, kind: VariantKind) -> Rgb {
    match kind {
        VariantKind::Base => rgb,
        VariantKind::Lighter => lighter(rgb),
        VariantKind::Darker => darker(rgb),
        VariantKind::Complementary => complementary(rgb),
    }
}
