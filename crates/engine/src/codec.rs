//! Conversion between `#rrggbb` strings and [`Rgb`] triples.

use swatch_types::{ColorError, FormatViolation, HEX_COLOR_LEN, Rgb};

#[inline]
fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parse a `#RRGGBB` color. Digits may be upper or lower case.
///
/// Shorthand (`#rgb`), alpha (`#rrggbbaa`) and surrounding whitespace are all
/// rejected.
pub fn decode(color: &str) -> Result<Rgb, ColorError> {
    let bytes = color.as_bytes();
    if bytes.len() != HEX_COLOR_LEN {
        return Err(ColorError::invalid(color, FormatViolation::InvalidLength));
    }
    if bytes[0] != b'#' {
        return Err(ColorError::invalid(color, FormatViolation::MissingHash));
    }

    let channel = |hi: u8, lo: u8| -> Result<u8, ColorError> {
        let invalid = || ColorError::invalid(color, FormatViolation::InvalidHex);
        let h = nibble(hi).ok_or_else(invalid)?;
        let l = nibble(lo).ok_or_else(invalid)?;
        Ok(h << 4 | l)
    };

    Ok(Rgb::new(
        channel(bytes[1], bytes[2])?,
        channel(bytes[3], bytes[4])?,
        channel(bytes[5], bytes[6])?,
    ))
}

/// Format three channels as lowercase `#rrggbb`.
///
/// Out-of-range channels are clamped into `[0, 255]`, so this never fails.
pub fn encode(r: i32, g: i32, b: i32) -> String {
    let clamp = |c: i32| c.clamp(0, 255) as u8;
    encode_rgb(Rgb::new(clamp(r), clamp(g), clamp(b)))
}

#[inline]
pub fn encode_rgb(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}
