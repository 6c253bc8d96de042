//! Color helpers for theme values.

use crate::{Error, Result};

/// Convert a `#rrggbb` or `#rgb` color to a CSS `rgba()` string.
///
/// `alpha` is clamped to `0.0..=1.0`.
pub fn rgba(hex: &str, alpha: f32) -> Result<String> {
    let (r, g, b) = parse_hex(hex)?;
    let alpha = alpha.clamp(0.0, 1.0);
    Ok(format!("rgba({r}, {g}, {b}, {alpha})"))
}

fn parse_hex(hex: &str) -> Result<(u8, u8, u8)> {
    let digits = hex
        .trim()
        .strip_prefix('#')
        .ok_or_else(|| Error::InvalidInput(format!("color must start with '#': {hex}")))?;

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidInput(format!("invalid hex color: {hex}")));
    }

    let channel = |range: &str| {
        u8::from_str_radix(range, 16)
            .map_err(|_| Error::InvalidInput(format!("invalid hex color: {hex}")))
    };

    match digits.len() {
        6 => Ok((
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        3 => {
            let expand = |index: usize| {
                let c = &digits[index..=index];
                channel(&format!("{c}{c}"))
            };
            Ok((expand(0)?, expand(1)?, expand(2)?))
        }
        _ => Err(Error::InvalidInput(format!("invalid hex color: {hex}"))),
    }
}
