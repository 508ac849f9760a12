use std::fmt;

use serde::{Deserialize, Serialize};

use crate::foundation::{
    error::{MirageError, MirageResult},
    math::round_half_up,
};

/// An 8-bit sRGB color without alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Construct from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`, lowercase.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels as an array.
    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// HSL rendition of this color.
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// Displays as `r, g, b`.
impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}

/// Hue in degrees, saturation and lightness in whole percent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue, `0..=360`.
    pub h: u16,
    /// Saturation percent.
    pub s: u8,
    /// Lightness percent.
    pub l: u8,
}

/// Displays as `h, s%, l%`.
impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}%, {}%", self.h, self.s, self.l)
    }
}

/// Exactly six hex digits, no prefix.
pub(crate) fn hex_digits(digits: &str) -> Option<Rgb8> {
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let v = u32::from_str_radix(digits, 16).ok()?;
    Some(Rgb8::new((v >> 16) as u8, (v >> 8) as u8, v as u8))
}

/// Parse `#rrggbb`, `0xrrggbb` or `rrggbb` (any case, surrounding whitespace ignored).
pub fn parse_hex(s: &str) -> MirageResult<Rgb8> {
    let t = s.trim();
    let digits = t
        .strip_prefix('#')
        .or_else(|| t.strip_prefix("0x"))
        .or_else(|| t.strip_prefix("0X"))
        .unwrap_or(t);
    hex_digits(digits).ok_or_else(|| MirageError::unsupported(format!("invalid hex color '{t}'")))
}

/// Parse `r, g, b`. Channels outside `0..=255` become 0.
pub fn parse_rgb(s: &str) -> MirageResult<Rgb8> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [r, g, b] = parts[..] else {
        return Err(MirageError::unsupported(format!(
            "expected three comma-separated channels, got '{}'",
            s.trim()
        )));
    };
    let channel = |part: &str| -> MirageResult<u8> {
        let v: i64 = part
            .parse()
            .map_err(|_| MirageError::unsupported(format!("invalid channel '{part}'")))?;
        Ok(u8::try_from(v).unwrap_or(0))
    };
    Ok(Rgb8::new(channel(r)?, channel(g)?, channel(b)?))
}

/// Standard RGB to HSL. Gray maps to hue and saturation 0.
pub fn rgb_to_hsl(rgb: Rgb8) -> Hsl {
    let [r, g, b] = rgb.channels().map(|c| f64::from(c) / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (round_half_up(h / 6.0 * 360.0), round_half_up(s * 100.0))
    };

    Hsl {
        h: h as u16,
        s: s as u8,
        l: round_half_up(l * 100.0) as u8,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/convert.rs"]
mod tests;
