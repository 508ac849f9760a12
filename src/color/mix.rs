use crate::{
    color::convert::{Rgb8, hex_digits},
    foundation::math::round_half_up,
};

/// Shown when either endpoint fails to parse.
pub const INVALID_MIX: &str = "#000000";

/// Strict `#?rrggbb`. No whitespace, no `0x`.
pub fn parse_mix_hex(s: &str) -> Option<Rgb8> {
    hex_digits(s.strip_prefix('#').unwrap_or(s))
}

/// Linear blend from `start` (t = 0) to `end` (t = 1), rounding each channel half up.
pub fn mix(start: Rgb8, end: Rgb8, t: f64) -> Rgb8 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let lerp = |a: u8, b: u8| {
        let (a, b) = (f64::from(a), f64::from(b));
        round_half_up(a + (b - a) * t).clamp(0.0, 255.0) as u8
    };
    Rgb8::new(
        lerp(start.r, end.r),
        lerp(start.g, end.g),
        lerp(start.b, end.b),
    )
}

/// Blend two hex strings, or [`INVALID_MIX`] if either is malformed.
pub fn mix_hex(start: &str, end: &str, t: f64) -> String {
    match (parse_mix_hex(start), parse_mix_hex(end)) {
        (Some(a), Some(b)) => mix(a, b, t).to_hex(),
        _ => INVALID_MIX.to_owned(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/mix.rs"]
mod tests;
