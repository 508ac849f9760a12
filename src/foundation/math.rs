/// Store a real channel value the way a canvas `Uint8ClampedArray` does:
/// clamp to `[0, 255]`, round to nearest with ties to even. NaN becomes 0.
pub(crate) fn quantize_u8(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.clamp(0.0, 255.0).round_ties_even() as u8
}

/// Round with ties toward positive infinity.
pub(crate) fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Format with one decimal, rounding ties upward for non-negative input.
pub(crate) fn fixed1(v: f64) -> String {
    format!("{:.1}", round_half_up(v * 10.0) / 10.0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
