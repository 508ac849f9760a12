use crate::foundation::{core::Bitmap, error::MirageResult};

/// Lowest accepted exposure value.
pub const EV_MIN: f32 = -10.0;
/// Highest accepted exposure value.
pub const EV_MAX: f32 = 10.0;
/// Slider granularity.
pub const EV_STEP: f32 = 0.1;

/// Display gamma used for the sRGB <-> linear approximation.
pub const GAMMA: f32 = 2.2;

/// Clamp into `[EV_MIN, EV_MAX]`; NaN resets to 0.
pub fn clamp_ev(ev: f32) -> f32 {
    if ev.is_nan() {
        return 0.0;
    }
    ev.clamp(EV_MIN, EV_MAX)
}

/// Expose one normalized channel: to linear, scale by `2^ev`, back to gamma space.
pub fn expose(c: f32, ev: f32) -> f32 {
    let linear = c.powf(GAMMA) * 2f32.powf(ev);
    linear.powf(1.0 / GAMMA).clamp(0.0, 1.0)
}

/// 256-entry table for one exposure value.
#[derive(Clone, Debug)]
pub struct ExposureLut {
    ev: f32,
    table: [u8; 256],
}

impl ExposureLut {
    /// Build the table for `ev` (clamped to the accepted range).
    pub fn new(ev: f32) -> Self {
        let ev = clamp_ev(ev);
        let mut table = [0u8; 256];
        for (v, out) in table.iter_mut().enumerate() {
            let c = v as f32 / 255.0;
            *out = (expose(c, ev) * 255.0).round() as u8;
        }
        Self { ev, table }
    }

    /// Exposure value this table was built for.
    pub fn ev(&self) -> f32 {
        self.ev
    }

    /// Map one 8-bit channel.
    #[inline]
    pub fn map(&self, v: u8) -> u8 {
        self.table[v as usize]
    }

    /// Apply to RGB of every pixel; alpha passes through.
    pub fn apply(&self, src: &Bitmap) -> MirageResult<Bitmap> {
        let mut out = src.as_rgba8().to_vec();
        for px in out.chunks_exact_mut(4) {
            px[0] = self.map(px[0]);
            px[1] = self.map(px[1]);
            px[2] = self.map(px[2]);
        }
        Bitmap::from_rgba8(src.width(), src.height(), out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/exposure.rs"]
mod tests;
