use serde::{Deserialize, Serialize};

/// How a source image is placed into a differently sized frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitMode {
    /// Fill the frame, ignoring aspect ratio.
    Stretch,
    /// Preserve aspect ratio and center, letterboxing one axis.
    #[default]
    #[serde(alias = "scale")]
    ScaleToFit,
}

/// Placement rectangle in destination-canvas coordinates.
///
/// `x`/`y` may be negative or exceed the canvas; consumers clip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FitRect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Placed width.
    pub w: f64,
    /// Placed height.
    pub h: f64,
}

impl FitRect {
    /// Rectangle covering the whole target.
    pub fn full(target_w: f64, target_h: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            w: target_w,
            h: target_h,
        }
    }
}

/// Aspect ratios closer than this are treated as equal (no border).
pub const ASPECT_EPSILON: f64 = 1e-4;

/// Compute where a `source_w x source_h` image lands inside a `target_w x target_h` frame.
pub fn fit(source_w: u32, source_h: u32, target_w: u32, target_h: u32, mode: FitMode) -> FitRect {
    let (sw, sh) = (f64::from(source_w), f64::from(source_h));
    let (tw, th) = (f64::from(target_w), f64::from(target_h));

    if mode == FitMode::Stretch {
        return FitRect::full(tw, th);
    }
    if source_w == 0 || source_h == 0 || target_w == 0 || target_h == 0 {
        return FitRect::default();
    }

    let target_aspect = tw / th;
    let source_aspect = sw / sh;
    let diff = target_aspect - source_aspect;
    if diff.abs() < ASPECT_EPSILON {
        return FitRect::full(tw, th);
    }

    if diff > 0.0 {
        // target is relatively wider: margins left and right
        let w = sw * th / sh;
        FitRect {
            x: (tw - w) / 2.0,
            y: 0.0,
            w,
            h: th,
        }
    } else {
        let h = sh * tw / sw;
        FitRect {
            x: 0.0,
            y: (th - h) / 2.0,
            w: tw,
            h,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/fit.rs"]
mod tests;
