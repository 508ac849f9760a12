use serde::{Deserialize, Serialize};

use crate::foundation::math::quantize_u8;

/// Mid-gray pivot for contrast.
pub const CONTRAST_PIVOT: f64 = 128.0;

/// Brightness and contrast factors for one source image.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToneParams {
    /// Multiplicative brightness, typically `0..=2`.
    pub brightness: f64,
    /// Contrast scale around mid-gray, typically `0..=1`.
    pub contrast: f64,
}

impl Default for ToneParams {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ToneParams {
    /// Leaves every channel unchanged.
    pub const IDENTITY: Self = Self {
        brightness: 1.0,
        contrast: 1.0,
    };

    /// Tone one RGB triple, returning clamped real channels.
    pub fn apply(self, rgb: [u8; 3]) -> [f64; 3] {
        adjust(rgb, self)
    }

    /// Tone one RGB triple and store it as 8-bit channels.
    pub fn apply_u8(self, rgb: [u8; 3]) -> [u8; 3] {
        self.apply(rgb).map(quantize_u8)
    }
}

/// Brightness first, then contrast around 128, clamped to `[0, 255]`.
pub fn adjust(rgb: [u8; 3], params: ToneParams) -> [f64; 3] {
    rgb.map(|c| {
        let bright = f64::from(c) * params.brightness;
        ((bright - CONTRAST_PIVOT) * params.contrast + CONTRAST_PIVOT).clamp(0.0, 255.0)
    })
}

/// The hider's four percent controls.
///
/// Factors are derived from these once per generated frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneControls {
    /// Brightness added to the visible image, in percent.
    pub visible_brightness_boost: i32,
    /// Brightness removed from the hidden image, in percent.
    pub hidden_brightness_reduce: i32,
    /// Contrast of the visible image, in percent.
    pub visible_contrast: i32,
    /// Contrast of the hidden image, in percent.
    pub hidden_contrast: i32,
}

impl Default for ToneControls {
    fn default() -> Self {
        Self {
            visible_brightness_boost: 100,
            hidden_brightness_reduce: 90,
            visible_contrast: 20,
            hidden_contrast: 100,
        }
    }
}

impl ToneControls {
    /// Tone for the visible image.
    pub fn visible(&self) -> ToneParams {
        ToneParams {
            brightness: 1.0 + f64::from(self.visible_brightness_boost) / 100.0,
            contrast: f64::from(self.visible_contrast) / 100.0,
        }
    }

    /// Tone for the hidden image.
    pub fn hidden(&self) -> ToneParams {
        ToneParams {
            brightness: 1.0 - f64::from(self.hidden_brightness_reduce) / 100.0,
            contrast: f64::from(self.hidden_contrast) / 100.0,
        }
    }

    /// `(visible, hidden)`.
    pub fn factors(&self) -> (ToneParams, ToneParams) {
        (self.visible(), self.hidden())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/tone.rs"]
mod tests;
