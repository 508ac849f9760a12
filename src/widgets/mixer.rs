use crate::color::mix::mix_hex;

/// Two-color blend with an alpha slider.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorMixer {
    start: String,
    end: String,
    alpha: f64,
}

impl Default for ColorMixer {
    fn default() -> Self {
        Self {
            start: "#ff0000".to_owned(),
            end: "#0000ff".to_owned(),
            alpha: 0.5,
        }
    }
}

impl ColorMixer {
    /// Red to blue at one half.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start color text.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// End color text.
    pub fn end(&self) -> &str {
        &self.end
    }

    /// Blend position in `[0, 1]`.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Edit the start color.
    pub fn set_start(&mut self, text: &str) {
        self.start = text.to_owned();
    }

    /// Edit the end color.
    pub fn set_end(&mut self, text: &str) {
        self.end = text.to_owned();
    }

    /// Move the alpha slider; clamped to `[0, 1]`, NaN ignored.
    pub fn set_alpha(&mut self, alpha: f64) {
        if !alpha.is_nan() {
            self.alpha = alpha.clamp(0.0, 1.0);
        }
    }

    /// Alpha with two decimals.
    pub fn alpha_label(&self) -> String {
        format!("{:.2}", self.alpha)
    }

    /// Blended `#rrggbb`, or `#000000` when either input is malformed.
    pub fn mixed(&self) -> String {
        mix_hex(&self.start, &self.end, self.alpha)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/mixer.rs"]
mod tests;
