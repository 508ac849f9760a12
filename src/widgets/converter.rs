use crate::{
    clipboard::Clipboard,
    color::convert::{Rgb8, parse_hex, parse_rgb},
    widgets::copy_button::CopyButton,
};

/// One of the converter's three text fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorField {
    /// `#rrggbb`.
    Hex,
    /// `r, g, b`.
    Rgb,
    /// `h, s%, l%` (read-only).
    Hsl,
}

/// A slider channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    /// Red.
    Red,
    /// Green.
    Green,
    /// Blue.
    Blue,
}

/// Hex / RGB / HSL converter with per-channel sliders.
///
/// Editing one representation updates the others. Unparseable input sets [`ColorConverter::error`]
/// and leaves every other field as it was.
#[derive(Clone, Debug)]
pub struct ColorConverter {
    hex: String,
    rgb: String,
    hsl: String,
    color: Rgb8,
    error: Option<String>,
    copy: [CopyButton; 3],
}

impl Default for ColorConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorConverter {
    /// Starts at black.
    pub fn new() -> Self {
        let color = Rgb8::default();
        Self {
            hex: color.to_hex(),
            rgb: color.to_string(),
            hsl: color.to_hsl().to_string(),
            color,
            error: None,
            copy: Default::default(),
        }
    }

    /// Hex field as last typed.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// RGB field as last typed.
    pub fn rgb(&self) -> &str {
        &self.rgb
    }

    /// HSL field.
    pub fn hsl(&self) -> &str {
        &self.hsl
    }

    /// Slider values.
    pub fn color(&self) -> Rgb8 {
        self.color
    }

    /// Inline error for the last edit, if it failed to parse.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Text edit in the hex field.
    pub fn set_hex(&mut self, text: &str) {
        self.hex = text.to_owned();
        match parse_hex(text) {
            Ok(c) => {
                self.rgb = c.to_string();
                self.sync(c);
            }
            Err(e) => self.error = Some(e.display_text()),
        }
    }

    /// Text edit in the RGB field.
    pub fn set_rgb(&mut self, text: &str) {
        self.rgb = text.to_owned();
        match parse_rgb(text) {
            Ok(c) => {
                self.hex = c.to_hex();
                self.sync(c);
            }
            Err(e) => self.error = Some(e.display_text()),
        }
    }

    /// Slider move on one channel.
    pub fn set_channel(&mut self, channel: Channel, value: u8) {
        let mut c = self.color;
        match channel {
            Channel::Red => c.r = value,
            Channel::Green => c.g = value,
            Channel::Blue => c.b = value,
        }
        self.set_color(c);
    }

    /// Color picker pick.
    pub fn set_color(&mut self, c: Rgb8) {
        self.hex = c.to_hex();
        self.rgb = c.to_string();
        self.sync(c);
    }

    /// Copy one field's text; see [`CopyButton`].
    pub fn copy(&mut self, field: ColorField, clipboard: &mut dyn Clipboard) -> bool {
        let (i, text) = match field {
            ColorField::Hex => (0, &self.hex),
            ColorField::Rgb => (1, &self.rgb),
            ColorField::Hsl => (2, &self.hsl),
        };
        self.copy[i].copy(clipboard, text)
    }

    /// Label of one field's copy button.
    pub fn copy_label(&self, field: ColorField) -> &'static str {
        let i = match field {
            ColorField::Hex => 0,
            ColorField::Rgb => 1,
            ColorField::Hsl => 2,
        };
        self.copy[i].label()
    }

    fn sync(&mut self, c: Rgb8) {
        self.color = c;
        self.hsl = c.to_hsl().to_string();
        self.error = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/converter.rs"]
mod tests;
