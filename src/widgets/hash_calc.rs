use crate::{
    clipboard::Clipboard,
    hash::digest::{HashAlgorithm, digest_text},
    widgets::copy_button::CopyButton,
};

/// Output before anything has been hashed.
pub const INITIAL_OUTPUT: &str = "Result";

/// Text box, algorithm menu and result field.
#[derive(Clone, Debug)]
pub struct HashCalculator {
    input: String,
    algorithm: String,
    output: String,
    copy: CopyButton,
}

impl Default for HashCalculator {
    fn default() -> Self {
        Self {
            input: String::new(),
            algorithm: HashAlgorithm::default().name().to_owned(),
            output: INITIAL_OUTPUT.to_owned(),
            copy: CopyButton::new(),
        }
    }
}

impl HashCalculator {
    /// Empty input, MD5 selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Selected algorithm name.
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Hex digest, [`INITIAL_OUTPUT`], or `Unsupported algorithm`.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Edit the input and recompute.
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_owned();
        self.calculate();
    }

    /// Pick an algorithm by name and recompute.
    pub fn set_algorithm(&mut self, name: &str) {
        self.algorithm = name.to_owned();
        self.calculate();
    }

    /// Recompute the output from the current input and algorithm.
    pub fn calculate(&mut self) {
        self.output = match digest_text(&self.algorithm, &self.input) {
            Ok(hex) => hex,
            Err(e) => e.display_text(),
        };
    }

    /// Copy the output; see [`CopyButton`].
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard) -> bool {
        self.copy.copy(clipboard, &self.output)
    }

    /// Copy button label.
    pub fn copy_label(&self) -> &'static str {
        self.copy.label()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/hash_calc.rs"]
mod tests;
