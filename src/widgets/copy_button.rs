use std::time::{Duration, Instant};

use crate::clipboard::Clipboard;

/// Idle label.
pub const COPY_LABEL: &str = "Copy";
/// Label shown after a successful copy.
pub const COPIED_LABEL: &str = "Copied";
/// How long [`COPIED_LABEL`] stays up.
pub const COPIED_FOR: Duration = Duration::from_secs(2);

/// A "copy this text" button with transient feedback.
///
/// Failures are logged and swallowed; the label only changes on success.
#[derive(Clone, Debug, Default)]
pub struct CopyButton {
    copied_at: Option<Instant>,
}

impl CopyButton {
    /// Button in its idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy `text`, returning whether the write succeeded.
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard, text: &str) -> bool {
        self.copy_at(clipboard, text, Instant::now())
    }

    /// [`CopyButton::copy`] with an explicit clock reading.
    pub fn copy_at(&mut self, clipboard: &mut dyn Clipboard, text: &str, now: Instant) -> bool {
        match clipboard.write_text(text) {
            Ok(()) => {
                self.copied_at = Some(now);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to copy text");
                false
            }
        }
    }

    /// Label to show now.
    pub fn label(&self) -> &'static str {
        self.label_at(Instant::now())
    }

    /// Label to show at `now`.
    pub fn label_at(&self, now: Instant) -> &'static str {
        match self.copied_at {
            Some(t) if now.saturating_duration_since(t) < COPIED_FOR => COPIED_LABEL,
            _ => COPY_LABEL,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/copy_button.rs"]
mod tests;
