use crate::foundation::{
    core::Bitmap,
    error::{MirageError, MirageResult},
};

/// Destination for copied text and images.
///
/// Writes are one-shot: a failure leaves nothing half-written and is not retried.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> MirageResult<()>;
    /// Replace the clipboard contents with an RGBA image.
    fn write_image(&mut self, image: &Bitmap) -> MirageResult<()>;
}

/// Last written entry of a [`MemoryClipboard`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClipboardContent {
    /// Plain text.
    Text(String),
    /// An image.
    Image(Bitmap),
}

/// In-process clipboard for headless use and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    content: Option<ClipboardContent>,
    denied: bool,
}

impl MemoryClipboard {
    /// Empty clipboard that accepts writes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clipboard that rejects every write, as when the user denies permission.
    pub fn denied() -> Self {
        Self {
            content: None,
            denied: true,
        }
    }

    /// Current contents.
    pub fn content(&self) -> Option<&ClipboardContent> {
        self.content.as_ref()
    }

    /// Current contents if they are text.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            Some(ClipboardContent::Text(t)) => Some(t),
            _ => None,
        }
    }

    /// Current contents if they are an image.
    pub fn image(&self) -> Option<&Bitmap> {
        match &self.content {
            Some(ClipboardContent::Image(b)) => Some(b),
            _ => None,
        }
    }

    fn check(&self) -> MirageResult<()> {
        if self.denied {
            return Err(MirageError::capability("clipboard write permission denied"));
        }
        Ok(())
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> MirageResult<()> {
        self.check()?;
        self.content = Some(ClipboardContent::Text(text.to_owned()));
        Ok(())
    }

    fn write_image(&mut self, image: &Bitmap) -> MirageResult<()> {
        self.check()?;
        self.content = Some(ClipboardContent::Image(image.clone()));
        Ok(())
    }
}

/// The operating system clipboard.
#[cfg(feature = "system-clipboard")]
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

#[cfg(feature = "system-clipboard")]
impl SystemClipboard {
    /// Connect to the system clipboard.
    pub fn new() -> MirageResult<Self> {
        let inner = arboard::Clipboard::new()
            .map_err(|e| MirageError::capability(format!("clipboard unavailable: {e}")))?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "system-clipboard")]
impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> MirageResult<()> {
        self.inner
            .set_text(text)
            .map_err(|e| MirageError::capability(format!("clipboard write failed: {e}")))
    }

    fn write_image(&mut self, image: &Bitmap) -> MirageResult<()> {
        let data = arboard::ImageData {
            width: image.width() as usize,
            height: image.height() as usize,
            bytes: std::borrow::Cow::Borrowed(image.as_rgba8()),
        };
        self.inner
            .set_image(data)
            .map_err(|e| MirageError::capability(format!("clipboard image write failed: {e}")))
    }
}

#[cfg(test)]
#[path = "../tests/unit/clipboard.rs"]
mod tests;
