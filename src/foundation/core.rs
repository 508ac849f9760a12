use crate::foundation::error::{MirageError, MirageResult};

/// Decoded image: straight (non-premultiplied) RGBA8, row-major, top-to-bottom.
///
/// Dimensions are always non-zero and the buffer is exactly `width * height * 4` bytes.
/// A `Bitmap` is never mutated after construction; transforms produce new values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    rgba8: Vec<u8>,
}

impl Bitmap {
    /// Wrap a tightly packed RGBA8 buffer, validating its size.
    pub fn from_rgba8(width: u32, height: u32, rgba8: Vec<u8>) -> MirageResult<Self> {
        if width == 0 || height == 0 {
            return Err(MirageError::validation(format!(
                "bitmap dimensions must be positive, got {width}x{height}"
            )));
        }
        let expected = byte_len(width, height)?;
        if rgba8.len() != expected {
            return Err(MirageError::validation(format!(
                "rgba8 buffer for {width}x{height} must be {expected} bytes, got {}",
                rgba8.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8,
        })
    }

    /// Fully transparent black bitmap, the initial state of a fresh canvas.
    pub fn transparent(width: u32, height: u32) -> MirageResult<Self> {
        let len = byte_len(width, height)?;
        Self::from_rgba8(width, height, vec![0u8; len])
    }

    /// Build from an `image` crate buffer.
    pub fn from_rgba_image(img: image::RgbaImage) -> MirageResult<Self> {
        let (width, height) = img.dimensions();
        Self::from_rgba8(width, height, img.into_raw())
    }

    /// Copy into an `image` crate buffer (for resampling and encoding).
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_raw(self.width, self.height, self.rgba8.clone())
            .unwrap_or_else(|| image::RgbaImage::new(self.width, self.height))
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Return `true` when both bitmaps share width and height.
    pub fn same_size(&self, other: &Bitmap) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Raw RGBA8 bytes.
    pub fn as_rgba8(&self) -> &[u8] {
        &self.rgba8
    }

    /// Consume and return the raw RGBA8 bytes.
    pub fn into_rgba8(self) -> Vec<u8> {
        self.rgba8
    }

    /// Pixel at `(x, y)`, or `None` outside the bitmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        let px = &self.rgba8[i..i + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    pub(crate) fn offset(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }
}

fn byte_len(width: u32, height: u32) -> MirageResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or_else(|| MirageError::validation("bitmap byte length overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
