use std::{io::Cursor, path::Path};

use anyhow::Context;

use crate::foundation::{core::Bitmap, error::MirageResult};

/// Decode encoded image bytes (any format the `image` crate reads) into a straight RGBA8 [`Bitmap`].
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode_image(bytes: &[u8]) -> MirageResult<Bitmap> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let bitmap = Bitmap::from_rgba_image(dyn_img.to_rgba8())?;
    tracing::debug!(
        width = bitmap.width(),
        height = bitmap.height(),
        "decoded image"
    );
    Ok(bitmap)
}

/// Read and decode an image file, also returning its encoded size in bytes.
pub fn load_image(path: &Path) -> MirageResult<(Bitmap, u64)> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    let bitmap = decode_image(&bytes)
        .map_err(|e| anyhow::Error::new(e).context(format!("decode '{}'", path.display())))?;
    Ok((bitmap, bytes.len() as u64))
}

/// Encode a bitmap as PNG bytes.
pub fn encode_png(bitmap: &Bitmap) -> MirageResult<Vec<u8>> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(bitmap.to_rgba_image())
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

/// Write a bitmap to `path` as PNG, creating parent directories as needed.
pub fn save_png(bitmap: &Bitmap, path: &Path) -> MirageResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        bitmap.as_rgba8(),
        bitmap.width(),
        bitmap.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
