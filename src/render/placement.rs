use image::imageops::{self, FilterType};

use crate::{
    foundation::{core::Bitmap, error::MirageResult},
    layout::fit::{FitMode, FitRect, fit},
};

/// Draw `source` into a transparent `frame_w x frame_h` canvas at `rect`.
///
/// The rectangle is rounded to whole pixels; anything outside the frame is clipped.
/// Resampling is bilinear on premultiplied color, so fully transparent pixels read
/// back as transparent black whatever RGB they stored.
pub fn place(source: &Bitmap, rect: FitRect, frame_w: u32, frame_h: u32) -> MirageResult<Bitmap> {
    let mut canvas = image::RgbaImage::new(frame_w, frame_h);

    let w = rect.w.round();
    let h = rect.h.round();
    if !(w >= 1.0 && h >= 1.0) {
        return Bitmap::from_rgba_image(canvas);
    }
    let (w, h) = (w as u32, h as u32);

    let mut src = source.to_rgba_image();
    premultiply(&mut src);
    let scaled = if (w, h) == source.dimensions() {
        src
    } else {
        imageops::resize(&src, w, h, FilterType::Triangle)
    };
    imageops::replace(
        &mut canvas,
        &scaled,
        rect.x.round() as i64,
        rect.y.round() as i64,
    );
    unpremultiply(&mut canvas);

    Bitmap::from_rgba_image(canvas)
}

/// `source` as it reads back after being drawn 1:1 onto a canvas.
///
/// Color passes through premultiplied storage: `a == 0` pixels lose their RGB and
/// partially transparent ones are quantized the same way.
pub(crate) fn drawn(source: &Bitmap) -> MirageResult<Bitmap> {
    let (w, h) = source.dimensions();
    let mut data = source.clone().into_rgba8();
    for px in data.chunks_exact_mut(4) {
        let a = px[3];
        for c in &mut px[..3] {
            *c = unpremultiply_channel(premultiply_channel(*c, a), a);
        }
    }
    Bitmap::from_rgba8(w, h, data)
}

fn premultiply_channel(c: u8, a: u8) -> u8 {
    ((u32::from(c) * u32::from(a) + 127) / 255) as u8
}

fn unpremultiply_channel(c: u8, a: u8) -> u8 {
    if a == 0 {
        return 0;
    }
    let a = u32::from(a);
    ((u32::from(c) * 255 + a / 2) / a).min(255) as u8
}

fn premultiply(img: &mut image::RgbaImage) {
    for px in img.pixels_mut() {
        let a = px[3];
        for c in &mut px.0[..3] {
            *c = premultiply_channel(*c, a);
        }
    }
}

fn unpremultiply(img: &mut image::RgbaImage) {
    for px in img.pixels_mut() {
        let a = px[3];
        for c in &mut px.0[..3] {
            *c = unpremultiply_channel(*c, a);
        }
    }
}

/// Bring both sources into the visible image's frame.
///
/// The visible image is used 1:1. The hidden image is placed by `mode`. Both come
/// back with canvas color semantics: fully transparent pixels read as black.
#[tracing::instrument(skip_all, fields(?mode))]
pub fn prepare_pair(
    visible: &Bitmap,
    hidden: &Bitmap,
    mode: FitMode,
) -> MirageResult<(Bitmap, Bitmap)> {
    let (frame_w, frame_h) = visible.dimensions();
    let visible = drawn(visible)?;
    if hidden.same_size(&visible) {
        return Ok((visible, drawn(hidden)?));
    }

    let rect = fit(hidden.width(), hidden.height(), frame_w, frame_h, mode);
    tracing::debug!(
        x = rect.x,
        y = rect.y,
        w = rect.w,
        h = rect.h,
        "placing hidden image"
    );
    let placed = place(hidden, rect, frame_w, frame_h)?;
    Ok((visible, placed))
}

#[cfg(test)]
#[path = "../../tests/unit/render/placement.rs"]
mod tests;
