use crate::{
    effects::tone::ToneParams,
    foundation::{
        core::Bitmap,
        error::{MirageError, MirageResult},
    },
};

/// Which source a checkerboard cell belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    /// Even `(x + y)` cells.
    Visible,
    /// Odd `(x + y)` cells.
    Hidden,
}

impl Layer {
    /// Layer owning the cell at `(x, y)`.
    pub fn at(x: u32, y: u32) -> Self {
        if (u64::from(x) + u64::from(y)) % 2 == 0 {
            Self::Visible
        } else {
            Self::Hidden
        }
    }
}

/// Merge two same-sized bitmaps by checkerboard selection.
///
/// Even cells take the toned visible pixel, odd cells the toned hidden pixel.
/// Output alpha is always 255. Input alpha is ignored.
#[tracing::instrument(skip_all, fields(width = visible.width(), height = visible.height()))]
pub fn interleave(
    visible: &Bitmap,
    hidden: &Bitmap,
    visible_tone: ToneParams,
    hidden_tone: ToneParams,
) -> MirageResult<Bitmap> {
    if !visible.same_size(hidden) {
        return Err(MirageError::validation(format!(
            "interleave expects equal-size bitmaps, got {}x{} and {}x{}",
            visible.width(),
            visible.height(),
            hidden.width(),
            hidden.height()
        )));
    }

    let (w, h) = visible.dimensions();
    let mut out = Vec::with_capacity(visible.as_rgba8().len());
    let rows = visible
        .as_rgba8()
        .chunks_exact(w as usize * 4)
        .zip(hidden.as_rgba8().chunks_exact(w as usize * 4));
    for (y, (vis_row, hid_row)) in (0..h).zip(rows) {
        for (x, (v, d)) in (0..w).zip(vis_row.chunks_exact(4).zip(hid_row.chunks_exact(4))) {
            let [r, g, b] = match Layer::at(x, y) {
                Layer::Visible => visible_tone.apply_u8([v[0], v[1], v[2]]),
                Layer::Hidden => hidden_tone.apply_u8([d[0], d[1], d[2]]),
            };
            out.extend_from_slice(&[r, g, b, 255]);
        }
    }

    Bitmap::from_rgba8(w, h, out)
}

/// Approximate one source from a composite.
///
/// Cells of the requested layer are kept; every other cell is filled from its
/// horizontal neighbour of that layer (vertical for one-pixel-wide images).
pub fn extract_layer(composite: &Bitmap, layer: Layer) -> MirageResult<Bitmap> {
    let (w, h) = composite.dimensions();
    let mut out = composite.as_rgba8().to_vec();
    for y in 0..h {
        for x in 0..w {
            if Layer::at(x, y) == layer {
                continue;
            }
            let src = if x + 1 < w {
                composite.pixel(x + 1, y)
            } else if x > 0 {
                composite.pixel(x - 1, y)
            } else if y + 1 < h {
                composite.pixel(x, y + 1)
            } else if y > 0 {
                composite.pixel(x, y - 1)
            } else {
                Some([0, 0, 0, 255])
            };
            let i = composite.offset(x, y);
            if let Some(px) = src {
                out[i..i + 4].copy_from_slice(&px);
            }
        }
    }
    Bitmap::from_rgba8(w, h, out)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/interleave.rs"]
mod tests;
