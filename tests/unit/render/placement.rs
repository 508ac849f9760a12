use super::*;

fn solid(w: u32, h: u32, px: [u8; 4]) -> Bitmap {
    Bitmap::from_rgba8(w, h, px.repeat((w * h) as usize)).unwrap()
}

#[test]
fn full_rect_same_size_is_copy() {
    let src = Bitmap::from_rgba8(2, 1, vec![1, 2, 3, 255, 5, 6, 7, 255]).unwrap();
    let out = place(&src, FitRect::full(2.0, 1.0), 2, 1).unwrap();
    assert_eq!(out, src);
}

#[test]
fn letterbox_leaves_transparent_margins() {
    let hidden = solid(20, 10, [255, 0, 0, 255]);
    let visible = solid(10, 10, [0, 0, 255, 255]);
    let (v, h) = prepare_pair(&visible, &hidden, FitMode::ScaleToFit).unwrap();

    assert_eq!(v, visible);
    assert_eq!(h.dimensions(), (10, 10));
    // y = 2.5 rounds to 3, h = 5: rows 3..8 are covered
    assert_eq!(h.pixel(5, 0), Some([0, 0, 0, 0]));
    assert_eq!(h.pixel(5, 9), Some([0, 0, 0, 0]));
    assert_eq!(h.pixel(5, 5), Some([255, 0, 0, 255]));
}

#[test]
fn stretch_fills_frame() {
    let hidden = solid(3, 7, [9, 9, 9, 255]);
    let visible = solid(8, 4, [0, 0, 0, 255]);
    let (_, h) = prepare_pair(&visible, &hidden, FitMode::Stretch).unwrap();
    assert_eq!(h.dimensions(), (8, 4));
    assert!(h.as_rgba8().chunks_exact(4).all(|px| px == [9, 9, 9, 255]));
}

#[test]
fn degenerate_rect_draws_nothing() {
    let src = solid(4, 4, [1, 1, 1, 255]);
    let rect = FitRect {
        x: 0.0,
        y: 0.0,
        w: 0.2,
        h: 4.0,
    };
    let out = place(&src, rect, 4, 4).unwrap();
    assert!(out.as_rgba8().iter().all(|&b| b == 0));
}

#[test]
fn negative_offsets_are_clipped() {
    let src = solid(4, 4, [7, 7, 7, 255]);
    let rect = FitRect {
        x: -2.0,
        y: -2.0,
        w: 4.0,
        h: 4.0,
    };
    let out = place(&src, rect, 4, 4).unwrap();
    assert_eq!(out.pixel(0, 0), Some([7, 7, 7, 255]));
    assert_eq!(out.pixel(1, 1), Some([7, 7, 7, 255]));
    assert_eq!(out.pixel(2, 2), Some([0, 0, 0, 0]));
}

#[test]
fn transparent_pixels_read_back_black() {
    let white_clear = solid(2, 1, [255, 255, 255, 0]);
    let (v, h) = prepare_pair(&white_clear, &white_clear, FitMode::Stretch).unwrap();
    assert_eq!(v.pixel(0, 0), Some([0, 0, 0, 0]));
    assert_eq!(h.pixel(1, 0), Some([0, 0, 0, 0]));
}

#[test]
fn partial_alpha_keeps_color() {
    let src = solid(1, 1, [255, 0, 0, 128]);
    assert_eq!(drawn(&src).unwrap().pixel(0, 0), Some([255, 0, 0, 128]));
}

#[test]
fn resampling_does_not_bleed_transparent_color() {
    let src = Bitmap::from_rgba8(2, 1, vec![255, 255, 255, 0, 0, 0, 0, 255]).unwrap();
    let visible = solid(8, 1, [0, 0, 0, 255]);
    let (_, h) = prepare_pair(&visible, &src, FitMode::Stretch).unwrap();
    for px in h.as_rgba8().chunks_exact(4) {
        assert_eq!(&px[..3], &[0, 0, 0], "{px:?}");
    }
}
