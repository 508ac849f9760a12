use super::*;

fn solid(w: u32, h: u32, px: [u8; 4]) -> Bitmap {
    Bitmap::from_rgba8(w, h, px.repeat((w * h) as usize)).unwrap()
}

#[test]
fn origin_is_visible_and_next_is_hidden() {
    let visible = solid(4, 3, [200, 100, 50, 255]);
    let hidden = solid(4, 3, [10, 20, 30, 255]);
    let vt = ToneParams {
        brightness: 1.2,
        contrast: 0.5,
    };
    let ht = ToneParams {
        brightness: 0.5,
        contrast: 1.0,
    };

    let out = interleave(&visible, &hidden, vt, ht).unwrap();
    let [r, g, b] = vt.apply_u8([200, 100, 50]);
    assert_eq!(out.pixel(0, 0), Some([r, g, b, 255]));
    let [r, g, b] = ht.apply_u8([10, 20, 30]);
    assert_eq!(out.pixel(1, 0), Some([r, g, b, 255]));
}

#[test]
fn checkerboard_parity_covers_every_pixel() {
    let visible = solid(5, 4, [255, 255, 255, 255]);
    let hidden = solid(5, 4, [0, 0, 0, 255]);
    let out = interleave(&visible, &hidden, ToneParams::IDENTITY, ToneParams::IDENTITY).unwrap();
    for y in 0..4 {
        for x in 0..5 {
            let expected = if (x + y) % 2 == 0 { 255 } else { 0 };
            assert_eq!(out.pixel(x, y), Some([expected, expected, expected, 255]));
        }
    }
}

#[test]
fn output_alpha_is_opaque_regardless_of_input() {
    let visible = solid(2, 2, [1, 2, 3, 0]);
    let hidden = solid(2, 2, [4, 5, 6, 17]);
    let out = interleave(&visible, &hidden, ToneParams::IDENTITY, ToneParams::IDENTITY).unwrap();
    assert!(out.as_rgba8().chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn mismatched_sizes_are_rejected() {
    let a = solid(2, 2, [0, 0, 0, 255]);
    let b = solid(3, 2, [0, 0, 0, 255]);
    let err = interleave(&a, &b, ToneParams::IDENTITY, ToneParams::IDENTITY).unwrap_err();
    assert!(matches!(err, MirageError::Validation(_)));
}

#[test]
fn extract_recovers_solid_sources() {
    let visible = solid(6, 5, [200, 10, 10, 255]);
    let hidden = solid(6, 5, [10, 10, 200, 255]);
    let out = interleave(&visible, &hidden, ToneParams::IDENTITY, ToneParams::IDENTITY).unwrap();

    assert_eq!(extract_layer(&out, Layer::Visible).unwrap(), visible);
    assert_eq!(extract_layer(&out, Layer::Hidden).unwrap(), hidden);
}

#[test]
fn extract_single_column_uses_vertical_neighbour() {
    let visible = solid(1, 3, [9, 9, 9, 255]);
    let hidden = solid(1, 3, [1, 1, 1, 255]);
    let out = interleave(&visible, &hidden, ToneParams::IDENTITY, ToneParams::IDENTITY).unwrap();
    assert_eq!(extract_layer(&out, Layer::Hidden).unwrap(), hidden);
}
