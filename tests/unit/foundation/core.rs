use super::*;

#[test]
fn from_rgba8_rejects_zero_dimensions() {
    assert!(Bitmap::from_rgba8(0, 1, vec![]).is_err());
    assert!(Bitmap::from_rgba8(1, 0, vec![]).is_err());
}

#[test]
fn from_rgba8_rejects_wrong_length() {
    let err = Bitmap::from_rgba8(2, 2, vec![0u8; 15]).unwrap_err();
    assert!(err.to_string().contains("16 bytes"));
}

#[test]
fn pixel_addressing_is_row_major() {
    let mut data = vec![0u8; 3 * 2 * 4];
    // (2, 1) -> index (1 * 3 + 2) * 4 = 20
    data[20..24].copy_from_slice(&[9, 8, 7, 6]);
    let bmp = Bitmap::from_rgba8(3, 2, data).unwrap();
    assert_eq!(bmp.pixel(2, 1), Some([9, 8, 7, 6]));
    assert_eq!(bmp.pixel(0, 0), Some([0, 0, 0, 0]));
    assert_eq!(bmp.pixel(3, 0), None);
    assert_eq!(bmp.pixel(0, 2), None);
}

#[test]
fn rgba_image_conversion_preserves_bytes() {
    let img = image::RgbaImage::from_raw(1, 2, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    let bmp = Bitmap::from_rgba_image(img.clone()).unwrap();
    assert_eq!(bmp.dimensions(), (1, 2));
    assert_eq!(bmp.to_rgba_image(), img);
}

#[test]
fn transparent_is_all_zero() {
    let bmp = Bitmap::transparent(4, 3).unwrap();
    assert_eq!(bmp.as_rgba8().len(), 48);
    assert!(bmp.as_rgba8().iter().all(|&b| b == 0));
}
