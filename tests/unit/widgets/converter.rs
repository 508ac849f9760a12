use super::*;
use crate::clipboard::MemoryClipboard;

#[test]
fn starts_at_black() {
    let c = ColorConverter::new();
    assert_eq!(c.hex(), "#000000");
    assert_eq!(c.rgb(), "0, 0, 0");
    assert_eq!(c.hsl(), "0, 0%, 0%");
    assert_eq!(c.color(), Rgb8::new(0, 0, 0));
    assert!(c.error().is_none());
}

#[test]
fn hex_edit_updates_rgb_hsl_and_sliders() {
    let mut c = ColorConverter::new();
    c.set_hex("#ff0000");
    assert_eq!(c.rgb(), "255, 0, 0");
    assert_eq!(c.hsl(), "0, 100%, 50%");
    assert_eq!(c.color(), Rgb8::new(255, 0, 0));
}

#[test]
fn rgb_edit_updates_hex() {
    let mut c = ColorConverter::new();
    c.set_rgb("0, 128, 255");
    assert_eq!(c.hex(), "#0080ff");
    assert_eq!(c.rgb(), "0, 128, 255");
}

#[test]
fn invalid_edit_sets_error_and_keeps_other_fields() {
    let mut c = ColorConverter::new();
    c.set_hex("#336699");
    c.set_hex("#33669");
    assert!(c.error().is_some());
    assert_eq!(c.hex(), "#33669");
    assert_eq!(c.rgb(), "51, 102, 153");
    assert_eq!(c.hsl(), "210, 50%, 40%");

    c.set_rgb("51, x, 153");
    assert!(c.error().is_some());
    assert_eq!(c.hex(), "#33669");

    c.set_rgb("1, 2, 3");
    assert!(c.error().is_none());
    assert_eq!(c.hex(), "#010203");
}

#[test]
fn slider_moves_one_channel() {
    let mut c = ColorConverter::new();
    c.set_channel(Channel::Green, 255);
    c.set_channel(Channel::Blue, 16);
    assert_eq!(c.hex(), "#00ff10");
    assert_eq!(c.rgb(), "0, 255, 16");
}

#[test]
fn copy_writes_field_text() {
    let mut c = ColorConverter::new();
    c.set_hex("#abcdef");
    let mut cb = MemoryClipboard::new();
    assert!(c.copy(ColorField::Rgb, &mut cb));
    assert_eq!(cb.text(), Some("171, 205, 239"));
    assert_eq!(c.copy_label(ColorField::Rgb), "Copied");
    assert_eq!(c.copy_label(ColorField::Hex), "Copy");
}
