use super::*;

#[test]
fn defaults_blend_to_purple() {
    let m = ColorMixer::new();
    assert_eq!(m.start(), "#ff0000");
    assert_eq!(m.end(), "#0000ff");
    assert_eq!(m.alpha_label(), "0.50");
    assert_eq!(m.mixed(), "#800080");
}

#[test]
fn edits_recompute() {
    let mut m = ColorMixer::new();
    m.set_start("#000000");
    m.set_end("#ffffff");
    m.set_alpha(1.0);
    assert_eq!(m.mixed(), "#ffffff");
    m.set_alpha(3.0);
    assert_eq!(m.alpha(), 1.0);
    m.set_alpha(f64::NAN);
    assert_eq!(m.alpha(), 1.0);
}

#[test]
fn bad_input_shows_black() {
    let mut m = ColorMixer::new();
    m.set_end("blue");
    assert_eq!(m.mixed(), "#000000");
}
