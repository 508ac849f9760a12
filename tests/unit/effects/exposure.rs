use super::*;

#[test]
fn zero_ev_is_identity() {
    let lut = ExposureLut::new(0.0);
    for v in 0..=255u8 {
        assert_eq!(lut.map(v), v);
    }
}

#[test]
fn positive_ev_brightens_and_negative_darkens() {
    let up = ExposureLut::new(1.0);
    let down = ExposureLut::new(-1.0);
    for v in [16u8, 64, 128, 200] {
        assert!(up.map(v) > v);
        assert!(down.map(v) < v);
    }
    assert_eq!(up.map(0), 0);
    assert_eq!(up.map(255), 255);
}

#[test]
fn one_stop_matches_gamma_power() {
    // (c^2.2 * 2)^(1/2.2) = c * 2^(1/2.2)
    let c = 64.0f32 / 255.0;
    let expected = (c * 2f32.powf(1.0 / GAMMA) * 255.0).round() as u8;
    assert_eq!(ExposureLut::new(1.0).map(64), expected);
}

#[test]
fn ev_is_clamped() {
    assert_eq!(clamp_ev(25.0), EV_MAX);
    assert_eq!(clamp_ev(-25.0), EV_MIN);
    assert_eq!(clamp_ev(f32::NAN), 0.0);
    assert_eq!(ExposureLut::new(99.0).ev(), EV_MAX);
}

#[test]
fn alpha_passes_through() {
    let src = Bitmap::from_rgba8(2, 1, vec![10, 20, 30, 40, 50, 60, 70, 0]).unwrap();
    let out = ExposureLut::new(3.0).apply(&src).unwrap();
    assert_eq!(out.pixel(0, 0).unwrap()[3], 40);
    assert_eq!(out.pixel(1, 0).unwrap()[3], 0);
}
