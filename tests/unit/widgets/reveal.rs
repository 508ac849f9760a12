use super::*;
use crate::{foundation::error::MirageError, render::cpu::CpuBackend};

struct NoShaderBackend;

impl ExposureBackend for NoShaderBackend {
    fn name(&self) -> &'static str {
        "none"
    }

    fn apply(&mut self, _src: &Bitmap, _ev: f32) -> MirageResult<Bitmap> {
        Err(MirageError::capability("shader support is not available"))
    }
}

fn gray(v: u8) -> Bitmap {
    Bitmap::from_rgba8(2, 2, [v, v, v, 255].repeat(4)).unwrap()
}

#[test]
fn defaults() {
    let r = RevealState::new(Box::new(CpuBackend::new()));
    assert_eq!(r.ev(), 0.0);
    assert_eq!(r.ev_label(), "0.0");
    assert_eq!(r.width_percent(), 80);
    assert_eq!(r.backend_name(), Some("cpu"));
    assert!(r.image().is_none());
}

#[test]
fn new_image_resets_exposure() {
    let mut r = RevealState::new(Box::new(CpuBackend::new()));
    r.set_image(gray(10));
    r.set_ev(3.0);
    assert_eq!(r.ev_label(), "3.0");
    r.set_image(gray(20));
    assert_eq!(r.ev(), 0.0);
}

#[test]
fn ev_is_clamped_and_snapped() {
    let mut r = RevealState::new(Box::new(CpuBackend::new()));
    r.set_ev(42.0);
    assert_eq!(r.ev_label(), "10.0");
    r.set_ev(-42.0);
    assert_eq!(r.ev_label(), "-10.0");
    r.set_ev(1.26);
    assert_eq!(r.ev_label(), "1.3");
    r.set_ev(-0.01);
    assert_eq!(r.ev_label(), "0.0");
    r.reset_ev();
    assert_eq!(r.ev(), 0.0);
}

#[test]
fn width_is_clamped() {
    let mut r = RevealState::new(Box::new(CpuBackend::new()));
    r.set_width_percent(5);
    assert_eq!(r.width_percent(), WIDTH_PERCENT_MIN);
    r.set_width_percent(200);
    assert_eq!(r.width_percent(), WIDTH_PERCENT_MAX);
    r.set_width_percent(50);
    assert_eq!(r.display_width(1000), 500);
    r.reset_width();
    assert_eq!(r.display_width(1000), 800);
}

#[test]
fn render_brightens_with_positive_ev() {
    let mut r = RevealState::new(Box::new(CpuBackend::new()));
    assert!(r.render().is_none());
    r.set_image(gray(20));
    assert_eq!(r.render().unwrap(), gray(20));
    r.set_ev(5.0);
    let out = r.render().unwrap();
    let [v, _, _, a] = out.pixel(0, 0).unwrap();
    assert!(v > 20);
    assert_eq!(a, 255);
}

#[test]
fn missing_shader_support_becomes_warning() {
    let mut r = RevealState::new(Box::new(NoShaderBackend));
    r.set_image(gray(20));
    assert!(r.render().is_none());
    assert_eq!(r.warning(), "shader support is not available");
}

#[test]
fn stale_reveal_load_is_dropped() {
    let mut r = RevealState::new(Box::new(CpuBackend::new()));
    let old = r.begin_load();
    let new = r.begin_load();
    assert!(r.finish_load(new, Ok(gray(1))));
    assert!(!r.finish_load(old, Ok(gray(2))));
    assert_eq!(r.image(), Some(&gray(1)));
}

#[cfg(not(feature = "gpu"))]
#[test]
fn gpu_kind_without_feature_warns() {
    let mut r = RevealState::with_backend(BackendKind::Gpu);
    assert!(r.backend_name().is_none());
    assert!(!r.warning().is_empty());
    r.set_image(gray(3));
    assert!(r.render().is_none());
}

#[test]
fn load_path_reads_png_and_resets_exposure() {
    let dir = std::path::PathBuf::from("target")
        .join("unit_fixtures")
        .join("reveal_load");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("gray.png");
    crate::assets::decode::save_png(&gray(40), &path).unwrap();

    let mut r = RevealState::new(Box::new(CpuBackend::new()));
    r.set_ev(2.0);
    assert!(r.load_path(&path));
    assert_eq!(r.image(), Some(&gray(40)));
    assert_eq!(r.ev(), 0.0);
}
