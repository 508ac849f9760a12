use super::*;

#[test]
fn cpu_backend_matches_lut() {
    let src = Bitmap::from_rgba8(2, 1, vec![10, 100, 200, 255, 0, 128, 255, 7]).unwrap();
    let mut backend = CpuBackend::new();
    let out = backend.apply(&src, 1.5).unwrap();
    assert_eq!(out, ExposureLut::new(1.5).apply(&src).unwrap());
    assert_eq!(backend.name(), "cpu");
}

#[test]
fn cpu_backend_reuses_and_rebuilds_table() {
    let src = Bitmap::from_rgba8(1, 1, vec![64, 64, 64, 255]).unwrap();
    let mut backend = CpuBackend::new();
    let a = backend.apply(&src, 2.0).unwrap();
    let b = backend.apply(&src, 2.0).unwrap();
    assert_eq!(a, b);
    let c = backend.apply(&src, -2.0).unwrap();
    assert!(c.pixel(0, 0).unwrap()[0] < a.pixel(0, 0).unwrap()[0]);
}

#[test]
fn create_backend_cpu_is_available() {
    let backend = crate::render::backend::create_backend(crate::render::backend::BackendKind::Cpu)
        .unwrap();
    assert_eq!(backend.name(), "cpu");
}

#[cfg(not(feature = "gpu"))]
#[test]
fn create_backend_gpu_without_feature_is_capability_error() {
    let err = crate::render::backend::create_backend(crate::render::backend::BackendKind::Gpu)
        .err()
        .unwrap();
    assert!(matches!(err, crate::MirageError::Capability(_)));
}
