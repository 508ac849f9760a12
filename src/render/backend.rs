use crate::foundation::{core::Bitmap, error::MirageResult};

/// Applies the reveal tool's exposure adjustment.
pub trait ExposureBackend {
    /// Short backend name for diagnostics.
    fn name(&self) -> &'static str;

    /// Return `src` with exposure `ev` applied to its color channels.
    fn apply(&mut self, src: &Bitmap, ev: f32) -> MirageResult<Bitmap>;
}

/// Available exposure implementations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendKind {
    /// Lookup-table implementation on the CPU.
    #[default]
    Cpu,
    /// Fragment shader via `wgpu` (requires the `gpu` feature and an adapter).
    Gpu,
}

/// Construct a backend, failing with [`MirageError::Capability`](crate::MirageError::Capability)
/// when it is unavailable here.
pub fn create_backend(kind: BackendKind) -> MirageResult<Box<dyn ExposureBackend>> {
    match kind {
        BackendKind::Cpu => Ok(Box::new(crate::render::cpu::CpuBackend::new())),
        #[cfg(feature = "gpu")]
        BackendKind::Gpu => Ok(Box::new(crate::render::gpu::GpuBackend::new()?)),
        #[cfg(not(feature = "gpu"))]
        BackendKind::Gpu => Err(crate::foundation::error::MirageError::capability(
            "shader support is not available (built without the `gpu` feature)",
        )),
    }
}
