use crate::{
    effects::exposure::{ExposureLut, clamp_ev},
    foundation::{core::Bitmap, error::MirageResult},
    render::backend::ExposureBackend,
};

/// CPU exposure backend. Keeps the last lookup table while EV is unchanged.
#[derive(Debug, Default)]
pub struct CpuBackend {
    lut: Option<ExposureLut>,
}

impl CpuBackend {
    /// New backend with no cached table.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExposureBackend for CpuBackend {
    fn name(&self) -> &'static str {
        "cpu"
    }

    fn apply(&mut self, src: &Bitmap, ev: f32) -> MirageResult<Bitmap> {
        let ev = clamp_ev(ev);
        let lut = match self.lut.take() {
            Some(lut) if lut.ev() == ev => lut,
            _ => ExposureLut::new(ev),
        };
        let out = lut.apply(src);
        self.lut = Some(lut);
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
