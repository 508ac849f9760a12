use std::path::Path;

use crate::{
    assets::decode::{decode_image, load_image},
    effects::exposure::{EV_STEP, clamp_ev},
    foundation::{core::Bitmap, error::MirageResult},
    render::backend::{BackendKind, ExposureBackend, create_backend},
    widgets::ticket::{LoadTicket, TicketCounter},
};

/// Narrowest display width, in percent of the container.
pub const WIDTH_PERCENT_MIN: u8 = 20;
/// Widest display width.
pub const WIDTH_PERCENT_MAX: u8 = 100;
/// Initial display width.
pub const WIDTH_PERCENT_DEFAULT: u8 = 80;

/// State of the exposure reveal tool.
pub struct RevealState {
    image: Option<Bitmap>,
    ev: f32,
    width_percent: u8,
    backend: Option<Box<dyn ExposureBackend>>,
    warning: String,
    ticket: TicketCounter,
}

impl RevealState {
    /// Reveal tool on an explicit backend.
    pub fn new(backend: Box<dyn ExposureBackend>) -> Self {
        Self {
            backend: Some(backend),
            ..Self::without_backend()
        }
    }

    /// Reveal tool on a backend chosen by kind.
    ///
    /// If the backend cannot be created the tool stays usable for loading but
    /// [`RevealState::render`] only reports the warning.
    pub fn with_backend(kind: BackendKind) -> Self {
        match create_backend(kind) {
            Ok(backend) => Self::new(backend),
            Err(e) => {
                tracing::warn!(?kind, error = %e, "exposure backend unavailable");
                Self {
                    warning: e.display_text(),
                    ..Self::without_backend()
                }
            }
        }
    }

    fn without_backend() -> Self {
        Self {
            image: None,
            ev: 0.0,
            width_percent: WIDTH_PERCENT_DEFAULT,
            backend: None,
            warning: String::new(),
            ticket: TicketCounter::default(),
        }
    }

    /// Name of the active backend.
    pub fn backend_name(&self) -> Option<&'static str> {
        self.backend.as_ref().map(|b| b.name())
    }

    /// Start loading a new image. Earlier loads in flight become stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.ticket.issue()
    }

    /// Apply a finished load. A new image resets exposure to 0.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: MirageResult<Bitmap>) -> bool {
        if !self.ticket.is_current(ticket) {
            tracing::debug!("dropping stale reveal load");
            return false;
        }
        match result {
            Ok(bitmap) => {
                self.image = Some(bitmap);
                self.ev = 0.0;
            }
            Err(e) => {
                tracing::warn!(error = %e, "reveal load failed");
                self.warning = e.display_text();
            }
        }
        true
    }

    /// Decode an in-memory file.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> bool {
        let ticket = self.begin_load();
        self.finish_load(ticket, decode_image(bytes))
    }

    /// Read and decode a file.
    pub fn load_path(&mut self, path: &Path) -> bool {
        let ticket = self.begin_load();
        self.finish_load(ticket, load_image(path).map(|(b, _)| b))
    }

    /// Use an already decoded image.
    pub fn set_image(&mut self, bitmap: Bitmap) {
        let ticket = self.begin_load();
        self.finish_load(ticket, Ok(bitmap));
    }

    /// Loaded image.
    pub fn image(&self) -> Option<&Bitmap> {
        self.image.as_ref()
    }

    /// Exposure in EV.
    pub fn ev(&self) -> f32 {
        self.ev
    }

    /// Move the exposure slider. Clamped to the EV range and snapped to its step.
    pub fn set_ev(&mut self, ev: f32) {
        // + 0.0 folds -0.0 into 0.0
        self.ev = (clamp_ev(ev) / EV_STEP).round() * EV_STEP + 0.0;
    }

    /// Exposure back to 0.
    pub fn reset_ev(&mut self) {
        self.ev = 0.0;
    }

    /// Exposure with one decimal.
    pub fn ev_label(&self) -> String {
        format!("{:.1}", self.ev)
    }

    /// Display width in percent.
    pub fn width_percent(&self) -> u8 {
        self.width_percent
    }

    /// Move the width slider.
    pub fn set_width_percent(&mut self, percent: u8) {
        self.width_percent = percent.clamp(WIDTH_PERCENT_MIN, WIDTH_PERCENT_MAX);
    }

    /// Width back to the default.
    pub fn reset_width(&mut self) {
        self.width_percent = WIDTH_PERCENT_DEFAULT;
    }

    /// Display width in pixels inside a container `container_px` wide.
    pub fn display_width(&self, container_px: u32) -> u32 {
        (u64::from(container_px) * u64::from(self.width_percent) / 100) as u32
    }

    /// Current warning, empty when there is none.
    pub fn warning(&self) -> &str {
        &self.warning
    }

    /// Exposure-adjusted image, or `None` with a warning when no backend is available.
    #[tracing::instrument(skip(self), fields(ev = self.ev))]
    pub fn render(&mut self) -> Option<Bitmap> {
        let image = self.image.as_ref()?;
        let Some(backend) = self.backend.as_mut() else {
            return None;
        };
        match backend.apply(image, self.ev) {
            Ok(out) => Some(out),
            Err(e) => {
                tracing::warn!(backend = backend.name(), error = %e, "exposure render failed");
                self.warning = e.display_text();
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/reveal.rs"]
mod tests;
