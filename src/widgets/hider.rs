use std::{
    path::Path,
    time::{Duration, Instant},
};

use crate::{
    assets::{
        decode::{decode_image, encode_png, load_image, save_png},
        file_size::format_file_size,
    },
    clipboard::Clipboard,
    effects::{interleave::interleave, tone::ToneControls},
    foundation::{core::Bitmap, error::MirageResult},
    layout::fit::FitMode,
    render::placement::prepare_pair,
    widgets::ticket::{LoadTicket, TicketCounter},
};

/// Warning when generating without both images.
pub const WARN_NOT_UPLOADED: &str = "images not uploaded";
/// Warning when exporting or copying before generating.
pub const WARN_NOT_GENERATED: &str = "image not generated yet";

/// Idle label of the image copy button.
pub const COPY_IMAGE_LABEL: &str = "Copy to clipboard";
/// Label while the image is being written.
pub const COPYING_IMAGE_LABEL: &str = "Copying";
/// Label after a successful image copy.
pub const COPIED_IMAGE_LABEL: &str = "Copied";

const COPIED_IMAGE_FOR: Duration = Duration::from_secs(2);

/// Which of the two inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Shown on light backgrounds.
    Visible,
    /// Revealed on dark backgrounds.
    Hidden,
}

/// Whether the loaded inputs have equal dimensions.
///
/// Advisory: generation proceeds either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeStatus {
    /// At least one input is missing.
    NotLoaded,
    /// Same width and height.
    Match,
    /// Different dimensions.
    Mismatch,
}

#[derive(Clone, Debug)]
struct LoadedImage {
    bitmap: Bitmap,
    file_size: u64,
}

#[derive(Clone, Copy, Debug, Default)]
enum CopyState {
    #[default]
    Idle,
    Copying,
    Copied(Instant),
}

/// State of the image hider: inputs, controls, warning text and the last composite.
#[derive(Clone, Debug, Default)]
pub struct HiderState {
    visible: Option<LoadedImage>,
    hidden: Option<LoadedImage>,
    tickets: [TicketCounter; 2],
    tone: ToneControls,
    mode: FitMode,
    warning: String,
    composite: Option<Bitmap>,
    copy_state: CopyState,
}

impl HiderState {
    /// No inputs, default controls, scale-to-fit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start loading into `slot`. Any load already in flight for that slot becomes stale.
    pub fn begin_load(&mut self, slot: Slot) -> LoadTicket {
        self.tickets[slot_index(slot)].issue()
    }

    /// Apply a finished load. Returns `false` and drops the result if a newer load has begun.
    ///
    /// Decode failures land in the warning text and keep the previous image.
    pub fn finish_load(
        &mut self,
        slot: Slot,
        ticket: LoadTicket,
        result: MirageResult<(Bitmap, u64)>,
    ) -> bool {
        if !self.tickets[slot_index(slot)].is_current(ticket) {
            tracing::debug!(?slot, "dropping stale image load");
            return false;
        }
        match result {
            Ok((bitmap, file_size)) => {
                tracing::debug!(
                    ?slot,
                    width = bitmap.width(),
                    height = bitmap.height(),
                    file_size,
                    "image loaded"
                );
                *self.slot_mut(slot) = Some(LoadedImage { bitmap, file_size });
            }
            Err(e) => {
                tracing::warn!(?slot, error = %e, "image load failed");
                self.warning = e.display_text();
            }
        }
        true
    }

    /// Decode an in-memory file into `slot`.
    pub fn load_bytes(&mut self, slot: Slot, bytes: &[u8]) -> bool {
        let ticket = self.begin_load(slot);
        let result = decode_image(bytes).map(|b| (b, bytes.len() as u64));
        self.finish_load(slot, ticket, result)
    }

    /// Read and decode a file into `slot`.
    pub fn load_path(&mut self, slot: Slot, path: &Path) -> bool {
        let ticket = self.begin_load(slot);
        let result = load_image(path);
        self.finish_load(slot, ticket, result)
    }

    /// Put an already decoded image into `slot`.
    pub fn set_image(&mut self, slot: Slot, bitmap: Bitmap, file_size: u64) {
        let ticket = self.begin_load(slot);
        self.finish_load(slot, ticket, Ok((bitmap, file_size)));
    }

    /// Loaded image in `slot`.
    pub fn image(&self, slot: Slot) -> Option<&Bitmap> {
        self.slot(slot).map(|l| &l.bitmap)
    }

    /// Human-readable size of the file loaded into `slot`.
    pub fn file_size_label(&self, slot: Slot) -> Option<String> {
        self.slot(slot).map(|l| format_file_size(l.file_size))
    }

    /// Compare input dimensions.
    pub fn size_status(&self) -> SizeStatus {
        match (&self.visible, &self.hidden) {
            (Some(v), Some(h)) if v.bitmap.same_size(&h.bitmap) => SizeStatus::Match,
            (Some(_), Some(_)) => SizeStatus::Mismatch,
            _ => SizeStatus::NotLoaded,
        }
    }

    /// Tone controls.
    pub fn tone(&self) -> ToneControls {
        self.tone
    }

    /// Replace the tone controls.
    pub fn set_tone(&mut self, tone: ToneControls) {
        self.tone = tone;
    }

    /// Placement of a differently sized hidden image.
    pub fn mode(&self) -> FitMode {
        self.mode
    }

    /// Choose the placement mode.
    pub fn set_mode(&mut self, mode: FitMode) {
        self.mode = mode;
    }

    /// Current warning, empty when there is none.
    pub fn warning(&self) -> &str {
        &self.warning
    }

    /// Last generated composite.
    pub fn composite(&self) -> Option<&Bitmap> {
        self.composite.as_ref()
    }

    /// Build the composite from the current inputs and controls.
    #[tracing::instrument(skip(self), fields(mode = ?self.mode))]
    pub fn generate(&mut self) -> Option<&Bitmap> {
        let (Some(visible), Some(hidden)) = (&self.visible, &self.hidden) else {
            self.warning = WARN_NOT_UPLOADED.to_owned();
            return None;
        };
        let (visible_tone, hidden_tone) = self.tone.factors();
        let result = prepare_pair(&visible.bitmap, &hidden.bitmap, self.mode)
            .and_then(|(v, h)| interleave(&v, &h, visible_tone, hidden_tone));
        match result {
            Ok(composite) => {
                self.warning.clear();
                self.composite = Some(composite);
                self.composite.as_ref()
            }
            Err(e) => {
                tracing::warn!(error = %e, "generate failed");
                self.warning = e.display_text();
                None
            }
        }
    }

    /// PNG bytes of the composite.
    pub fn export_png(&mut self) -> Option<Vec<u8>> {
        let composite = self.require_composite()?;
        match encode_png(composite) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                self.warning = e.display_text();
                None
            }
        }
    }

    /// Write the composite as a PNG file.
    pub fn save_png(&mut self, path: &Path) -> bool {
        let Some(composite) = self.require_composite() else {
            return false;
        };
        match save_png(composite, path) {
            Ok(()) => true,
            Err(e) => {
                self.warning = e.display_text();
                false
            }
        }
    }

    /// Copy the composite as an image.
    pub fn copy_image(&mut self, clipboard: &mut dyn Clipboard) -> bool {
        self.copy_image_at(clipboard, Instant::now())
    }

    /// [`HiderState::copy_image`] with an explicit clock reading.
    pub fn copy_image_at(&mut self, clipboard: &mut dyn Clipboard, now: Instant) -> bool {
        let Some(composite) = &self.composite else {
            self.warning = WARN_NOT_GENERATED.to_owned();
            return false;
        };
        self.copy_state = CopyState::Copying;
        match clipboard.write_image(composite) {
            Ok(()) => {
                self.copy_state = CopyState::Copied(now);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to copy image");
                self.warning = e.display_text();
                self.copy_state = CopyState::Idle;
                false
            }
        }
    }

    /// Label of the image copy button now.
    pub fn copy_label(&self) -> &'static str {
        self.copy_label_at(Instant::now())
    }

    /// Label of the image copy button at `now`.
    pub fn copy_label_at(&self, now: Instant) -> &'static str {
        match self.copy_state {
            CopyState::Idle => COPY_IMAGE_LABEL,
            CopyState::Copying => COPYING_IMAGE_LABEL,
            CopyState::Copied(t) if now.saturating_duration_since(t) < COPIED_IMAGE_FOR => {
                COPIED_IMAGE_LABEL
            }
            CopyState::Copied(_) => COPY_IMAGE_LABEL,
        }
    }

    fn require_composite(&mut self) -> Option<&Bitmap> {
        if self.composite.is_none() {
            self.warning = WARN_NOT_GENERATED.to_owned();
        }
        self.composite.as_ref()
    }

    fn slot(&self, slot: Slot) -> Option<&LoadedImage> {
        match slot {
            Slot::Visible => self.visible.as_ref(),
            Slot::Hidden => self.hidden.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<LoadedImage> {
        match slot {
            Slot::Visible => &mut self.visible,
            Slot::Hidden => &mut self.hidden,
        }
    }
}

fn slot_index(slot: Slot) -> usize {
    match slot {
        Slot::Visible => 0,
        Slot::Hidden => 1,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/hider.rs"]
mod tests;
