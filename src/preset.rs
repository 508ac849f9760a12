use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::{
    effects::tone::ToneControls,
    foundation::error::MirageResult,
    layout::fit::FitMode,
};

/// Saved hider settings, stored as JSON.
///
/// Missing fields take their defaults, so `{}` is a valid preset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HidePreset {
    /// Tone controls for both images.
    pub tone: ToneControls,
    /// Placement of a differently sized hidden image.
    pub mode: FitMode,
}

impl HidePreset {
    /// Parse a preset from JSON text.
    pub fn from_json_str(json: &str) -> MirageResult<Self> {
        let preset = serde_json::from_str(json).context("parse hide preset JSON")?;
        Ok(preset)
    }

    /// Read a preset file.
    pub fn from_path(path: &Path) -> MirageResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read hide preset '{}'", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Pretty-printed JSON.
    pub fn to_json_string(&self) -> MirageResult<String> {
        let json = serde_json::to_string_pretty(self).context("serialize hide preset")?;
        Ok(json)
    }
}

#[cfg(test)]
#[path = "../tests/unit/preset.rs"]
mod tests;
