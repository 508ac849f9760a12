//! Mirage hides one image inside another and brings it back out.
//!
//! The hider interleaves a toned *visible* image and a toned *hidden* image on a pixel
//! checkerboard: on a light background the visible image dominates, on a dark one the hidden
//! image shows through. The reveal tool raises exposure to make a hidden image readable.
//!
//! Alongside the image tools the crate carries a few small utilities that share the same
//! error model and clipboard seam:
//!
//! - hex / RGB / HSL color conversion and a two-color mixer
//! - MD5, SHA-1, SHA-256 and SHA-512 text digests
//!
//! Each tool also exists as an explicit state struct ([`HiderState`], [`RevealState`],
//! [`ColorConverter`], [`ColorMixer`], [`HashCalculator`]) for embedding in a UI.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;

pub(crate) mod clipboard;
pub(crate) mod color;
pub(crate) mod effects;
pub(crate) mod hash;
pub(crate) mod layout;
pub(crate) mod preset;
pub(crate) mod render;
pub(crate) mod widgets;

pub use crate::foundation::core::Bitmap;
pub use crate::foundation::error::{MirageError, MirageResult};

pub use crate::assets::decode::{decode_image, encode_png, load_image, save_png};
pub use crate::assets::file_size::format_file_size;
pub use crate::clipboard::{Clipboard, ClipboardContent, MemoryClipboard};
#[cfg(feature = "system-clipboard")]
pub use crate::clipboard::SystemClipboard;
pub use crate::color::convert::{Hsl, Rgb8, parse_hex, parse_rgb, rgb_to_hsl};
pub use crate::color::mix::{INVALID_MIX, mix, mix_hex, parse_mix_hex};
pub use crate::effects::exposure::{
    EV_MAX, EV_MIN, EV_STEP, ExposureLut, GAMMA, clamp_ev, expose,
};
pub use crate::effects::interleave::{Layer, extract_layer, interleave};
pub use crate::effects::tone::{CONTRAST_PIVOT, ToneControls, ToneParams, adjust};
pub use crate::hash::digest::{HashAlgorithm, UNSUPPORTED_ALGORITHM, digest_hex, digest_text};
pub use crate::layout::fit::{ASPECT_EPSILON, FitMode, FitRect, fit};
pub use crate::preset::HidePreset;
pub use crate::render::backend::{BackendKind, ExposureBackend, create_backend};
pub use crate::render::cpu::CpuBackend;
#[cfg(feature = "gpu")]
pub use crate::render::gpu::GpuBackend;
pub use crate::render::placement::{place, prepare_pair};
pub use crate::widgets::converter::{Channel, ColorConverter, ColorField};
pub use crate::widgets::copy_button::{COPIED_FOR, COPIED_LABEL, COPY_LABEL, CopyButton};
pub use crate::widgets::hash_calc::{HashCalculator, INITIAL_OUTPUT};
pub use crate::widgets::hider::{
    COPIED_IMAGE_LABEL, COPY_IMAGE_LABEL, COPYING_IMAGE_LABEL, HiderState, SizeStatus, Slot,
    WARN_NOT_GENERATED, WARN_NOT_UPLOADED,
};
pub use crate::widgets::mixer::ColorMixer;
pub use crate::widgets::reveal::{
    RevealState, WIDTH_PERCENT_DEFAULT, WIDTH_PERCENT_MAX, WIDTH_PERCENT_MIN,
};
pub use crate::widgets::ticket::LoadTicket;
