//! Chromacast streams arbitrary bytes as a cycling sequence of colour-coded symbol frames.
//!
//! The pipeline is session-oriented:
//!
//! - Build an [`Encoder`] from a [`BlockGenerator`], a [`GlyphStore`] and [`EncoderOpts`]
//! - Attach a [`DisplaySurface`] and call [`Encoder::begin_encode`]
//! - Alternate [`Encoder::render`] and [`Encoder::next_frame`], or hand the loop to [`drive`]
//!
//! [`ColorCorrector`] applies von Kries chromatic adaptation to captured or rendered pixels.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Chromatic adaptation and tile palettes.
pub mod color;
/// Glyph atlas, tile rendering and frame compositing.
pub mod compositor;
/// Display surfaces and frame pacing.
pub mod display;
/// Encoder session API.
pub mod encode;
/// Erasure-coded block stream contract.
pub mod stream;

pub use crate::foundation::error::{ChromacastError, ChromacastResult};
pub use crate::foundation::math::Mat3;

pub use crate::color::adaptation::{
    AdaptationBasis, AdaptationMatrix, ColorCorrector, WhitePoint, get_adaptation_matrix,
};
pub use crate::color::palette::Palette;
pub use crate::compositor::frame::{Frame, FrameLayout};
pub use crate::compositor::glyph::{Glyph, GlyphAtlas, GlyphStore};
pub use crate::display::pacing::{FramePacer, PauseCooldown};
pub use crate::display::png::PngSequenceSurface;
pub use crate::display::surface::{DisplaySurface, InMemorySurface, ShakeCue};
pub use crate::encode::config::{EncodeConfig, EncoderOpts};
pub use crate::encode::controller::Encoder;
pub use crate::encode::driver::{DriveStats, drive};
pub use crate::encode::status::{ReconfigResult, RenderStatus, SessionState};
pub use crate::stream::block::{
    BlockGenerator, BlockStream, BlockSymbols, ChunkParams, SymbolCell,
};
