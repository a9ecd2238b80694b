use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::foundation::error::ChromacastResult;

/// Bits carried by a tile's glyph shape.
pub const SYMBOL_BITS: u32 = 4;

/// Default colour bits per tile.
pub const DEFAULT_COLOR_BITS: u32 = 2;
/// Largest accepted colour bits per tile.
pub const MAX_COLOR_BITS: u32 = 3;
/// Default parity bytes per chunk.
pub const DEFAULT_ECC_BYTES: u32 = 30;
/// Largest accepted parity bytes per chunk.
pub const MAX_ECC_BYTES: u32 = 149;
/// Default compression level.
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 16;
/// Largest accepted compression level.
pub const MAX_COMPRESSION_LEVEL: u32 = 22;
/// Rolling encode identifier before the first automatic increment.
pub const DEFAULT_ENCODE_ID: u8 = 109;

/// Encode parameters.
///
/// Out-of-range values are never rejected: [`EncodeConfig::clamped`] replaces each one with its
/// default. Both `configure` and JSON loading go through it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeConfig {
    /// Colour bits per tile, `[0, 3]`.
    pub color_bits: u32,
    /// Parity bytes per chunk, `[0, 149]`.
    pub ecc_bytes: u32,
    /// Compression level, `[0, 22]`.
    pub compression_level: u32,
    /// Shake frames on presentation.
    pub shaking: bool,
    /// Legacy frame format.
    pub legacy_mode: bool,
    /// Rolling identifier used by the next automatically numbered encode.
    pub encode_id: u8,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            color_bits: DEFAULT_COLOR_BITS,
            ecc_bytes: DEFAULT_ECC_BYTES,
            compression_level: DEFAULT_COMPRESSION_LEVEL,
            shaking: true,
            legacy_mode: false,
            encode_id: DEFAULT_ENCODE_ID,
        }
    }
}

impl EncodeConfig {
    /// Replace every out-of-range field with its default.
    pub fn clamped(self) -> Self {
        Self {
            color_bits: if self.color_bits > MAX_COLOR_BITS {
                DEFAULT_COLOR_BITS
            } else {
                self.color_bits
            },
            ecc_bytes: if self.ecc_bytes > MAX_ECC_BYTES {
                DEFAULT_ECC_BYTES
            } else {
                self.ecc_bytes
            },
            compression_level: if self.compression_level > MAX_COMPRESSION_LEVEL {
                DEFAULT_COMPRESSION_LEVEL
            } else {
                self.compression_level
            },
            ..self
        }
    }

    /// Number of palette colours in use.
    pub fn color_depth(&self) -> u32 {
        1 << self.color_bits.min(MAX_COLOR_BITS)
    }

    /// Payload bits per tile.
    pub fn bits_per_tile(&self) -> u32 {
        SYMBOL_BITS + self.color_bits
    }

    /// Return `true` when both configs encode identically (the rolling id is ignored).
    pub fn same_encoding(&self, other: &Self) -> bool {
        self.color_bits == other.color_bits
            && self.ecc_bytes == other.ecc_bytes
            && self.compression_level == other.compression_level
            && self.shaking == other.shaking
            && self.legacy_mode == other.legacy_mode
    }

    /// Parse JSON (missing fields take defaults) and clamp.
    pub fn from_json_str(json: &str) -> ChromacastResult<Self> {
        let cfg: Self = serde_json::from_str(json).context("parse encode config JSON")?;
        Ok(cfg.clamped())
    }
}

/// Render-side options that are not part of the reconfigurable encode parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderOpts {
    /// Black (`true`) or white background.
    pub dark: bool,
    /// Pixels between neighbouring tiles.
    pub cell_gap_px: u32,
    /// Pixels between the frame edge and the tile grid.
    pub margin_px: u32,
    /// Frame edge length used until a display surface is attached.
    pub frame_width: u32,
}

impl Default for EncoderOpts {
    fn default() -> Self {
        Self {
            dark: true,
            cell_gap_px: 1,
            margin_px: 0,
            frame_width: 1040,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/config.rs"]
mod tests;
