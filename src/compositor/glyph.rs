use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use image::{Rgb, RgbImage};

use crate::foundation::error::{ChromacastError, ChromacastResult};

/// Colour marking background pixels in the bundled glyph bitmaps.
pub const BACKGROUND_SENTINEL: Rgb<u8> = Rgb([0, 0, 0]);

/// A glyph bitmap reduced to its coverage mask.
///
/// Only *which* pixels are foreground matters; the bitmap's own colours are discarded at load
/// time, so recolouring never has to compare against palette values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    width: u32,
    height: u32,
    coverage: Vec<bool>,
}

impl Glyph {
    /// Build from an RGB bitmap; pixels equal to [`BACKGROUND_SENTINEL`] are background.
    pub fn from_rgb(img: &RgbImage) -> Self {
        Self {
            width: img.width(),
            height: img.height(),
            coverage: img.pixels().map(|p| *p != BACKGROUND_SENTINEL).collect(),
        }
    }

    /// Decode encoded image bytes (PNG) and build the coverage mask. Alpha is dropped.
    pub fn decode(bytes: &[u8]) -> ChromacastResult<Self> {
        let img = image::load_from_memory(bytes).context("decode glyph bitmap from memory")?;
        Ok(Self::from_rgb(&img.to_rgb8()))
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major coverage; `true` marks a foreground pixel.
    pub fn coverage(&self) -> &[bool] {
        &self.coverage
    }
}

/// Read-only lookup of pre-rendered glyphs, loaded once at startup.
///
/// Implementations are shared across compositing threads.
pub trait GlyphStore: Send + Sync {
    /// Glyph for `symbol` in the `symbol_bits`-wide glyph set.
    fn lookup(&self, symbol_bits: u32, symbol: u32) -> Option<&Glyph>;
}

/// In-memory glyph set keyed by `(symbol_bits, symbol)`.
#[derive(Clone, Debug, Default)]
pub struct GlyphAtlas {
    glyphs: HashMap<(u32, u32), Glyph>,
}

impl GlyphAtlas {
    /// Create an empty atlas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Relative path of a glyph bitmap: `<symbol_bits>/<symbol:02x>.png`.
    pub fn glyph_path(symbol_bits: u32, symbol: u32) -> String {
        format!("{symbol_bits}/{symbol:02x}.png")
    }

    /// Load the complete glyph set for `symbol_bits` from `root`.
    ///
    /// Every symbol in `0..2^symbol_bits` must be present and all glyphs must share one size.
    pub fn load_dir(root: &Path, symbol_bits: u32) -> ChromacastResult<Self> {
        let mut atlas = Self::new();
        for symbol in 0..(1u32 << symbol_bits) {
            let path = root.join(Self::glyph_path(symbol_bits, symbol));
            let bytes = std::fs::read(&path)
                .with_context(|| format!("read glyph bitmap '{}'", path.display()))?;
            atlas.insert(symbol_bits, symbol, Glyph::decode(&bytes)?)?;
        }
        Ok(atlas)
    }

    /// Add or replace one glyph.
    ///
    /// Glyphs of one bit width must share dimensions so tiles line up on the frame grid.
    pub fn insert(&mut self, symbol_bits: u32, symbol: u32, glyph: Glyph) -> ChromacastResult<()> {
        let sibling = self
            .glyphs
            .iter()
            .find(|((bits, s), _)| *bits == symbol_bits && *s != symbol)
            .map(|(_, g)| (g.width, g.height));
        if let Some((w, h)) = sibling {
            if (w, h) != (glyph.width, glyph.height) {
                return Err(ChromacastError::validation(format!(
                    "glyph {symbol:#04x} is {}x{}, expected {w}x{h} for {symbol_bits}-bit glyphs",
                    glyph.width, glyph.height
                )));
            }
        }
        self.glyphs.insert((symbol_bits, symbol), glyph);
        Ok(())
    }

    /// Tile dimensions of the `symbol_bits` glyph set, if any glyph is loaded.
    pub fn tile_size(&self, symbol_bits: u32) -> Option<(u32, u32)> {
        self.glyphs
            .iter()
            .find(|((bits, _), _)| *bits == symbol_bits)
            .map(|(_, g)| (g.width, g.height))
    }

    /// Number of loaded glyphs across all bit widths.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Return `true` when no glyph is loaded.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl GlyphStore for GlyphAtlas {
    fn lookup(&self, symbol_bits: u32, symbol: u32) -> Option<&Glyph> {
        self.glyphs.get(&(symbol_bits, symbol))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compositor/glyph.rs"]
mod tests;
