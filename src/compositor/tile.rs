use image::{Rgb, RgbImage};

use crate::color::palette::Palette;
use crate::compositor::glyph::{Glyph, GlyphStore};
use crate::foundation::error::{ChromacastError, ChromacastResult};

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Background colour for a polarity: black when `dark`, white otherwise.
pub fn background_color(dark: bool) -> Rgb<u8> {
    if dark { BLACK } else { WHITE }
}

/// Recolour one glyph: background pixels get the polarity colour, foreground pixels the palette
/// colour at `color_index`.
///
/// Foreground/background is taken from the glyph's coverage mask, never from pixel values, so a
/// palette colour equal to the background cannot be confused with it.
///
/// # Panics
///
/// Panics if `color_index` is outside the palette selected by `color_depth`.
pub fn render_glyph(glyph: &Glyph, dark: bool, color_depth: u32, color_index: usize) -> RgbImage {
    let fg = Palette::for_color_depth(color_depth).color(color_index);
    let bg = background_color(dark);

    let mut tile = RgbImage::new(glyph.width(), glyph.height());
    for (px, covered) in tile.pixels_mut().zip(glyph.coverage()) {
        *px = if *covered { fg } else { bg };
    }
    tile
}

/// Render `symbol_value` of the `symbol_bits` glyph set as a tile.
///
/// Pure over immutable inputs: safe to call concurrently, never mutates the glyph store.
///
/// Precondition: `color_depth` is the number of colours in use (1, 2, 4 or 8); values up to 4
/// select the 4-entry palette, larger values the 8-entry one.
pub fn render_tile(
    glyphs: &dyn GlyphStore,
    symbol_bits: u32,
    symbol_value: u32,
    dark: bool,
    color_depth: u32,
    color_index: usize,
) -> ChromacastResult<RgbImage> {
    let glyph = glyphs
        .lookup(symbol_bits, symbol_value)
        .ok_or(ChromacastError::MissingGlyph {
            symbol_bits,
            symbol: symbol_value,
        })?;
    Ok(render_glyph(glyph, dark, color_depth, color_index))
}

#[cfg(test)]
#[path = "../../tests/unit/compositor/tile.rs"]
mod tests;
