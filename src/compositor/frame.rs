use image::RgbImage;
use rayon::prelude::*;

use crate::compositor::glyph::GlyphStore;
use crate::compositor::tile::{background_color, render_tile};
use crate::foundation::error::{ChromacastError, ChromacastResult};
use crate::stream::block::BlockSymbols;

/// A composited frame ready to hand to a display surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Frame counter value this frame was produced at (1-based within a cycle).
    pub number: u64,
    /// Identifier of the encode this frame belongs to.
    pub encode_id: u8,
    /// Square RGB8 pixels.
    pub image: RgbImage,
}

/// Placement of symbol tiles on a square frame.
///
/// Tiles sit on a row-major grid of `tile + cell_gap_px` cells inset by `margin_px`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameLayout {
    width: u32,
    tile_width: u32,
    tile_height: u32,
    cell_gap_px: u32,
    margin_px: u32,
}

impl FrameLayout {
    /// Create a layout for a `width`×`width` frame; at least one tile must fit.
    pub fn new(
        width: u32,
        tile: (u32, u32),
        cell_gap_px: u32,
        margin_px: u32,
    ) -> ChromacastResult<Self> {
        let (tile_width, tile_height) = tile;
        if tile_width == 0 || tile_height == 0 {
            return Err(ChromacastError::validation("tile dimensions must be non-zero"));
        }
        // columns/rows add the gap to the frame and tile extents
        let fits = width.checked_add(cell_gap_px).is_some()
            && tile_width.checked_add(cell_gap_px).is_some()
            && tile_height.checked_add(cell_gap_px).is_some();
        if !fits {
            return Err(ChromacastError::validation(format!(
                "cell gap of {cell_gap_px}px overflows a {width}px frame"
            )));
        }
        let layout = Self {
            width,
            tile_width,
            tile_height,
            cell_gap_px,
            margin_px,
        };
        if layout.capacity() == 0 {
            return Err(ChromacastError::validation(format!(
                "a {width}px frame with {margin_px}px margin cannot hold a {tile_width}x{tile_height} tile"
            )));
        }
        Ok(layout)
    }

    /// Frame edge length in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Tile dimensions in pixels.
    pub fn tile_size(&self) -> (u32, u32) {
        (self.tile_width, self.tile_height)
    }

    fn inner(&self) -> u32 {
        self.width.saturating_sub(self.margin_px.saturating_mul(2))
    }

    /// Tiles per row.
    pub fn columns(&self) -> u32 {
        (self.inner() + self.cell_gap_px) / (self.tile_width + self.cell_gap_px)
    }

    /// Tile rows.
    pub fn rows(&self) -> u32 {
        (self.inner() + self.cell_gap_px) / (self.tile_height + self.cell_gap_px)
    }

    /// Number of tiles a frame can carry.
    pub fn capacity(&self) -> usize {
        (self.columns() as usize) * (self.rows() as usize)
    }

    /// Top-left pixel of cell `index` (row-major).
    pub fn cell_origin(&self, index: usize) -> (u32, u32) {
        let cols = self.columns().max(1) as usize;
        let (col, row) = ((index % cols) as u32, (index / cols) as u32);
        (
            self.margin_px + col * (self.tile_width + self.cell_gap_px),
            self.margin_px + row * (self.tile_height + self.cell_gap_px),
        )
    }
}

/// Composite one block into a frame image.
///
/// Tiles are rendered in parallel and blitted in block order; cells past the end of the block
/// keep the background colour.
pub fn compose_frame(
    layout: &FrameLayout,
    glyphs: &dyn GlyphStore,
    block: &BlockSymbols,
    symbol_bits: u32,
    color_depth: u32,
    dark: bool,
) -> ChromacastResult<RgbImage> {
    if block.len() > layout.capacity() {
        return Err(ChromacastError::validation(format!(
            "block has {} symbols but the frame holds {}",
            block.len(),
            layout.capacity()
        )));
    }

    let tiles = block
        .symbols()
        .par_iter()
        .map(|cell| {
            render_tile(
                glyphs,
                symbol_bits,
                u32::from(cell.symbol),
                dark,
                color_depth,
                usize::from(cell.color),
            )
        })
        .collect::<ChromacastResult<Vec<_>>>()?;

    let mut canvas = RgbImage::from_pixel(layout.width, layout.width, background_color(dark));
    for (index, tile) in tiles.iter().enumerate() {
        if tile.dimensions() != layout.tile_size() {
            return Err(ChromacastError::validation(format!(
                "tile {index} is {}x{}, layout expects {}x{}",
                tile.width(),
                tile.height(),
                layout.tile_width,
                layout.tile_height
            )));
        }
        let (x, y) = layout.cell_origin(index);
        image::imageops::replace(&mut canvas, tile, i64::from(x), i64::from(y));
    }
    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/compositor/frame.rs"]
mod tests;
