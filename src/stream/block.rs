use crate::foundation::error::ChromacastResult;

/// One tile's worth of payload: a glyph symbol and a palette colour index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SymbolCell {
    /// Symbol value, below `2^symbol_bits`.
    pub symbol: u16,
    /// Palette index, below `2^color_bits`.
    pub color: u8,
}

impl SymbolCell {
    /// Create a cell.
    pub const fn new(symbol: u16, color: u8) -> Self {
        Self { symbol, color }
    }
}

/// Symbols of one erasure-coded block, in tile order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockSymbols {
    symbols: Vec<SymbolCell>,
}

impl BlockSymbols {
    /// Wrap tile-ordered cells.
    pub fn new(symbols: Vec<SymbolCell>) -> Self {
        Self { symbols }
    }

    /// Borrow the cells.
    pub fn symbols(&self) -> &[SymbolCell] {
        &self.symbols
    }

    /// Number of tiles.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Return `true` when the block carries no tiles.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl FromIterator<SymbolCell> for BlockSymbols {
    fn from_iter<T: IntoIterator<Item = SymbolCell>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Parameters the block generator chunks and encodes under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChunkParams {
    /// Reed-Solomon style parity bytes per chunk.
    pub ecc_bytes: u32,
    /// Payload bits carried by one tile (`symbol_bits + color_bits`).
    pub bits_per_tile: u32,
    /// Compression level applied before chunking.
    pub compression_level: u32,
    /// Use the legacy frame format.
    pub legacy_mode: bool,
    /// Identifier stamped into the stream.
    pub encode_id: u8,
    /// Tiles available in one frame.
    pub capacity_tiles: usize,
}

/// An erasure-coded block stream produced by a [`BlockGenerator`].
///
/// Blocks are order-independent; the stream cycles indefinitely.
pub trait BlockStream: Send {
    /// Blocks emitted since creation or the last restart.
    fn block_count(&self) -> u64;
    /// Distinct blocks a receiver needs to reconstruct the data.
    fn blocks_required(&self) -> u64;
    /// Rewind to the first block; content is unchanged.
    fn restart(&mut self);
    /// Rewind and re-chunk with `chunk_size`.
    ///
    /// Returns `false` when the data no longer benefits from chunking at that size; the caller
    /// must then discard the stream.
    fn restart_and_resize_buffer(&mut self, chunk_size: usize) -> bool;
    /// Produce the next block.
    fn next_block(&mut self) -> BlockSymbols;
}

/// Factory for erasure-coded streams.
pub trait BlockGenerator: Send {
    /// Chunk size (bytes) a stream uses under `params`.
    fn chunk_size(&self, params: &ChunkParams) -> usize;
    /// Chunk and encode `data`. Rejected parameters or data are an error.
    fn create(&self, data: &[u8], params: &ChunkParams) -> ChromacastResult<Box<dyn BlockStream>>;
}

#[cfg(test)]
#[path = "../../tests/unit/stream/block.rs"]
mod tests;
