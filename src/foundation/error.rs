/// Convenience result type used across chromacast.
pub type ChromacastResult<T> = Result<T, ChromacastError>;

/// Top-level error taxonomy used by encoder, compositor and colour APIs.
///
/// Out-of-range configuration values are not represented here: they are clamped to defaults.
#[derive(thiserror::Error, Debug)]
pub enum ChromacastError {
    /// A white point cannot be used to derive an adaptation matrix.
    #[error("invalid white point: {0}")]
    InvalidWhitePoint(String),

    /// The block generator rejected the data or its chunking parameters.
    #[error("chunking failed: {0}")]
    ChunkingFailed(String),

    /// Reconfiguration produced a chunk size the active stream cannot use.
    ///
    /// The stream has been discarded; a fresh `begin_encode` is required.
    #[error("resize rejected: stream discarded, begin a new encode to resume")]
    ResizeRejected,

    /// The render surface is missing or has been closed.
    #[error("display unavailable: {0}")]
    DisplayUnavailable(String),

    /// The glyph store has no bitmap for a symbol.
    #[error("missing glyph for symbol {symbol:#04x} at {symbol_bits} bits")]
    MissingGlyph {
        /// Bit width of the requested glyph set.
        symbol_bits: u32,
        /// Requested symbol value.
        symbol: u32,
    },

    /// Inconsistent inputs (mismatched glyph sizes, blocks larger than a frame, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChromacastError {
    /// Build a [`ChromacastError::InvalidWhitePoint`] value.
    pub fn invalid_white_point(msg: impl Into<String>) -> Self {
        Self::InvalidWhitePoint(msg.into())
    }

    /// Build a [`ChromacastError::ChunkingFailed`] value.
    pub fn chunking_failed(msg: impl Into<String>) -> Self {
        Self::ChunkingFailed(msg.into())
    }

    /// Build a [`ChromacastError::DisplayUnavailable`] value.
    pub fn display_unavailable(msg: impl Into<String>) -> Self {
        Self::DisplayUnavailable(msg.into())
    }

    /// Build a [`ChromacastError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
