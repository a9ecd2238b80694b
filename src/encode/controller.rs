//! The streaming encode control loop.
//!
//! [`Encoder`] is the single owned context for one transmitting process: configuration, the
//! active erasure-coded stream, the frame counter and the pending frame. Callers serialize access
//! (`begin_encode`, `next_frame`, `render` and `configure` all take `&mut self`).
//!
//! The stream is cycled indefinitely since the receiver cannot ask for retransmission. Once more
//! than `blocks_required * RESTART_MULTIPLIER` blocks have been emitted the stream is rewound in
//! place and the display gets a shake reset marking the new cycle.

use std::sync::Arc;
use std::time::Duration;

use crate::compositor::frame::{Frame, FrameLayout, compose_frame};
use crate::compositor::glyph::GlyphStore;
use crate::display::surface::{DisplaySurface, aligned_extent};
use crate::encode::config::{EncodeConfig, EncoderOpts, SYMBOL_BITS};
use crate::encode::status::{ReconfigResult, RenderStatus, SessionState};
use crate::foundation::error::{ChromacastError, ChromacastResult};
use crate::stream::block::{BlockGenerator, BlockStream, ChunkParams};

/// Blocks emitted per cycle, as a multiple of the blocks a receiver needs.
pub const RESTART_MULTIPLIER: u64 = 8;

#[derive(Default)]
struct EncodeSession {
    stream: Option<Box<dyn BlockStream>>,
    encode_id: u8,
    frame_count: u64,
    pending: Option<Frame>,
    restarts: u64,
}

impl EncodeSession {
    fn tear_down(&mut self) {
        self.stream = None;
        self.pending = None;
    }
}

/// Owned encoder context.
pub struct Encoder<D: DisplaySurface> {
    generator: Box<dyn BlockGenerator>,
    glyphs: Arc<dyn GlyphStore>,
    display: Option<D>,
    opts: EncoderOpts,
    layout: FrameLayout,
    config: EncodeConfig,
    session: EncodeSession,
}

impl<D: DisplaySurface> Encoder<D> {
    /// Create an idle encoder with default configuration.
    ///
    /// The glyph store must hold the `SYMBOL_BITS` glyph set; its tile size fixes the frame grid.
    pub fn new(
        generator: Box<dyn BlockGenerator>,
        glyphs: Arc<dyn GlyphStore>,
        opts: EncoderOpts,
    ) -> ChromacastResult<Self> {
        let tile = glyphs
            .lookup(SYMBOL_BITS, 0)
            .map(|g| (g.width(), g.height()))
            .ok_or(ChromacastError::MissingGlyph {
                symbol_bits: SYMBOL_BITS,
                symbol: 0,
            })?;
        let layout = FrameLayout::new(
            aligned_extent(opts.frame_width),
            tile,
            opts.cell_gap_px,
            opts.margin_px,
        )?;
        Ok(Self {
            generator,
            glyphs,
            display: None,
            opts,
            layout,
            config: EncodeConfig::default(),
            session: EncodeSession::default(),
        })
    }

    /// Replace the starting configuration (clamped).
    pub fn with_config(mut self, config: EncodeConfig) -> Self {
        self.config = config.clamped();
        self
    }

    /// Attach the display surface. The first surface wins: returns `Ok(false)` and drops
    /// `display` if one is already attached.
    ///
    /// The frame grid follows the surface width. If that changes the tile capacity while a
    /// stream is active, the stream is re-chunked as in [`Encoder::configure`]; when it cannot
    /// take the new chunk size it is discarded, the surface stays attached and
    /// [`ChromacastError::ResizeRejected`] is returned.
    pub fn attach_display(&mut self, display: D) -> ChromacastResult<bool> {
        if self.display.is_some() {
            return Ok(false);
        }
        let layout = FrameLayout::new(
            display.width(),
            self.layout.tile_size(),
            self.opts.cell_gap_px,
            self.opts.margin_px,
        )?;
        let capacity_changed = layout.capacity() != self.layout.capacity();
        self.layout = layout;
        self.display = Some(display);

        if capacity_changed && self.session.stream.is_some() {
            tracing::debug!(
                capacity = layout.capacity(),
                "display changed frame capacity, re-chunking stream"
            );
            self.rechunk().into_result()?;
        }
        Ok(true)
    }

    /// Detach and return the display surface. The frame layout stays as it was.
    pub fn detach_display(&mut self) -> Option<D> {
        self.display.take()
    }

    /// Borrow the display surface.
    pub fn display(&self) -> Option<&D> {
        self.display.as_ref()
    }

    /// Mutably borrow the display surface.
    pub fn display_mut(&mut self) -> Option<&mut D> {
        self.display.as_mut()
    }

    /// Return `true` when there is no surface or it has been closed.
    pub fn display_closed(&self) -> bool {
        self.display.as_ref().is_none_or(|d| d.should_close())
    }

    /// Current effective configuration.
    pub fn config(&self) -> &EncodeConfig {
        &self.config
    }

    /// Current frame grid.
    pub fn layout(&self) -> &FrameLayout {
        &self.layout
    }

    /// Idle or streaming.
    pub fn state(&self) -> SessionState {
        if self.session.stream.is_some() {
            SessionState::Streaming
        } else {
            SessionState::Idle
        }
    }

    /// Frames produced in the current cycle.
    pub fn frame_count(&self) -> u64 {
        self.session.frame_count
    }

    /// Most recently rendered frame, if any.
    pub fn pending_frame(&self) -> Option<&Frame> {
        self.session.pending.as_ref()
    }

    /// Identifier of the active stream.
    pub fn active_encode_id(&self) -> Option<u8> {
        self.session.stream.as_ref().map(|_| self.session.encode_id)
    }

    /// Cycle restarts since the stream was created or last re-chunked.
    pub fn restarts(&self) -> u64 {
        self.session.restarts
    }

    /// Rolling identifier.
    pub fn get_encode_id(&self) -> u8 {
        self.config.encode_id
    }

    /// Set the rolling identifier. Applies to the next automatically numbered `begin_encode`,
    /// never to the stream in flight.
    pub fn set_encode_id(&mut self, encode_id: u8) -> u8 {
        self.config.encode_id = encode_id;
        self.config.encode_id
    }

    fn chunk_params(&self, encode_id: u8) -> ChunkParams {
        ChunkParams {
            ecc_bytes: self.config.ecc_bytes,
            bits_per_tile: self.config.bits_per_tile(),
            compression_level: self.config.compression_level,
            legacy_mode: self.config.legacy_mode,
            encode_id,
            capacity_tiles: self.layout.capacity(),
        }
    }

    /// Start encoding `data`, replacing any previous stream.
    ///
    /// Without `encode_id` the rolling identifier is incremented (wrapping) and used; an explicit
    /// id is used verbatim and leaves the rolling identifier alone. On failure the session is
    /// left idle with no stream and no pending frame.
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    pub fn begin_encode(&mut self, data: &[u8], encode_id: Option<u8>) -> ChromacastResult<()> {
        self.session.frame_count = 0;
        self.session.restarts = 0;

        let encode_id = match encode_id {
            Some(id) => id,
            None => {
                self.config.encode_id = self.config.encode_id.wrapping_add(1);
                self.config.encode_id
            }
        };

        let params = self.chunk_params(encode_id);
        match self.generator.create(data, &params) {
            Ok(stream) => {
                self.session.stream = Some(stream);
                self.session.pending = None;
                self.session.encode_id = encode_id;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "block generator rejected encode");
                self.session.tear_down();
                Err(match err {
                    ChromacastError::ChunkingFailed(msg) => ChromacastError::ChunkingFailed(msg),
                    other => ChromacastError::chunking_failed(other.to_string()),
                })
            }
        }
    }

    /// Render the next block into the pending frame and return the new frame count.
    ///
    /// Returns `Ok(None)` when idle or when no display is attached.
    pub fn next_frame(&mut self) -> ChromacastResult<Option<u64>> {
        let Some(display) = self.display.as_mut() else {
            return Ok(None);
        };
        let Some(stream) = self.session.stream.as_mut() else {
            return Ok(None);
        };

        let required = stream.blocks_required().saturating_mul(RESTART_MULTIPLIER);
        let emitted = stream.block_count();
        if emitted > required {
            tracing::debug!(emitted, required, "restarting block cycle");
            stream.restart();
            display.shake(0);
            self.session.frame_count = 0;
            self.session.restarts += 1;
        }

        let block = stream.next_block();
        let image = compose_frame(
            &self.layout,
            self.glyphs.as_ref(),
            &block,
            SYMBOL_BITS,
            self.config.color_depth(),
            self.opts.dark,
        )?;

        self.session.frame_count += 1;
        self.session.pending = Some(Frame {
            number: self.session.frame_count,
            encode_id: self.session.encode_id,
            image,
        });
        Ok(Some(self.session.frame_count))
    }

    /// Present the pending frame, then advance the shake cue when shaking is enabled.
    pub fn render(&mut self) -> ChromacastResult<RenderStatus> {
        let Some(display) = self.display.as_mut() else {
            return Ok(RenderStatus::Closed);
        };
        if self.session.stream.is_none() || display.should_close() {
            return Ok(RenderStatus::Closed);
        }
        let Some(frame) = self.session.pending.as_ref() else {
            return Ok(RenderStatus::NotReady);
        };

        display.show(&frame.image, Duration::ZERO)?;
        if self.config.shaking {
            display.shake(1);
        }
        Ok(RenderStatus::Presented)
    }

    /// Update encode parameters; out-of-range values are clamped to defaults.
    ///
    /// A change with an active stream re-chunks it in place. If the stream cannot use the new
    /// chunk size it is discarded together with the pending frame and the surface is cleared;
    /// `begin_encode` must be called again. The rolling identifier is never touched.
    #[tracing::instrument(skip(self))]
    pub fn configure(
        &mut self,
        color_bits: u32,
        ecc_bytes: u32,
        compression_level: u32,
        shaking: bool,
        legacy_mode: bool,
    ) -> ReconfigResult {
        let next = EncodeConfig {
            color_bits,
            ecc_bytes,
            compression_level,
            shaking,
            legacy_mode,
            encode_id: self.config.encode_id,
        }
        .clamped();

        if next.same_encoding(&self.config) {
            return ReconfigResult::Unchanged;
        }
        tracing::debug!(?next, "encode configuration changed");
        self.config = next;

        self.rechunk()
    }

    /// Restart the active stream with the chunk size for the current config and frame grid.
    fn rechunk(&mut self) -> ReconfigResult {
        let chunk_size = self
            .generator
            .chunk_size(&self.chunk_params(self.session.encode_id));
        let Some(stream) = self.session.stream.as_mut() else {
            return ReconfigResult::Applied;
        };
        let resized = stream.restart_and_resize_buffer(chunk_size);

        self.session.frame_count = 0;
        self.session.restarts = 0;
        if let Some(display) = self.display.as_mut() {
            display.shake(0);
        }
        if resized {
            return ReconfigResult::Resized;
        }

        tracing::warn!(chunk_size, "stream rejected new chunk size, discarding it");
        self.session.tear_down();
        if let Some(display) = self.display.as_mut() {
            display.clear();
        }
        ReconfigResult::StreamDiscarded
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/controller.rs"]
mod tests;
