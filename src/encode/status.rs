use crate::foundation::error::{ChromacastError, ChromacastResult};

/// Whether an encode stream is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// No stream.
    Idle,
    /// A stream is present and frames can be produced.
    Streaming,
}

/// Outcome of presenting the pending frame.
///
/// Numeric codes follow the caller-facing convention: positive is success, `0` is not ready,
/// negative is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderStatus {
    /// The pending frame was shown.
    Presented,
    /// Nothing rendered yet.
    NotReady,
    /// No surface, no stream, or the surface was closed.
    Closed,
}

impl RenderStatus {
    /// Numeric status code.
    pub fn code(self) -> i32 {
        match self {
            Self::Presented => 1,
            Self::NotReady => 0,
            Self::Closed => -1,
        }
    }
}

/// Outcome of [`crate::Encoder::configure`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReconfigResult {
    /// Effective configuration unchanged; nothing happened.
    Unchanged,
    /// Stored for the next encode; no stream was active.
    Applied,
    /// The active stream restarted under the new chunk size.
    Resized,
    /// The new chunk size was unusable; the stream and pending frame were dropped.
    StreamDiscarded,
}

impl ReconfigResult {
    /// Numeric status code.
    pub fn code(self) -> i32 {
        match self {
            Self::Unchanged | Self::StreamDiscarded => 0,
            Self::Applied | Self::Resized => 1,
        }
    }

    /// Map a discarded stream to [`ChromacastError::ResizeRejected`].
    pub fn into_result(self) -> ChromacastResult<Self> {
        match self {
            Self::StreamDiscarded => Err(ChromacastError::ResizeRejected),
            other => Ok(other),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/status.rs"]
mod tests;
