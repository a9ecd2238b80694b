//! Capability boundary to the presentation side: surfaces, the shake cue and frame pacing.

/// Frame pacing and pause cooldown.
pub mod pacing;
/// PNG-sequence surface for headless output.
pub mod png;
/// Display surface contract and the in-memory surface.
pub mod surface;
