//! Symbol tiles and frame assembly.

/// Composited frames and tile placement.
pub mod frame;
/// Glyph coverage masks and the glyph store.
pub mod glyph;
/// Single-symbol tile rendering.
pub mod tile;
