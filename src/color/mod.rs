//! Colour handling: chromatic adaptation and the symbol palettes.

/// White-point adaptation matrices and the per-pixel corrector.
pub mod adaptation;
/// Fixed 4/8-entry symbol palettes.
pub mod palette;
