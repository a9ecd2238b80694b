use image::Rgb;

/// Four-colour palette. Indices are part of the wire contract.
#[rustfmt::skip]
const COLORS_4: [Rgb<u8>; 4] = [
    Rgb([0x00, 0xFF, 0xFF]),
    Rgb([0xFF, 0xFF, 0x00]),
    Rgb([0xFF, 0x00, 0xFF]),
    Rgb([0x00, 0xFF, 0x00]),
];

/// Eight-colour palette. Indices are part of the wire contract.
#[rustfmt::skip]
const COLORS_8: [Rgb<u8>; 8] = [
    Rgb([0x00, 0xFF, 0xFF]), // cyan
    Rgb([0x7F, 0x7F, 0xFF]), // mid-blue
    Rgb([0xFF, 0x00, 0xFF]), // magenta
    Rgb([0xFF, 0x41, 0x41]), // red
    Rgb([0xFF, 0x9F, 0x00]), // orange
    Rgb([0xFF, 0xFF, 0x00]), // yellow
    Rgb([0xFF, 0xFF, 0xFF]),
    Rgb([0x00, 0xFF, 0x00]),
];

/// An ordered, fixed set of renderable symbol colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: &'static [Rgb<u8>],
}

impl Palette {
    /// Select the palette for a colour depth (number of colours in use).
    ///
    /// `color_depth <= 4` selects the 4-entry palette, anything larger the 8-entry one.
    pub fn for_color_depth(color_depth: u32) -> Self {
        if color_depth <= 4 {
            Self { colors: &COLORS_4 }
        } else {
            Self { colors: &COLORS_8 }
        }
    }

    /// Select the palette for `color_bits` bits of colour per tile.
    pub fn for_color_bits(color_bits: u32) -> Self {
        Self::for_color_depth(1u32 << color_bits.min(3))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Palettes are never empty; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// All entries in index order.
    pub fn colors(&self) -> &'static [Rgb<u8>] {
        self.colors
    }

    /// Colour at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`. Indices come from the encoder's own colour bits and can
    /// never exceed the selected palette from valid configuration.
    pub fn color(&self, index: usize) -> Rgb<u8> {
        assert!(
            index < self.colors.len(),
            "palette index {index} out of range for {}-colour palette",
            self.colors.len()
        );
        self.colors[index]
    }

    /// Index of the entry closest to `observed` (squared RGB distance, ties to the lowest index).
    ///
    /// Meant to run after a [`crate::ColorCorrector`] has normalised the observed sample.
    pub fn nearest(&self, observed: Rgb<u8>) -> usize {
        let dist = |c: &Rgb<u8>| -> u32 {
            c.0.iter()
                .zip(observed.0.iter())
                .map(|(a, b)| {
                    let d = i32::from(*a) - i32::from(*b);
                    (d * d) as u32
                })
                .sum()
        };

        let mut best = 0;
        let mut best_dist = u32::MAX;
        for (i, c) in self.colors.iter().enumerate() {
            let d = dist(c);
            if d < best_dist {
                best = i;
                best_dist = d;
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/palette.rs"]
mod tests;
