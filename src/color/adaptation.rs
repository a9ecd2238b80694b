//! Chromatic adaptation between two reference white points.
//!
//! The adaptation is a von Kries style diagonal scaling carried out in a cone-response basis:
//!
//! ```text
//! M = B⁻¹ · diag(cone(W_dst) / cone(W_src)) · B
//! ```
//!
//! where `B` maps channel intensities into cone responses. The resulting [`AdaptationMatrix`] is
//! immutable; [`ColorCorrector`] applies it per pixel.

use rayon::prelude::*;

use crate::foundation::error::{ChromacastError, ChromacastResult};
use crate::foundation::math::Mat3;

/// Von Kries (Hunt-Pointer-Estevez) cone fundamentals.
#[rustfmt::skip]
const M_VON_KRIES: Mat3 = Mat3([
    [ 0.40024, 0.70760, -0.08081],
    [-0.22630, 1.16532,  0.04570],
    [ 0.00000, 0.00000,  0.91822],
]);

/// Bradford cone-response matrix.
#[rustfmt::skip]
const M_BRADFORD: Mat3 = Mat3([
    [ 0.8951,  0.2664, -0.1614],
    [-0.7502,  1.7135,  0.0367],
    [ 0.0389, -0.0685,  1.0296],
]);

/// Cone-response basis used for the diagonal scaling step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdaptationBasis {
    /// Hunt-Pointer-Estevez fundamentals. Reference values are defined against this basis.
    #[default]
    VonKries,
    /// Bradford transform.
    Bradford,
}

impl AdaptationBasis {
    /// The forward basis matrix `B`.
    pub fn matrix(self) -> Mat3 {
        match self {
            Self::VonKries => M_VON_KRIES,
            Self::Bradford => M_BRADFORD,
        }
    }
}

/// A reference white as a triple of channel intensities.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WhitePoint(pub [f64; 3]);

impl WhitePoint {
    /// Create a white point from three channel intensities.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self([r, g, b])
    }

    /// Channel intensities.
    pub const fn channels(self) -> [f64; 3] {
        self.0
    }
}

impl From<[f64; 3]> for WhitePoint {
    fn from(v: [f64; 3]) -> Self {
        Self(v)
    }
}

impl From<(f64, f64, f64)> for WhitePoint {
    fn from((r, g, b): (f64, f64, f64)) -> Self {
        Self([r, g, b])
    }
}

/// A 3x3 adaptation transform together with the white points it was derived from.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct AdaptationMatrix {
    matrix: Mat3,
    src: WhitePoint,
    dst: WhitePoint,
    basis: AdaptationBasis,
}

impl AdaptationMatrix {
    /// The linear transform `M`.
    pub fn matrix(&self) -> &Mat3 {
        &self.matrix
    }

    /// White point the input samples are measured under.
    pub fn src(&self) -> WhitePoint {
        self.src
    }

    /// White point the output samples appear under.
    pub fn dst(&self) -> WhitePoint {
        self.dst
    }

    /// Cone basis the matrix was derived in.
    pub fn basis(&self) -> AdaptationBasis {
        self.basis
    }
}

/// Compute the von Kries adaptation matrix mapping samples under `src` to their appearance under
/// `dst`.
pub fn get_adaptation_matrix(
    src: impl Into<WhitePoint>,
    dst: impl Into<WhitePoint>,
) -> ChromacastResult<AdaptationMatrix> {
    adaptation_matrix_in(AdaptationBasis::VonKries, src.into(), dst.into())
}

/// Compute an adaptation matrix in an explicit cone basis.
pub fn adaptation_matrix_in(
    basis: AdaptationBasis,
    src: WhitePoint,
    dst: WhitePoint,
) -> ChromacastResult<AdaptationMatrix> {
    if src.0.iter().any(|c| !c.is_finite() || *c <= 0.0) {
        return Err(ChromacastError::invalid_white_point(format!(
            "source white point channels must be finite and > 0, got {:?}",
            src.0
        )));
    }
    if dst.0.iter().any(|c| !c.is_finite() || *c < 0.0) {
        return Err(ChromacastError::invalid_white_point(format!(
            "destination white point channels must be finite and >= 0, got {:?}",
            dst.0
        )));
    }

    if src == dst {
        return Ok(AdaptationMatrix {
            matrix: Mat3::IDENTITY,
            src,
            dst,
            basis,
        });
    }

    let b = basis.matrix();
    let b_inv = b
        .inv()
        .ok_or_else(|| ChromacastError::invalid_white_point("cone basis is singular"))?;

    let cone_src = b * src.0;
    let cone_dst = b * dst.0;
    if cone_src.iter().any(|c| *c == 0.0) {
        return Err(ChromacastError::invalid_white_point(format!(
            "source white point {:?} has a zero cone response",
            src.0
        )));
    }

    let d = Mat3::diag([
        cone_dst[0] / cone_src[0],
        cone_dst[1] / cone_src[1],
        cone_dst[2] / cone_src[2],
    ]);

    Ok(AdaptationMatrix {
        matrix: b_inv * d * b,
        src,
        dst,
        basis,
    })
}

/// Applies a chromatic adaptation to colour samples.
///
/// Stateless per call and safe to share across threads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorCorrector {
    adaptation: AdaptationMatrix,
}

impl ColorCorrector {
    /// Build a von Kries corrector from `src` to `dst`.
    pub fn new(src: impl Into<WhitePoint>, dst: impl Into<WhitePoint>) -> ChromacastResult<Self> {
        Ok(Self::from_matrix(get_adaptation_matrix(src, dst)?))
    }

    /// Wrap an already computed adaptation.
    pub fn from_matrix(adaptation: AdaptationMatrix) -> Self {
        Self { adaptation }
    }

    /// The adaptation in use.
    pub fn adaptation(&self) -> &AdaptationMatrix {
        &self.adaptation
    }

    /// Recompute the matrix if either white point changed.
    pub fn update(
        &mut self,
        src: impl Into<WhitePoint>,
        dst: impl Into<WhitePoint>,
    ) -> ChromacastResult<()> {
        let (src, dst) = (src.into(), dst.into());
        if src == self.adaptation.src && dst == self.adaptation.dst {
            return Ok(());
        }
        self.adaptation = adaptation_matrix_in(self.adaptation.basis, src, dst)?;
        Ok(())
    }

    /// Corrector for the reverse direction (`dst` back to `src`).
    pub fn inverse(&self) -> ChromacastResult<Self> {
        let a = &self.adaptation;
        Ok(Self::from_matrix(adaptation_matrix_in(a.basis, a.dst, a.src)?))
    }

    /// Adapt a single sample.
    #[inline]
    pub fn transform(&self, rgb: [f64; 3]) -> [f64; 3] {
        self.adaptation.matrix.mul_vec(rgb)
    }

    /// Adapt an 8-bit sample, rounding and clamping each channel to `0..=255`.
    #[inline]
    pub fn correct_rgb8(&self, rgb: image::Rgb<u8>) -> image::Rgb<u8> {
        let [r, g, b] = rgb.0;
        let out = self.transform([f64::from(r), f64::from(g), f64::from(b)]);
        image::Rgb(out.map(|c| c.round().clamp(0.0, 255.0) as u8))
    }

    /// Adapt every pixel of `img` in place. Rows are processed in parallel.
    pub fn correct_image(&self, img: &mut image::RgbImage) {
        let row_len = (img.width() as usize) * 3;
        if row_len == 0 {
            return;
        }
        let buf: &mut [u8] = img;
        buf.par_chunks_mut(row_len).for_each(|row| {
            for px in row.chunks_exact_mut(3) {
                let out = self.correct_rgb8(image::Rgb([px[0], px[1], px[2]]));
                px.copy_from_slice(&out.0);
            }
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/adaptation.rs"]
mod tests;
