//! Bare minimum 3x3 linear algebra in double precision.

use std::ops::Mul;

/// A row-major 3x3 matrix of `f64`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Mat3(pub [[f64; 3]; 3]);

#[rustfmt::skip]
impl Mat3 {
    /// The identity transform.
    pub const IDENTITY: Mat3 = Mat3([
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ]);

    /// Diagonal matrix with `d` on the main diagonal.
    pub const fn diag(d: [f64; 3]) -> Mat3 {
        Mat3([
            [d[0], 0.0, 0.0],
            [0.0, d[1], 0.0],
            [0.0, 0.0, d[2]],
        ])
    }

    /// Borrow the rows.
    pub const fn rows(&self) -> &[[f64; 3]; 3] {
        &self.0
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn det(&self) -> f64 {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.0;
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// Adjugate (transposed cofactor matrix).
    pub fn adj(&self) -> Mat3 {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.0;
        Mat3([
            [e * i - f * h, c * h - b * i, b * f - c * e],
            [f * g - d * i, a * i - c * g, c * d - a * f],
            [d * h - e * g, b * g - a * h, a * e - b * d],
        ])
    }

    /// Exact inverse, or `None` when the matrix is singular.
    pub fn inv(&self) -> Option<Mat3> {
        let det = self.det();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let Mat3(adj) = self.adj();
        Some(Mat3(adj.map(|row| row.map(|v| v / det))))
    }

    /// Calculate `self · v`.
    pub fn mul_vec(&self, v: [f64; 3]) -> [f64; 3] {
        let dot = |r: &[f64; 3]| r[0] * v[0] + r[1] * v[1] + r[2] * v[2];
        [dot(&self.0[0]), dot(&self.0[1]), dot(&self.0[2])]
    }

    /// Return `true` when every element differs by at most `eps`.
    pub fn approx_eq(&self, other: &Mat3, eps: f64) -> bool {
        self.0
            .iter()
            .flatten()
            .zip(other.0.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= eps)
    }
}

impl Mul for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Mat3 {
        let a = &self.0;
        let b = &rhs.0;
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, v) in row.iter_mut().enumerate() {
                *v = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
            }
        }
        Mat3(out)
    }
}

impl Mul<[f64; 3]> for Mat3 {
    type Output = [f64; 3];

    fn mul(self, rhs: [f64; 3]) -> [f64; 3] {
        self.mul_vec(rhs)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
