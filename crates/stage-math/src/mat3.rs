// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::Vec3;

/// Row-major 3×3 matrix.
///
/// `at(r, c)` addresses row `r`, column `c`. Transforming a vector produces
/// output component `r` as `x·m[r][0] + y·m[r][1] + z·m[r][2]`, and that is
/// the result for both `v * m` and `m * v`.
///
/// # Examples
/// ```
/// use stage_math::{Mat3, Vec3};
/// let s = Mat3::scale(2.0, 3.0, 4.0);
/// assert_eq!((Vec3::new(1.0, 1.0, 1.0) * s).to_array(), [2.0, 3.0, 4.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat3 {
    rows: [[f32; 3]; 3],
}

impl Mat3 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self {
            rows: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Creates a matrix from rows.
    pub const fn from_rows(rows: [[f32; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Returns the rows of the matrix.
    pub fn to_rows(self) -> [[f32; 3]; 3] {
        self.rows
    }

    /// Element at `row`, `col`.
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.rows[row][col]
    }

    /// Non-uniform scale along each axis.
    pub const fn scale(sx: f32, sy: f32, sz: f32) -> Self {
        Self::from_rows([[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, sz]])
    }

    /// 2D translation in homogeneous form (`z` acts as `w`).
    pub const fn translation(tx: f32, ty: f32) -> Self {
        Self::from_rows([[1.0, 0.0, tx], [0.0, 1.0, ty], [0.0, 0.0, 1.0]])
    }

    /// Counter-clockwise rotation about +X by `angle` radians.
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]])
    }

    /// Counter-clockwise rotation about +Y by `angle` radians.
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]])
    }

    /// Counter-clockwise rotation about +Z by `angle` radians.
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Self {
        let mut out = [[0.0; 3]; 3];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = self.rows[c][r];
            }
        }
        Self::from_rows(out)
    }

    /// Matrix product `self * rhs`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [[0.0; 3]; 3];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.at(r, k) * rhs.at(k, c)).sum();
            }
        }
        Self::from_rows(out)
    }

    /// Sum-of-products transform of `v` (see the type docs for layout).
    pub fn transform(&self, v: &Vec3) -> Vec3 {
        let x = v.component(0);
        let y = v.component(1);
        let z = v.component(2);
        Vec3::new(
            x * self.at(0, 0) + y * self.at(0, 1) + z * self.at(0, 2),
            x * self.at(1, 0) + y * self.at(1, 1) + z * self.at(1, 2),
            x * self.at(2, 0) + y * self.at(2, 1) + z * self.at(2, 2),
        )
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[[f32; 3]; 3]> for Mat3 {
    fn from(value: [[f32; 3]; 3]) -> Self {
        Self::from_rows(value)
    }
}

impl core::ops::Mul for Mat3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}
