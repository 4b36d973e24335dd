use crate::error::{LinalgError, LinalgResult};
use crate::matrix::fixed::impl_fixed_matrix;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::MatrixGen;
use crate::scalar::Scalar;
use crate::vector::vector_fixed::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{self, Index, IndexMut};

/// 2x2 matrix, fields named `m<row><col>`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix2<T> {
    pub m00: T,
    pub m01: T,
    pub m10: T,
    pub m11: T,
}

pub type Matrix2F = Matrix2<f32>;
pub type Matrix2D = Matrix2<f64>;

impl_fixed_matrix!(Matrix2, Vector2, 2, [
    (0, 0) => m00, (0, 1) => m01,
    (1, 0) => m10, (1, 1) => m11
]);

impl<T: Scalar> Matrix2<T> {
    fn determinant_wide(m: &[[f64; 2]; 2]) -> f64 {
        m[0][0] * m[1][1] - m[0][1] * m[1][0]
    }

    pub fn determinant(&self) -> T {
        T::narrow(Self::determinant_wide(&self.widened()))
    }

    /// Adjugate over determinant.
    pub fn inverse(&self) -> LinalgResult<Self> {
        let m = self.widened();
        let det = Self::determinant_wide(&m);
        if det == 0.0 || !det.is_finite() {
            log::debug!("singular 2x2 matrix (det = {})", det);
            return Err(LinalgError::NoInverse { order: 2 });
        }
        Ok(Self::narrowed([
            [m[1][1] / det, -m[0][1] / det],
            [-m[1][0] / det, m[0][0] / det],
        ]))
    }

    pub fn product(&self, rhs: &Self) -> Self {
        Matrix2 {
            m00: self.m00 * rhs.m00 + self.m01 * rhs.m10,
            m01: self.m00 * rhs.m01 + self.m01 * rhs.m11,
            m10: self.m10 * rhs.m00 + self.m11 * rhs.m10,
            m11: self.m10 * rhs.m01 + self.m11 * rhs.m11,
        }
    }

    pub fn product_vector(&self, v: &Vector2<T>) -> Vector2<T> {
        Vector2 {
            x: self.m00 * v.x + self.m01 * v.y,
            y: self.m10 * v.x + self.m11 * v.y,
        }
    }

    /// Counter-clockwise rotation by `angle` radians.
    pub fn rotation(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        Matrix2::new(c, -s, s, c)
    }

    pub fn scale(sx: T, sy: T) -> Self {
        Matrix2::new(sx, T::zero(), T::zero(), sy)
    }
}
