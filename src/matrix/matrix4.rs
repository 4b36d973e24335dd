use crate::error::{LinalgError, LinalgResult};
use crate::matrix::fixed::impl_fixed_matrix;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::MatrixGen;
use crate::scalar::Scalar;
use crate::vector::vector_fixed::{Vector3, Vector4};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{self, Index, IndexMut};

/// 4x4 matrix, fields named `m<row><col>`.
///
/// The geometric factories build column-vector transforms: translation
/// lives in the last column and points are multiplied on the right.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix4<T> {
    pub m00: T,
    pub m01: T,
    pub m02: T,
    pub m03: T,
    pub m10: T,
    pub m11: T,
    pub m12: T,
    pub m13: T,
    pub m20: T,
    pub m21: T,
    pub m22: T,
    pub m23: T,
    pub m30: T,
    pub m31: T,
    pub m32: T,
    pub m33: T,
}

pub type Matrix4F = Matrix4<f32>;
pub type Matrix4D = Matrix4<f64>;

impl_fixed_matrix!(Matrix4, Vector4, 4, [
    (0, 0) => m00, (0, 1) => m01, (0, 2) => m02, (0, 3) => m03,
    (1, 0) => m10, (1, 1) => m11, (1, 2) => m12, (1, 3) => m13,
    (2, 0) => m20, (2, 1) => m21, (2, 2) => m22, (2, 3) => m23,
    (3, 0) => m30, (3, 1) => m31, (3, 2) => m32, (3, 3) => m33
]);

/// 2x2 minors of the top two rows (`s`) and bottom two rows (`c`).
struct Minors {
    s: [f64; 6],
    c: [f64; 6],
}

impl Minors {
    fn of(m: &[[f64; 4]; 4]) -> Minors {
        Minors {
            s: [
                m[0][0] * m[1][1] - m[1][0] * m[0][1],
                m[0][0] * m[1][2] - m[1][0] * m[0][2],
                m[0][0] * m[1][3] - m[1][0] * m[0][3],
                m[0][1] * m[1][2] - m[1][1] * m[0][2],
                m[0][1] * m[1][3] - m[1][1] * m[0][3],
                m[0][2] * m[1][3] - m[1][2] * m[0][3],
            ],
            c: [
                m[2][0] * m[3][1] - m[3][0] * m[2][1],
                m[2][0] * m[3][2] - m[3][0] * m[2][2],
                m[2][0] * m[3][3] - m[3][0] * m[2][3],
                m[2][1] * m[3][2] - m[3][1] * m[2][2],
                m[2][1] * m[3][3] - m[3][1] * m[2][3],
                m[2][2] * m[3][3] - m[3][2] * m[2][3],
            ],
        }
    }

    /// Laplace expansion over the two row pairs.
    fn determinant(&self) -> f64 {
        let Minors { s, c } = self;
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    fn adjugate(&self, m: &[[f64; 4]; 4]) -> [[f64; 4]; 4] {
        let Minors { s, c } = self;
        [
            [
                m[1][1] * c[5] - m[1][2] * c[4] + m[1][3] * c[3],
                -m[0][1] * c[5] + m[0][2] * c[4] - m[0][3] * c[3],
                m[3][1] * s[5] - m[3][2] * s[4] + m[3][3] * s[3],
                -m[2][1] * s[5] + m[2][2] * s[4] - m[2][3] * s[3],
            ],
            [
                -m[1][0] * c[5] + m[1][2] * c[2] - m[1][3] * c[1],
                m[0][0] * c[5] - m[0][2] * c[2] + m[0][3] * c[1],
                -m[3][0] * s[5] + m[3][2] * s[2] - m[3][3] * s[1],
                m[2][0] * s[5] - m[2][2] * s[2] + m[2][3] * s[1],
            ],
            [
                m[1][0] * c[4] - m[1][1] * c[2] + m[1][3] * c[0],
                -m[0][0] * c[4] + m[0][1] * c[2] - m[0][3] * c[0],
                m[3][0] * s[4] - m[3][1] * s[2] + m[3][3] * s[0],
                -m[2][0] * s[4] + m[2][1] * s[2] - m[2][3] * s[0],
            ],
            [
                -m[1][0] * c[3] + m[1][1] * c[1] - m[1][2] * c[0],
                m[0][0] * c[3] - m[0][1] * c[1] + m[0][2] * c[0],
                -m[3][0] * s[3] + m[3][1] * s[1] - m[3][2] * s[0],
                m[2][0] * s[3] - m[2][1] * s[1] + m[2][2] * s[0],
            ],
        ]
    }
}

impl<T: Scalar> Matrix4<T> {
    pub fn determinant(&self) -> T {
        T::narrow(Minors::of(&self.widened()).determinant())
    }

    /// Transposed cofactor matrix.
    pub fn adjugate(&self) -> Self {
        let m = self.widened();
        Self::narrowed(Minors::of(&m).adjugate(&m))
    }

    pub fn inverse(&self) -> LinalgResult<Self> {
        let m = self.widened();
        let minors = Minors::of(&m);
        let det = minors.determinant();
        if det == 0.0 || !det.is_finite() {
            log::debug!("singular 4x4 matrix (det = {})", det);
            return Err(LinalgError::NoInverse { order: 4 });
        }
        Ok(Self::narrowed(
            minors.adjugate(&m).map(|row| row.map(|x| x / det)),
        ))
    }

    pub fn product(&self, rhs: &Self) -> Self {
        let (a, b) = (self.to_array(), rhs.to_array());
        let mut out = [[T::zero(); 4]; 4];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j] + a[i][3] * b[3][j];
            }
        }
        Matrix4::from_array(out)
    }

    pub fn product_vector(&self, v: &Vector4<T>) -> Vector4<T> {
        Vector4 {
            x: self.m00 * v.x + self.m01 * v.y + self.m02 * v.z + self.m03 * v.w,
            y: self.m10 * v.x + self.m11 * v.y + self.m12 * v.z + self.m13 * v.w,
            z: self.m20 * v.x + self.m21 * v.y + self.m22 * v.z + self.m23 * v.w,
            w: self.m30 * v.x + self.m31 * v.y + self.m32 * v.z + self.m33 * v.w,
        }
    }

    pub fn rotation_x(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::zero(), T::one());
        Matrix4::new(l, o, o, o, o, c, -s, o, o, s, c, o, o, o, o, l)
    }

    pub fn rotation_y(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::zero(), T::one());
        Matrix4::new(c, o, s, o, o, l, o, o, -s, o, c, o, o, o, o, l)
    }

    pub fn rotation_z(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::zero(), T::one());
        Matrix4::new(c, -s, o, o, s, c, o, o, o, o, l, o, o, o, o, l)
    }

    pub fn scale(sx: T, sy: T, sz: T) -> Self {
        let (o, l) = (T::zero(), T::one());
        Matrix4::new(sx, o, o, o, o, sy, o, o, o, o, sz, o, o, o, o, l)
    }

    pub fn translation(tx: T, ty: T, tz: T) -> Self {
        let (o, l) = (T::zero(), T::one());
        Matrix4::new(l, o, o, tx, o, l, o, ty, o, o, l, tz, o, o, o, l)
    }

    /// Apply to the point `(p, 1)` and divide by the resulting `w`.
    pub fn transform_point(&self, p: &Vector3<T>) -> Vector3<T> {
        let v = self.product_vector(&p.extend(T::one()));
        v.truncate() / v.w
    }

    /// Apply to the direction `(d, 0)`; translation has no effect.
    pub fn transform_direction(&self, d: &Vector3<T>) -> Vector3<T> {
        self.product_vector(&d.extend(T::zero())).truncate()
    }
}
