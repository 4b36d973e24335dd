use crate::error::{LinalgError, LinalgResult};
use crate::matrix::fixed::impl_fixed_matrix;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::MatrixGen;
use crate::scalar::Scalar;
use crate::vector::vector_fixed::{Vector2, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{self, Index, IndexMut};

/// 3x3 matrix, fields named `m<row><col>`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix3<T> {
    pub m00: T,
    pub m01: T,
    pub m02: T,
    pub m10: T,
    pub m11: T,
    pub m12: T,
    pub m20: T,
    pub m21: T,
    pub m22: T,
}

pub type Matrix3F = Matrix3<f32>;
pub type Matrix3D = Matrix3<f64>;

impl_fixed_matrix!(Matrix3, Vector3, 3, [
    (0, 0) => m00, (0, 1) => m01, (0, 2) => m02,
    (1, 0) => m10, (1, 1) => m11, (1, 2) => m12,
    (2, 0) => m20, (2, 1) => m21, (2, 2) => m22
]);

impl<T: Scalar> Matrix3<T> {
    /// Rule of Sarrus.
    fn determinant_wide(m: &[[f64; 3]; 3]) -> f64 {
        m[0][0] * m[1][1] * m[2][2]
            + m[0][1] * m[1][2] * m[2][0]
            + m[0][2] * m[1][0] * m[2][1]
            - m[0][2] * m[1][1] * m[2][0]
            - m[0][0] * m[1][2] * m[2][1]
            - m[0][1] * m[1][0] * m[2][2]
    }

    fn adjugate_wide(m: &[[f64; 3]; 3]) -> [[f64; 3]; 3] {
        let [[a, b, c], [d, e, f], [g, h, i]] = *m;
        [
            [e * i - f * h, c * h - b * i, b * f - c * e],
            [f * g - d * i, a * i - c * g, c * d - a * f],
            [d * h - e * g, b * g - a * h, a * e - b * d],
        ]
    }

    pub fn determinant(&self) -> T {
        T::narrow(Self::determinant_wide(&self.widened()))
    }

    /// Transposed cofactor matrix.
    pub fn adjugate(&self) -> Self {
        Self::narrowed(Self::adjugate_wide(&self.widened()))
    }

    pub fn inverse(&self) -> LinalgResult<Self> {
        let m = self.widened();
        let det = Self::determinant_wide(&m);
        if det == 0.0 || !det.is_finite() {
            log::debug!("singular 3x3 matrix (det = {})", det);
            return Err(LinalgError::NoInverse { order: 3 });
        }
        Ok(Self::narrowed(
            Self::adjugate_wide(&m).map(|row| row.map(|x| x / det)),
        ))
    }

    pub fn product(&self, rhs: &Self) -> Self {
        let (a, b) = (self, rhs);
        Matrix3 {
            m00: a.m00 * b.m00 + a.m01 * b.m10 + a.m02 * b.m20,
            m01: a.m00 * b.m01 + a.m01 * b.m11 + a.m02 * b.m21,
            m02: a.m00 * b.m02 + a.m01 * b.m12 + a.m02 * b.m22,
            m10: a.m10 * b.m00 + a.m11 * b.m10 + a.m12 * b.m20,
            m11: a.m10 * b.m01 + a.m11 * b.m11 + a.m12 * b.m21,
            m12: a.m10 * b.m02 + a.m11 * b.m12 + a.m12 * b.m22,
            m20: a.m20 * b.m00 + a.m21 * b.m10 + a.m22 * b.m20,
            m21: a.m20 * b.m01 + a.m21 * b.m11 + a.m22 * b.m21,
            m22: a.m20 * b.m02 + a.m21 * b.m12 + a.m22 * b.m22,
        }
    }

    pub fn product_vector(&self, v: &Vector3<T>) -> Vector3<T> {
        Vector3 {
            x: self.m00 * v.x + self.m01 * v.y + self.m02 * v.z,
            y: self.m10 * v.x + self.m11 * v.y + self.m12 * v.z,
            z: self.m20 * v.x + self.m21 * v.y + self.m22 * v.z,
        }
    }

    pub fn rotation_x(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::zero(), T::one());
        Matrix3::new(l, o, o, o, c, -s, o, s, c)
    }

    pub fn rotation_y(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::zero(), T::one());
        Matrix3::new(c, o, s, o, l, o, -s, o, c)
    }

    pub fn rotation_z(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::zero(), T::one());
        Matrix3::new(c, -s, o, s, c, o, o, o, l)
    }

    /// Rotation by `angle` radians around `axis` (normalized here).
    pub fn rotation_axis(axis: &Vector3<T>, angle: T) -> Self {
        let u = axis.normalized();
        let (s, c) = angle.sin_cos();
        let t = T::one() - c;
        Matrix3::new(
            c + u.x * u.x * t,
            u.x * u.y * t - u.z * s,
            u.x * u.z * t + u.y * s,
            u.y * u.x * t + u.z * s,
            c + u.y * u.y * t,
            u.y * u.z * t - u.x * s,
            u.z * u.x * t - u.y * s,
            u.z * u.y * t + u.x * s,
            c + u.z * u.z * t,
        )
    }

    pub fn scale(sx: T, sy: T, sz: T) -> Self {
        let o = T::zero();
        Matrix3::new(sx, o, o, o, sy, o, o, o, sz)
    }

    /// Homogeneous 2D translation.
    pub fn translation_2d(tx: T, ty: T) -> Self {
        let (o, l) = (T::zero(), T::one());
        Matrix3::new(l, o, tx, o, l, ty, o, o, l)
    }

    /// Apply as a homogeneous 2D transform to the point `(p.x, p.y, 1)`.
    pub fn transform_point_2d(&self, p: &Vector2<T>) -> Vector2<T> {
        let v = self.product_vector(&Vector3::new(p.x, p.y, T::one()));
        Vector2::new(v.x / v.z, v.y / v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn sample() -> Matrix3D {
        Matrix3D::new(2.0, -3.0, 1.0, 2.0, 0.0, -1.0, 1.0, 4.0, 5.0)
    }

    #[test]
    fn test_determinant() {
        assert_eq!(sample().determinant(), 49.0);
        assert_eq!(Matrix3F::identity().determinant(), 1.0);
        let ones = Matrix3D::new(1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0);
        assert_eq!(ones.determinant(), 0.0);
        assert_eq!(ones.inverse(), Err(LinalgError::NoInverse { order: 3 }));
    }

    #[test]
    fn test_counting_matrix_is_singular() {
        let m = Matrix3D::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_eq!(m.determinant(), 0.0);
        assert_eq!(m.inverse(), Err(LinalgError::NoInverse { order: 3 }));
        let general = MatrixGen::from(m);
        assert_eq!(general.determinant().unwrap(), 0.0);
        assert_eq!(general.inverse(), Err(LinalgError::NoInverse { order: 3 }));
    }

    #[test]
    fn test_f32_accumulates_like_general_engine() {
        let m = Matrix3F::new(0.1, 0.7, 1.0 / 3.0, 2.9, -0.3, 0.45, 1.1, 5.5, -0.01);
        let general = MatrixGen::from(m);
        assert_eq!(m.determinant(), general.determinant().unwrap());

        let fixed = MatrixGen::from(m.inverse().unwrap());
        assert!(fixed.approx_eq(&general.inverse().unwrap(), 1e-6));
    }

    #[test]
    fn test_inverse_round_trip() {
        let m = sample();
        let inv = m.inverse().unwrap();
        assert!((m * inv).approx_eq(&Matrix3D::identity(), 1e-12));
        assert!(inv.inverse().unwrap().approx_eq(&m, 1e-12));
        assert_eq!(m, sample());
    }

    #[test]
    fn test_agrees_with_general_engine() {
        let m = sample();
        let general = MatrixGen::from(m);
        assert_eq!(general.determinant().unwrap(), m.determinant());
        let inv = Matrix3D::try_from(&general.inverse().unwrap()).unwrap();
        assert!(inv.approx_eq(&m.inverse().unwrap(), 1e-12));
    }

    #[test]
    fn test_rotations() {
        let v = Vector3::new(1.0, 0.0, 0.0);
        let r = Matrix3D::rotation_z(FRAC_PI_2) * v;
        assert!((r - Vector3::new(0.0, 1.0, 0.0)).length() < 1e-12);

        let axis = Matrix3D::rotation_axis(&Vector3::new(0.0, 0.0, 2.0), FRAC_PI_2);
        assert!(axis.approx_eq(&Matrix3D::rotation_z(FRAC_PI_2), 1e-12));

        let axis = Matrix3D::rotation_axis(&Vector3::new(1.0, 0.0, 0.0), 0.3);
        assert!(axis.approx_eq(&Matrix3D::rotation_x(0.3), 1e-12));

        let ry = Matrix3D::rotation_y(0.7);
        assert!((ry.determinant() - 1.0).abs() < 1e-12);
        assert!((ry * ry.transposed()).approx_eq(&Matrix3D::identity(), 1e-12));
    }

    #[test]
    fn test_translation_2d() {
        let t = Matrix3F::translation_2d(2.0, -1.0);
        let p = t.transform_point_2d(&Vector2::new(1.0, 1.0));
        assert_eq!(p, Vector2::new(3.0, 0.0));
        let back = t.inverse().unwrap().transform_point_2d(&p);
        assert_eq!(back, Vector2::new(1.0, 1.0));
    }

    #[test]
    fn test_scale_and_structure() {
        let s = Matrix3F::scale(1.0, 2.0, 4.0);
        assert_eq!(s.trace(), 7.0);
        assert!(s.is_symmetric());
        assert!(!s.is_identity());
        assert_eq!(s.inverse().unwrap(), Matrix3F::scale(1.0, 0.5, 0.25));

        let mut m = sample();
        m.transpose();
        assert_eq!(m.m01, 2.0);
        assert_eq!(m.m10, -3.0);
        assert!(!m.is_symmetric());
    }

    #[test]
    fn test_elementary_ops_match_general() {
        let mut fixed = sample();
        let mut general = MatrixGen::from(sample());

        fixed.swap_rows(0, 2).unwrap();
        general.swap_rows(0, 2).unwrap();
        fixed.scale_column(1, 0.5).unwrap();
        general.scale_column(1, 0.5).unwrap();
        fixed.add_scaled_row(0, 1, 2.0).unwrap();
        general.add_scaled_row(0, 1, 2.0).unwrap();
        fixed.divide_row(2, 4.0).unwrap();
        general.divide_row(2, 4.0).unwrap();
        fixed.add_column(2, 0).unwrap();
        general.add_column(2, 0).unwrap();
        fixed.subtract_row(1, 0).unwrap();
        general.subtract_row(1, 0).unwrap();

        assert_eq!(MatrixGen::from(fixed), general);
        assert!(fixed.swap_columns(0, 3).is_err());
        assert!(fixed.divide_column(3, 1.0).is_err());
        assert!(fixed.scale_row(3, 1.0).is_err());
        assert_eq!(MatrixGen::from(fixed), general);
    }
}
