//! Fixed-size vectors with named components.

use crate::error::{LinalgError, LinalgResult};
use crate::scalar::Scalar;
use crate::vector::vector::Vector;
use crate::vector::vector_gen::VectorGen;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops;

#[derive(Copy, Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

#[derive(Copy, Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

#[derive(Copy, Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

pub type Vector2F = Vector2<f32>;
pub type Vector2D = Vector2<f64>;
pub type Vector3F = Vector3<f32>;
pub type Vector3D = Vector3<f64>;
pub type Vector4F = Vector4<f32>;
pub type Vector4D = Vector4<f64>;

macro_rules! impl_fixed_vector {
    ($name:ident, $dim:expr, [$($idx:literal => $f:ident),+]) => {
        impl<T: Scalar> Vector<T> for $name<T> {
            fn dim(&self) -> usize {
                $dim
            }

            fn at(&self, index: usize) -> T {
                match self.slot(index) {
                    Some(value) => *value,
                    None => panic!("{}", LinalgError::VectorIndexOutOfBounds { index, len: $dim }),
                }
            }
        }

        impl<T: Scalar> $name<T> {
            pub const DIM: usize = $dim;

            pub fn new($($f: T),+) -> Self {
                $name { $($f),+ }
            }

            pub fn zero() -> Self {
                $name { $($f: T::zero()),+ }
            }

            fn slot(&self, index: usize) -> Option<&T> {
                match index {
                    $($idx => Some(&self.$f),)+
                    _ => None,
                }
            }

            fn slot_mut(&mut self, index: usize) -> Option<&mut T> {
                match index {
                    $($idx => Some(&mut self.$f),)+
                    _ => None,
                }
            }

            pub fn get(&self, index: usize) -> LinalgResult<T> {
                self.slot(index)
                    .copied()
                    .ok_or(LinalgError::VectorOutOfRange { index, len: $dim })
            }

            pub fn set(&mut self, index: usize, value: T) -> LinalgResult<()> {
                match self.slot_mut(index) {
                    Some(cell) => {
                        *cell = value;
                        Ok(())
                    }
                    None => Err(LinalgError::VectorOutOfRange { index, len: $dim }),
                }
            }

            pub fn element(&self, index: usize) -> LinalgResult<&T> {
                self.slot(index)
                    .ok_or(LinalgError::VectorIndexOutOfBounds { index, len: $dim })
            }

            pub fn element_mut(&mut self, index: usize) -> LinalgResult<&mut T> {
                self.slot_mut(index)
                    .ok_or(LinalgError::VectorIndexOutOfBounds { index, len: $dim })
            }

            /// Shape-checked conversion from any vector-shaped value.
            pub fn from_vector<V: Vector<T> + ?Sized>(other: &V) -> LinalgResult<Self> {
                if other.dim() != $dim {
                    log::debug!("cannot build {} from a vector of dimension {}", stringify!($name), other.dim());
                    return Err(LinalgError::mismatch("from_vector", ($dim, 1), (other.dim(), 1)));
                }
                Ok($name { $($f: other.at($idx)),+ })
            }

            pub fn to_array(&self) -> [T; $dim] {
                [$(self.$f),+]
            }

            pub fn dot(&self, rhs: &Self) -> T {
                T::zero() $(+ self.$f * rhs.$f)+
            }

            pub fn length_squared(&self) -> T {
                self.dot(self)
            }

            pub fn length(&self) -> T {
                self.length_squared().sqrt()
            }

            /// Scale to unit length. A zero vector becomes NaN.
            pub fn normalize(&mut self) {
                let length = self.length();
                $(self.$f /= length;)+
            }

            pub fn normalized(&self) -> Self {
                let mut copy = *self;
                copy.normalize();
                copy
            }

            /// Angle between the two vectors, in radians.
            pub fn angle(&self, rhs: &Self) -> T {
                let cos = self.dot(rhs) / (self.length() * rhs.length());
                cos.max(-T::one()).min(T::one()).acos()
            }

            /// Projection of `self` onto `onto`.
            pub fn projection(&self, onto: &Self) -> Self {
                *onto * (self.dot(onto) / onto.length_squared())
            }
        }

        impl<T: Scalar> Eq for $name<T> {}

        impl<T: Scalar> Hash for $name<T> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                Self::DIM.hash(state);
            }
        }

        impl<T: Scalar> ops::Index<usize> for $name<T> {
            type Output = T;

            fn index(&self, index: usize) -> &T {
                match self.element(index) {
                    Ok(value) => value,
                    Err(error) => panic!("{}", error),
                }
            }
        }

        impl<T: Scalar> ops::IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, index: usize) -> &mut T {
                match self.element_mut(index) {
                    Ok(value) => value,
                    Err(error) => panic!("{}", error),
                }
            }
        }

        impl<T: Scalar> ops::Add for $name<T> {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                $name { $($f: self.$f + rhs.$f),+ }
            }
        }

        impl<T: Scalar> ops::Sub for $name<T> {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                $name { $($f: self.$f - rhs.$f),+ }
            }
        }

        impl<T: Scalar> ops::Neg for $name<T> {
            type Output = Self;

            fn neg(self) -> Self {
                $name { $($f: -self.$f),+ }
            }
        }

        impl<T: Scalar> ops::Mul<T> for $name<T> {
            type Output = Self;

            fn mul(self, rhs: T) -> Self {
                $name { $($f: self.$f * rhs),+ }
            }
        }

        impl<T: Scalar> ops::Div<T> for $name<T> {
            type Output = Self;

            fn div(self, rhs: T) -> Self {
                $name { $($f: self.$f / rhs),+ }
            }
        }

        impl ops::Mul<$name<f32>> for f32 {
            type Output = $name<f32>;

            fn mul(self, rhs: $name<f32>) -> $name<f32> {
                rhs * self
            }
        }

        impl ops::Mul<$name<f64>> for f64 {
            type Output = $name<f64>;

            fn mul(self, rhs: $name<f64>) -> $name<f64> {
                rhs * self
            }
        }

        impl<T: Scalar> From<[T; $dim]> for $name<T> {
            fn from(array: [T; $dim]) -> Self {
                $name { $($f: array[$idx]),+ }
            }
        }

        impl<T: Scalar> From<$name<T>> for [T; $dim] {
            fn from(v: $name<T>) -> Self {
                v.to_array()
            }
        }

        impl<T: Scalar> From<$name<T>> for VectorGen<T> {
            fn from(v: $name<T>) -> Self {
                VectorGen::from_vec(v.to_array().to_vec())
            }
        }

        impl<T: Scalar> TryFrom<&VectorGen<T>> for $name<T> {
            type Error = LinalgError;

            fn try_from(v: &VectorGen<T>) -> LinalgResult<Self> {
                $name::from_vector(v)
            }
        }

        impl<T: Scalar> fmt::Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let parts = [$(self.$f.to_string()),+];
                write!(f, "({})", parts.join(", "))
            }
        }
    };
}

impl_fixed_vector!(Vector2, 2, [0 => x, 1 => y]);
impl_fixed_vector!(Vector3, 3, [0 => x, 1 => y, 2 => z]);
impl_fixed_vector!(Vector4, 4, [0 => x, 1 => y, 2 => z, 3 => w]);

impl<T: Scalar> Vector3<T> {
    pub fn cross(&self, rhs: &Self) -> Self {
        Vector3 {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    /// Homogeneous point `(x, y, z, 1)`.
    pub fn extend(&self, w: T) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, w)
    }
}

impl<T: Scalar> Vector4<T> {
    /// Drop `w` without dividing.
    pub fn truncate(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }
}
