use crate::error::{LinalgError, LinalgResult};
use crate::scalar::Scalar;
use crate::vector::vector::Vector;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{self, Index, IndexMut};

/// Vector of arbitrary dimension, fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorGen<T> {
    pub(crate) cells: Vec<T>,
}

pub type VectorF = VectorGen<f32>;
pub type VectorD = VectorGen<f64>;

impl<T: Scalar> Vector<T> for VectorGen<T> {
    fn dim(&self) -> usize {
        self.cells.len()
    }

    #[inline(always)]
    fn at(&self, index: usize) -> T {
        self.cells[index]
    }
}

impl<T: Scalar> VectorGen<T> {
    /// Zero vector of dimension `n`.
    pub fn new(n: usize) -> VectorGen<T> {
        VectorGen {
            cells: vec![T::zero(); n],
        }
    }

    pub fn from_vec(cells: Vec<T>) -> VectorGen<T> {
        VectorGen { cells }
    }

    pub fn from_vector<V: Vector<T> + ?Sized>(other: &V) -> VectorGen<T> {
        VectorGen {
            cells: other.to_vec(),
        }
    }

    pub fn copy_from<V: Vector<T> + ?Sized>(&mut self, other: &V) -> LinalgResult<()> {
        if other.dim() != self.len() {
            return Err(LinalgError::mismatch(
                "copy_from",
                (self.len(), 1),
                (other.dim(), 1),
            ));
        }
        for (i, cell) in self.cells.iter_mut().enumerate() {
            *cell = other.at(i);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> LinalgResult<T> {
        self.cells
            .get(index)
            .copied()
            .ok_or(LinalgError::VectorOutOfRange {
                index,
                len: self.len(),
            })
    }

    pub fn set(&mut self, index: usize, value: T) -> LinalgResult<()> {
        let len = self.len();
        match self.cells.get_mut(index) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(LinalgError::VectorOutOfRange { index, len }),
        }
    }

    pub fn element(&self, index: usize) -> LinalgResult<&T> {
        let len = self.len();
        self.cells
            .get(index)
            .ok_or(LinalgError::VectorIndexOutOfBounds { index, len })
    }

    pub fn element_mut(&mut self, index: usize) -> LinalgResult<&mut T> {
        let len = self.len();
        self.cells
            .get_mut(index)
            .ok_or(LinalgError::VectorIndexOutOfBounds { index, len })
    }

    fn check_same_dim(&self, op: &'static str, rhs: &VectorGen<T>) -> LinalgResult<()> {
        if self.len() != rhs.len() {
            return Err(LinalgError::mismatch(op, (self.len(), 1), (rhs.len(), 1)));
        }
        Ok(())
    }

    pub fn dot(&self, rhs: &VectorGen<T>) -> LinalgResult<T> {
        self.check_same_dim("dot", rhs)?;
        Ok(self
            .cells
            .iter()
            .zip(rhs.cells.iter())
            .map(|(a, b)| *a * *b)
            .sum())
    }

    pub fn length_squared(&self) -> T {
        self.cells.iter().map(|a| *a * *a).sum()
    }

    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Scale to unit length. A zero vector becomes NaN, like any division by zero.
    pub fn normalize(&mut self) {
        let length = self.length();
        self.cells.iter_mut().for_each(|a| *a /= length);
    }

    pub fn normalized(&self) -> VectorGen<T> {
        let mut copy = self.clone();
        copy.normalize();
        copy
    }

    /// Angle between the two vectors, in radians.
    pub fn angle(&self, rhs: &VectorGen<T>) -> LinalgResult<T> {
        let dot = self.dot(rhs)?;
        let cos = dot / (self.length() * rhs.length());
        Ok(cos.max(-T::one()).min(T::one()).acos())
    }

    /// Projection of `self` onto `onto`.
    pub fn projection(&self, onto: &VectorGen<T>) -> LinalgResult<VectorGen<T>> {
        let factor = self.dot(onto)? / onto.length_squared();
        Ok(onto.scaled(factor))
    }

    pub fn sum(&self, rhs: &VectorGen<T>) -> LinalgResult<VectorGen<T>> {
        self.check_same_dim("sum", rhs)?;
        Ok(VectorGen::from_vec(
            self.cells.iter().zip(rhs.cells.iter()).map(|(a, b)| *a + *b).collect(),
        ))
    }

    pub fn difference(&self, rhs: &VectorGen<T>) -> LinalgResult<VectorGen<T>> {
        self.check_same_dim("difference", rhs)?;
        Ok(VectorGen::from_vec(
            self.cells.iter().zip(rhs.cells.iter()).map(|(a, b)| *a - *b).collect(),
        ))
    }

    pub fn scaled(&self, factor: T) -> VectorGen<T> {
        VectorGen::from_vec(self.cells.iter().map(|a| *a * factor).collect())
    }
}

impl<T: Scalar> Eq for VectorGen<T> {}

impl<T: Scalar> Hash for VectorGen<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cells.len().hash(state);
    }
}

impl<T: Scalar> Index<usize> for VectorGen<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.element(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for VectorGen<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.element_mut(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T: Scalar> ops::Add<&VectorGen<T>> for &VectorGen<T> {
    type Output = LinalgResult<VectorGen<T>>;

    fn add(self, rhs: &VectorGen<T>) -> LinalgResult<VectorGen<T>> {
        self.sum(rhs)
    }
}

impl<T: Scalar> ops::Sub<&VectorGen<T>> for &VectorGen<T> {
    type Output = LinalgResult<VectorGen<T>>;

    fn sub(self, rhs: &VectorGen<T>) -> LinalgResult<VectorGen<T>> {
        self.difference(rhs)
    }
}

impl<T: Scalar> ops::Mul<T> for &VectorGen<T> {
    type Output = VectorGen<T>;

    fn mul(self, rhs: T) -> VectorGen<T> {
        self.scaled(rhs)
    }
}

impl<T: Scalar> ops::Neg for &VectorGen<T> {
    type Output = VectorGen<T>;

    fn neg(self) -> VectorGen<T> {
        VectorGen::from_vec(self.cells.iter().map(|a| -*a).collect())
    }
}

impl<T: Scalar> From<Vec<T>> for VectorGen<T> {
    fn from(value: Vec<T>) -> Self {
        VectorGen::from_vec(value)
    }
}

impl<T: Scalar> fmt::Display for VectorGen<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.cells.iter().join(", "))
    }
}
