use crate::error::{LinalgError, LinalgResult};
use crate::matrix::matrix::Matrix;
use crate::scalar::Scalar;
use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

/// Dense row-major matrix of arbitrary order.
///
/// The shape is fixed at construction; only `transpose` swaps the two
/// extents. Equality is exact and element-wise, while hashing only looks
/// at the shape so in-place mutation never moves a value between buckets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixGen<T> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) cells: Vec<T>,
}

pub type MatrixF = MatrixGen<f32>;
pub type MatrixD = MatrixGen<f64>;

impl<T: Scalar> Matrix<T> for MatrixGen<T> {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col]
    }
}

impl<T: Scalar> MatrixGen<T> {
    /// Zero-filled `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> MatrixGen<T> {
        MatrixGen {
            rows,
            cols,
            cells: vec![T::zero(); rows * cols],
        }
    }

    pub fn zeros(rows: usize, cols: usize) -> MatrixGen<T> {
        Self::new(rows, cols)
    }

    pub fn identity(n: usize) -> MatrixGen<T> {
        MatrixGen {
            rows: n,
            cols: n,
            cells: (0..n)
                .flat_map(|i| (0..n).map(move |j| if i == j { T::one() } else { T::zero() }))
                .collect(),
        }
    }

    /// Build from a list of rows. Every row must have the same length.
    pub fn from_list(lines: Vec<Vec<T>>) -> LinalgResult<MatrixGen<T>> {
        let rows = lines.len();
        let cols = lines.first().map(|l| l.len()).unwrap_or(0);

        if let Some(bad) = lines.iter().find(|l| l.len() != cols) {
            return Err(LinalgError::mismatch(
                "from_list",
                (rows, cols),
                (1, bad.len()),
            ));
        }

        Ok(MatrixGen {
            rows,
            cols,
            cells: lines.into_iter().flatten().collect(),
        })
    }

    /// Build from row-major data; `data.len()` must equal `rows * cols`.
    pub fn from_row_slice(rows: usize, cols: usize, data: &[T]) -> LinalgResult<MatrixGen<T>> {
        if data.len() != rows * cols {
            return Err(LinalgError::mismatch(
                "from_row_slice",
                (rows, cols),
                (1, data.len()),
            ));
        }
        Ok(MatrixGen {
            rows,
            cols,
            cells: data.to_vec(),
        })
    }

    /// Copy any matrix-shaped value into a new general matrix.
    pub fn from_matrix<M: Matrix<T> + ?Sized>(other: &M) -> MatrixGen<T> {
        let (rows, cols) = other.shape();
        MatrixGen {
            rows,
            cols,
            cells: (0..rows)
                .flat_map(|r| (0..cols).map(move |c| other.at(r, c)))
                .collect(),
        }
    }

    /// Overwrite every element from `other`, which must have exactly the same shape.
    pub fn copy_from<M: Matrix<T> + ?Sized>(&mut self, other: &M) -> LinalgResult<()> {
        if other.shape() != self.shape() {
            log::debug!(
                "copy_from rejected: {:?} into {:?}",
                other.shape(),
                self.shape()
            );
            return Err(LinalgError::mismatch("copy_from", self.shape(), other.shape()));
        }
        for r in 0..self.rows {
            for c in 0..self.cols {
                self.cells[r * self.cols + c] = other.at(r, c);
            }
        }
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    #[inline(always)]
    pub(crate) fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    pub(crate) fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> LinalgResult<T> {
        if !self.in_bounds(row, col) {
            return Err(LinalgError::out_of_range(row, col, self.shape()));
        }
        Ok(self.cells[self.offset(row, col)])
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> LinalgResult<()> {
        if !self.in_bounds(row, col) {
            return Err(LinalgError::out_of_range(row, col, self.shape()));
        }
        let offset = self.offset(row, col);
        self.cells[offset] = value;
        Ok(())
    }

    /// Checked reference through the index path.
    pub fn element(&self, row: usize, col: usize) -> LinalgResult<&T> {
        if !self.in_bounds(row, col) {
            return Err(LinalgError::index_out_of_bounds(row, col, self.shape()));
        }
        Ok(&self.cells[self.offset(row, col)])
    }

    pub fn element_mut(&mut self, row: usize, col: usize) -> LinalgResult<&mut T> {
        if !self.in_bounds(row, col) {
            return Err(LinalgError::index_out_of_bounds(row, col, self.shape()));
        }
        let offset = self.offset(row, col);
        Ok(&mut self.cells[offset])
    }

    pub fn row(&self, row: usize) -> LinalgResult<Vec<T>> {
        if row >= self.rows {
            return Err(LinalgError::out_of_range(row, 0, self.shape()));
        }
        let start = self.offset(row, 0);
        Ok(self.cells[start..start + self.cols].to_vec())
    }

    pub fn column(&self, col: usize) -> LinalgResult<Vec<T>> {
        if col >= self.cols {
            return Err(LinalgError::out_of_range(0, col, self.shape()));
        }
        Ok((0..self.rows).map(|r| self.at(r, col)).collect())
    }

    pub fn to_list(&self) -> Vec<Vec<T>> {
        Matrix::to_list(self)
    }

    /// Transpose in place; a `r x c` matrix becomes `c x r`.
    pub fn transpose(&mut self) {
        if self.rows == self.cols {
            let n = self.rows;
            for i in 0..n {
                for j in i + 1..n {
                    self.cells.swap(i * n + j, j * n + i);
                }
            }
            return;
        }
        *self = self.transposed();
    }

    pub fn transposed(&self) -> MatrixGen<T> {
        MatrixGen {
            rows: self.cols,
            cols: self.rows,
            cells: (0..self.cols)
                .flat_map(|c| (0..self.rows).map(move |r| self.at(r, c)))
                .collect(),
        }
    }

    /// Square, ones on the diagonal and zeros elsewhere, compared exactly.
    pub fn is_identity(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        (0..self.rows)
            .cartesian_product(0..self.cols)
            .all(|(r, c)| {
                let expected = if r == c { T::one() } else { T::zero() };
                self.at(r, c) == expected
            })
    }

    pub fn is_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        let n = self.rows;
        (0..n).all(|i| (i + 1..n).all(|j| self.at(i, j) == self.at(j, i)))
    }

    pub fn trace(&self) -> LinalgResult<T> {
        if !self.is_square() {
            return Err(LinalgError::not_square("trace", self.shape()));
        }
        Ok((0..self.rows).map(|i| self.at(i, i)).sum())
    }

    /// Element-wise comparison within `epsilon`; shapes must match.
    pub fn approx_eq(&self, other: &MatrixGen<T>, epsilon: T) -> bool {
        self.shape() == other.shape()
            && self
                .cells
                .iter()
                .zip(other.cells.iter())
                .all(|(a, b)| (*a - *b).abs() <= epsilon)
    }
}

impl<T: Scalar> Eq for MatrixGen<T> {}

impl<T: Scalar> Hash for MatrixGen<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rows.hash(state);
        self.cols.hash(state);
    }
}

impl<T: Scalar> Index<(usize, usize)> for MatrixGen<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &T {
        match self.element(index.0, index.1) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T: Scalar> IndexMut<(usize, usize)> for MatrixGen<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut T {
        match self.element_mut(index.0, index.1) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T: Scalar> fmt::Display for MatrixGen<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.rows == 0 || self.cols == 0 {
            return write!(f, "[]");
        }
        let body = self
            .cells
            .chunks(self.cols)
            .map(|line| format!("[{}]", line.iter().join(", ")))
            .join(", ");
        write!(f, "[{}]", body)
    }
}

#[derive(Deserialize)]
struct RawMatrix<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<'de, T> Deserialize<'de> for MatrixGen<T>
where
    T: Scalar + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawMatrix::<T>::deserialize(deserializer)?;
        if raw.cells.len() != raw.rows * raw.cols {
            return Err(serde::de::Error::custom(LinalgError::mismatch(
                "deserialize",
                (raw.rows, raw.cols),
                (1, raw.cells.len()),
            )));
        }
        Ok(MatrixGen {
            rows: raw.rows,
            cols: raw.cols,
            cells: raw.cells,
        })
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
