use crate::error::{LinalgError, LinalgResult};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::MatrixGen;
use crate::scalar::Scalar;
use crate::vector::vector_gen::VectorGen;
use std::ops;

impl<T: Scalar> MatrixGen<T> {
    fn check_same_shape(&self, op: &'static str, rhs: &MatrixGen<T>) -> LinalgResult<()> {
        if self.shape() != rhs.shape() {
            return Err(LinalgError::mismatch(op, self.shape(), rhs.shape()));
        }
        Ok(())
    }

    fn zip_with(&self, rhs: &MatrixGen<T>, f: impl Fn(T, T) -> T) -> MatrixGen<T> {
        MatrixGen {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| f(*a, *b))
                .collect(),
        }
    }

    fn map(&self, f: impl Fn(T) -> T) -> MatrixGen<T> {
        MatrixGen {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(|a| f(*a)).collect(),
        }
    }

    /// `self + rhs` as a new matrix; neither operand is touched.
    pub fn sum(&self, rhs: &MatrixGen<T>) -> LinalgResult<MatrixGen<T>> {
        self.check_same_shape("sum", rhs)?;
        Ok(self.zip_with(rhs, |a, b| a + b))
    }

    pub fn difference(&self, rhs: &MatrixGen<T>) -> LinalgResult<MatrixGen<T>> {
        self.check_same_shape("difference", rhs)?;
        Ok(self.zip_with(rhs, |a, b| a - b))
    }

    /// Matrix product; `self.cols()` must equal `rhs.rows()`.
    pub fn product(&self, rhs: &MatrixGen<T>) -> LinalgResult<MatrixGen<T>> {
        if self.cols != rhs.rows {
            return Err(LinalgError::mismatch("product", self.shape(), rhs.shape()));
        }

        Ok(MatrixGen {
            rows: self.rows,
            cols: rhs.cols,
            cells: (0..self.rows)
                .flat_map(|i| {
                    (0..rhs.cols)
                        .map(move |j| (0..self.cols).map(|k| self.at(i, k) * rhs.at(k, j)).sum())
                })
                .collect(),
        })
    }

    /// Matrix times column vector; `vector.len()` must equal `self.cols()`.
    pub fn product_vector(&self, vector: &VectorGen<T>) -> LinalgResult<VectorGen<T>> {
        if self.cols != vector.len() {
            return Err(LinalgError::mismatch(
                "product_vector",
                self.shape(),
                (vector.len(), 1),
            ));
        }
        if self.cols == 0 {
            return Ok(VectorGen::new(self.rows));
        }

        Ok(VectorGen::from_vec(
            self.cells
                .chunks(self.cols)
                .map(|row| row.iter().zip(vector.as_slice()).map(|(a, b)| *a * *b).sum())
                .collect(),
        ))
    }

    pub fn scaled(&self, factor: T) -> MatrixGen<T> {
        self.map(|a| a * factor)
    }

    pub fn divided(&self, denom: T) -> MatrixGen<T> {
        self.map(|a| a / denom)
    }

    pub fn negated(&self) -> MatrixGen<T> {
        self.map(|a| -a)
    }

    pub fn add_matrix(&mut self, rhs: &MatrixGen<T>) -> LinalgResult<()> {
        self.check_same_shape("add_matrix", rhs)?;
        self.cells
            .iter_mut()
            .zip(rhs.cells.iter())
            .for_each(|(a, b)| *a += *b);
        Ok(())
    }

    pub fn subtract_matrix(&mut self, rhs: &MatrixGen<T>) -> LinalgResult<()> {
        self.check_same_shape("subtract_matrix", rhs)?;
        self.cells
            .iter_mut()
            .zip(rhs.cells.iter())
            .for_each(|(a, b)| *a -= *b);
        Ok(())
    }

    pub fn multiply_scalar(&mut self, factor: T) {
        self.cells.iter_mut().for_each(|a| *a *= factor);
    }

    pub fn divide_scalar(&mut self, denom: T) {
        self.cells.iter_mut().for_each(|a| *a /= denom);
    }

    pub fn negate(&mut self) {
        self.cells.iter_mut().for_each(|a| *a = -*a);
    }
}

impl<T: Scalar> ops::Add<&MatrixGen<T>> for &MatrixGen<T> {
    type Output = LinalgResult<MatrixGen<T>>;

    fn add(self, rhs: &MatrixGen<T>) -> LinalgResult<MatrixGen<T>> {
        self.sum(rhs)
    }
}

impl<T: Scalar> ops::Sub<&MatrixGen<T>> for &MatrixGen<T> {
    type Output = LinalgResult<MatrixGen<T>>;

    fn sub(self, rhs: &MatrixGen<T>) -> LinalgResult<MatrixGen<T>> {
        self.difference(rhs)
    }
}

impl<T: Scalar> ops::Mul<&MatrixGen<T>> for &MatrixGen<T> {
    type Output = LinalgResult<MatrixGen<T>>;

    fn mul(self, rhs: &MatrixGen<T>) -> LinalgResult<MatrixGen<T>> {
        self.product(rhs)
    }
}

impl<T: Scalar> ops::Mul<&VectorGen<T>> for &MatrixGen<T> {
    type Output = LinalgResult<VectorGen<T>>;

    fn mul(self, rhs: &VectorGen<T>) -> LinalgResult<VectorGen<T>> {
        self.product_vector(rhs)
    }
}

impl<T: Scalar> ops::Mul<T> for &MatrixGen<T> {
    type Output = MatrixGen<T>;

    fn mul(self, rhs: T) -> MatrixGen<T> {
        self.scaled(rhs)
    }
}

impl<T: Scalar> ops::Mul<T> for MatrixGen<T> {
    type Output = MatrixGen<T>;

    fn mul(mut self, rhs: T) -> MatrixGen<T> {
        self.multiply_scalar(rhs);
        self
    }
}

impl<T: Scalar> ops::Div<T> for &MatrixGen<T> {
    type Output = MatrixGen<T>;

    fn div(self, rhs: T) -> MatrixGen<T> {
        self.divided(rhs)
    }
}

impl<T: Scalar> ops::Div<T> for MatrixGen<T> {
    type Output = MatrixGen<T>;

    fn div(mut self, rhs: T) -> MatrixGen<T> {
        self.divide_scalar(rhs);
        self
    }
}

impl<T: Scalar> ops::Neg for &MatrixGen<T> {
    type Output = MatrixGen<T>;

    fn neg(self) -> MatrixGen<T> {
        self.negated()
    }
}

impl<T: Scalar> ops::Neg for MatrixGen<T> {
    type Output = MatrixGen<T>;

    fn neg(mut self) -> MatrixGen<T> {
        self.negate();
        self
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl ops::Mul<&MatrixGen<$t>> for $t {
                type Output = MatrixGen<$t>;

                fn mul(self, rhs: &MatrixGen<$t>) -> MatrixGen<$t> {
                    rhs.scaled(self)
                }
            }

            impl ops::Mul<MatrixGen<$t>> for $t {
                type Output = MatrixGen<$t>;

                fn mul(self, rhs: MatrixGen<$t>) -> MatrixGen<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64);

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
