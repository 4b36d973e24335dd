//! Determinant, minors and cofactors of the general matrix.

use crate::config::EliminationConfig;
use crate::error::{LinalgError, LinalgResult};
use crate::matrix::elimination::Scratch;
use crate::matrix::matrix_gen::MatrixGen;
use crate::scalar::Scalar;

impl<T: Scalar> MatrixGen<T> {
    /// Determinant of a square matrix.
    ///
    /// Order 0 gives `0` and order 1 gives the sole element. Orders 2 and 3
    /// use the closed forms, larger orders use elimination with partial
    /// pivoting. Everything is accumulated in `f64`.
    pub fn determinant(&self) -> LinalgResult<T> {
        self.determinant_with(&EliminationConfig::default())
    }

    pub fn determinant_with(&self, config: &EliminationConfig) -> LinalgResult<T> {
        if !self.is_square() {
            return Err(LinalgError::NoDeterminant {
                rows: self.rows,
                cols: self.cols,
            });
        }

        Ok(T::narrow(self.determinant_wide(config)))
    }

    /// Determinant accumulated in `f64`, before narrowing. Callers check squareness.
    pub(crate) fn determinant_wide(&self, config: &EliminationConfig) -> f64 {
        let c = |i: usize| self.cells[i].widen();
        match self.rows {
            0 => 0.0,
            1 => c(0),
            2 => c(0) * c(3) - c(1) * c(2),
            3 => {
                c(0) * c(4) * c(8) + c(1) * c(5) * c(6) + c(2) * c(3) * c(7)
                    - c(2) * c(4) * c(6)
                    - c(0) * c(5) * c(7)
                    - c(1) * c(3) * c(8)
            }
            _ => Scratch::from_matrix::<T, _>(self).determinant(config),
        }
    }

    /// Copy of the matrix without row `row` and column `col`.
    pub fn submatrix(&self, row: usize, col: usize) -> LinalgResult<MatrixGen<T>> {
        if !self.in_bounds(row, col) {
            return Err(LinalgError::out_of_range(row, col, self.shape()));
        }
        Ok(MatrixGen {
            rows: self.rows - 1,
            cols: self.cols - 1,
            cells: (0..self.rows)
                .filter(|&r| r != row)
                .flat_map(|r| {
                    (0..self.cols)
                        .filter(move |&c| c != col)
                        .map(move |c| self.cells[r * self.cols + c])
                })
                .collect(),
        })
    }

    /// Determinant of the submatrix obtained by removing `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> LinalgResult<T> {
        if !self.is_square() {
            return Err(LinalgError::NoDeterminant {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let sub = self.submatrix(row, col)?;
        if sub.rows == 0 {
            // the minor of a 1x1 matrix is the empty product
            return Ok(T::one());
        }
        sub.determinant()
    }

    /// Signed minor `(-1)^(row + col) * minor(row, col)`.
    pub fn cofactor(&self, row: usize, col: usize) -> LinalgResult<T> {
        let minor = self.minor(row, col)?;
        Ok(if (row + col) % 2 == 0 { minor } else { -minor })
    }

    /// Transpose of the cofactor matrix.
    pub fn adjugate(&self) -> LinalgResult<MatrixGen<T>> {
        if !self.is_square() {
            return Err(LinalgError::not_square("adjugate", self.shape()));
        }
        let n = self.rows;
        let mut adj = MatrixGen::new(n, n);
        for r in 0..n {
            for c in 0..n {
                adj.cells[c * n + r] = self.cofactor(r, c)?;
            }
        }
        Ok(adj)
    }

    /// Laplace expansion along the first row. Exponential in the order, so
    /// only meant for small matrices and cross-checking the elimination.
    pub fn determinant_by_cofactors(&self) -> LinalgResult<T> {
        if !self.is_square() {
            return Err(LinalgError::NoDeterminant {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.rows <= 1 {
            return self.determinant();
        }
        let mut det = 0.0;
        for c in 0..self.cols {
            det += self.cells[c].widen() * self.cofactor(0, c)?.widen();
        }
        Ok(T::narrow(det))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::matrix_gen::{MatrixD, MatrixF};

    fn five() -> MatrixD {
        MatrixGen::from_list(vec![
            vec![1.0, 0.0, 6.0, 7.0, 8.0],
            vec![9.0, 2.0, 13.0, 14.0, 15.0],
            vec![18.0, 12.0, 3.0, 16.0, 17.0],
            vec![10.0, 19.0, 20.0, 4.0, 21.0],
            vec![11.0, 22.0, 24.0, 23.0, 5.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_degenerate_orders() {
        assert_eq!(MatrixD::new(0, 0).determinant().unwrap(), 0.0);
        assert_eq!(MatrixD::identity(0).determinant().unwrap(), 0.0);

        let one = MatrixGen::from_list(vec![vec![-7.5f32]]).unwrap();
        assert_eq!(one.determinant().unwrap(), -7.5);
    }

    #[test]
    fn test_identity_determinant_is_one() {
        for n in 1..8 {
            assert_eq!(MatrixD::identity(n).determinant().unwrap(), 1.0);
            assert_eq!(MatrixF::identity(n).determinant().unwrap(), 1.0);
        }
    }

    #[test]
    fn test_rectangular_has_no_determinant() {
        let m = MatrixD::new(2, 3);
        assert_eq!(
            m.determinant(),
            Err(LinalgError::NoDeterminant { rows: 2, cols: 3 })
        );
        assert!(m.minor(0, 0).is_err());
        assert!(m.determinant_by_cofactors().is_err());
        assert!(matches!(m.adjugate(), Err(LinalgError::NotSquare { .. })));
    }

    #[test]
    fn test_closed_forms() {
        let m = MatrixGen::from_list(vec![vec![1.0f32, 3.0], vec![2.0, 4.0]]).unwrap();
        assert_eq!(m.determinant().unwrap(), -2.0);

        let m = MatrixGen::from_list(vec![
            vec![2.0f64, -3.0, 1.0],
            vec![2.0, 0.0, -1.0],
            vec![1.0, 4.0, 5.0],
        ])
        .unwrap();
        assert_eq!(m.determinant().unwrap(), 49.0);

        let ones = MatrixGen::from_list(vec![vec![1.0f64; 3]; 3]).unwrap();
        assert_eq!(ones.determinant().unwrap(), 0.0);
    }

    #[test]
    fn test_five_by_five() {
        let m = five();
        let before = m.clone();
        assert!((m.determinant().unwrap() - 578067.0).abs() < 1e-6);
        assert_eq!(m, before);

        let f: MatrixF = MatrixGen::from_list(
            five()
                .to_list()
                .into_iter()
                .map(|r| r.into_iter().map(|x| x as f32).collect())
                .collect(),
        )
        .unwrap();
        assert_eq!(f.determinant().unwrap(), 578067.0f32);
    }

    #[test]
    fn test_cofactor_expansion_agrees_with_elimination() {
        let m = five();
        let by_cofactors = m.determinant_by_cofactors().unwrap();
        assert!((by_cofactors - 578067.0).abs() < 1e-6);

        let m = MatrixGen::from_list(vec![
            vec![3.0f64, 2.0, 0.0, 1.0],
            vec![4.0, 0.0, 1.0, 2.0],
            vec![3.0, 0.0, 2.0, 1.0],
            vec![9.0, 2.0, 3.0, 1.0],
        ])
        .unwrap();
        let a = m.determinant().unwrap();
        let b = m.determinant_by_cofactors().unwrap();
        assert!((a - 24.0).abs() < 1e-9);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn test_minor_and_cofactor() {
        let m = MatrixGen::from_list(vec![
            vec![1.0f64, 2.0, 3.0],
            vec![0.0, 4.0, 5.0],
            vec![1.0, 0.0, 6.0],
        ])
        .unwrap();
        assert_eq!(m.minor(0, 0).unwrap(), 24.0);
        assert_eq!(m.cofactor(0, 1).unwrap(), 5.0);
        assert_eq!(m.cofactor(1, 0).unwrap(), -12.0);
        assert!(matches!(m.minor(3, 0), Err(LinalgError::OutOfRange { .. })));

        let single = MatrixGen::from_list(vec![vec![9.0f64]]).unwrap();
        assert_eq!(single.minor(0, 0).unwrap(), 1.0);
    }

    #[test]
    fn test_adjugate() {
        let m = MatrixGen::from_list(vec![vec![1.0f64, 3.0], vec![2.0, 4.0]]).unwrap();
        let adj = m.adjugate().unwrap();
        assert_eq!(adj.to_list(), vec![vec![4.0, -3.0], vec![-2.0, 1.0]]);
    }
}
