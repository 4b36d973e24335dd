//! Gauss-Jordan inversion of the general matrix.

use crate::config::EliminationConfig;
use crate::error::{LinalgError, LinalgResult};
use crate::matrix::elimination::Scratch;
use crate::matrix::matrix_gen::MatrixGen;
use crate::scalar::Scalar;

impl<T: Scalar> MatrixGen<T> {
    /// New matrix holding the inverse. The receiver is never modified.
    ///
    /// A zero or non-finite determinant and a column without a usable pivot
    /// both report `NoInverse`, so `determinant() == 0` never pairs with a
    /// successful inverse.
    pub fn inverse(&self) -> LinalgResult<MatrixGen<T>> {
        self.inverse_with(&EliminationConfig::default())
    }

    pub fn inverse_with(&self, config: &EliminationConfig) -> LinalgResult<MatrixGen<T>> {
        if !self.is_square() {
            return Err(LinalgError::not_square("inverse", self.shape()));
        }

        let n = self.rows;
        if n > 0 {
            let det = self.determinant_wide(config);
            if det == 0.0 || !det.is_finite() {
                log::debug!("{}x{} matrix has determinant {}, no inverse", n, n, det);
                return Err(LinalgError::NoInverse { order: n });
            }
        }

        let mut scratch = Scratch::augmented::<T, _>(self);
        if !scratch.gauss_jordan(config) {
            log::debug!("singular {}x{} matrix, no inverse", n, n);
            return Err(LinalgError::NoInverse { order: n });
        }

        Ok(MatrixGen {
            rows: n,
            cols: n,
            cells: scratch.right_half(),
        })
    }

    /// Non-failing variant of [`MatrixGen::inverse`].
    pub fn try_inverse(&self) -> Option<MatrixGen<T>> {
        self.inverse().ok()
    }

    /// Invert in place. On error the matrix is left exactly as it was.
    pub fn invert(&mut self) -> LinalgResult<()> {
        let inverse = self.inverse()?;
        *self = inverse;
        Ok(())
    }

    /// In-place inversion reporting success; unchanged on failure.
    pub fn try_invert(&mut self) -> bool {
        self.invert().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PivotStrategy;
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
    fn test_inverse_2x2() {
        let m = MatrixGen::from_list(vec![vec![1.0f32, 3.0], vec![2.0, 4.0]]).unwrap();
        let inv = m.inverse().unwrap();
        assert_eq!(inv.to_list(), vec![vec![-2.0, 1.5], vec![1.0, -0.5]]);
    }

    #[test]
    fn test_inverse_needs_pivoting() {
        let m = MatrixGen::from_list(vec![
            vec![0.0f64, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
            vec![1.0, 0.0, 0.0],
        ])
        .unwrap();
        let inv = m.inverse().unwrap();
        assert_eq!(inv, m.transposed());

        let first = EliminationConfig::default().with_pivot(PivotStrategy::FirstNonZero);
        assert_eq!(m.inverse_with(&first).unwrap(), m.transposed());
    }

    #[test]
    fn test_singular() {
        let ones = MatrixGen::from_list(vec![vec![1.0f64; 3]; 3]).unwrap();
        assert_eq!(ones.inverse(), Err(LinalgError::NoInverse { order: 3 }));
        assert!(ones.try_inverse().is_none());
    }

    fn counting(n: usize) -> MatrixD {
        MatrixGen::from_row_slice(n, n, &(1..=n * n).map(|x| x as f64).collect::<Vec<_>>())
            .unwrap()
    }

    #[test]
    fn test_rank_deficient_without_exact_cancellation() {
        for n in 3..=8 {
            let m = counting(n);
            assert_eq!(m.determinant().unwrap(), 0.0, "order {}", n);
            assert_eq!(m.inverse(), Err(LinalgError::NoInverse { order: n }));

            let exact = EliminationConfig::default().with_tolerance(0.0);
            if m.determinant_with(&exact).unwrap() == 0.0 {
                assert!(m.inverse_with(&exact).is_err(), "order {}", n);
            }
        }
    }

    #[test]
    fn test_explicit_tolerance_overrides_default() {
        let tiny = 2f64.powi(-60);
        let m = MatrixGen::from_list(vec![vec![1.0f64, 0.0], vec![0.0, tiny]]).unwrap();
        assert_eq!(m.inverse(), Err(LinalgError::NoInverse { order: 2 }));

        let exact = EliminationConfig::default().with_tolerance(0.0);
        let inv = m.inverse_with(&exact).unwrap();
        assert_eq!(inv.to_list(), vec![vec![1.0, 0.0], vec![0.0, 2f64.powi(60)]]);

        let loose = EliminationConfig::default().with_tolerance(0.5);
        let m = MatrixGen::from_list(vec![vec![2.0f64, 0.0], vec![0.0, 0.25]]).unwrap();
        assert!(m.inverse_with(&loose).is_err());
        assert!(m.inverse().is_ok());
    }

    #[test]
    fn test_not_square() {
        let m = MatrixF::new(2, 3);
        assert!(matches!(m.inverse(), Err(LinalgError::NotSquare { .. })));
        let mut m = m;
        assert!(!m.try_invert());
        assert_eq!(m, MatrixF::new(2, 3));
    }

    #[test]
    fn test_invert_failure_keeps_receiver() {
        let mut m = MatrixGen::from_list(vec![
            vec![1.0f64, 2.0, 3.0],
            vec![2.0, 4.0, 6.0],
            vec![0.0, 1.0, 1.0],
        ])
        .unwrap();
        let before = m.clone();
        assert!(m.invert().is_err());
        assert_eq!(m, before);
        assert!(!m.try_invert());
        assert_eq!(m, before);
    }

    #[test]
    fn test_invert_in_place() {
        let mut m = MatrixGen::from_list(vec![vec![4.0f64, 7.0], vec![2.0, 6.0]]).unwrap();
        assert!(m.try_invert());
        assert!(m.approx_eq(
            &MatrixGen::from_list(vec![vec![0.6, -0.7], vec![-0.2, 0.4]]).unwrap(),
            1e-12
        ));
    }

    #[test]
    fn test_inverse_five_by_five() {
        let m = five();
        let before = m.clone();
        let inv = m.inverse().unwrap();
        assert_eq!(m, before);

        let product = m.product(&inv).unwrap();
        assert!(product.approx_eq(&MatrixD::identity(5), 1e-10));
        assert!(inv.inverse().unwrap().approx_eq(&m, 1e-9));
    }

    #[test]
    fn test_order_zero_and_one() {
        let empty = MatrixD::new(0, 0);
        assert_eq!(empty.inverse().unwrap(), MatrixD::new(0, 0));

        let single = MatrixGen::from_list(vec![vec![4.0f32]]).unwrap();
        assert_eq!(single.inverse().unwrap().to_list(), vec![vec![0.25]]);

        let zero = MatrixF::new(1, 1);
        assert!(zero.inverse().is_err());
    }
}
