//! Elementary row and column operations on the general matrix.
//!
//! Every operation validates all of its indices before touching an element,
//! so an `OutOfRange` error always leaves the matrix as it was.

use crate::error::{LinalgError, LinalgResult};
use crate::matrix::matrix_gen::MatrixGen;
use crate::scalar::Scalar;

impl<T: Scalar> MatrixGen<T> {
    fn check_row(&self, row: usize) -> LinalgResult<()> {
        if row >= self.rows {
            return Err(LinalgError::out_of_range(row, 0, self.shape()));
        }
        Ok(())
    }

    fn check_col(&self, col: usize) -> LinalgResult<()> {
        if col >= self.cols {
            return Err(LinalgError::out_of_range(0, col, self.shape()));
        }
        Ok(())
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) -> LinalgResult<()> {
        self.check_row(a)?;
        self.check_row(b)?;
        if a == b {
            return Ok(());
        }
        for k in 0..self.cols {
            self.cells.swap(a * self.cols + k, b * self.cols + k);
        }
        Ok(())
    }

    pub fn swap_columns(&mut self, a: usize, b: usize) -> LinalgResult<()> {
        self.check_col(a)?;
        self.check_col(b)?;
        if a == b {
            return Ok(());
        }
        for r in 0..self.rows {
            self.cells.swap(r * self.cols + a, r * self.cols + b);
        }
        Ok(())
    }

    pub fn scale_row(&mut self, row: usize, factor: T) -> LinalgResult<()> {
        self.check_row(row)?;
        let start = self.offset(row, 0);
        self.cells[start..start + self.cols]
            .iter_mut()
            .for_each(|x| *x *= factor);
        Ok(())
    }

    pub fn scale_column(&mut self, col: usize, factor: T) -> LinalgResult<()> {
        self.check_col(col)?;
        let cols = self.cols;
        self.cells
            .iter_mut()
            .skip(col)
            .step_by(cols)
            .for_each(|x| *x *= factor);
        Ok(())
    }

    /// Divide a row by `denom`. A zero denominator yields infinities or NaN.
    pub fn divide_row(&mut self, row: usize, denom: T) -> LinalgResult<()> {
        self.check_row(row)?;
        let start = self.offset(row, 0);
        self.cells[start..start + self.cols]
            .iter_mut()
            .for_each(|x| *x /= denom);
        Ok(())
    }

    pub fn divide_column(&mut self, col: usize, denom: T) -> LinalgResult<()> {
        self.check_col(col)?;
        let cols = self.cols;
        self.cells
            .iter_mut()
            .skip(col)
            .step_by(cols)
            .for_each(|x| *x /= denom);
        Ok(())
    }

    /// `row[dst] += row[src]`; `src == dst` doubles the row.
    pub fn add_row(&mut self, src: usize, dst: usize) -> LinalgResult<()> {
        self.add_scaled_row(src, dst, T::one())
    }

    /// `row[dst] -= row[src]`; `src == dst` zeroes the row.
    pub fn subtract_row(&mut self, src: usize, dst: usize) -> LinalgResult<()> {
        self.check_row(src)?;
        self.check_row(dst)?;
        for k in 0..self.cols {
            let value = self.cells[src * self.cols + k];
            self.cells[dst * self.cols + k] -= value;
        }
        Ok(())
    }

    pub fn add_scaled_row(&mut self, src: usize, dst: usize, scalar: T) -> LinalgResult<()> {
        self.check_row(src)?;
        self.check_row(dst)?;
        for k in 0..self.cols {
            let value = self.cells[src * self.cols + k] * scalar;
            self.cells[dst * self.cols + k] += value;
        }
        Ok(())
    }

    pub fn add_column(&mut self, src: usize, dst: usize) -> LinalgResult<()> {
        self.add_scaled_column(src, dst, T::one())
    }

    pub fn subtract_column(&mut self, src: usize, dst: usize) -> LinalgResult<()> {
        self.check_col(src)?;
        self.check_col(dst)?;
        for r in 0..self.rows {
            let value = self.cells[r * self.cols + src];
            self.cells[r * self.cols + dst] -= value;
        }
        Ok(())
    }

    pub fn add_scaled_column(&mut self, src: usize, dst: usize, scalar: T) -> LinalgResult<()> {
        self.check_col(src)?;
        self.check_col(dst)?;
        for r in 0..self.rows {
            let value = self.cells[r * self.cols + src] * scalar;
            self.cells[r * self.cols + dst] += value;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::matrix_gen::MatrixD;

    fn sample() -> MatrixD {
        MatrixGen::from_list(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
            vec![10.0, 11.0, 12.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_swap_rows_and_columns() {
        let mut m = sample();
        m.swap_rows(0, 3).unwrap();
        assert_eq!(m.row(0).unwrap(), vec![10.0, 11.0, 12.0]);
        assert_eq!(m.row(3).unwrap(), vec![1.0, 2.0, 3.0]);

        let mut m = sample();
        m.swap_columns(0, 2).unwrap();
        assert_eq!(m.column(0).unwrap(), vec![3.0, 6.0, 9.0, 12.0]);
        assert_eq!(m.column(2).unwrap(), vec![1.0, 4.0, 7.0, 10.0]);
    }

    #[test]
    fn test_swap_same_line_is_noop() {
        let mut m = sample();
        for r in 0..4 {
            m.swap_rows(r, r).unwrap();
        }
        for c in 0..3 {
            m.swap_columns(c, c).unwrap();
        }
        assert_eq!(m, sample());
    }

    #[test]
    fn test_scale_and_divide() {
        let mut m = sample();
        m.scale_row(1, 2.0).unwrap();
        assert_eq!(m.row(1).unwrap(), vec![8.0, 10.0, 12.0]);
        m.divide_row(1, 4.0).unwrap();
        assert_eq!(m.row(1).unwrap(), vec![2.0, 2.5, 3.0]);

        m.scale_column(2, -1.0).unwrap();
        assert_eq!(m.column(2).unwrap(), vec![-3.0, -3.0, -9.0, -12.0]);
        m.divide_column(2, 3.0).unwrap();
        assert_eq!(m.column(2).unwrap(), vec![-1.0, -1.0, -3.0, -4.0]);
    }

    #[test]
    fn test_divide_by_zero_propagates() {
        let mut m = MatrixGen::from_list(vec![vec![1.0f32, 0.0, -2.0]]).unwrap();
        m.divide_row(0, 0.0).unwrap();
        let row = m.row(0).unwrap();
        assert_eq!(row[0], f32::INFINITY);
        assert!(row[1].is_nan());
        assert_eq!(row[2], f32::NEG_INFINITY);
    }

    #[test]
    fn test_add_and_subtract_lines() {
        let mut m = sample();
        m.add_row(0, 1).unwrap();
        assert_eq!(m.row(1).unwrap(), vec![5.0, 7.0, 9.0]);
        m.subtract_row(0, 1).unwrap();
        assert_eq!(m.row(1).unwrap(), vec![4.0, 5.0, 6.0]);

        m.add_row(2, 2).unwrap();
        assert_eq!(m.row(2).unwrap(), vec![14.0, 16.0, 18.0]);
        m.subtract_row(2, 2).unwrap();
        assert_eq!(m.row(2).unwrap(), vec![0.0, 0.0, 0.0]);

        let mut m = sample();
        m.add_column(0, 1).unwrap();
        assert_eq!(m.column(1).unwrap(), vec![3.0, 9.0, 15.0, 21.0]);
        m.subtract_column(1, 1).unwrap();
        assert_eq!(m.column(1).unwrap(), vec![0.0; 4]);
    }

    #[test]
    fn test_add_scaled() {
        let mut m = sample();
        m.add_scaled_row(0, 3, -10.0).unwrap();
        assert_eq!(m.row(3).unwrap(), vec![0.0, -9.0, -18.0]);

        m.add_scaled_column(0, 2, 0.5).unwrap();
        assert_eq!(m.column(2).unwrap(), vec![3.5, 8.0, 12.5, -18.0]);
    }

    #[test]
    fn test_invalid_indices_leave_matrix_untouched() {
        let mut m = sample();
        assert!(m.swap_rows(0, 4).is_err());
        assert!(m.swap_columns(3, 0).is_err());
        assert!(m.scale_row(4, 2.0).is_err());
        assert!(m.scale_column(3, 2.0).is_err());
        assert!(m.divide_row(9, 2.0).is_err());
        assert!(m.divide_column(9, 2.0).is_err());
        assert!(m.add_row(0, 4).is_err());
        assert!(m.subtract_row(4, 0).is_err());
        assert!(m.add_scaled_row(1, 7, 3.0).is_err());
        assert!(m.add_column(0, 3).is_err());
        assert!(m.subtract_column(3, 0).is_err());
        assert!(matches!(
            m.add_scaled_column(5, 0, 1.0),
            Err(LinalgError::OutOfRange { .. })
        ));
        assert_eq!(m, sample());
    }
}
