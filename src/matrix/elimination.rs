//! `f64` scratch grid shared by the determinant and inversion engines.
//!
//! Elimination never runs on the caller's matrix: it widens the elements
//! into this scratch copy, so the receiver stays untouched whatever happens.

use crate::config::{EliminationConfig, PivotStrategy};
use crate::matrix::matrix::Matrix;
use crate::scalar::Scalar;

pub(crate) struct Scratch {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<f64>,
    /// Largest element magnitude of the source matrix.
    pub scale: f64,
}

fn max_magnitude(values: impl Iterator<Item = f64>) -> f64 {
    values.map(f64::abs).fold(0.0, f64::max)
}

impl Scratch {
    /// Widened copy of a square matrix.
    pub fn from_matrix<T: Scalar, M: Matrix<T> + ?Sized>(matrix: &M) -> Scratch {
        let (rows, cols) = matrix.shape();
        let cells: Vec<f64> = (0..rows)
            .flat_map(|r| (0..cols).map(move |c| matrix.at(r, c).widen()))
            .collect();
        Scratch {
            rows,
            cols,
            scale: max_magnitude(cells.iter().copied()),
            cells,
        }
    }

    /// `[A | I]` for a square `A` of order `n`.
    pub fn augmented<T: Scalar, M: Matrix<T> + ?Sized>(matrix: &M) -> Scratch {
        let n = matrix.rows();
        let cols = 2 * n;
        let mut cells = vec![0.0; n * cols];
        for r in 0..n {
            for c in 0..n {
                cells[r * cols + c] = matrix.at(r, c).widen();
            }
            cells[r * cols + n + r] = 1.0;
        }
        let scale = max_magnitude((0..n).flat_map(|r| cells[r * cols..r * cols + n].iter().copied()));
        Scratch {
            rows: n,
            cols,
            cells,
            scale,
        }
    }

    /// Pivot threshold for this grid under `config`.
    pub fn threshold(&self, config: &EliminationConfig) -> f64 {
        config.pivot_threshold(self.rows, self.scale)
    }

    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> f64 {
        self.cells[row * self.cols + col]
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for k in 0..self.cols {
            self.cells.swap(a * self.cols + k, b * self.cols + k);
        }
    }

    pub fn divide_row(&mut self, row: usize, denom: f64, from: usize) {
        for k in from..self.cols {
            self.cells[row * self.cols + k] /= denom;
        }
    }

    /// `row[dst] += row[src] * scalar` for columns `from..`.
    pub fn add_scaled_row(&mut self, src: usize, dst: usize, scalar: f64, from: usize) {
        for k in from..self.cols {
            let value = self.cells[src * self.cols + k] * scalar;
            self.cells[dst * self.cols + k] += value;
        }
    }

    /// Pick the pivot row for `col` among rows `start..`, or `None` if no
    /// candidate is strictly larger than `threshold` in magnitude. NaN is
    /// never usable.
    pub fn select_pivot(
        &self,
        col: usize,
        start: usize,
        pivot: PivotStrategy,
        threshold: f64,
    ) -> Option<usize> {
        let usable = |r: usize| self.at(r, col).abs() > threshold;
        let candidate = match pivot {
            PivotStrategy::FirstNonZero => (start..self.rows).find(|&r| usable(r)),
            PivotStrategy::LargestMagnitude => (start..self.rows).max_by(|&a, &b| {
                self.at(a, col)
                    .abs()
                    .partial_cmp(&self.at(b, col).abs())
                    .unwrap_or(std::cmp::Ordering::Less)
            }),
        };

        let found = candidate.filter(|&r| usable(r));
        match found {
            Some(row) => log::trace!("column {}: pivot row {} ({})", col, row, self.at(row, col)),
            None => log::trace!("column {}: no pivot above {:e}", col, threshold),
        }
        found
    }

    /// Forward elimination to upper-triangular form; returns the determinant.
    pub fn determinant(mut self, config: &EliminationConfig) -> f64 {
        let n = self.rows;
        let threshold = self.threshold(config);
        let mut det = 1.0;

        for col in 0..n {
            let pivot_row = match self.select_pivot(col, col, config.pivot, threshold) {
                Some(r) => r,
                None => return 0.0,
            };
            if pivot_row != col {
                self.swap_rows(pivot_row, col);
                det = -det;
            }

            let pivot = self.at(col, col);
            det *= pivot;

            for r in col + 1..n {
                let factor = self.at(r, col) / pivot;
                if factor != 0.0 {
                    self.add_scaled_row(col, r, -factor, col);
                }
            }
        }
        det
    }

    /// Gauss-Jordan on `[A | I]`. On success the right half holds `A^-1`.
    pub fn gauss_jordan(&mut self, config: &EliminationConfig) -> bool {
        let n = self.rows;
        let threshold = self.threshold(config);

        for col in 0..n {
            let pivot_row = match self.select_pivot(col, col, config.pivot, threshold) {
                Some(r) => r,
                None => return false,
            };
            self.swap_rows(pivot_row, col);

            let pivot = self.at(col, col);
            self.divide_row(col, pivot, col);

            for r in 0..n {
                if r == col {
                    continue;
                }
                let factor = self.at(r, col);
                if factor != 0.0 {
                    self.add_scaled_row(col, r, -factor, col);
                }
            }
        }
        true
    }

    /// Narrow the right half of a solved `[I | A^-1]` into `T`.
    pub fn right_half<T: Scalar>(&self) -> Vec<T> {
        let n = self.rows;
        (0..n)
            .flat_map(|r| (n..2 * n).map(move |c| T::narrow(self.at(r, c))))
            .collect()
    }
}
