use crate::scalar::Scalar;

/// Anything shaped like a matrix: a fixed `rows x cols` grid readable by
/// position. Used for cross-type construction between the general matrix
/// and the fixed-order ones.
pub trait Matrix<T: Scalar> {
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;

    /// Element at `(row, col)`. Callers stay within `rows() x cols()`.
    fn at(&self, row: usize, col: usize) -> T;

    fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        (0..self.rows())
            .map(|r| (0..self.cols()).map(|c| self.at(r, c)).collect())
            .collect()
    }
}
