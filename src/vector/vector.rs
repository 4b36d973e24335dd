use crate::scalar::Scalar;

/// Anything shaped like a vector: `dim()` elements readable by position.
pub trait Vector<T: Scalar> {
    fn dim(&self) -> usize;

    /// Element `index`. Callers stay within `dim()`.
    fn at(&self, index: usize) -> T;

    fn to_vec(&self) -> Vec<T> {
        (0..self.dim()).map(|i| self.at(i)).collect()
    }
}
