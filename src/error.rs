//! Error types for matrix and vector operations.

use thiserror::Error;

/// Errors raised by the matrix and vector engines.
///
/// Every fallible operation validates its arguments before touching any
/// element, so a returned error always means the receiver is unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    /// `get`/`set` or an elementary operation was given an index outside the grid
    #[error("index ({row}, {col}) is out of range for a {rows}x{cols} matrix")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Same bounds condition as `OutOfRange`, reported by the index path
    #[error("index ({row}, {col}) is out of bounds for a {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Vector element index outside `[0, len)` through `get`/`set`
    #[error("element {index} is out of range for a vector of dimension {len}")]
    VectorOutOfRange { index: usize, len: usize },

    /// Vector element index outside `[0, len)` through the index path
    #[error("element {index} is out of bounds for a vector of dimension {len}")]
    VectorIndexOutOfBounds { index: usize, len: usize },

    /// A required operand was absent
    #[error("missing operand: {0}")]
    NullArgument(&'static str),

    /// Operands of a binary operation or conversion have incompatible shapes
    #[error("{op}: incompatible shapes {left:?} and {right:?}")]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Square-only operation on a rectangular matrix
    #[error("{op} requires a square matrix, got {rows}x{cols}")]
    NotSquare {
        op: &'static str,
        rows: usize,
        cols: usize,
    },

    /// Determinant requested on a rectangular matrix
    #[error("a {rows}x{cols} matrix has no determinant")]
    NoDeterminant { rows: usize, cols: usize },

    /// The matrix is square but singular
    #[error("matrix of order {order} is singular and has no inverse")]
    NoInverse { order: usize },
}

impl LinalgError {
    pub fn out_of_range(row: usize, col: usize, shape: (usize, usize)) -> Self {
        LinalgError::OutOfRange {
            row,
            col,
            rows: shape.0,
            cols: shape.1,
        }
    }

    pub fn index_out_of_bounds(row: usize, col: usize, shape: (usize, usize)) -> Self {
        LinalgError::IndexOutOfBounds {
            row,
            col,
            rows: shape.0,
            cols: shape.1,
        }
    }

    pub fn not_square(op: &'static str, shape: (usize, usize)) -> Self {
        LinalgError::NotSquare {
            op,
            rows: shape.0,
            cols: shape.1,
        }
    }

    pub fn mismatch(op: &'static str, left: (usize, usize), right: (usize, usize)) -> Self {
        LinalgError::DimensionMismatch { op, left, right }
    }
}

/// Result type for matrix and vector operations
pub type LinalgResult<T> = Result<T, LinalgError>;
