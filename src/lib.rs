#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod matrix {
    pub(crate) mod fixed;

    pub mod determinant;
    pub mod elementary;
    pub(crate) mod elimination;
    pub mod inverse;
    pub mod matrix;
    pub mod matrix2;
    pub mod matrix3;
    pub mod matrix4;
    pub mod matrix_gen;
    pub mod ops;
}
pub mod vector {
    pub mod vector;
    pub mod vector_fixed;
    pub mod vector_gen;
}

pub mod config;
pub mod error;
pub mod scalar;

#[cfg(feature = "python")]
pub mod python;

pub use config::{EliminationConfig, PivotStrategy};
pub use error::{LinalgError, LinalgResult};
pub use matrix::matrix::Matrix;
pub use matrix::matrix2::{Matrix2, Matrix2D, Matrix2F};
pub use matrix::matrix3::{Matrix3, Matrix3D, Matrix3F};
pub use matrix::matrix4::{Matrix4, Matrix4D, Matrix4F};
pub use matrix::matrix_gen::{MatrixD, MatrixF, MatrixGen};
pub use scalar::Scalar;
pub use vector::vector::Vector;
pub use vector::vector_fixed::{
    Vector2, Vector2D, Vector2F, Vector3, Vector3D, Vector3F, Vector4, Vector4D, Vector4F,
};
pub use vector::vector_gen::{VectorD, VectorF, VectorGen};

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn rust_linalg(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyMatrix>()?;
    Ok(())
}
