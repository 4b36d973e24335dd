//! Python bindings, enabled with the `python` feature.

use crate::error::LinalgError;
use crate::matrix::matrix_gen::{MatrixD, MatrixGen};
use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyType;

impl From<LinalgError> for PyErr {
    fn from(error: LinalgError) -> PyErr {
        match error {
            LinalgError::OutOfRange { .. }
            | LinalgError::IndexOutOfBounds { .. }
            | LinalgError::VectorOutOfRange { .. }
            | LinalgError::VectorIndexOutOfBounds { .. } => PyIndexError::new_err(error.to_string()),
            _ => PyValueError::new_err(error.to_string()),
        }
    }
}

/// `f64` general matrix exposed to Python as `Matrix`.
#[derive(Debug, Clone)]
#[pyclass(name = "Matrix")]
pub struct PyMatrix {
    pub inner: MatrixD,
}

fn operand<'a>(rhs: &'a Option<PyRef<'_, PyMatrix>>, op: &'static str) -> PyResult<&'a MatrixD> {
    match rhs {
        Some(matrix) => Ok(&matrix.inner),
        None => Err(LinalgError::NullArgument(op).into()),
    }
}

#[pymethods]
impl PyMatrix {
    #[new]
    pub fn new(rows: usize, cols: usize) -> Self {
        PyMatrix {
            inner: MatrixGen::new(rows, cols),
        }
    }

    #[classmethod]
    pub fn from_list(_cls: &Bound<PyType>, lines: Vec<Vec<f64>>) -> PyResult<Self> {
        Ok(PyMatrix {
            inner: MatrixGen::from_list(lines)?,
        })
    }

    #[classmethod]
    pub fn zeros(_cls: &Bound<PyType>, rows: usize, cols: usize) -> Self {
        PyMatrix {
            inner: MatrixGen::zeros(rows, cols),
        }
    }

    #[classmethod]
    pub fn identity(_cls: &Bound<PyType>, n: usize) -> Self {
        PyMatrix {
            inner: MatrixGen::identity(n),
        }
    }

    pub fn to_list(&self) -> Vec<Vec<f64>> {
        self.inner.to_list()
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.inner.rows()
    }

    #[getter]
    pub fn cols(&self) -> usize {
        self.inner.cols()
    }

    #[getter]
    #[allow(non_snake_case)]
    pub fn T(&self) -> PyMatrix {
        PyMatrix {
            inner: self.inner.transposed(),
        }
    }

    pub fn get(&self, row: usize, col: usize) -> PyResult<f64> {
        Ok(self.inner.get(row, col)?)
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> PyResult<()> {
        Ok(self.inner.set(row, col, value)?)
    }

    pub fn determinant(&self) -> PyResult<f64> {
        Ok(self.inner.determinant()?)
    }

    pub fn inverse(&self) -> PyResult<PyMatrix> {
        Ok(PyMatrix {
            inner: self.inner.inverse()?,
        })
    }

    pub fn trace(&self) -> PyResult<f64> {
        Ok(self.inner.trace()?)
    }

    pub fn copy_from(&mut self, other: Option<PyRef<'_, PyMatrix>>) -> PyResult<()> {
        let source = operand(&other, "copy_from")?;
        Ok(self.inner.copy_from(source)?)
    }

    pub fn __add__(&self, rhs: Option<PyRef<'_, PyMatrix>>) -> PyResult<PyMatrix> {
        let rhs = operand(&rhs, "add")?;
        Ok(PyMatrix {
            inner: self.inner.sum(rhs)?,
        })
    }

    pub fn __sub__(&self, rhs: Option<PyRef<'_, PyMatrix>>) -> PyResult<PyMatrix> {
        let rhs = operand(&rhs, "subtract")?;
        Ok(PyMatrix {
            inner: self.inner.difference(rhs)?,
        })
    }

    pub fn __mul__(&self, rhs: Option<PyRef<'_, PyMatrix>>) -> PyResult<PyMatrix> {
        let rhs = operand(&rhs, "multiply")?;
        Ok(PyMatrix {
            inner: self.inner.product(rhs)?,
        })
    }

    pub fn __neg__(&self) -> PyMatrix {
        PyMatrix {
            inner: self.inner.negated(),
        }
    }

    pub fn __eq__(&self, other: PyRef<'_, PyMatrix>) -> bool {
        self.inner == other.inner
    }

    pub fn __repr__(&self) -> String {
        format!("Matrix({})", self.inner)
    }
}
