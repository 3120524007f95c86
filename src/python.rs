use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_error::MatrixError;
use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyType;

impl From<MatrixError> for PyErr {
    fn from(error: MatrixError) -> PyErr {
        match error {
            MatrixError::IndexOutOfRange { .. } => PyIndexError::new_err(error.to_string()),
            _ => PyValueError::new_err(error.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
#[pyclass(frozen, name = "Matrix")]
pub struct PyMatrix {
    inner: Matrix,
}

impl From<Matrix> for PyMatrix {
    fn from(inner: Matrix) -> Self {
        PyMatrix { inner }
    }
}

#[pymethods]
impl PyMatrix {
    #[new]
    pub fn new(rows: usize, cols: usize, values: Vec<Vec<f64>>) -> PyResult<Self> {
        Ok(Matrix::new(rows, cols, &values)?.into())
    }

    #[classmethod]
    pub fn from_list(_cls: &Bound<PyType>, lines: Vec<Vec<f64>>) -> PyResult<Self> {
        Ok(Matrix::from_list(lines)?.into())
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

    #[allow(non_snake_case)]
    #[getter]
    pub fn T(&self) -> PyMatrix {
        self.inner.transpose().into()
    }

    pub fn __repr__(&self) -> String {
        self.inner.to_string()
    }

    pub fn __add__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok(self.inner.add(&rhs.inner)?.into())
    }

    pub fn __sub__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok(self.inner.sub(&rhs.inner)?.into())
    }

    pub fn __mul__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok(self.inner.mul(&rhs.inner)?.into())
    }

    pub fn append_row(&self, row: Vec<f64>) -> PyResult<PyMatrix> {
        Ok(self.inner.append_row(&row)?.into())
    }

    pub fn append_column(&self, column: Vec<f64>) -> PyResult<PyMatrix> {
        Ok(self.inner.append_column(&column)?.into())
    }

    pub fn swap_rows(&self, row1: usize, row2: usize) -> PyResult<PyMatrix> {
        Ok(self.inner.swap_rows(row1, row2)?.into())
    }

    pub fn swap_columns(&self, col1: usize, col2: usize) -> PyResult<PyMatrix> {
        Ok(self.inner.swap_columns(col1, col2)?.into())
    }

    pub fn multiply_row(&self, row: usize, scalar: f64) -> PyResult<PyMatrix> {
        Ok(self.inner.multiply_row(row, scalar)?.into())
    }

    pub fn multiply_column(&self, col: usize, scalar: f64) -> PyResult<PyMatrix> {
        Ok(self.inner.multiply_column(col, scalar)?.into())
    }

    pub fn add_scaled_row(&self, target: usize, source: usize, scalar: f64) -> PyResult<PyMatrix> {
        Ok(self.inner.add_scaled_row(target, source, scalar)?.into())
    }

    pub fn add_scaled_column(
        &self,
        target: usize,
        source: usize,
        scalar: f64,
    ) -> PyResult<PyMatrix> {
        Ok(self.inner.add_scaled_column(target, source, scalar)?.into())
    }

    pub fn row_echelon_form(&self) -> PyMatrix {
        self.inner.row_echelon_form().into()
    }

    pub fn reduced_row_echelon_form(&self) -> PyMatrix {
        self.inner.reduced_row_echelon_form().into()
    }

    pub fn is_ref(&self) -> bool {
        self.inner.is_ref()
    }

    pub fn is_rref(&self) -> bool {
        self.inner.is_rref()
    }

    pub fn rank(&self) -> usize {
        self.inner.rank()
    }
}
