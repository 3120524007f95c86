#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod matrix {
    pub mod matrix;
    pub mod matrix_arith;
    pub mod matrix_elementary;
    pub mod matrix_error;
}
pub mod elimination {
    pub mod echelon;
    pub mod elimination;
    pub mod elimination_config;
}

pub mod utils;

#[cfg(feature = "python")]
pub mod python;

pub use elimination::echelon::Solution;
pub use elimination::elimination::{EchelonForm, Elimination};
pub use elimination::elimination_config::EliminationConfig;
pub use matrix::matrix::Matrix;
pub use matrix::matrix_error::{Axis, MatrixError, Result};

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn rust_echelon(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyMatrix>()?;
    Ok(())
}
