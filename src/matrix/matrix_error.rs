use std::fmt;
use thiserror::Error;

/// Which dimension of a matrix an index refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MatrixError {
    #[error("dimensions not compatible for {operation}: {lhs:?} and {rhs:?}")]
    DimensionMismatch {
        operation: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[error("{axis} index {index} out of range (bound {bound})")]
    IndexOutOfRange {
        axis: Axis,
        index: usize,
        bound: usize,
    },

    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("a matrix needs at least one row and one column, got {rows}x{cols}")]
    EmptyDimension { rows: usize, cols: usize },

    #[error("zero tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),
}

pub type Result<T> = std::result::Result<T, MatrixError>;

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
