use crate::matrix::matrix_error::{Axis, MatrixError, Result};
use itertools::{iproduct, Itertools};
use std::fmt;
use std::ops::Index;

/// Dense row-major matrix of `f64`.
///
/// A `Matrix` never changes once built: every operation returns a freshly
/// allocated matrix and leaves its inputs untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    cells: Vec<f64>,
}

// Construction
impl Matrix {
    /// Copy the top-left `rows x cols` block of `values` into a new matrix.
    pub fn new<R: AsRef<[f64]>>(rows: usize, cols: usize, values: &[R]) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::EmptyDimension { rows, cols });
        }
        if values.len() < rows {
            return Err(MatrixError::LengthMismatch {
                expected: rows,
                actual: values.len(),
            });
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for line in &values[..rows] {
            let line = line.as_ref();
            if line.len() < cols {
                return Err(MatrixError::LengthMismatch {
                    expected: cols,
                    actual: line.len(),
                });
            }
            cells.extend_from_slice(&line[..cols]);
        }

        Ok(Matrix { rows, cols, cells })
    }

    /// Build a matrix from its rows, the shape is taken from the input
    pub fn from_list(lines: Vec<Vec<f64>>) -> Result<Self> {
        let rows = lines.len();
        let cols = lines.first().map(|l| l.len()).unwrap_or(0);
        if let Some(line) = lines.iter().find(|l| l.len() != cols) {
            return Err(MatrixError::LengthMismatch {
                expected: cols,
                actual: line.len(),
            });
        }
        Matrix::new(rows, cols, &lines)
    }

    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::EmptyDimension { rows, cols });
        }
        Ok(Matrix {
            rows,
            cols,
            cells: vec![0.0; rows * cols],
        })
    }

    pub fn identity(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(MatrixError::EmptyDimension { rows: n, cols: n });
        }
        Ok(Matrix::from_fn(n, n, |r, c| if r == c { 1.0 } else { 0.0 }))
    }

    /// Shape must be non-empty, callers derive it from an existing matrix.
    pub(crate) fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> f64,
    ) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        Matrix {
            rows,
            cols,
            cells: iproduct!(0..rows, 0..cols).map(|(r, c)| f(r, c)).collect(),
        }
    }

    pub fn to_list(&self) -> Vec<Vec<f64>> {
        self.cells
            .chunks(self.cols)
            .map(|line| line.into())
            .collect()
    }
}

// Accessors
impl Matrix {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns (rows, cols)
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> f64 {
        assert!(
            row < self.rows && col < self.cols,
            "Out of bounds access to a matrix: {{row:{}, col:{}}}",
            row,
            col
        );
        self.cells[row * self.cols + col]
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn row_iter(&self) -> impl Iterator<Item = &[f64]> {
        self.cells.chunks(self.cols)
    }

    pub(crate) fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.rows {
            return Err(MatrixError::IndexOutOfRange {
                axis: Axis::Row,
                index: row,
                bound: self.rows,
            });
        }
        Ok(())
    }

    pub(crate) fn check_col(&self, col: usize) -> Result<()> {
        if col >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                axis: Axis::Column,
                index: col,
                bound: self.cols,
            });
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    /// Indexing operator where the index is (row, col)
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let (row, col) = index;
        assert!(
            row < self.rows && col < self.cols,
            "Out of bounds access to a matrix: {{row:{}, col:{}}}",
            row,
            col
        );
        &self.cells[row * self.cols + col]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .row_iter()
            .map(|line| format!("[{}]", line.iter().join(", ")))
            .join("\n");
        write!(f, "{}", text)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
