use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_error::{MatrixError, Result};
use std::ops;

impl Matrix {
    fn check_same_size(&self, rhs: &Matrix, operation: &'static str) -> Result<()> {
        if self.size() != rhs.size() {
            return Err(MatrixError::DimensionMismatch {
                operation,
                lhs: self.size(),
                rhs: rhs.size(),
            });
        }
        Ok(())
    }

    pub fn add(&self, rhs: &Matrix) -> Result<Matrix> {
        self.check_same_size(rhs, "add")?;
        Ok(Matrix::from_fn(self.rows(), self.cols(), |r, c| {
            self.at(r, c) + rhs.at(r, c)
        }))
    }

    pub fn sub(&self, rhs: &Matrix) -> Result<Matrix> {
        self.check_same_size(rhs, "sub")?;
        Ok(Matrix::from_fn(self.rows(), self.cols(), |r, c| {
            self.at(r, c) - rhs.at(r, c)
        }))
    }

    /// Matrix product, `self.cols()` must equal `rhs.rows()`
    pub fn mul(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols() != rhs.rows() {
            return Err(MatrixError::DimensionMismatch {
                operation: "mul",
                lhs: self.size(),
                rhs: rhs.size(),
            });
        }

        Ok(Matrix::from_fn(self.rows(), rhs.cols(), |i, j| {
            let mut sum = 0.0;
            for k in 0..self.cols() {
                sum += self.at(i, k) * rhs.at(k, j);
            }
            sum
        }))
    }

    /// Scale every entry by a number
    pub fn scale(&self, scalar: f64) -> Matrix {
        Matrix::from_fn(self.rows(), self.cols(), |r, c| self.at(r, c) * scalar)
    }
}

impl ops::Add<&Matrix> for &Matrix {
    type Output = Result<Matrix>;

    fn add(self, rhs: &Matrix) -> Result<Matrix> {
        Matrix::add(self, rhs)
    }
}

impl ops::Sub<&Matrix> for &Matrix {
    type Output = Result<Matrix>;

    fn sub(self, rhs: &Matrix) -> Result<Matrix> {
        Matrix::sub(self, rhs)
    }
}

impl ops::Mul<&Matrix> for &Matrix {
    type Output = Result<Matrix>;

    fn mul(self, rhs: &Matrix) -> Result<Matrix> {
        Matrix::mul(self, rhs)
    }
}

impl ops::Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix {
        self.scale(scalar)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
