use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_error::{MatrixError, Result};
use crate::utils::swap_index;

// Elementary row/column operations.
//
// The public methods validate their indices and return a new matrix. The
// `*_unchecked` variants skip the checks and are only called by the elimination
// engine, which derives every index from the matrix's own shape.

impl Matrix {
    pub fn append_row(&self, row: &[f64]) -> Result<Matrix> {
        if row.len() != self.cols() {
            return Err(MatrixError::LengthMismatch {
                expected: self.cols(),
                actual: row.len(),
            });
        }
        Ok(Matrix::from_fn(self.rows() + 1, self.cols(), |r, c| {
            if r == self.rows() {
                row[c]
            } else {
                self.at(r, c)
            }
        }))
    }

    pub fn append_column(&self, column: &[f64]) -> Result<Matrix> {
        if column.len() != self.rows() {
            return Err(MatrixError::LengthMismatch {
                expected: self.rows(),
                actual: column.len(),
            });
        }
        Ok(Matrix::from_fn(self.rows(), self.cols() + 1, |r, c| {
            if c == self.cols() {
                column[r]
            } else {
                self.at(r, c)
            }
        }))
    }

    pub fn swap_rows(&self, row1: usize, row2: usize) -> Result<Matrix> {
        self.check_row(row1)?;
        self.check_row(row2)?;
        Ok(self.swap_rows_unchecked(row1, row2))
    }

    pub fn swap_columns(&self, col1: usize, col2: usize) -> Result<Matrix> {
        self.check_col(col1)?;
        self.check_col(col2)?;
        Ok(Matrix::from_fn(self.rows(), self.cols(), |r, c| {
            self.at(r, swap_index(c, col1, col2))
        }))
    }

    pub fn multiply_row(&self, row: usize, scalar: f64) -> Result<Matrix> {
        self.check_row(row)?;
        Ok(self.multiply_row_unchecked(row, scalar))
    }

    pub fn multiply_column(&self, col: usize, scalar: f64) -> Result<Matrix> {
        self.check_col(col)?;
        Ok(Matrix::from_fn(self.rows(), self.cols(), |r, c| {
            if c == col {
                self.at(r, c) * scalar
            } else {
                self.at(r, c)
            }
        }))
    }

    /// `target += source * scalar`, with `source` read from `self` so that
    /// `target == source` is a valid self-combine.
    pub fn add_scaled_row(&self, target: usize, source: usize, scalar: f64) -> Result<Matrix> {
        self.check_row(target)?;
        self.check_row(source)?;
        Ok(self.add_scaled_row_unchecked(target, source, scalar))
    }

    pub fn add_scaled_column(&self, target: usize, source: usize, scalar: f64) -> Result<Matrix> {
        self.check_col(target)?;
        self.check_col(source)?;
        Ok(Matrix::from_fn(self.rows(), self.cols(), |r, c| {
            if c == target {
                self.at(r, c) + self.at(r, source) * scalar
            } else {
                self.at(r, c)
            }
        }))
    }

    pub fn transpose(&self) -> Matrix {
        Matrix::from_fn(self.cols(), self.rows(), |r, c| self.at(c, r))
    }

    pub(crate) fn swap_rows_unchecked(&self, row1: usize, row2: usize) -> Matrix {
        Matrix::from_fn(self.rows(), self.cols(), |r, c| {
            self.at(swap_index(r, row1, row2), c)
        })
    }

    pub(crate) fn multiply_row_unchecked(&self, row: usize, scalar: f64) -> Matrix {
        Matrix::from_fn(self.rows(), self.cols(), |r, c| {
            if r == row {
                self.at(r, c) * scalar
            } else {
                self.at(r, c)
            }
        })
    }

    pub(crate) fn add_scaled_row_unchecked(
        &self,
        target: usize,
        source: usize,
        scalar: f64,
    ) -> Matrix {
        Matrix::from_fn(self.rows(), self.cols(), |r, c| {
            if r == target {
                self.at(r, c) + self.at(source, c) * scalar
            } else {
                self.at(r, c)
            }
        })
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::matrix_error::Axis;
    use rand::Rng;
    use test_case::test_case;

    fn m(lines: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_list(lines).unwrap()
    }

    fn m123() -> Matrix {
        m(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ])
    }

    #[test]
    fn test_append_row() {
        let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(a.append_row(&[7.0, 8.0, 9.0]).unwrap(), m123());
        assert_eq!(
            a.append_row(&[7.0, 8.0]),
            Err(MatrixError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(a.size(), (2, 3));
    }

    #[test]
    fn test_append_column() {
        let a = m(vec![vec![1.0, 2.0], vec![4.0, 5.0], vec![7.0, 8.0]]);
        assert_eq!(a.append_column(&[3.0, 6.0, 9.0]).unwrap(), m123());
        assert_eq!(
            a.append_column(&[3.0, 6.0]),
            Err(MatrixError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_swap_rows() {
        assert_eq!(
            m123().swap_rows(0, 2).unwrap(),
            m(vec![
                vec![7.0, 8.0, 9.0],
                vec![4.0, 5.0, 6.0],
                vec![1.0, 2.0, 3.0],
            ])
        );
        assert_eq!(m123().swap_rows(1, 1).unwrap(), m123());
    }

    #[test]
    fn test_swap_columns() {
        assert_eq!(
            m123().swap_columns(0, 1).unwrap(),
            m(vec![
                vec![2.0, 1.0, 3.0],
                vec![5.0, 4.0, 6.0],
                vec![8.0, 7.0, 9.0],
            ])
        );
        assert_eq!(m123().swap_columns(2, 2).unwrap(), m123());
    }

    #[test]
    fn test_multiply_row() {
        assert_eq!(
            m123().multiply_row(1, 2.0).unwrap(),
            m(vec![
                vec![1.0, 2.0, 3.0],
                vec![8.0, 10.0, 12.0],
                vec![7.0, 8.0, 9.0],
            ])
        );
        let zeroed = m123().multiply_row(0, 0.0).unwrap();
        assert!(zeroed.row(0).iter().all(|x| *x == 0.0));
    }

    #[test]
    fn test_multiply_column() {
        assert_eq!(
            m123().multiply_column(2, -1.0).unwrap(),
            m(vec![
                vec![1.0, 2.0, -3.0],
                vec![4.0, 5.0, -6.0],
                vec![7.0, 8.0, -9.0],
            ])
        );
    }

    #[test]
    fn test_add_scaled_row() {
        assert_eq!(
            m123().add_scaled_row(2, 0, -7.0).unwrap(),
            m(vec![
                vec![1.0, 2.0, 3.0],
                vec![4.0, 5.0, 6.0],
                vec![0.0, -6.0, -12.0],
            ])
        );
        // self-combine reads the original row
        assert_eq!(
            m123().add_scaled_row(0, 0, 2.0).unwrap().row(0),
            &[3.0, 6.0, 9.0]
        );
    }

    #[test]
    fn test_add_scaled_column() {
        assert_eq!(
            m123().add_scaled_column(1, 0, -2.0).unwrap(),
            m(vec![
                vec![1.0, 0.0, 3.0],
                vec![4.0, -3.0, 6.0],
                vec![7.0, -6.0, 9.0],
            ])
        );
        assert_eq!(
            m123().add_scaled_column(2, 2, 1.0).unwrap().to_list(),
            vec![
                vec![1.0, 2.0, 6.0],
                vec![4.0, 5.0, 12.0],
                vec![7.0, 8.0, 18.0],
            ]
        );
    }

    #[test]
    fn test_transpose() {
        let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(
            a.transpose(),
            m(vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]])
        );
        assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn test_transpose_involution() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let rows = rng.gen_range(1..7);
            let cols = rng.gen_range(1..7);
            let a = Matrix::from_fn(rows, cols, |_, _| rng.gen::<f64>());
            assert_eq!(a.transpose().transpose(), a);
        }
    }

    #[test_case(|a: &Matrix| a.swap_rows(0, 3), Axis::Row, 3; "swap rows")]
    #[test_case(|a: &Matrix| a.swap_rows(3, 0), Axis::Row, 3; "swap rows first index")]
    #[test_case(|a: &Matrix| a.swap_columns(1, 5), Axis::Column, 5; "swap columns")]
    #[test_case(|a: &Matrix| a.swap_columns(3, 0), Axis::Column, 3; "swap columns first index")]
    #[test_case(|a: &Matrix| a.multiply_row(3, 1.0), Axis::Row, 3; "multiply row")]
    #[test_case(|a: &Matrix| a.multiply_column(4, 1.0), Axis::Column, 4; "multiply column")]
    #[test_case(|a: &Matrix| a.add_scaled_row(0, 9, 1.0), Axis::Row, 9; "add scaled row source")]
    #[test_case(|a: &Matrix| a.add_scaled_row(4, 0, 1.0), Axis::Row, 4; "add scaled row target")]
    #[test_case(|a: &Matrix| a.add_scaled_column(3, 0, 1.0), Axis::Column, 3; "add scaled column target")]
    #[test_case(|a: &Matrix| a.add_scaled_column(0, 7, 1.0), Axis::Column, 7; "add scaled column source")]
    fn test_index_out_of_range(op: fn(&Matrix) -> Result<Matrix>, axis: Axis, index: usize) {
        assert_eq!(
            op(&m123()),
            Err(MatrixError::IndexOutOfRange {
                axis,
                index,
                bound: 3
            })
        );
    }

    #[test]
    fn test_input_untouched() {
        let a = m123();
        let _ = a.swap_rows(0, 1).unwrap();
        let _ = a.multiply_row(0, 5.0).unwrap();
        let _ = a.add_scaled_column(0, 1, 3.0).unwrap();
        let _ = a.append_row(&[0.0, 0.0, 0.0]).unwrap();
        assert_eq!(a, m123());
    }
}
