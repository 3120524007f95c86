use crate::elimination::elimination::Elimination;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_error::Result;
use crate::utils::leading_column;

/// Outcome of solving `A x = b`
#[derive(Debug, Clone, PartialEq)]
pub enum Solution {
    Unique(Vec<f64>),
    /// Free variables are set to zero in `particular`
    Underdetermined {
        particular: Vec<f64>,
        free_columns: Vec<usize>,
    },
    Inconsistent,
}

impl Matrix {
    pub fn is_ref(&self) -> bool {
        let mut lead = None;
        let mut zero_row_seen = false;

        for row in self.row_iter() {
            match leading_column(row) {
                None => zero_row_seen = true,
                Some(pivot_col) => {
                    if zero_row_seen || row[pivot_col] != 1.0 {
                        return false;
                    }
                    if let Some(prev_lead) = lead {
                        if pivot_col <= prev_lead {
                            return false;
                        }
                    }
                    lead = Some(pivot_col);
                }
            }
        }
        true
    }

    pub fn is_rref(&self) -> bool {
        if !self.is_ref() {
            return false;
        }

        for (i, row) in self.row_iter().enumerate() {
            if let Some(pivot_col) = leading_column(row) {
                for r in 0..self.rows() {
                    if r != i && self.at(r, pivot_col) != 0.0 {
                        return false;
                    }
                }
            }
        }
        true
    }

    pub fn rank(&self) -> usize {
        Elimination::default().rank(self)
    }

    pub fn solve(&self, target: &[f64]) -> Result<Solution> {
        Elimination::default().solve(self, target)
    }
}

impl Elimination {
    /// Number of rows left with a non-zero entry after Gaussian elimination
    pub fn rank(&self, m: &Matrix) -> usize {
        self.row_echelon_form(m)
            .row_iter()
            .filter(|row| row.iter().any(|x| !self.config().is_zero(*x)))
            .count()
    }

    /// Solve `m x = target` by Gauss-Jordan elimination of `[m | target]`
    pub fn solve(&self, m: &Matrix, target: &[f64]) -> Result<Solution> {
        let n_vars = m.cols();
        let reduced = self.reduced_row_echelon_form(&m.append_column(target)?);
        let config = self.config();

        let mut pivot_row_for_col = vec![None; n_vars];
        for (row_idx, row) in reduced.row_iter().enumerate() {
            match row[..n_vars].iter().position(|x| !config.is_zero(*x)) {
                Some(pivot_col) => pivot_row_for_col[pivot_col] = Some(row_idx),
                None => {
                    if !config.is_zero(row[n_vars]) {
                        return Ok(Solution::Inconsistent);
                    }
                }
            }
        }

        // `p * (1 / p)` does not always round to 1.0, so divide by the pivot
        // that elimination actually left behind.
        let particular: Vec<f64> = pivot_row_for_col
            .iter()
            .enumerate()
            .map(|(pivot_col, pivot)| match pivot {
                Some(row_idx) => {
                    reduced.at(*row_idx, n_vars) / reduced.at(*row_idx, pivot_col)
                }
                None => 0.0,
            })
            .collect();
        let free_columns: Vec<usize> = (0..n_vars)
            .filter(|&c| pivot_row_for_col[c].is_none())
            .collect();

        if free_columns.is_empty() {
            Ok(Solution::Unique(particular))
        } else {
            Ok(Solution::Underdetermined {
                particular,
                free_columns,
            })
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
