use crate::elimination::elimination_config::EliminationConfig;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_error::Result;
use num_traits::One;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EchelonForm {
    /// Gaussian elimination, rows below each pivot are cleared
    Row,
    /// Gauss-Jordan elimination, every other row is cleared
    ReducedRow,
}

impl EchelonForm {
    #[inline(always)]
    fn clears(&self, row: usize, pivot_row: usize) -> bool {
        match self {
            EchelonForm::Row => row > pivot_row,
            EchelonForm::ReducedRow => row != pivot_row,
        }
    }
}

/// Elimination engine.
///
/// Pivots are the first entry from the top that is not zero (no search for
/// the largest magnitude), and the matrix is only ever transformed through
/// elementary row operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Elimination {
    config: EliminationConfig,
}

impl Elimination {
    pub fn new(config: EliminationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Elimination { config })
    }

    pub fn config(&self) -> &EliminationConfig {
        &self.config
    }

    pub fn row_echelon_form(&self, m: &Matrix) -> Matrix {
        self.eliminate(m, EchelonForm::Row)
    }

    pub fn reduced_row_echelon_form(&self, m: &Matrix) -> Matrix {
        self.eliminate(m, EchelonForm::ReducedRow)
    }

    pub fn eliminate(&self, m: &Matrix, form: EchelonForm) -> Matrix {
        let (rows, cols) = m.size();
        let mut working = m.clone();
        let mut pivot_row = 0;

        // Every index below is either a loop counter bounded by the shape of
        // `working` or `pivot_row`, which stays < rows inside the loop.
        for col in 0..cols {
            if pivot_row >= rows {
                break;
            }

            let first_nonzero =
                (pivot_row..rows).find(|&r| !self.config.is_zero(working.at(r, col)));
            let found = match first_nonzero {
                Some(r) => r,
                None => {
                    trace!(col, "no pivot");
                    continue;
                }
            };

            if found != pivot_row {
                working = working.swap_rows_unchecked(pivot_row, found);
            }

            let pivot = working.at(pivot_row, col);
            if !pivot.is_one() {
                working = working.multiply_row_unchecked(pivot_row, 1.0 / pivot);
            }

            let mut cleared = 0;
            for row in (0..rows).filter(|&r| form.clears(r, pivot_row)) {
                let factor = working.at(row, col);
                if !self.config.is_zero(factor) {
                    working = working.add_scaled_row_unchecked(row, pivot_row, -factor);
                    cleared += 1;
                }
            }

            trace!(col, pivot_row, found, pivot, cleared, "pivot");
            pivot_row += 1;
        }

        debug!(rows, cols, ?form, pivots = pivot_row, "elimination done");
        working
    }
}

impl Matrix {
    /// Gaussian elimination with exact zero tests
    pub fn row_echelon_form(&self) -> Matrix {
        Elimination::default().row_echelon_form(self)
    }

    /// Gauss-Jordan elimination with exact zero tests
    pub fn reduced_row_echelon_form(&self) -> Matrix {
        Elimination::default().reduced_row_echelon_form(self)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
