use crate::matrix::matrix_error::{MatrixError, Result};
use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// How the elimination engine decides that an entry is zero.
///
/// With the default `zero_tolerance` of `0.0` only exact zeros count, which
/// keeps results bit-for-bit stable. A positive tolerance treats any entry with
/// `|x| <= zero_tolerance` as zero: it is neither used as a pivot nor eliminated.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EliminationConfig {
    pub zero_tolerance: f64,
}

impl EliminationConfig {
    pub fn exact() -> Self {
        Self::default()
    }

    pub fn with_tolerance(zero_tolerance: f64) -> Self {
        EliminationConfig { zero_tolerance }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.zero_tolerance.is_finite() || self.zero_tolerance < 0.0 {
            return Err(MatrixError::InvalidTolerance(self.zero_tolerance));
        }
        Ok(())
    }

    #[inline(always)]
    pub fn is_zero(&self, value: f64) -> bool {
        if self.zero_tolerance.is_zero() {
            value.is_zero()
        } else {
            value.abs() <= self.zero_tolerance
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
