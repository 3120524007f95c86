/// Column of the first entry of `row` that is not exactly zero
pub fn leading_column(row: &[f64]) -> Option<usize> {
    row.iter().position(|x| *x != 0.0)
}

/// Maps `a` to `b`, `b` to `a` and leaves every other index alone
#[inline(always)]
pub fn swap_index(i: usize, a: usize, b: usize) -> usize {
    if i == a {
        b
    } else if i == b {
        a
    } else {
        i
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
