//! Finder-pattern locator
//!
//! Measures the solid block anchoring a corner of the module matrix. The
//! horizontal run along the anchor row is measured first and then checked
//! against the anchor column; the first unlit module down the column limits
//! the result. This tie-break is asymmetric on purpose: an "L" of lit modules
//! reports where the vertical run breaks, not the horizontal one.

use crate::matrix::ModuleMatrix;

/// Side length of the finder pattern anchored at the top-left corner
///
/// For a well-formed QR matrix the same size applies to the top-right and
/// bottom-left finder patterns.
pub fn locate(matrix: &ModuleMatrix) -> usize {
    locate_at(matrix, 0, 0)
}

/// Side length of the lit block whose top-left module is `(row, col)`
pub fn locate_at(matrix: &ModuleMatrix, row: usize, col: usize) -> usize {
    let n = matrix.size();

    let mut run = 0;
    while col + run < n && matrix.get(row, col + run) {
        run += 1;
    }

    for i in 0..run {
        if !matrix.get(row + i, col) {
            return i;
        }
    }

    run
}
