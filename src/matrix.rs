//! Square grid of QR modules

use std::fmt;
use std::str::FromStr;

use crate::error::{MatrixParseError, RenderError};

/// A finished QR code's module grid, `size x size`
///
/// Row 0 is the top edge and column 0 the left edge. Construction validates
/// that the grid is non-empty and square, so every `ModuleMatrix` is a legal
/// input to the locator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleMatrix {
    size: usize,
    modules: Vec<bool>,
}

impl ModuleMatrix {
    /// Build a matrix from row vectors, rejecting empty and non-square grids
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, RenderError> {
        let size = rows.len();
        if size == 0 {
            return Err(RenderError::invalid_matrix("matrix has no rows"));
        }
        let mut modules = Vec::with_capacity(size * size);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(RenderError::invalid_matrix(format!(
                    "row {} has {} modules but the matrix has {} rows",
                    index,
                    row.len(),
                    size
                )));
            }
            modules.extend(row);
        }
        Ok(Self { size, modules })
    }

    /// Build a matrix by evaluating `lit(row, col)` for every position
    pub fn from_fn(
        size: usize,
        mut lit: impl FnMut(usize, usize) -> bool,
    ) -> Result<Self, RenderError> {
        if size == 0 {
            return Err(RenderError::invalid_matrix("matrix has no rows"));
        }
        let modules = (0..size * size).map(|i| lit(i / size, i % size)).collect();
        Ok(Self { size, modules })
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the module at `(row, col)` is lit; out-of-range positions are unlit
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.modules[row * self.size + col]
    }

    /// Number of lit modules
    pub fn lit_count(&self) -> usize {
        self.modules.iter().filter(|&&m| m).count()
    }

    /// Iterate rows as slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.modules.chunks(self.size)
    }
}

impl TryFrom<Vec<Vec<bool>>> for ModuleMatrix {
    type Error = RenderError;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl FromStr for ModuleMatrix {
    type Err = MatrixParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse(s)
    }
}

impl fmt::Display for ModuleMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &lit in row {
                f.write_str(if lit { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
