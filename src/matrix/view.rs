//! Borrowed row views over a column-major matrix.

use super::ComplexMatrix;
use crate::complex::Complex;

/// A borrowed view of one row of a [`ComplexMatrix`].
///
/// Rows are not stored contiguously; the view reads each entry through
/// [`ComplexMatrix::entry`].
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    matrix: &'a ComplexMatrix,
    row: usize,
}

impl<'a> RowView<'a> {
    /// Index of this row in the matrix.
    pub fn index(&self) -> usize {
        self.row
    }

    /// Number of entries, i.e. the matrix's column count.
    pub fn len(&self) -> usize {
        self.matrix.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, col: usize) -> Option<Complex> {
        self.matrix.get(self.row, col)
    }

    pub fn iter(&self) -> impl Iterator<Item = Complex> + 'a {
        let (matrix, row) = (self.matrix, self.row);
        (0..matrix.ncols()).map(move |col| matrix.entry(row, col))
    }

    pub fn to_vec(&self) -> Vec<Complex> {
        self.iter().collect()
    }
}

impl ComplexMatrix {
    /// View of row `row`, or `None` when out of bounds.
    pub fn row(&self, row: usize) -> Option<RowView<'_>> {
        (row < self.nrows()).then_some(RowView { matrix: self, row })
    }

    /// Iterate over rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = RowView<'_>> {
        (0..self.nrows()).map(move |row| RowView { matrix: self, row })
    }
}
