//! Dense complex and boolean matrices.
//!
//! [`ComplexMatrix`] is stored column-major, as a list of [`ComplexVector`]
//! columns: the entry at row `r`, column `c` is `columns[c].elements()[r]`.
//! [`ComplexMatrix::entry`] is the one place that mapping is spelled out;
//! display and row iteration go through it.
//!
//! [`BooleanMatrix`] is stored row-major, as a list of `bool` rows.

mod boolean;
mod ops;
mod view;

pub use boolean::BooleanMatrix;
pub use view::RowView;

use std::fmt;

use crate::algebra::{Semiring, Standard};
use crate::complex::Complex;
use crate::error::{AlgebraError, Result};
use crate::vector::ComplexVector;

/// A dense complex matrix made of equal-length column vectors.
///
/// # Example
///
/// ```rust
/// use complex_algebra::{Complex, ComplexMatrix, ComplexVector};
///
/// // Column-major: columns [1, 2] and [3, 4] represent
/// // [[1, 3],
/// //  [2, 4]]
/// let m = ComplexMatrix::new(vec![
///     ComplexVector::new(vec![Complex::new(1.0, 0.0), Complex::new(2.0, 0.0)]),
///     ComplexVector::new(vec![Complex::new(3.0, 0.0), Complex::new(4.0, 0.0)]),
/// ])
/// .unwrap();
///
/// assert_eq!(m.entry(0, 1), Complex::new(3.0, 0.0));
/// assert_eq!(m.to_string(), "1\t3\n2\t4\n");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComplexMatrix {
    /// Column vectors, each of length `vector_length`
    columns: Vec<ComplexVector>,

    /// Number of rows; taken from the first column
    vector_length: usize,
}

impl ComplexMatrix {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a matrix from its columns.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::MatrixLenMismatch`] if any column's length
    /// differs from the first column's.
    pub fn new(columns: Vec<ComplexVector>) -> Result<Self> {
        let vector_length = columns.first().map_or(0, ComplexVector::len);
        if let Some(bad) = columns.iter().find(|c| c.len() != vector_length) {
            log::debug!(
                "ragged matrix columns: expected length {}, found {}",
                vector_length,
                bad.len()
            );
            return Err(AlgebraError::MatrixLenMismatch {
                expected: vector_length,
                found: bad.len(),
            });
        }
        Ok(Self::from_columns_unchecked(columns, vector_length))
    }

    /// Create a matrix from column-major data with the given shape.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidMatrix`] if `data.len() != rows * cols`
    /// or `rows * cols` overflows `usize`.
    pub fn from_column_major(data: &[Complex], rows: usize, cols: usize) -> Result<Self> {
        if rows.checked_mul(cols) != Some(data.len()) {
            log::debug!(
                "column-major data of {} elements rejected for shape {}x{}",
                data.len(),
                rows,
                cols
            );
            return Err(AlgebraError::InvalidMatrix(format!(
                "{} elements cannot fill a {}x{} matrix",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Self::from_column_major_unchecked(data, rows, cols))
    }

    /// Create a matrix from row-major nested data.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::MatrixLenMismatch`] if the rows are ragged.
    pub fn from_rows(rows: &[Vec<Complex>]) -> Result<Self> {
        let ncols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|r| r.len() != ncols) {
            return Err(AlgebraError::MatrixLenMismatch {
                expected: ncols,
                found: bad.len(),
            });
        }
        let columns = (0..ncols)
            .map(|c| rows.iter().map(|row| row[c]).collect::<ComplexVector>())
            .collect();
        Ok(Self::from_columns_unchecked(columns, rows.len()))
    }

    /// The `n×n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let one = Standard::<Complex>::one().to_scalar();
        let zero = Standard::<Complex>::zero().to_scalar();
        let columns = (0..n)
            .map(|c| {
                (0..n)
                    .map(|r| if r == c { one } else { zero })
                    .collect::<ComplexVector>()
            })
            .collect();
        Self::from_columns_unchecked(columns, n)
    }

    /// A zero-filled matrix with `cols` columns of length `rows`.
    ///
    /// With `cols == 0` there is no column to take a length from, so the
    /// result is the `0×0` matrix whatever `rows` is.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_columns_unchecked(vec![ComplexVector::zeros(rows); cols], rows)
    }

    /// Assemble from columns already known to have length `vector_length`.
    pub(crate) fn from_columns_unchecked(columns: Vec<ComplexVector>, vector_length: usize) -> Self {
        debug_assert!(columns.iter().all(|c| c.len() == vector_length));
        // An empty column list has no first column to take a length from.
        let vector_length = if columns.is_empty() { 0 } else { vector_length };
        Self {
            columns,
            vector_length,
        }
    }

    pub(crate) fn from_column_major_unchecked(data: &[Complex], rows: usize, cols: usize) -> Self {
        let columns = (0..cols)
            .map(|c| ComplexVector::new(data[c * rows..(c + 1) * rows].to_vec()))
            .collect();
        Self::from_columns_unchecked(columns, rows)
    }

    // ========================================================================
    // Metadata
    // ========================================================================

    #[inline]
    pub fn columns(&self) -> &[ComplexVector] {
        &self.columns
    }

    #[inline]
    pub fn column(&self, col: usize) -> Option<&ComplexVector> {
        self.columns.get(col)
    }

    /// Length of every column, i.e. the number of rows.
    #[inline]
    pub fn vector_length(&self) -> usize {
        self.vector_length
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.vector_length
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    /// `(rows, cols)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }

    // ========================================================================
    // Element access
    // ========================================================================

    /// Entry at (`row`, `col`), or `None` when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Complex> {
        self.columns.get(col).and_then(|c| c.get(row))
    }

    /// Entry at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the matrix.
    #[inline]
    pub fn entry(&self, row: usize, col: usize) -> Complex {
        self.columns[col].elements()[row]
    }

    /// Flatten to column-major order.
    pub fn to_column_major(&self) -> Vec<Complex> {
        self.columns
            .iter()
            .flat_map(|c| c.iter().copied())
            .collect()
    }

    // ========================================================================
    // Shape checks
    // ========================================================================

    /// Check that `other` has the same number of columns as `self` and that
    /// every column of `other` has length `self.vector_length()`.
    pub fn length_check(&self, other: &Self) -> Result<()> {
        if self.ncols() != other.ncols() {
            log::debug!(
                "matrix column count mismatch: {} vs {}",
                self.ncols(),
                other.ncols()
            );
            return Err(AlgebraError::MatrixLenMismatch {
                expected: self.ncols(),
                found: other.ncols(),
            });
        }
        if let Some(bad) = other.columns.iter().find(|c| c.len() != self.vector_length) {
            log::debug!(
                "matrix column length mismatch: {} vs {}",
                self.vector_length,
                bad.len()
            );
            return Err(AlgebraError::MatrixLenMismatch {
                expected: self.vector_length,
                found: bad.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for ComplexMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (i, x) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str("\t")?;
                }
                write!(f, "{}", x)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
