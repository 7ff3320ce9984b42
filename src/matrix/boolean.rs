//! Boolean matrices over the `(OR, AND)` semiring.

use std::fmt;

use crate::algebra::{Boolean, Semiring};
use crate::backend::{Backend, Cpu};
use crate::complex::Complex;
use crate::error::{AlgebraError, Result};
use crate::vector::ComplexVector;

/// A dense boolean matrix stored as equal-length rows.
///
/// Entry `(i, j)` can be read as "there is an edge from `i` to `j`", which
/// makes [`multiply`](Self::multiply) relational composition and
/// [`vector_mul`](Self::vector_mul) one step of value propagation along the
/// edges.
///
/// # Example
///
/// ```rust
/// use complex_algebra::{BooleanMatrix, Complex, ComplexVector};
///
/// // 0 -> 1, 1 -> 0
/// let swap = BooleanMatrix::from_bits(vec![vec![0, 1], vec![1, 0]]).unwrap();
/// let v = ComplexVector::new(vec![Complex::new(5.0, 0.0), Complex::new(7.0, 0.0)]);
///
/// let w = swap.vector_mul(&v).unwrap();
/// assert_eq!(w.elements(), &[Complex::new(7.0, 0.0), Complex::new(5.0, 0.0)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BooleanMatrix {
    rows: Vec<Vec<bool>>,

    /// Common row length; taken from the first row
    vector_length: usize,
}

impl BooleanMatrix {
    /// Create a matrix from its rows.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::MatrixLenMismatch`] if the rows are ragged.
    pub fn new(rows: Vec<Vec<bool>>) -> Result<Self> {
        let vector_length = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|r| r.len() != vector_length) {
            log::debug!(
                "ragged boolean matrix rows: expected length {}, found {}",
                vector_length,
                bad.len()
            );
            return Err(AlgebraError::MatrixLenMismatch {
                expected: vector_length,
                found: bad.len(),
            });
        }
        Ok(Self {
            rows,
            vector_length,
        })
    }

    /// Create a matrix from rows of `0`/`1` values.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidMatrix`] if an entry is neither `0` nor
    /// `1`, and [`AlgebraError::MatrixLenMismatch`] if the rows are ragged.
    pub fn from_bits(rows: Vec<Vec<u8>>) -> Result<Self> {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                row.into_iter()
                    .enumerate()
                    .map(|(j, bit)| match bit {
                        0 => Ok(false),
                        1 => Ok(true),
                        other => Err(AlgebraError::InvalidMatrix(format!(
                            "entry ({}, {}) is {}, expected 0 or 1",
                            i, j, other
                        ))),
                    })
                    .collect::<Result<Vec<bool>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(rows)
    }

    /// The `n×n` identity relation.
    pub fn identity(n: usize) -> Self {
        let rows = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| if i == j { Boolean::one() } else { Boolean::zero() })
                    .map(Boolean::to_scalar)
                    .collect::<Vec<bool>>()
            })
            .collect();
        Self {
            rows,
            vector_length: n,
        }
    }

    #[inline]
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// Length of every row, i.e. the number of columns.
    #[inline]
    pub fn vector_length(&self) -> usize {
        self.vector_length
    }

    /// `(rows, cols)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.vector_length)
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows() == self.vector_length
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Check that `other` has as many rows as `self` and that every row of
    /// `other` has length `self.vector_length()`.
    pub fn length_check(&self, other: &Self) -> Result<()> {
        if self.nrows() != other.nrows() {
            log::debug!(
                "boolean matrix row count mismatch: {} vs {}",
                self.nrows(),
                other.nrows()
            );
            return Err(AlgebraError::MatrixLenMismatch {
                expected: self.nrows(),
                found: other.nrows(),
            });
        }
        if let Some(bad) = other.rows.iter().find(|r| r.len() != self.vector_length) {
            log::debug!(
                "boolean matrix row length mismatch: {} vs {}",
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

    /// Boolean semiring product on the [`Cpu`] backend:
    /// `out[i][j] = OR_k (self[i][k] AND other[k][j])`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::MatrixLenMismatch`] if the shapes differ or the
    /// matrices are not square.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        self.multiply_with(other, &Cpu)
    }

    /// Boolean semiring product on an explicit backend.
    pub fn multiply_with<B: Backend>(&self, other: &Self, backend: &B) -> Result<Self> {
        self.length_check(other)?;
        if !self.is_square() {
            log::debug!(
                "multiply requires a square matrix, found {}x{}",
                self.nrows(),
                self.vector_length
            );
            return Err(AlgebraError::MatrixLenMismatch {
                expected: self.nrows(),
                found: self.vector_length,
            });
        }

        let n = self.nrows();
        // Row-major data read as column-major is the transpose, and
        // (XY)ᵀ = YᵀXᵀ, so swapping the operands yields XY in row-major order.
        let x = self.to_row_major();
        let y = other.to_row_major();
        let c = backend.gemm::<Boolean>(&y, n, n, &x, n);

        let rows = (0..n).map(|i| c[i * n..(i + 1) * n].to_vec()).collect();
        Ok(Self {
            rows,
            vector_length: n,
        })
    }

    /// Propagate `v` along the matrix: output element `j` is the sum of every
    /// `v[i]` with `self[i][j]` set, or zero when column `j` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::VectorLenMismatch`] if `v.len()` differs from
    /// the number of rows.
    pub fn vector_mul(&self, v: &ComplexVector) -> Result<ComplexVector> {
        if v.len() != self.nrows() {
            log::debug!(
                "vector_mul length mismatch: {} rows vs vector of {}",
                self.nrows(),
                v.len()
            );
            return Err(AlgebraError::VectorLenMismatch {
                left: self.nrows(),
                right: v.len(),
            });
        }

        Ok((0..self.vector_length)
            .map(|j| {
                self.rows
                    .iter()
                    .zip(v.iter())
                    .filter(|(row, _)| row[j])
                    .fold(Complex::ZERO, |acc, (_, &x)| acc + x)
            })
            .collect())
    }

    fn to_row_major(&self) -> Vec<bool> {
        self.rows.iter().flatten().copied().collect()
    }
}

impl fmt::Display for BooleanMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for (j, &bit) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str("\t")?;
                }
                f.write_str(if bit { "1" } else { "0" })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
