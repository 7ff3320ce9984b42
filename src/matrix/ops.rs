//! Matrix arithmetic: addition, scaling and the square product.

use super::ComplexMatrix;
use crate::algebra::Standard;
use crate::backend::{Backend, Cpu};
use crate::complex::Complex;
use crate::error::{AlgebraError, Result};
use crate::vector::ComplexVector;

impl ComplexMatrix {
    /// Column-wise sum.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::MatrixLenMismatch`] if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.length_check(other)?;
        let columns = self
            .columns
            .iter()
            .zip(other.columns.iter())
            .map(|(x, y)| x.add(y))
            .collect::<Result<Vec<ComplexVector>>>()?;
        Ok(Self::from_columns_unchecked(columns, self.vector_length))
    }

    /// Multiply every entry by `c`.
    pub fn scalar_mul(&self, c: Complex) -> Self {
        let columns = self.columns.iter().map(|col| col.scalar_mul(c)).collect();
        Self::from_columns_unchecked(columns, self.vector_length)
    }

    /// Square matrix product on the [`Cpu`] backend.
    ///
    /// Entry (`j`, `i`) of the result is
    /// `Σ_k self.entry(j, k) * other.entry(k, i)`, i.e.
    /// `Σ_k self.columns[k][j] * other.columns[i][k]` in storage terms.
    ///
    /// # Example
    ///
    /// ```rust
    /// use complex_algebra::{Complex, ComplexMatrix};
    ///
    /// let i = Complex::I;
    /// let x = ComplexMatrix::from_column_major(&[Complex::ZERO, i, i, Complex::ZERO], 2, 2).unwrap();
    ///
    /// // [[0, i], [i, 0]]² = -I
    /// let y = x.multiply(&x).unwrap();
    /// assert_eq!(y, ComplexMatrix::identity(2).scalar_mul(-Complex::ONE));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::MatrixLenMismatch`] if the shapes differ or the
    /// matrices are not square.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        self.multiply_with(other, &Cpu)
    }

    /// Square matrix product on an explicit backend.
    pub fn multiply_with<B: Backend>(&self, other: &Self, backend: &B) -> Result<Self> {
        self.length_check(other)?;
        if !self.is_square() {
            log::debug!(
                "multiply requires a square matrix, found {}x{}",
                self.nrows(),
                self.ncols()
            );
            return Err(AlgebraError::MatrixLenMismatch {
                expected: self.ncols(),
                found: self.vector_length,
            });
        }

        let n = self.ncols();
        let a = self.to_column_major();
        let b = other.to_column_major();
        let c = backend.gemm::<Standard<Complex>>(&a, n, n, &b, n);

        Ok(Self::from_column_major_unchecked(&c, n, n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: &[&[(f64, f64)]]) -> ComplexMatrix {
        let rows: Vec<Vec<Complex>> = rows
            .iter()
            .map(|r| r.iter().map(|&p| Complex::from(p)).collect())
            .collect();
        ComplexMatrix::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_add() {
        let a = m(&[&[(1.0, 0.0), (0.0, 1.0)], &[(2.0, 2.0), (3.0, 0.0)]]);
        let b = m(&[&[(1.0, 1.0), (0.0, -1.0)], &[(0.0, 0.0), (-3.0, 1.0)]]);

        let c = a.add(&b).unwrap();
        assert_eq!(c, m(&[&[(2.0, 1.0), (0.0, 0.0)], &[(2.0, 2.0), (0.0, 1.0)]]));
    }

    #[test]
    fn test_add_shape_mismatch() {
        let a = ComplexMatrix::zeros(2, 2);
        let b = ComplexMatrix::zeros(3, 2);
        assert!(matches!(
            a.add(&b),
            Err(AlgebraError::MatrixLenMismatch { .. })
        ));
    }

    #[test]
    fn test_scalar_mul() {
        let a = m(&[&[(1.0, 0.0), (0.0, 1.0)], &[(2.0, 0.0), (0.0, 0.0)]]);

        assert_eq!(a.scalar_mul(Complex::ONE), a);
        assert_eq!(
            a.scalar_mul(Complex::new(0.0, 2.0)),
            m(&[&[(0.0, 2.0), (-2.0, 0.0)], &[(0.0, 4.0), (0.0, 0.0)]])
        );
    }

    #[test]
    fn test_multiply_index_pairing() {
        // [[1, 2],    [[5, 6],    [[19, 22],
        //  [3, 4]]  x  [7, 8]]  =  [43, 50]]
        let a = m(&[&[(1.0, 0.0), (2.0, 0.0)], &[(3.0, 0.0), (4.0, 0.0)]]);
        let b = m(&[&[(5.0, 0.0), (6.0, 0.0)], &[(7.0, 0.0), (8.0, 0.0)]]);

        let c = a.multiply(&b).unwrap();
        assert_eq!(c, m(&[&[(19.0, 0.0), (22.0, 0.0)], &[(43.0, 0.0), (50.0, 0.0)]]));

        // Same thing spelled out over the column storage
        for i in 0..2 {
            for j in 0..2 {
                let expected = (0..2).fold(Complex::ZERO, |acc, k| {
                    acc + a.columns()[k].elements()[j] * b.columns()[i].elements()[k]
                });
                assert_eq!(c.columns()[i].elements()[j], expected);
            }
        }
    }

    #[test]
    fn test_multiply_complex_entries() {
        // [[1, i]] row times [[i], [1]] column, embedded in 2x2
        let a = m(&[&[(1.0, 0.0), (0.0, 1.0)], &[(0.0, 0.0), (0.0, 0.0)]]);
        let b = m(&[&[(0.0, 1.0), (0.0, 0.0)], &[(1.0, 0.0), (0.0, 0.0)]]);

        // 1*i + i*1 = 2i
        let c = a.multiply(&b).unwrap();
        assert_eq!(c.entry(0, 0), Complex::new(0.0, 2.0));
        assert_eq!(c.entry(1, 0), Complex::ZERO);
    }

    #[test]
    fn test_multiply_identity() {
        let y = m(&[&[(1.0, 2.0), (3.0, -1.0)], &[(0.0, 0.5), (-2.0, 0.0)]]);
        let id = ComplexMatrix::identity(2);

        assert_eq!(id.multiply(&y).unwrap(), y);
        assert_eq!(y.multiply(&id).unwrap(), y);
    }

    #[test]
    fn test_multiply_rejects_non_square() {
        let a = ComplexMatrix::zeros(3, 2);
        assert_eq!(
            a.multiply(&a),
            Err(AlgebraError::MatrixLenMismatch {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn test_multiply_empty() {
        let e = ComplexMatrix::identity(0);
        assert_eq!(e.multiply(&e).unwrap(), e);
    }
}
