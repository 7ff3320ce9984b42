//! Fixed-length complex vectors.

use std::fmt;

use crate::complex::Complex;
use crate::error::{AlgebraError, Result};

/// An ordered, fixed-length sequence of [`Complex`] elements.
///
/// The element type is enforced by construction; the length never changes
/// once the vector exists. Binary operations check lengths and return
/// [`AlgebraError::VectorLenMismatch`] on disagreement.
///
/// # Example
///
/// ```rust
/// use complex_algebra::{Complex, ComplexVector};
///
/// let v = ComplexVector::new(vec![Complex::new(1.0, 2.0), Complex::new(0.0, -1.0)]);
/// let w = v.add(&v.inverse()).unwrap();
///
/// assert_eq!(w, ComplexVector::zeros(2));
/// assert_eq!(v.to_string(), "[1+2i, -i]");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComplexVector {
    elements: Vec<Complex>,
}

impl ComplexVector {
    pub fn new(elements: Vec<Complex>) -> Self {
        Self { elements }
    }

    /// Build a vector from interleaved `re, im, re, im, ...` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidVector`] when `data` has odd length, i.e.
    /// the trailing value is not a complete complex element.
    pub fn from_interleaved(data: &[f64]) -> Result<Self> {
        if data.len() % 2 != 0 {
            return Err(AlgebraError::InvalidVector { len: data.len() });
        }
        Ok(data
            .chunks_exact(2)
            .map(|pair| Complex::new(pair[0], pair[1]))
            .collect())
    }

    /// The zero vector of length `len`.
    pub fn zeros(len: usize) -> Self {
        Self::new(vec![Complex::ZERO; len])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn elements(&self) -> &[Complex] {
        &self.elements
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Complex> {
        self.elements.get(index).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Complex> {
        self.elements.iter()
    }

    pub fn into_elements(self) -> Vec<Complex> {
        self.elements
    }

    /// Check that `self` and `other` have the same length.
    pub fn length_check(&self, other: &Self) -> Result<()> {
        if self.len() != other.len() {
            log::debug!(
                "vector length check failed: {} vs {}",
                self.len(),
                other.len()
            );
            return Err(AlgebraError::VectorLenMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(())
    }

    /// Element-wise sum.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.length_check(other)?;
        Ok(self
            .iter()
            .zip(other.iter())
            .map(|(&x, &y)| x + y)
            .collect())
    }

    /// Additive inverse: every element negated.
    pub fn inverse(&self) -> Self {
        self.iter().map(|&x| -x).collect()
    }

    /// Multiply every element by `c`.
    pub fn scalar_mul(&self, c: Complex) -> Self {
        self.iter().map(|&x| x * c).collect()
    }
}

impl FromIterator<Complex> for ComplexVector {
    fn from_iter<I: IntoIterator<Item = Complex>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Complex>> for ComplexVector {
    fn from(elements: Vec<Complex>) -> Self {
        Self::new(elements)
    }
}

impl<'a> IntoIterator for &'a ComplexVector {
    type Item = &'a Complex;
    type IntoIter = std::slice::Iter<'a, Complex>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for ComplexVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", x)?;
        }
        f.write_str("]")
    }
}
