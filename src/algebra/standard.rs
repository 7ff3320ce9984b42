//! Standard arithmetic semiring `(+, ×)`.

use super::semiring::Semiring;
use super::Scalar;
use num_traits::{One, Zero};

/// Standard arithmetic semiring with addition and multiplication.
///
/// `Standard<Complex>` is the algebra used by [`ComplexMatrix::multiply`].
///
/// # Example
///
/// ```rust
/// use complex_algebra::algebra::{Semiring, Standard};
/// use complex_algebra::Complex;
///
/// let a = Standard(Complex::new(1.0, 1.0));
/// let b = Standard(Complex::new(2.0, 0.0));
///
/// assert_eq!(a.add(b).to_scalar(), Complex::new(3.0, 1.0));
/// assert_eq!(a.mul(b).to_scalar(), Complex::new(2.0, 2.0));
/// ```
///
/// [`ComplexMatrix::multiply`]: crate::ComplexMatrix::multiply
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Standard<T: Scalar>(pub T);

impl<T: Scalar + Zero + One + std::ops::Add<Output = T> + std::ops::Mul<Output = T>> Semiring
    for Standard<T>
{
    type Scalar = T;

    #[inline]
    fn zero() -> Self {
        Standard(T::zero())
    }

    #[inline]
    fn one() -> Self {
        Standard(T::one())
    }

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Standard(self.0 + rhs.0)
    }

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Standard(self.0 * rhs.0)
    }

    #[inline]
    fn from_scalar(s: T) -> Self {
        Standard(s)
    }

    #[inline]
    fn to_scalar(self) -> T {
        self.0
    }
}
