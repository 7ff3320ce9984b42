//! Boolean semiring `(OR, AND)`.

use super::semiring::Semiring;

/// Boolean semiring used for reachability-style composition of relations.
///
/// Operations:
/// - Addition (⊕): `a OR b`
/// - Multiplication (⊗): `a AND b`
/// - Zero: `false`
/// - One: `true`
///
/// # Example
///
/// ```rust
/// use complex_algebra::algebra::{Boolean, Semiring};
///
/// let a = Boolean(true);
/// let b = Boolean(false);
///
/// assert!(a.add(b).to_scalar());
/// assert!(!a.mul(b).to_scalar());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(transparent)]
pub struct Boolean(pub bool);

impl Semiring for Boolean {
    type Scalar = bool;

    #[inline]
    fn zero() -> Self {
        Boolean(false)
    }

    #[inline]
    fn one() -> Self {
        Boolean(true)
    }

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Boolean(self.0 || rhs.0)
    }

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Boolean(self.0 && rhs.0)
    }

    #[inline]
    fn from_scalar(s: bool) -> Self {
        Boolean(s)
    }

    #[inline]
    fn to_scalar(self) -> bool {
        self.0
    }
}
