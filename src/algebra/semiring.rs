//! Core algebraic trait for matrix products.

use super::Scalar;

/// A semiring defines two binary operations (⊕, ⊗) with identities.
///
/// # Semiring Laws
///
/// For a semiring (S, ⊕, ⊗, 0, 1):
/// - (S, ⊕, 0) is a commutative monoid
/// - (S, ⊗, 1) is a monoid
/// - ⊗ distributes over ⊕
/// - 0 annihilates: a ⊗ 0 = 0 ⊗ a = 0
///
/// Because ⊕ is associative and commutative, a product kernel may split the
/// reduction over the inner index any way it likes without changing the result.
///
/// # Examples
///
/// | Semiring | ⊕ | ⊗ | 0 | 1 |
/// |----------|---|---|---|---|
/// | Standard | + | × | 0 | 1 |
/// | Boolean  | OR | AND | false | true |
pub trait Semiring: Copy + Clone + Send + Sync + 'static {
    /// The underlying scalar type
    type Scalar: Scalar;

    /// Additive identity (zero element for ⊕)
    fn zero() -> Self;

    /// Multiplicative identity (one element for ⊗)
    fn one() -> Self;

    /// Addition operation (⊕)
    fn add(self, rhs: Self) -> Self;

    /// Multiplication operation (⊗)
    fn mul(self, rhs: Self) -> Self;

    /// Wrap a stored matrix entry
    fn from_scalar(s: Self::Scalar) -> Self;

    /// Unwrap back to the stored entry type
    fn to_scalar(self) -> Self::Scalar;
}
