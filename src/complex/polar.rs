//! Polar view of a complex number.

use std::fmt;

use super::Complex;

/// A complex number as modulus `p` and angle `theta` (radians).
///
/// `p` is not checked for sign; a negative modulus converts back through the
/// same `p·cos θ + p·sin θ·i` formula.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComplexPolar {
    pub p: f64,
    pub theta: f64,
}

impl ComplexPolar {
    #[inline]
    pub const fn new(p: f64, theta: f64) -> Self {
        Self { p, theta }
    }

    /// Convert back to Cartesian coordinates.
    pub fn cartesian(self) -> Complex {
        Complex::new(self.p * self.theta.cos(), self.p * self.theta.sin())
    }
}

impl From<Complex> for ComplexPolar {
    fn from(z: Complex) -> Self {
        z.polar()
    }
}

impl From<ComplexPolar> for Complex {
    fn from(z: ComplexPolar) -> Self {
        z.cartesian()
    }
}

impl fmt::Display for ComplexPolar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p={}, theta={}", self.p, self.theta)
    }
}
