//! Complex numbers in Cartesian and polar form.
//!
//! [`Complex`] is the field element every other type in the crate is built
//! from. Arithmetic goes through the `std::ops` traits, except division, which
//! can fail and is exposed as [`Complex::try_div`].
//!
//! Non-finite components are not rejected: NaN and infinities propagate
//! through every operation exactly as IEEE-754 `f64` arithmetic dictates.

mod polar;

pub use polar::ComplexPolar;

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::error::{AlgebraError, Result};

/// A complex number `re + im·i` with `f64` components.
///
/// # Example
///
/// ```rust
/// use complex_algebra::Complex;
///
/// let x = Complex::new(2.0, 3.0);
/// let y = Complex::new(1.0, -1.0);
///
/// assert_eq!(x + y, Complex::new(3.0, 2.0));
/// assert_eq!(x * y, Complex::new(5.0, 1.0));
/// assert_eq!(x.to_string(), "2+3i");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complex {
    /// Real part
    pub re: f64,
    /// Imaginary part
    pub im: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };
    pub const ONE: Complex = Complex { re: 1.0, im: 0.0 };
    pub const I: Complex = Complex { re: 0.0, im: 1.0 };

    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Squared modulus `re² + im²`.
    #[inline]
    pub fn norm_sqr(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Euclidean length `sqrt(re² + im²)`, always `>= 0` for finite input.
    #[inline]
    pub fn modulus(self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Reflect across the real axis: `re - im·i`.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Convert to polar coordinates.
    ///
    /// The angle comes from the two-argument arctangent, so it lies in
    /// `(-π, π]` and is well defined on the imaginary axis.
    pub fn polar(self) -> ComplexPolar {
        ComplexPolar::new(self.modulus(), self.im.atan2(self.re))
    }

    /// Divide by `rhs`, multiplying through by its conjugate.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DivisionByZero`] when `rhs` has zero modulus.
    pub fn try_div(self, rhs: Self) -> Result<Self> {
        let d = rhs.norm_sqr();
        if d == 0.0 {
            log::debug!("rejected division of {} by zero", self);
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(Self::new(
            (self.re * rhs.re + self.im * rhs.im) / d,
            (rhs.re * self.im - self.re * rhs.im) / d,
        ))
    }
}

impl Add for Complex {
    type Output = Complex;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + rhs.re * self.im,
        )
    }
}

impl Neg for Complex {
    type Output = Complex;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

impl Zero for Complex {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl One for Complex {
    #[inline]
    fn one() -> Self {
        Self::ONE
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self::new(re, 0.0)
    }
}

impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Self {
        Self::new(re, im)
    }
}

impl From<num_complex::Complex64> for Complex {
    fn from(z: num_complex::Complex64) -> Self {
        Self::new(z.re, z.im)
    }
}

impl From<Complex> for num_complex::Complex64 {
    fn from(z: Complex) -> Self {
        num_complex::Complex64::new(z.re, z.im)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let real = (self.re != 0.0).then(|| self.re.to_string());
        let imag = if self.im == 0.0 {
            None
        } else if self.im == 1.0 {
            Some("i".to_string())
        } else if self.im == -1.0 {
            Some("-i".to_string())
        } else {
            Some(format!("{}i", self.im))
        };

        match (real, imag) {
            (None, None) => f.write_str("0"),
            (Some(r), None) => f.write_str(&r),
            (None, Some(i)) => f.write_str(&i),
            // A negative imaginary token already carries its sign.
            (Some(r), Some(i)) if self.im > 0.0 => write!(f, "{}+{}", r, i),
            (Some(r), Some(i)) => write!(f, "{}{}", r, i),
        }
    }
}
