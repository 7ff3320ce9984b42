//! Algebraic structures behind the matrix products.
//!
//! This module defines the [`Semiring`] trait and implementations for:
//! - [`Standard<T>`]: Standard arithmetic `(+, ×)`, used for complex matrices
//! - [`Boolean`]: Boolean semiring `(OR, AND)`, used for boolean matrices

mod boolean;
mod semiring;
mod standard;

pub use boolean::Boolean;
pub use semiring::Semiring;
pub use standard::Standard;

use crate::complex::Complex;

/// Marker trait for element types that can be stored in a matrix.
pub trait Scalar: Copy + Clone + Send + Sync + Default + std::fmt::Debug + 'static {}

impl Scalar for f64 {}
impl Scalar for bool {}
impl Scalar for Complex {}
