//! # complex-algebra
//!
//! Complex numbers, complex vectors and matrices, and boolean-semiring matrices.
//!
//! ## Features
//!
//! - **Complex arithmetic**: Cartesian [`Complex`] with a polar view [`ComplexPolar`]
//! - **Vector space**: fixed-length [`ComplexVector`] with addition, negation and scaling
//! - **Matrices**: column-major [`ComplexMatrix`] and row-major [`BooleanMatrix`]
//! - **Semiring products**: both matrix products run one GEMM kernel, over `(+, ×)` or `(OR, AND)`
//! - **Typed failures**: shape and division errors come back as [`AlgebraError`]
//! - **Parallel backend**: optional rayon backend (requires `parallel` feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use complex_algebra::{BooleanMatrix, Complex, ComplexMatrix, ComplexVector};
//!
//! let x = Complex::new(2.0, 3.0);
//! assert_eq!((x * x.conjugate()).to_string(), "13");
//!
//! // Column-major: columns [1, 0] and [i, 1] represent
//! // [[1, i],
//! //  [0, 1]]
//! let m = ComplexMatrix::new(vec![
//!     ComplexVector::new(vec![Complex::ONE, Complex::ZERO]),
//!     ComplexVector::new(vec![Complex::I, Complex::ONE]),
//! ])?;
//! let m2 = m.multiply(&m)?;
//! assert_eq!(m2.entry(0, 1), Complex::new(0.0, 2.0));
//!
//! // Boolean semiring: C[i,j] = OR_k (A[i,k] AND B[k,j])
//! let a = BooleanMatrix::from_bits(vec![vec![0, 1], vec![0, 0]])?;
//! assert_eq!(a.multiply(&a)?, BooleanMatrix::from_bits(vec![vec![0, 0], vec![0, 0]])?);
//! # Ok::<(), complex_algebra::AlgebraError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Value types                           │
//! │   Complex ─► ComplexPolar                                   │
//! │   Complex ─► ComplexVector ─► ComplexMatrix                 │
//! │   BooleanMatrix (vector_mul: ComplexVector → ComplexVector) │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Semiring dispatch                           │
//! │   Standard<Complex>: (+, ×)    → ComplexMatrix::multiply    │
//! │   Boolean:           (OR, AND) → BooleanMatrix::multiply    │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Backend::gemm (column-major)                │
//! │   Cpu:   sequential loops                                   │
//! │   Rayon: output columns in parallel                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod algebra;
pub mod backend;
pub mod complex;
pub mod error;
pub mod matrix;
pub mod vector;

// Re-exports
pub use algebra::{Boolean, Semiring, Standard};
pub use backend::{Backend, Cpu};
pub use complex::{Complex, ComplexPolar};
pub use error::{AlgebraError, Result};
pub use matrix::{BooleanMatrix, ComplexMatrix, RowView};
pub use vector::ComplexVector;

#[cfg(feature = "parallel")]
pub use backend::Rayon;
