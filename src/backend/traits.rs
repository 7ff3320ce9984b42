//! Backend trait definitions.

use crate::algebra::Semiring;

/// Backend trait for matrix product execution.
///
/// Every backend computes the same column-major semiring GEMM; they differ
/// only in how the work is scheduled. Each output entry is reduced over the
/// inner index in increasing order, so all backends agree bit for bit.
pub trait Backend: Clone + Send + Sync + 'static {
    /// Backend name for debugging.
    fn name() -> &'static str;

    /// Semiring matrix multiplication on column-major data.
    ///
    /// Computes `C[m×n] = A[m×k] ⊗ B[k×n]`, that is
    /// `C[i, j] = ⊕_kk A[i, kk] ⊗ B[kk, j]`, where element `(r, c)` of an
    /// `rows×cols` operand lives at index `r + c * rows`.
    fn gemm<S: Semiring>(
        &self,
        a: &[S::Scalar],
        m: usize,
        k: usize,
        b: &[S::Scalar],
        n: usize,
    ) -> Vec<S::Scalar>;
}
