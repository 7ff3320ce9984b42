//! Rayon-parallel backend implementation.

use rayon::prelude::*;

use super::cpu::dot;
use super::traits::Backend;
use crate::algebra::Semiring;

/// Backend that computes output columns in parallel on the rayon pool.
///
/// Each output entry is still reduced sequentially, so results are identical
/// to [`Cpu`](super::Cpu).
#[derive(Clone, Copy, Debug, Default)]
pub struct Rayon;

impl Backend for Rayon {
    fn name() -> &'static str {
        "rayon"
    }

    fn gemm<S: Semiring>(
        &self,
        a: &[S::Scalar],
        m: usize,
        k: usize,
        b: &[S::Scalar],
        n: usize,
    ) -> Vec<S::Scalar> {
        debug_assert_eq!(a.len(), m * k);
        debug_assert_eq!(b.len(), k * n);
        log::trace!("{} gemm: [{}, {}] x [{}, {}]", Self::name(), m, k, k, n);

        let mut c = vec![S::zero().to_scalar(); m * n];
        // par_chunks_mut panics on a zero chunk size
        if c.is_empty() {
            return c;
        }

        c.par_chunks_mut(m).enumerate().for_each(|(j, col)| {
            for (i, out) in col.iter_mut().enumerate() {
                *out = dot::<S>(a, m, k, b, i, j);
            }
        });
        c
    }
}
