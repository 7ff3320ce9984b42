//! CPU backend implementation.

use super::traits::Backend;
use crate::algebra::Semiring;

/// Sequential CPU backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct Cpu;

impl Backend for Cpu {
    fn name() -> &'static str {
        "cpu"
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
        for j in 0..n {
            for i in 0..m {
                c[i + j * m] = dot::<S>(a, m, k, b, i, j);
            }
        }
        c
    }
}

/// Reduce row `i` of `a` against column `j` of `b`, in increasing `kk` order.
#[inline]
pub(crate) fn dot<S: Semiring>(
    a: &[S::Scalar],
    m: usize,
    k: usize,
    b: &[S::Scalar],
    i: usize,
    j: usize,
) -> S::Scalar {
    let mut acc = S::zero();
    for kk in 0..k {
        let a_val = S::from_scalar(a[i + kk * m]);
        let b_val = S::from_scalar(b[kk + j * k]);
        acc = acc.add(a_val.mul(b_val));
    }
    acc.to_scalar()
}
