//! Backend abstractions for running matrix products.
//!
//! This module defines the [`Backend`] trait and implementations:
//! - [`Cpu`]: sequential loops, always available
//! - [`Rayon`]: data-parallel over output columns (optional, requires `parallel` feature)

mod cpu;
mod traits;

pub use cpu::Cpu;
pub use traits::Backend;

#[cfg(feature = "parallel")]
mod parallel;

#[cfg(feature = "parallel")]
pub use parallel::Rayon;
