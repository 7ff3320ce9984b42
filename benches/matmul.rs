//! Timing benchmark for the square matrix products
//!
//! Run benchmark:    cargo bench --bench matmul
//! With rayon:       cargo bench --bench matmul --features parallel
//! Larger sizes:     cargo bench --bench matmul -- --large

use std::time::Instant;

use complex_algebra::{Backend, BooleanMatrix, Complex, ComplexMatrix, Cpu};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED: u64 = 42;

fn random_complex(rng: &mut StdRng, n: usize) -> ComplexMatrix {
    let data: Vec<Complex> = (0..n * n)
        .map(|_| Complex::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect();
    ComplexMatrix::from_column_major(&data, n, n).expect("square data")
}

fn random_boolean(rng: &mut StdRng, n: usize, density: f64) -> BooleanMatrix {
    let rows = (0..n)
        .map(|_| (0..n).map(|_| rng.gen_bool(density)).collect::<Vec<bool>>())
        .collect();
    BooleanMatrix::new(rows).expect("square rows")
}

fn time_complex<B: Backend>(backend: &B, x: &ComplexMatrix, y: &ComplexMatrix, reps: usize) {
    let start = Instant::now();
    for _ in 0..reps {
        let out = x.multiply_with(y, backend).expect("matching shapes");
        std::hint::black_box(out);
    }
    let per_call = start.elapsed() / reps as u32;
    println!(
        "  complex {:>4}x{:<4} {:>6}: {:?}/call",
        x.nrows(),
        x.ncols(),
        B::name(),
        per_call
    );
}

fn time_boolean<B: Backend>(backend: &B, a: &BooleanMatrix, b: &BooleanMatrix, reps: usize) {
    let start = Instant::now();
    for _ in 0..reps {
        let out = a.multiply_with(b, backend).expect("matching shapes");
        std::hint::black_box(out);
    }
    let per_call = start.elapsed() / reps as u32;
    println!(
        "  boolean {:>4}x{:<4} {:>6}: {:?}/call",
        a.nrows(),
        a.vector_length(),
        B::name(),
        per_call
    );
}

fn run(sizes: &[usize]) {
    let mut rng = StdRng::seed_from_u64(SEED);

    for &n in sizes {
        let reps = (200 / n).max(1);
        println!("n = {} ({} reps)", n, reps);

        let x = random_complex(&mut rng, n);
        let y = random_complex(&mut rng, n);
        time_complex(&Cpu, &x, &y, reps);
        #[cfg(feature = "parallel")]
        time_complex(&complex_algebra::Rayon, &x, &y, reps);

        let a = random_boolean(&mut rng, n, 0.1);
        let b = random_boolean(&mut rng, n, 0.1);
        time_boolean(&Cpu, &a, &b, reps);
        #[cfg(feature = "parallel")]
        time_boolean(&complex_algebra::Rayon, &a, &b, reps);
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--large") {
        run(&[128, 256, 512]);
    } else {
        run(&[8, 32, 64, 128]);
    }
}
