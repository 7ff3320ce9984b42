//! Tests for the complex vector space.

use complex_algebra::{AlgebraError, Complex, ComplexVector};
use proptest::prelude::*;

fn vector(len: usize) -> impl Strategy<Value = ComplexVector> {
    prop::collection::vec((-1e3f64..1e3, -1e3f64..1e3), len)
        .prop_map(|parts| parts.into_iter().map(Complex::from).collect::<ComplexVector>())
}

fn any_vector() -> impl Strategy<Value = ComplexVector> {
    (0usize..16).prop_flat_map(vector)
}

proptest! {
    #[test]
    fn add_inverse_is_zero(v in any_vector()) {
        let sum = v.add(&v.inverse()).unwrap();
        prop_assert_eq!(sum, ComplexVector::zeros(v.len()));
    }

    #[test]
    fn scalar_mul_by_one_is_identity(v in any_vector()) {
        prop_assert_eq!(v.scalar_mul(Complex::new(1.0, 0.0)), v);
    }

    #[test]
    fn add_is_commutative((x, y) in (0usize..16).prop_flat_map(|n| (vector(n), vector(n)))) {
        prop_assert_eq!(x.add(&y).unwrap(), y.add(&x).unwrap());
    }

    #[test]
    fn operations_preserve_length(v in any_vector(), re in -10.0f64..10.0) {
        prop_assert_eq!(v.inverse().len(), v.len());
        prop_assert_eq!(v.scalar_mul(Complex::new(re, 1.0)).len(), v.len());
    }
}

#[test]
fn test_length_mismatch() {
    let x = ComplexVector::zeros(2);
    let y = ComplexVector::zeros(3);

    assert_eq!(
        x.add(&y),
        Err(AlgebraError::VectorLenMismatch { left: 2, right: 3 })
    );
    assert_eq!(
        y.length_check(&x),
        Err(AlgebraError::VectorLenMismatch { left: 3, right: 2 })
    );
}

#[test]
fn test_invalid_element_data() {
    // A trailing real part without its imaginary partner
    let err = ComplexVector::from_interleaved(&[1.0, 0.0, 2.0]).unwrap_err();
    assert_eq!(err, AlgebraError::InvalidVector { len: 3 });

    // Distinguishable from a length mismatch
    assert!(!matches!(err, AlgebraError::VectorLenMismatch { .. }));
}

#[test]
fn test_inputs_are_not_mutated() {
    let x = ComplexVector::new(vec![Complex::new(1.0, 1.0)]);
    let y = ComplexVector::new(vec![Complex::new(2.0, 0.0)]);
    let before = x.clone();

    let _ = x.add(&y).unwrap();
    let _ = x.inverse();
    let _ = x.scalar_mul(Complex::I);

    assert_eq!(x, before);
}

#[test]
fn test_display() {
    let v = ComplexVector::new(vec![Complex::new(5.0, 0.0), Complex::new(1.0, 1.0)]);
    assert_eq!(v.to_string(), "[5, 1+i]");
}
