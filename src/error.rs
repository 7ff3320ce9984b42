//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Precondition violations detected by constructors and binary operations.
///
/// Each variant carries enough context to report which shape or value was
/// rejected, so callers can tell a length mismatch apart from malformed input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgebraError {
    /// Interleaved float data with a dangling real part
    #[error("invalid vector data: {len} floats do not form whole complex elements")]
    InvalidVector { len: usize },

    /// Two vectors, or a matrix and a vector, disagree on length
    #[error("vector length mismatch: {left} vs {right}")]
    VectorLenMismatch { left: usize, right: usize },

    /// Raw matrix data that cannot be read as the requested matrix
    #[error("invalid matrix data: {0}")]
    InvalidMatrix(String),

    /// Ragged storage, or operand shapes that do not line up for the operation
    #[error("matrix length mismatch: expected {expected}, found {found}")]
    MatrixLenMismatch { expected: usize, found: usize },

    /// Complex division by a divisor with zero modulus
    #[error("division by zero")]
    DivisionByZero,
}

pub type Result<T> = std::result::Result<T, AlgebraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AlgebraError::VectorLenMismatch { left: 2, right: 3 };
        assert_eq!(err.to_string(), "vector length mismatch: 2 vs 3");

        let err = AlgebraError::MatrixLenMismatch {
            expected: 2,
            found: 3,
        };
        assert_eq!(err.to_string(), "matrix length mismatch: expected 2, found 3");

        assert_eq!(AlgebraError::DivisionByZero.to_string(), "division by zero");

        let err = AlgebraError::InvalidVector { len: 3 };
        assert_eq!(
            err.to_string(),
            "invalid vector data: 3 floats do not form whole complex elements"
        );

        let err = AlgebraError::InvalidMatrix("3 elements cannot fill a 2x2 matrix".into());
        assert_eq!(
            err.to_string(),
            "invalid matrix data: 3 elements cannot fill a 2x2 matrix"
        );
    }
}
