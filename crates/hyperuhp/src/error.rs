//! Errors produced by constructors and fallible operations.

use thiserror::Error;

/// Result type returned by fallible operations in this crate.
pub type UhpResult<T> = Result<T, UhpError>;

/// Error produced by an operation on complex numbers, Möbius
/// transformations, or upper half-plane geometry.
///
/// All of these are deterministic, so retrying an operation that failed will
/// fail again unless the input or the tolerance changes.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum UhpError {
    /// Malformed input to a constructor
    ///
    /// Examples include a complex number with exactly one infinite component,
    /// a point with negative imaginary part, or a non-positive tolerance.
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// Division by a complex number that is approximately zero
    #[error("division by zero")]
    DivisionByZero,
    /// Inversion of a transformation whose determinant is approximately zero
    #[error("transformation is not invertible")]
    NonInvertible,
    /// Coincident or otherwise degenerate input where distinct values are
    /// required
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
    /// Closed-form result that failed its own postcondition
    ///
    /// This indicates a mismatch between the tolerance and the numerical
    /// error of a formula, not bad input from the caller.
    #[error("internal inconsistency: {0}")]
    InternalInconsistency(String),
}

impl UhpError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }
    pub(crate) fn degenerate(msg: impl Into<String>) -> Self {
        Self::DegenerateInput(msg.into())
    }
    pub(crate) fn inconsistent(msg: impl Into<String>) -> Self {
        Self::InternalInconsistency(msg.into())
    }
}
