//! Crate error type.
//!
//! Domain errors (log of a negative, division by zero, ...) never show up here:
//! the guarded operators absorb them. What remains are shape problems detected
//! by the validated entry points and bad configuration overrides.

use thiserror::Error;

use crate::domain::Formula;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Fewer input columns than the formula's highest variable index needs.
    #[error("{formula} needs {required} input variables, got {actual}")]
    MissingVariables {
        formula: Formula,
        required: usize,
        actual: usize,
    },

    /// A column (or the target) does not have the same length as column 0.
    #[error("{what} has length {actual}, expected {expected}")]
    LengthMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    /// Scoring needs at least one sample.
    #[error("no samples to score")]
    Empty,

    /// An environment override could not be parsed or is out of range.
    #[error("invalid {key}={value:?}: {reason}")]
    InvalidConfig {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

pub type EvalResult<T> = Result<T, EvalError>;
