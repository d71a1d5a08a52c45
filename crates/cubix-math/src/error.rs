//! Error types for root-finding operations.

use thiserror::Error;

/// A specialized Result type for root-finding operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during root-finding operations.
///
/// Failing to find a sign change inside an interval is not an error; it is
/// reported through [`BisectionOutcome::NoSignChange`](crate::solvers::BisectionOutcome).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Bracket endpoints are non-finite or not strictly ordered.
    #[error("Invalid bracket: [{a}, {b}] must be finite with {a} < {b}")]
    InvalidBracket {
        /// Lower bound of bracket.
        a: f64,
        /// Upper bound of bracket.
        b: f64,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates an invalid bracket error.
    #[must_use]
    pub fn invalid_bracket(a: f64, b: f64) -> Self {
        Self::InvalidBracket { a, b }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
