//! CLI error types.

use cubix_math::MathError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Fewer than four coefficients were supplied.
    #[error("Missing coefficient {name}. Expected four numbers: a b c d.")]
    MissingCoefficient {
        /// Coefficient name.
        name: char,
    },

    /// A coefficient could not be parsed as a number.
    #[error("Invalid coefficient {name}: {token:?} is not a number.")]
    InvalidCoefficient {
        /// Coefficient name.
        name: char,
        /// The offending input token.
        token: String,
    },

    /// A coefficient parsed to infinity or NaN.
    #[error("Invalid coefficient {name}: {value} is not finite.")]
    NonFiniteCoefficient {
        /// Coefficient name.
        name: char,
        /// The parsed value.
        value: f64,
    },

    /// Root scan failed.
    #[error("Calculation error: {0}")]
    Math(#[from] MathError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
