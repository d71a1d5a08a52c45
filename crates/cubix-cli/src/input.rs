//! Coefficient input parsing.

use std::io::Read;

use cubix_math::polynomial::Cubic;

use crate::error::{CliError, CliResult};

const NAMES: [char; 4] = ['a', 'b', 'c', 'd'];

/// Reads the coefficients from a reader until EOF.
pub fn read_coefficients<R: Read>(mut reader: R) -> CliResult<Cubic> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_coefficients(&input)
}

/// Parses four whitespace-separated numbers `a b c d`.
///
/// Tokens after the fourth are ignored.
pub fn parse_coefficients(input: &str) -> CliResult<Cubic> {
    let mut tokens = input.split_whitespace();
    let mut coefficients = [0.0; 4];

    for (slot, name) in coefficients.iter_mut().zip(NAMES) {
        let token = tokens
            .next()
            .ok_or(CliError::MissingCoefficient { name })?;

        let value: f64 = token.parse().map_err(|_| CliError::InvalidCoefficient {
            name,
            token: token.to_string(),
        })?;

        if !value.is_finite() {
            return Err(CliError::NonFiniteCoefficient { name, value });
        }

        *slot = value;
    }

    Ok(Cubic::from_coefficients(coefficients))
}
