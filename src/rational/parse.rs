//! # Parsing
//!
//! Reading rational numbers from text of the form `["-"] digits ["/" digits]`. Absence
//! of the `/` separator implies a denominator of 1.
use std::str::FromStr;

use itertools::Itertools;
use num::BigInt;

use crate::error::{Error, Parse as ParseError, ParseResult};
use crate::Rational;

impl FromStr for Rational {
    type Err = Error;

    /// Read a rational number from text and normalize it.
    ///
    /// # Arguments
    ///
    /// * `text`: Either a single integer, or two integers separated by a single `/`.
    ///
    /// # Errors
    ///
    /// A `Parse` error when there is more than one separator or a component is not an
    /// integer, a `DivisionByZero` error when the denominator parses to zero.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.split('/').collect_vec().as_slice() {
            &[numerator] => {
                let numerator = parse_integer(numerator)
                    .map_err(|e| e.wrap(format!("Failed to read \"{}\" as a whole number.", text)))?;

                Ok(Self::from(numerator))
            },
            &[numerator, denominator] => {
                let numerator = parse_integer(numerator)
                    .map_err(|e| e.wrap("Failed to read the part before the \"/\" separator."))?;
                let denominator = parse_integer(denominator)
                    .map_err(|e| e.wrap("Failed to read the part after the \"/\" separator."))?;

                Ok(Self::new(numerator, denominator)?)
            },
            parts => Err(ParseError::new(format!(
                "Expected at most one \"/\" separator, found {} in \"{}\".", parts.len() - 1, text,
            )).into()),
        }
    }
}

fn parse_integer(text: &str) -> ParseResult<BigInt> {
    BigInt::from_str(text)
        .map_err(|error| ParseError::wrap_other(
            error,
            format!("Failed to parse \"{}\" as an integer.", text),
        ))
}
