//! # Errors
//!
//! Failures are surfaced to the caller immediately through return values; nothing is
//! defaulted, retried or panicked on in library code.
use std::error;
use std::fmt;

/// A zero denominator or divisor was requested.
///
/// Returned by [`crate::Rational::new`] when the denominator is zero and by
/// [`crate::Rational::checked_div`] when the right-hand operand is zero.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DivisionByZero;

impl fmt::Display for DivisionByZero {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Denominator can not be zero.")
    }
}

impl error::Error for DivisionByZero {}

/// Text did not match the grammar `["-"] digits ["/" digits]`.
///
/// Collects a trace of descriptions while it propagates upwards, such that the longer
/// messages wrap the more specific ones.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Parse {
    /// Descriptions, from the innermost cause to the outermost context.
    trace: Vec<String>,
}

impl Parse {
    pub(crate) fn new(description: impl Into<String>) -> Self {
        Self { trace: vec![description.into()], }
    }

    /// Wrap the error with a higher level description of what went wrong.
    pub(crate) fn wrap(mut self, description: impl Into<String>) -> Self {
        self.trace.push(description.into());
        self
    }

    /// Wrap an error of a different type, keeping only its message as the cause.
    pub(crate) fn wrap_other(error: impl error::Error, description: impl Into<String>) -> Self {
        Self { trace: vec![error.to_string(), description.into()], }
    }
}

impl fmt::Display for Parse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Could not parse a rational number.")?;
        for (depth, description) in self.trace.iter().rev().enumerate() {
            writeln!(f, "{}{}", "\t".repeat(depth + 1), description)?;
        }

        Ok(())
    }
}

impl error::Error for Parse {}

/// Result of reading a piece of text.
pub type ParseResult<T> = Result<T, Parse>;

/// Any failure this crate can produce.
///
/// Used where both kinds can occur, such as parsing: text like `"1/0"` is well formed
/// but requests a zero denominator.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The input text did not match the grammar.
    Parse(Parse),
    /// A zero denominator or divisor was requested.
    DivisionByZero(DivisionByZero),
}

impl From<Parse> for Error {
    fn from(error: Parse) -> Self {
        Self::Parse(error)
    }
}

impl From<DivisionByZero> for Error {
    fn from(error: DivisionByZero) -> Self {
        Self::DivisionByZero(error)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Parse(error) => error.fmt(f),
            Self::DivisionByZero(error) => error.fmt(f),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Parse(error) => Some(error),
            Self::DivisionByZero(error) => Some(error),
        }
    }
}
