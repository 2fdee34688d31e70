//! # Exact rational arithmetic
//!
//! An immutable rational number type with an arbitrary precision numerator and
//! denominator. Every live value is in canonical form: the denominator is strictly
//! positive, the sign is carried by the numerator and the pair is in lowest terms, with
//! zero represented as `0/1`. Because of canonicity, the derived field-wise equality is
//! exactly value equality.
//!
//! Values are created through the normalizing constructor [`Rational::new`], parsed from
//! text in the form `["-"] digits ["/" digits]` with `str::parse`, and rendered with
//! `Display` as the shortest text that parses back to the same value.
//!
//! All operations are pure: operands are never mutated, every result is a fresh
//! canonical value. Failure is reported through return values, see the [`error`] module.
pub use crate::rational::Rational;
pub use crate::sign::Sign;

pub mod error;
mod rational;
mod sign;
