//! # Rational numbers
//!
//! An exact fraction of two arbitrary precision integers, kept in canonical form.
use std::fmt;

use num::{BigInt, Integer, One, Signed, Zero};

use crate::error::DivisionByZero;
use crate::sign::Sign;

mod cmp;
mod macros;
mod ops;
mod parse;

/// An exact rational number of arbitrary precision.
///
/// Every instance satisfies three invariants:
///
/// * the denominator is not zero,
/// * the denominator is strictly positive; a sign, if any, is carried by the numerator,
/// * the pair is in lowest terms, with zero represented as `0/1`.
///
/// These invariants define a canonical form, so the derived field-wise equality is value
/// equality and the derived `Hash` is consistent with it. Instances are immutable;
/// construction goes through the normalizing [`Rational::new`] and every operation
/// returns a freshly normalized value.
///
/// Range membership comes with the total order: `(low..=high).contains(&x)` tests
/// whether `low <= x <= high`. A range with `low > high` is empty, so membership in it
/// is `false` for every value.
#[derive(Eq, PartialEq, Hash, Clone, Debug)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt,
}

impl Rational {
    /// Create a new rational number from a numerator and denominator.
    ///
    /// The value is brought into canonical form: reduced by the greatest common divisor
    /// of the two integers, with the denominator made strictly positive. Requesting
    /// `0/d` for any nonzero `d` yields the canonical zero `0/1`.
    ///
    /// # Arguments
    ///
    /// * `numerator`: Any signed integer, or anything convertible into one.
    /// * `denominator`: Any signed integer, or anything convertible into one.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when the denominator is zero.
    pub fn new<N: Into<BigInt>, D: Into<BigInt>>(
        numerator: N,
        denominator: D,
    ) -> Result<Self, DivisionByZero> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(DivisionByZero);
        }

        Ok(Self::normalized(numerator.into(), denominator))
    }

    /// Bring a pair with a known nonzero denominator into canonical form.
    ///
    /// The greatest common divisor of a zero numerator and the denominator is the
    /// denominator itself, so `0/d` reduces to `0/1` without a separate case.
    pub(crate) fn normalized(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero());

        let gcd = numerator.gcd(&denominator);
        let (numerator, denominator) = (numerator / &gcd, denominator / &gcd);

        if denominator.is_negative() {
            Self { numerator: -numerator, denominator: -denominator, }
        } else {
            Self { numerator, denominator, }
        }
    }

    /// Numerator of the canonical representation. Carries the sign of the value.
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// Denominator of the canonical representation. Strictly positive.
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Whether the value is negative, zero or positive.
    pub fn signum(&self) -> Sign {
        match self.numerator.sign() {
            num::bigint::Sign::Minus => Sign::Negative,
            num::bigint::Sign::NoSign => Sign::Zero,
            num::bigint::Sign::Plus => Sign::Positive,
        }
    }
}

macro_rules! from_integer {
    ($t:ident) => {
        impl From<$t> for Rational {
            fn from(value: $t) -> Self {
                // An integer over 1 is already canonical.
                Self {
                    numerator: BigInt::from(value),
                    denominator: BigInt::one(),
                }
            }
        }
    }
}

from_integer!(i8);
from_integer!(u8);
from_integer!(i16);
from_integer!(u16);
from_integer!(i32);
from_integer!(u32);
from_integer!(i64);
from_integer!(u64);
from_integer!(i128);
from_integer!(u128);

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Self {
            numerator: value,
            denominator: BigInt::one(),
        }
    }
}

impl fmt::Display for Rational {
    /// The minimal text form: the denominator is omitted when it is 1.
    ///
    /// This is the unique shortest rendering that parses back to an equal value.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.denominator.is_one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}
