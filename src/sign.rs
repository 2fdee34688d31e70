//! # Signs
//!
//! The sign of a rational number as a value of its own.
use std::ops::{Mul, Neg};

/// Sign of a rational number.
///
/// A rational can be zero, so this type has a `Zero` variant; a dedicated type rather
/// than an integer-valued signum keeps match expressions exhaustive. The variant order
/// makes the derived `Ord` agree with the order of the values the signs are taken from.
#[derive(Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Debug)]
pub enum Sign {
    /// `x < 0`
    Negative,
    /// `x == 0`
    Zero,
    /// `x > 0`
    Positive,
}

impl Mul for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (Sign::Positive, Sign::Positive) | (Sign::Negative, Sign::Negative) => Sign::Positive,
            (Sign::Positive, Sign::Negative) | (Sign::Negative, Sign::Positive) => Sign::Negative,
        }
    }
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Zero => Sign::Zero,
            Sign::Negative => Sign::Positive,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::Sign;

    #[test]
    fn order() {
        assert!(Sign::Negative < Sign::Zero);
        assert!(Sign::Zero < Sign::Positive);
        assert!(Sign::Negative < Sign::Positive);
    }

    #[test]
    fn multiply() {
        assert_eq!(Sign::Positive * Sign::Positive, Sign::Positive);
        assert_eq!(Sign::Negative * Sign::Negative, Sign::Positive);
        assert_eq!(Sign::Positive * Sign::Negative, Sign::Negative);
        assert_eq!(Sign::Zero * Sign::Negative, Sign::Zero);
        assert_eq!(Sign::Positive * Sign::Zero, Sign::Zero);
    }

    #[test]
    fn negate() {
        assert_eq!(-Sign::Positive, Sign::Negative);
        assert_eq!(-Sign::Negative, Sign::Positive);
        assert_eq!(-Sign::Zero, Sign::Zero);
    }
}
