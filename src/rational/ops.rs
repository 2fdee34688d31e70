//! # Arithmetic
//!
//! Operations combine two canonical values and normalize the result. Operands are never
//! mutated; the assign variants replace the receiver with a fresh value.
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num::{BigInt, One, Zero};

use crate::error::DivisionByZero;
use crate::Rational;

impl Rational {
    /// Divide by another rational number.
    ///
    /// The counterpart of the `/` operator that surfaces a zero divisor through the
    /// return value instead of panicking.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when `rhs` is zero: the denominator of the result would be the
    /// numerator of `rhs`.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, DivisionByZero> {
        if rhs.numerator.is_zero() {
            return Err(DivisionByZero);
        }

        Ok(Self::normalized(
            &self.numerator * &rhs.denominator,
            &self.denominator * &rhs.numerator,
        ))
    }
}

/// Forward an operator on two borrowed values to the owned and assigning variants.
macro_rules! forward_binary_op {
    ($op_trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl $op_trait for Rational {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                $op_trait::$method(&self, &rhs)
            }
        }

        impl $op_trait<&Self> for Rational {
            type Output = Self;

            fn $method(self, rhs: &Self) -> Self::Output {
                $op_trait::$method(&self, rhs)
            }
        }

        impl $op_trait<Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Self::Output {
                $op_trait::$method(self, &rhs)
            }
        }

        impl $assign_trait for Rational {
            fn $assign_method(&mut self, rhs: Self) {
                *self = $op_trait::$method(&*self, &rhs);
            }
        }

        impl $assign_trait<&Self> for Rational {
            fn $assign_method(&mut self, rhs: &Self) {
                *self = $op_trait::$method(&*self, rhs);
            }
        }
    }
}

impl Add<&Rational> for &Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Self::Output {
        Rational::normalized(
            &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }
}
forward_binary_op!(Add, add, AddAssign, add_assign);

impl Sub<&Rational> for &Rational {
    type Output = Rational;

    fn sub(self, rhs: &Rational) -> Self::Output {
        Rational::normalized(
            &self.numerator * &rhs.denominator - &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }
}
forward_binary_op!(Sub, sub, SubAssign, sub_assign);

impl Mul<&Rational> for &Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Self::Output {
        Rational::normalized(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}
forward_binary_op!(Mul, mul, MulAssign, mul_assign);

impl Div<&Rational> for &Rational {
    type Output = Rational;

    /// # Panics
    ///
    /// When the divisor is zero. Use [`Rational::checked_div`] to handle that case
    /// through a return value.
    fn div(self, rhs: &Rational) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}
forward_binary_op!(Div, div, DivAssign, div_assign);

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        // Negating the numerator preserves canonical form.
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self {
            numerator: BigInt::zero(),
            denominator: BigInt::one(),
        }
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self {
            numerator: BigInt::one(),
            denominator: BigInt::one(),
        }
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), Mul::mul)
    }
}
