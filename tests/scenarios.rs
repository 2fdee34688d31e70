//! # End to end scenarios
//!
//! Exercises the public interface the way a caller would: literals through the `R!`
//! shorthand, text through `str::parse`, arithmetic through the operators.
use std::str::FromStr;

use num::BigInt;

use exact_ratio::error::Error;
use exact_ratio::{Rational, R};

#[test]
fn fractions_of_small_integers() {
    let half = R!(1, 2);
    let third = R!(1, 3);
    let two_thirds = R!(2, 3);

    assert_eq!(&half + &third, R!(5, 6));
    assert_eq!(&half - &third, R!(1, 6));
    assert_eq!(&half * &third, R!(1, 6));
    assert_eq!(half.checked_div(&third).unwrap(), R!(3, 2));
    assert_eq!(-&half, R!(-1, 2));

    assert!(half < two_thirds);
    assert!((third..=two_thirds).contains(&half));
}

#[test]
fn rendering() {
    assert_eq!(R!(2, 1).to_string(), "2");
    assert_eq!(R!(-2, 4).to_string(), "-1/2");
    assert_eq!(("1".parse::<Rational>().unwrap() + "1/2".parse::<Rational>().unwrap()).to_string(), "3/2");
    assert_eq!("2/4".parse::<Rational>().unwrap().to_string(), "1/2");
    assert_eq!("-2/4".parse::<Rational>().unwrap().to_string(), "-1/2");
    assert_eq!("117/1098".parse::<Rational>().unwrap().to_string(), "13/122");
}

#[test]
fn comparisons_of_parsed_values() {
    assert!("1/3".parse::<Rational>().unwrap() < "1/2".parse::<Rational>().unwrap());
}

#[test]
fn values_beyond_fixed_width_integers() {
    assert_eq!(R!(2_000_000_000_i64, 4_000_000_000_i64), R!(1, 2));

    let numerator = BigInt::from_str("912016490186296920119201192141970416029").unwrap();
    let denominator = BigInt::from_str("1824032980372593840238402384283940832058").unwrap();
    assert_eq!(Rational::new(numerator, denominator).unwrap(), R!(1, 2));

    let quotient = "912016490186296920119201192141970416029".parse::<Rational>().unwrap()
        .checked_div(&"1824032980372593840238402384283940832058".parse::<Rational>().unwrap())
        .unwrap();
    assert_eq!(quotient.to_string(), "1/2");
}

#[test]
fn failures_are_reported() {
    assert!(Rational::new(5, 0).is_err());

    match "3/0".parse::<Rational>() {
        Err(Error::DivisionByZero(_)) => (),
        other => panic!("expected a division by zero error, got {:?}", other),
    }
    match "1/2/3".parse::<Rational>() {
        Err(Error::Parse(_)) => (),
        other => panic!("expected a parse error, got {:?}", other),
    }
}
