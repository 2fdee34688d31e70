//! # Ordering
//!
//! A total order by cross multiplication: `n1/d1 <= n2/d2` exactly when
//! `n1 * d2 <= n2 * d1`. Both denominators are strictly positive by the canonical form
//! invariant, so the inequality never flips.
use std::cmp::Ordering;

use crate::Rational;

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.signum().cmp(&other.signum()) {
            // Equal signs, the products must be computed.
            Ordering::Equal => {
                let left = &self.numerator * &other.denominator;
                let right = &other.numerator * &self.denominator;

                left.cmp(&right)
            },
            ordering => ordering,
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
