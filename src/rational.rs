//! Lazy exact rational number type
//!
//! A rational number backed by `BigInt` numerator and denominator that is
//! **never reduced automatically**. Reducing by the GCD on every arithmetic
//! step dominates the cost of exact Gram-Schmidt bookkeeping, so this type
//! defers the GCD to an explicit [`LazyRational::normalize`] call and keeps
//! the hot-path operators to plain big-integer multiplies and adds.
//!
//! Decision points that look at the *value* of a fraction (ordering,
//! rounding, sign) are exact regardless of normalization: they work by
//! cross-multiplication and account for denominators of either sign.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{Error, Result};

/// Exact fraction `numerator / denominator`, not kept in lowest terms.
///
/// Invariant: the denominator is non-zero. It may be negative; only
/// [`LazyRational::normalize`] and [`LazyRational::quo`] force it positive.
#[derive(Debug, Clone)]
pub struct LazyRational {
    pub numerator: BigInt,
    pub denominator: BigInt,
}

fn sgn(x: &BigInt) -> i32 {
    match x.sign() {
        Sign::Minus => -1,
        Sign::NoSign => 0,
        Sign::Plus => 1,
    }
}

impl LazyRational {
    /// Create a fraction from raw parts. No reduction is performed.
    pub fn new(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero(), "denominator must be non-zero");
        Self { numerator, denominator }
    }

    /// Create the fraction `n / 1`.
    pub fn from_int<T: Into<BigInt>>(n: T) -> Self {
        Self { numerator: n.into(), denominator: BigInt::one() }
    }

    pub fn zero() -> Self {
        Self::from_int(0)
    }

    pub fn one() -> Self {
        Self::from_int(1)
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Sign of the value: -1, 0 or +1. Exact for either denominator sign.
    pub fn sign(&self) -> i32 {
        sgn(&self.numerator) * sgn(&self.denominator)
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self { numerator: self.numerator.abs(), denominator: self.denominator.abs() }
    }

    /// Exact division `self / divisor`.
    ///
    /// Fails with [`Error::DivisionByZero`] when the divisor's numerator is
    /// zero. The resulting denominator is forced positive so that callers
    /// comparing the quotient do not have to track its sign.
    pub fn quo(&self, divisor: &Self) -> Result<Self> {
        if divisor.numerator.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let mut numerator = &self.numerator * &divisor.denominator;
        let mut denominator = &self.denominator * &divisor.numerator;
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }
        Ok(Self { numerator, denominator })
    }

    /// Reduce to lowest terms and force the denominator positive.
    ///
    /// A no-op on already-reduced fractions. This is the only operation that
    /// runs a big-integer GCD; call it sparingly.
    pub fn normalize(&mut self) {
        if self.numerator.is_zero() {
            self.denominator = BigInt::one();
            return;
        }
        let g = self.numerator.gcd(&self.denominator);
        if !g.is_one() {
            self.numerator = &self.numerator / &g;
            self.denominator = &self.denominator / &g;
        }
        if self.denominator.is_negative() {
            self.numerator = -&self.numerator;
            self.denominator = -&self.denominator;
        }
    }

    /// Round to the nearest integer, halves toward `+∞`.
    ///
    /// With the denominator made positive, take the floor quotient and
    /// remainder; the value rounds up exactly when `2·rem ≥ den`. This holds
    /// symmetrically for negative numerators: `7/2 → 4`, `-7/2 → -3`,
    /// `-1/2 → 0`.
    pub fn round_to_int(&self) -> BigInt {
        let mut numerator = self.numerator.clone();
        let mut denominator = self.denominator.clone();
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }
        let (quotient, remainder) = numerator.div_mod_floor(&denominator);
        if (&remainder + &remainder) >= denominator {
            quotient + BigInt::one()
        } else {
            quotient
        }
    }
}

impl From<i64> for LazyRational {
    fn from(n: i64) -> Self {
        Self::from_int(n)
    }
}

impl From<BigInt> for LazyRational {
    fn from(n: BigInt) -> Self {
        Self::from_int(n)
    }
}

impl Add for &LazyRational {
    type Output = LazyRational;

    fn add(self, other: Self) -> LazyRational {
        let numerator =
            &self.numerator * &other.denominator + &other.numerator * &self.denominator;
        let denominator = &self.denominator * &other.denominator;
        LazyRational { numerator, denominator }
    }
}

impl Sub for &LazyRational {
    type Output = LazyRational;

    fn sub(self, other: Self) -> LazyRational {
        let numerator =
            &self.numerator * &other.denominator - &other.numerator * &self.denominator;
        let denominator = &self.denominator * &other.denominator;
        LazyRational { numerator, denominator }
    }
}

impl Mul for &LazyRational {
    type Output = LazyRational;

    fn mul(self, other: Self) -> LazyRational {
        LazyRational {
            numerator: &self.numerator * &other.numerator,
            denominator: &self.denominator * &other.denominator,
        }
    }
}

impl Ord for LazyRational {
    /// Value comparison by cross-multiplication. When the two denominators
    /// carry opposite signs the cross-multiplied ordering flips.
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = &self.numerator * &other.denominator;
        let rhs = &other.numerator * &self.denominator;
        if sgn(&self.denominator) * sgn(&other.denominator) < 0 {
            rhs.cmp(&lhs)
        } else {
            lhs.cmp(&rhs)
        }
    }
}

impl PartialOrd for LazyRational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for LazyRational {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for LazyRational {}

impl fmt::Display for LazyRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator.is_one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rat(n: i64, d: i64) -> LazyRational {
        LazyRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn test_arithmetic_stays_unreduced() {
        let a = rat(1, 2);
        let b = rat(1, 6);
        let sum = &a + &b;
        // 1/2 + 1/6 = 8/12, kept as-is
        assert_eq!(sum.numerator, BigInt::from(8));
        assert_eq!(sum.denominator, BigInt::from(12));
        // value equality still sees 2/3
        assert_eq!(sum, rat(2, 3));
    }

    #[test]
    fn test_normalize() {
        let mut r = rat(8, -12);
        r.normalize();
        assert_eq!(r.numerator, BigInt::from(-2));
        assert_eq!(r.denominator, BigInt::from(3));

        let mut z = rat(0, -7);
        z.normalize();
        assert_eq!(z.numerator, BigInt::from(0));
        assert_eq!(z.denominator, BigInt::from(1));
    }

    #[test]
    fn test_cmp_with_negative_denominators() {
        // 1/-2 = -0.5 < 1/3
        assert!(rat(1, -2) < rat(1, 3));
        // -3/-2 = 1.5 > 4/3
        assert!(rat(-3, -2) > rat(4, 3));
        // 2/4 == 1/2 == -1/-2
        assert_eq!(rat(2, 4), rat(1, 2));
        assert_eq!(rat(-1, -2), rat(1, 2));
    }

    #[test]
    fn test_sign() {
        assert_eq!(rat(3, 5).sign(), 1);
        assert_eq!(rat(-3, 5).sign(), -1);
        assert_eq!(rat(3, -5).sign(), -1);
        assert_eq!(rat(-3, -5).sign(), 1);
        assert_eq!(rat(0, -5).sign(), 0);
    }

    #[test]
    fn test_quo() {
        let q = rat(1, 2).quo(&rat(3, 4)).unwrap();
        assert_eq!(q, rat(2, 3));
        // quotient denominator is always positive
        let q = rat(1, 2).quo(&rat(-3, 4)).unwrap();
        assert!(q.denominator.sign() == Sign::Plus);
        assert_eq!(q, rat(-2, 3));
    }

    #[test]
    fn test_quo_by_zero() {
        assert_eq!(rat(1, 2).quo(&rat(0, 5)), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_round_half_up_toward_positive_infinity() {
        assert_eq!(rat(7, 2).round_to_int(), BigInt::from(4));
        assert_eq!(rat(-7, 2).round_to_int(), BigInt::from(-3));
        assert_eq!(rat(-1, 2).round_to_int(), BigInt::from(0));
        assert_eq!(rat(7, -2).round_to_int(), BigInt::from(-3));
        assert_eq!(rat(1, 2).round_to_int(), BigInt::from(1));
        assert_eq!(rat(10, 4).round_to_int(), BigInt::from(3));
        assert_eq!(rat(-10, 4).round_to_int(), BigInt::from(-2));
        assert_eq!(rat(6, 3).round_to_int(), BigInt::from(2));
        assert_eq!(rat(-6, 3).round_to_int(), BigInt::from(-2));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", rat(3, 4)), "3/4");
        assert_eq!(format!("{}", LazyRational::from_int(7)), "7");
    }
}
