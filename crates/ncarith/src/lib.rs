//! ncarith: arbitrary-precision rational coefficients.
//! - `Rational` wraps a `BigInt` numerator/denominator pair
//! - Always kept in canonical form: denominator > 0, gcd(|num|, den) = 1
//! - Zero and one are distinguished values (`Rational::zero`, `Rational::one`)
//!
//! Division by zero is a caller error (spec: "forbidden upstream"); `inv`/`div`
//! assert rather than returning a `Result`, matching the total-arithmetic
//! contract of the polynomial layers built on top of this crate.

#![deny(warnings)]

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// An exact rational number, always in lowest terms with a positive denominator.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    num: BigInt,
    den: BigInt,
}

impl Rational {
    /// Construct a rational from an integer numerator/denominator pair, normalizing.
    ///
    /// Panics if `den` is zero.
    pub fn new<N: Into<BigInt>, D: Into<BigInt>>(num: N, den: D) -> Self {
        let num = num.into();
        let den = den.into();
        assert!(!den.is_zero(), "zero denominator");
        Self::normalize(num, den)
    }

    fn normalize(mut num: BigInt, mut den: BigInt) -> Self {
        if den.is_negative() {
            num = -num;
            den = -den;
        }
        if num.is_zero() {
            return Rational { num: BigInt::from(0), den: BigInt::from(1) };
        }
        let g = num.gcd(&den);
        if g != BigInt::from(1) {
            num /= &g;
            den /= &g;
        }
        Rational { num, den }
    }

    /// The rational `n/1` for an integer `n`.
    pub fn from_integer<N: Into<BigInt>>(n: N) -> Self {
        Rational { num: n.into(), den: BigInt::from(1) }
    }

    pub fn zero() -> Self {
        Rational { num: BigInt::from(0), den: BigInt::from(1) }
    }

    pub fn one() -> Self {
        Rational { num: BigInt::from(1), den: BigInt::from(1) }
    }

    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.num == BigInt::from(1) && self.den == BigInt::from(1)
    }

    pub fn numer(&self) -> &BigInt {
        &self.num
    }

    pub fn denom(&self) -> &BigInt {
        &self.den
    }

    /// Multiplicative inverse. Panics if `self` is zero.
    pub fn inv(&self) -> Self {
        assert!(!self.is_zero(), "division by zero rational");
        if self.num.is_negative() {
            Rational { num: -self.den.clone(), den: -self.num.clone() }
        } else {
            Rational { num: self.den.clone(), den: self.num.clone() }
        }
    }

    pub fn add(&self, other: &Self) -> Self {
        let num = &self.num * &other.den + &other.num * &self.den;
        let den = &self.den * &other.den;
        Self::normalize(num, den)
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    pub fn mul(&self, other: &Self) -> Self {
        Self::normalize(&self.num * &other.num, &self.den * &other.den)
    }

    /// Divide by `other`. Panics if `other` is zero.
    pub fn div(&self, other: &Self) -> Self {
        self.mul(&other.inv())
    }

    pub fn neg(&self) -> Self {
        Rational { num: -self.num.clone(), den: self.den.clone() }
    }

    /// Lossy conversion to `f64`, used only by numeric-tolerance tests.
    pub fn to_f64(&self) -> f64 {
        // BigInt has no infallible f64 conversion; go through decimal strings
        // only when the magnitude is too large for an exact fraction of i128s.
        match (i128_from_bigint(&self.num), i128_from_bigint(&self.den)) {
            (Some(n), Some(d)) => n as f64 / d as f64,
            _ => {
                let n: f64 = self.num.to_string().parse().unwrap_or(f64::NAN);
                let d: f64 = self.den.to_string().parse().unwrap_or(f64::NAN);
                n / d
            }
        }
    }
}

fn i128_from_bigint(b: &BigInt) -> Option<i128> {
    use num_traits::ToPrimitive;
    b.to_i128()
}

impl Add for &Rational {
    type Output = Rational;
    fn add(self, rhs: Self) -> Rational {
        Rational::add(self, rhs)
    }
}
impl Sub for &Rational {
    type Output = Rational;
    fn sub(self, rhs: Self) -> Rational {
        Rational::sub(self, rhs)
    }
}
impl Mul for &Rational {
    type Output = Rational;
    fn mul(self, rhs: Self) -> Rational {
        Rational::mul(self, rhs)
    }
}
impl Div for &Rational {
    type Output = Rational;
    fn div(self, rhs: Self) -> Rational {
        Rational::div(self, rhs)
    }
}
impl Neg for &Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        Rational::neg(self)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.num * &other.den).cmp(&(&other.num * &self.den))
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == BigInt::from(1) {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Rational::from_integer(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_sign_and_gcd() {
        let r = Rational::new(-4, -6);
        assert_eq!(r.numer(), &BigInt::from(2));
        assert_eq!(r.denom(), &BigInt::from(3));
    }

    #[test]
    fn zero_and_one_distinguished() {
        assert!(Rational::zero().is_zero());
        assert!(!Rational::zero().is_one());
        assert!(Rational::one().is_one());
        assert!(!Rational::one().is_zero());
    }

    #[test]
    fn add_sub_mul_div_roundtrip() {
        let a = Rational::new(1, 3);
        let b = Rational::new(1, 6);
        let sum = a.add(&b);
        assert_eq!(sum, Rational::new(1, 2));
        let diff = sum.sub(&b);
        assert_eq!(diff, a);
        let prod = a.mul(&b);
        assert_eq!(prod, Rational::new(1, 18));
        let quot = prod.div(&b);
        assert_eq!(quot, a);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn div_by_zero_panics() {
        let a = Rational::one();
        let _ = a.div(&Rational::zero());
    }

    #[test]
    fn ordering_matches_value() {
        assert!(Rational::new(1, 3) < Rational::new(1, 2));
        assert!(Rational::new(-1, 2) < Rational::zero());
    }

    #[test]
    fn to_f64_is_close() {
        let r = Rational::new(1, 4);
        assert!((r.to_f64() - 0.25).abs() < 1e-12);
    }
}
