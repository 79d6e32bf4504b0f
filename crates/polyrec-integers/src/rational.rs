//! Arbitrary precision rational numbers.
//!
//! Every value the recurrence solver touches lives here: polynomial
//! coefficients, matrix entries and free-parameter assignments.

use dashu::base::{Abs, Inverse, Signed as DashuSigned, UnsignedAbs};
use dashu::integer::IBig;
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::Integer;

/// An arbitrary precision rational number.
///
/// Always stored in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rational(RBig);

impl Rational {
    /// Creates a rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: Integer, denominator: Integer) -> Self {
        assert!(!denominator.is_zero(), "denominator cannot be zero");
        let negate = denominator.is_negative();
        let r = RBig::from_parts(numerator.into_inner(), denominator.into_inner().unsigned_abs());
        if negate {
            Self(-r)
        } else {
            Self(r)
        }
    }

    /// Creates a rational from an integer.
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self(RBig::from(n.into_inner()))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Returns the numerator (carries the sign).
    #[must_use]
    pub fn numerator(&self) -> Integer {
        Integer::from(self.0.numerator().clone())
    }

    /// Returns the denominator (always positive).
    #[must_use]
    pub fn denominator(&self) -> Integer {
        Integer::from(IBig::from(self.0.denominator().clone()))
    }

    /// Returns true if the denominator is 1.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Converts to an integer when the denominator is 1.
    #[must_use]
    pub fn to_integer(&self) -> Option<Integer> {
        self.is_integer().then(|| self.numerator())
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns 1/x.
    ///
    /// # Panics
    ///
    /// Panics if the rational is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        assert!(!self.is_zero(), "cannot take reciprocal of zero");
        Self(self.0.clone().inv())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns a reference to the inner `dashu::RBig`.
    #[must_use]
    pub fn as_inner(&self) -> &RBig {
        &self.0
    }

    /// Computes self^exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

/// Implements a binary operator for owned and borrowed operands.
macro_rules! rational_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                Rational($trait::$method(self.0, rhs.0))
            }
        }

        impl $trait<&Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                Rational($trait::$method(self.0, &rhs.0))
            }
        }

        impl $trait for &Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                Rational($trait::$method(&self.0, &rhs.0))
            }
        }
    };
}

rational_binop!(Add, add);
rational_binop!(Sub, sub);
rational_binop!(Mul, mul);
rational_binop!(Div, div);

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational(-&self.0)
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(Integer::from(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_ops() {
        let a = Rational::from_i64(1, 2);
        let b = Rational::from_i64(1, 3);

        // 1/2 + 1/3 = 5/6
        assert_eq!(&a + &b, Rational::from_i64(5, 6));
        // 1/2 - 1/3 = 1/6
        assert_eq!(&a - &b, Rational::from_i64(1, 6));
        // (1/2) / (1/3) = 3/2
        assert_eq!(a / b, Rational::from_i64(3, 2));
    }

    #[test]
    fn test_reduction_and_sign() {
        let r = Rational::from_i64(4, -6);
        assert_eq!(r.numerator(), Integer::new(-2));
        assert_eq!(r.denominator(), Integer::new(3));
        assert!(r.is_negative());
    }

    #[test]
    fn test_integer_detection() {
        assert_eq!(Rational::from_i64(6, 3).to_integer(), Some(Integer::new(2)));
        assert_eq!(Rational::from_i64(1, 3).to_integer(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Rational::from_i64(3, 1).to_string(), "3");
        assert_eq!(Rational::from_i64(-2, 3).to_string(), "-2/3");
    }
}
