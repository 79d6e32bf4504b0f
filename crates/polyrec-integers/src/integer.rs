//! Arbitrary precision integers.
//!
//! A thin wrapper around `dashu::IBig` with the number-theoretic helpers
//! the recurrence solver needs: binomial coefficients for building the
//! difference-operator expansion and divisor enumeration for the integer
//! root search.

use dashu::base::{Abs, Gcd, Signed as DashuSigned};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// An arbitrary precision integer.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Parses an integer in the given base.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid integer.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, dashu::base::error::ParseError> {
        IBig::from_str_radix(s, radix).map(Self)
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
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

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Greatest common divisor, always non-negative.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        Self(IBig::from(self.0.clone().gcd(other.0.clone())))
    }

    /// Least common multiple, always non-negative.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let g = self.gcd(other);
        Self(&self.0 / &g.0 * &other.0).abs()
    }

    /// Returns true if `divisor` divides `self` exactly.
    ///
    /// Zero divides only zero.
    #[must_use]
    pub fn is_divisible_by(&self, divisor: &Self) -> bool {
        if divisor.is_zero() {
            return self.is_zero();
        }
        (&self.0 % &divisor.0).is_zero()
    }

    /// Returns the inner `dashu::IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::IBig`.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }

    /// Converts to an i64, or `None` when out of range.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Computes self^exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }

    /// The binomial coefficient C(n, k).
    ///
    /// Returns zero when `k > n`.
    #[must_use]
    pub fn binomial(n: u32, k: u32) -> Self {
        if k > n {
            return Self::zero();
        }
        // C(n, k) = C(n, n - k); walk the shorter product.
        let k = k.min(n - k);
        let mut acc = IBig::ONE;
        for i in 0..k {
            // Every prefix product is itself a binomial, so the division is exact.
            acc = acc * IBig::from(n - i) / IBig::from(i + 1);
        }
        Self(acc)
    }

    /// The positive divisors of `|self|` in ascending order.
    ///
    /// Zero has no finite divisor set and yields an empty vector.
    /// Runs in O(sqrt|self|) trial divisions.
    #[must_use]
    pub fn positive_divisors(&self) -> Vec<Self> {
        let m = self.abs();
        if m.is_zero() {
            return Vec::new();
        }

        let mut low = Vec::new();
        let mut high = Vec::new();
        let mut j = IBig::ONE;
        while &j * &j <= m.0 {
            if (&m.0 % &j).is_zero() {
                let cofactor = &m.0 / &j;
                if cofactor != j {
                    high.push(Self(cofactor));
                }
                low.push(Self(j.clone()));
            }
            j += IBig::ONE;
        }

        low.extend(high.into_iter().rev());
        low
    }

    /// Every nonzero integer divisor of `self` in `[-|self|, |self|]`,
    /// negatives included, in ascending order.
    #[must_use]
    pub fn signed_divisors(&self) -> Vec<Self> {
        let positive = self.positive_divisors();
        let mut all: Vec<Self> = positive.iter().rev().map(|d| -d).collect();
        all.extend(positive);
        all
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Implements a binary operator for owned and borrowed operands.
macro_rules! integer_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for Integer {
            type Output = Integer;

            fn $method(self, rhs: Integer) -> Integer {
                Integer($trait::$method(self.0, rhs.0))
            }
        }

        impl $trait<&Integer> for Integer {
            type Output = Integer;

            fn $method(self, rhs: &Integer) -> Integer {
                Integer($trait::$method(self.0, &rhs.0))
            }
        }

        impl $trait for &Integer {
            type Output = Integer;

            fn $method(self, rhs: &Integer) -> Integer {
                Integer($trait::$method(&self.0, &rhs.0))
            }
        }
    };
}

integer_binop!(Add, add);
integer_binop!(Sub, sub);
integer_binop!(Mul, mul);
integer_binop!(Div, div);
integer_binop!(Rem, rem);

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer(-&self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u32> for Integer {
    fn from(value: u32) -> Self {
        Self(IBig::from(value))
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Vec<Integer> {
        values.iter().copied().map(Integer::new).collect()
    }

    #[test]
    fn test_basic_ops() {
        let a = Integer::new(10);
        let b = Integer::new(3);

        assert_eq!((&a + &b).to_i64(), Some(13));
        assert_eq!((&a - &b).to_i64(), Some(7));
        assert_eq!((&a * &b).to_i64(), Some(30));
        assert_eq!((&a / &b).to_i64(), Some(3));
        assert_eq!((a % b).to_i64(), Some(1));
    }

    #[test]
    fn test_gcd_lcm() {
        let a = Integer::new(-48);
        let b = Integer::new(18);
        assert_eq!(a.gcd(&b), Integer::new(6));
        assert_eq!(a.lcm(&b), Integer::new(144));
    }

    #[test]
    fn test_binomial() {
        assert_eq!(Integer::binomial(0, 0), Integer::one());
        assert_eq!(Integer::binomial(5, 2), Integer::new(10));
        assert_eq!(Integer::binomial(10, 7), Integer::new(120));
        assert_eq!(Integer::binomial(3, 4), Integer::zero());
        assert_eq!(
            Integer::binomial(60, 30).to_string(),
            "118264581564861424"
        );
    }

    #[test]
    fn test_divisors() {
        assert_eq!(Integer::new(12).positive_divisors(), ints(&[1, 2, 3, 4, 6, 12]));
        assert_eq!(Integer::new(-9).positive_divisors(), ints(&[1, 3, 9]));
        assert_eq!(Integer::new(1).positive_divisors(), ints(&[1]));
        assert!(Integer::zero().positive_divisors().is_empty());
    }

    #[test]
    fn test_signed_divisors() {
        assert_eq!(
            Integer::new(-6).signed_divisors(),
            ints(&[-6, -3, -2, -1, 1, 2, 3, 6])
        );
    }

    #[test]
    fn test_divisibility() {
        assert!(Integer::new(-12).is_divisible_by(&Integer::new(4)));
        assert!(!Integer::new(12).is_divisible_by(&Integer::new(5)));
        assert!(Integer::zero().is_divisible_by(&Integer::zero()));
        assert!(!Integer::new(3).is_divisible_by(&Integer::zero()));
    }

    #[test]
    fn test_large_numbers() {
        let a = Integer::from_str_radix("123456789012345678901234567890", 10).unwrap();
        let b = Integer::from_str_radix("987654321098765432109876543210", 10).unwrap();
        assert_eq!((a + b).to_string(), "1111111110111111111011111111100");
    }
}
