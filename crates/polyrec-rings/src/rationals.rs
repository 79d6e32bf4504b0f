//! The field of rational numbers Q.

use crate::traits::{Field, Ring};
use polyrec_integers::{Integer, Rational};

/// The field of rational numbers.
///
/// Wraps `polyrec_integers::Rational` and implements the algebraic traits.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Q(pub Rational);

impl Q {
    /// Creates a rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        Self(Rational::from_i64(num, den))
    }

    /// Creates a rational from an i64.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(Rational::from(n))
    }

    /// Creates a rational from an arbitrary precision integer.
    #[must_use]
    pub fn from_big(n: Integer) -> Self {
        Self(Rational::from_integer(n))
    }

    /// Returns the numerator (carries the sign).
    #[must_use]
    pub fn numerator(&self) -> Integer {
        self.0.numerator()
    }

    /// Returns the positive denominator.
    #[must_use]
    pub fn denominator(&self) -> Integer {
        self.0.denominator()
    }

    /// Converts to an integer when the denominator is 1.
    #[must_use]
    pub fn to_integer(&self) -> Option<Integer> {
        self.0.to_integer()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Returns the inner Rational.
    #[must_use]
    pub fn into_inner(self) -> Rational {
        self.0
    }

    /// Returns a reference to the inner Rational.
    #[must_use]
    pub fn as_inner(&self) -> &Rational {
        &self.0
    }
}

impl Ring for Q {
    fn zero() -> Self {
        Self(Rational::from(0))
    }

    fn one() -> Self {
        Self(Rational::from(1))
    }

    fn is_zero(&self) -> bool {
        use num_traits::Zero;
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        use num_traits::One;
        self.0.is_one()
    }

    fn from_i64(n: i64) -> Self {
        Self::from_integer(n)
    }

    fn pow(&self, n: u32) -> Self {
        Self(self.0.pow(n))
    }
}

impl Field for Q {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self(self.0.recip()))
        }
    }

    fn field_div(&self, other: &Self) -> Self {
        assert!(!other.is_zero(), "division by zero");
        Self(&self.0 / &other.0)
    }
}

impl std::ops::Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl std::ops::Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<Integer> for Q {
    fn from(value: Integer) -> Self {
        Self::from_big(value)
    }
}

impl From<Rational> for Q {
    fn from(value: Rational) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Q {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
