//! Algebraic structure traits.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A commutative ring with identity.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative and commutative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
pub trait Ring:
    Clone + Eq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Embeds an integer via repeated addition of `one()`.
    fn from_i64(n: i64) -> Self {
        let mut result = Self::zero();
        for _ in 0..n.unsigned_abs() {
            result = result + Self::one();
        }
        if n < 0 {
            -result
        } else {
            result
        }
    }

    /// Computes self^n by repeated squaring.
    fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}

/// A field: every non-zero element has a multiplicative inverse.
pub trait Field: Ring {
    /// The multiplicative inverse, or `None` for zero.
    fn inv(&self) -> Option<Self>;

    /// Divides by another element.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    fn field_div(&self, other: &Self) -> Self {
        self.clone() * other.inv().expect("division by zero")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Q;

    #[test]
    fn test_default_pow() {
        assert_eq!(Ring::pow(&Q::from_integer(3), 4), Q::from_integer(81));
        assert_eq!(Ring::pow(&Q::new(1, 2), 0), Q::one());
    }
}
