//! Integer roots of polynomials over Q.
//!
//! Clearing denominators turns a rational polynomial into an integer one
//! with the same roots. By the rational root theorem every integer root
//! of the result divides its constant term, so the candidates are the
//! signed divisors of that constant. A root at zero is split off first,
//! since zero has no finite divisor set.

use num_traits::Zero;
use polyrec_integers::{Integer, Rational};
use polyrec_rings::rationals::Q;
use polyrec_rings::traits::Ring;

use crate::dense::DensePoly;
use crate::error::PolyError;

/// The divisor bound m = c * (product of all coefficient denominators),
/// where c = p(0).
///
/// Every integer root of `p` divides `m`. Returns `None` when p(0) = 0,
/// because every integer divides zero.
#[must_use]
pub fn root_divisor_bound(p: &DensePoly<Q>) -> Option<Integer> {
    let c = p.constant_coeff();
    if c.is_zero() {
        return None;
    }

    let denominators = p
        .terms()
        .fold(Integer::new(1), |acc, (_, coeff)| acc * coeff.denominator());
    // c's own denominator is one of the factors, so this is an integer.
    let m = c.0 * Rational::from_integer(denominators);
    m.to_integer()
}

/// All integer roots of `p` in ascending order, without multiplicity.
///
/// # Errors
///
/// - [`PolyError::ZeroPolynomial`] if `p` is zero (every integer is a root).
/// - [`PolyError::SearchLimit`] if `limit` is given and the divisor bound
///   exceeds it in absolute value.
pub fn integer_roots(p: &DensePoly<Q>, limit: Option<&Integer>) -> Result<Vec<Integer>, PolyError> {
    let (zero_multiplicity, rest) = p.split_x_power()?;

    let mut roots = Vec::new();
    if let Some(m) = root_divisor_bound(&rest) {
        if let Some(limit) = limit {
            if m.abs() > *limit {
                return Err(PolyError::SearchLimit {
                    bound: m.abs(),
                    limit: limit.clone(),
                });
            }
        }
        roots.extend(
            m.signed_divisors()
                .into_iter()
                .filter(|j| rest.eval(&Q::from_big(j.clone())).is_zero()),
        );
    }

    if zero_multiplicity > 0 {
        let at = roots.partition_point(|r| r.is_negative());
        roots.insert(at, Integer::zero());
    }

    Ok(roots)
}

/// The largest integer root of `p`, if any.
///
/// # Errors
///
/// Same as [`integer_roots`].
pub fn max_integer_root(p: &DensePoly<Q>, limit: Option<&Integer>) -> Result<Option<Integer>, PolyError> {
    Ok(integer_roots(p, limit)?.pop())
}
