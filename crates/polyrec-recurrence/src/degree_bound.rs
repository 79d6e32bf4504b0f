//! Degree bound for polynomial solutions.
//!
//! Rewriting the operator in the forward difference, `L = sum_j q_j Δ^j`,
//! and applying it to `y = c n^d + ...` gives a leading term of degree at
//! most `d + b` with `b = max_j (deg q_j - j)`. Its coefficient is
//! `c * alpha(d)` where
//!
//! ```text
//! alpha(x) = sum_{j : deg q_j - j = b} lc(q_j) * x(x-1)...(x-j+1)
//! ```
//!
//! is the indicial polynomial. A solution of degree `d` therefore either
//! has `d + b = deg f`, or `d` is a non-negative integer root of `alpha`,
//! or `L y` vanishes below degree zero, which needs `d <= -b - 1`.

use tracing::debug;

use polyrec_integers::Integer;
use polyrec_poly::{max_integer_root, DensePoly};
use polyrec_rings::rationals::Q;

use crate::config::SolverConfig;
use crate::error::RecurrenceError;
use crate::recurrence::Recurrence;

/// The full derivation of the degree bound, kept for inspection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DegreeBound {
    /// Difference-operator coefficients q_0..q_r.
    pub q: Vec<DensePoly<Q>>,
    /// `b = max_j (deg q_j - j)` over non-zero q_j.
    pub b: i64,
    /// The indicial polynomial.
    pub alpha: DensePoly<Q>,
    /// The largest integer root of `alpha`, when `alpha` is not constant
    /// and has one.
    pub max_root: Option<i64>,
    /// The bound d itself; negative means no polynomial solution exists.
    pub bound: i64,
}

impl DegreeBound {
    /// Derives the bound for a recurrence.
    ///
    /// # Errors
    ///
    /// - [`RecurrenceError::ZeroOperator`] if every p_i is zero.
    /// - [`RecurrenceError::DivisorSearchLimit`] if the root search would
    ///   exceed `config.divisor_search_limit`.
    /// - [`RecurrenceError::DegreeOverflow`] if the largest root does not
    ///   fit in an i64.
    pub fn compute(rec: &Recurrence, config: &SolverConfig) -> Result<Self, RecurrenceError> {
        let q = rec.difference_coeffs();

        // Zero q_j have no degree and take no part in the balance.
        let b = q
            .iter()
            .enumerate()
            .filter_map(|(j, qj)| qj.degree().map(|deg| to_i64(deg) - to_i64(j)))
            .max()
            .ok_or(RecurrenceError::ZeroOperator)?;

        let mut alpha = DensePoly::zero();
        for (j, qj) in q.iter().enumerate() {
            if qj.degree().is_some_and(|deg| to_i64(deg) - to_i64(j) == b) {
                let lc = qj.leading_coeff_checked()?;
                alpha = alpha.add(&DensePoly::falling_factorial(j).scale(lc));
            }
        }

        let deg_f = rec.forcing().degree().map(to_i64);
        let mut candidates = vec![-b - 1];
        candidates.extend(deg_f.map(|deg| deg - b));

        let max_root = if alpha.is_constant() {
            None
        } else {
            let root = max_integer_root(&alpha, config.divisor_search_limit.as_ref())?;
            root.map(|r| r.to_i64().ok_or(RecurrenceError::DegreeOverflow(r)))
                .transpose()?
        };
        candidates.extend(max_root);

        // candidates always holds -b - 1
        let bound = candidates.into_iter().max().unwrap_or(-b - 1);

        debug!(
            order = rec.order(),
            b,
            alpha = %alpha.display_in(rec.variable()),
            ?max_root,
            bound,
            "derived degree bound"
        );

        Ok(Self {
            q,
            b,
            alpha,
            max_root,
            bound,
        })
    }

    /// The bound as a degree, or `None` if it is negative.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        usize::try_from(self.bound).ok()
    }

    /// The bound as an arbitrary precision integer.
    #[must_use]
    pub fn bound_integer(&self) -> Integer {
        Integer::new(self.bound)
    }
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
