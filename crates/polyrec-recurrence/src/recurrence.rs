//! Linear recurrences with polynomial coefficients.

use std::fmt;

use polyrec_integers::Integer;
use polyrec_poly::{DensePoly, Variable};
use polyrec_rings::rationals::Q;

use crate::error::RecurrenceError;

/// The recurrence `sum_{i=0}^{r} p_i(n) y(n+i) = f(n)`.
///
/// `coeffs[i]` multiplies `y(n+i)`; the order `r` is `coeffs.len() - 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recurrence {
    coeffs: Vec<DensePoly<Q>>,
    forcing: DensePoly<Q>,
    var: Variable,
}

impl Recurrence {
    /// Creates a recurrence in the default variable `n`.
    ///
    /// # Errors
    ///
    /// Returns [`RecurrenceError::EmptyOperator`] if `coeffs` is empty.
    pub fn new(coeffs: Vec<DensePoly<Q>>, forcing: DensePoly<Q>) -> Result<Self, RecurrenceError> {
        if coeffs.is_empty() {
            return Err(RecurrenceError::EmptyOperator);
        }
        Ok(Self {
            coeffs,
            forcing,
            var: Variable::default(),
        })
    }

    /// Creates a homogeneous recurrence (f = 0).
    ///
    /// # Errors
    ///
    /// Returns [`RecurrenceError::EmptyOperator`] if `coeffs` is empty.
    pub fn homogeneous(coeffs: Vec<DensePoly<Q>>) -> Result<Self, RecurrenceError> {
        Self::new(coeffs, DensePoly::zero())
    }

    /// Names the recurrence variable.
    #[must_use]
    pub fn with_variable(mut self, var: Variable) -> Self {
        self.var = var;
        self
    }

    /// The order r.
    #[must_use]
    pub fn order(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// The operator coefficients p_0..p_r.
    #[must_use]
    pub fn coeffs(&self) -> &[DensePoly<Q>] {
        &self.coeffs
    }

    /// The forcing polynomial f.
    #[must_use]
    pub fn forcing(&self) -> &DensePoly<Q> {
        &self.forcing
    }

    /// The recurrence variable.
    #[must_use]
    pub fn variable(&self) -> &Variable {
        &self.var
    }

    /// Returns true if f = 0.
    #[must_use]
    pub fn is_homogeneous(&self) -> bool {
        self.forcing.is_zero()
    }

    /// Returns true if every p_i is zero.
    #[must_use]
    pub fn is_zero_operator(&self) -> bool {
        self.coeffs.iter().all(DensePoly::is_zero)
    }

    /// Applies the operator: `L y = sum_i p_i(n) y(n+i)`.
    #[must_use]
    pub fn apply(&self, y: &DensePoly<Q>) -> DensePoly<Q> {
        self.coeffs
            .iter()
            .enumerate()
            .fold(DensePoly::zero(), |acc, (i, p)| acc.add(&p.mul(&y.shift(i))))
    }

    /// `L y - f`, which vanishes exactly when `y` is a solution.
    #[must_use]
    pub fn residual(&self, y: &DensePoly<Q>) -> DensePoly<Q> {
        self.apply(y).sub(&self.forcing)
    }

    /// Returns true if `y` solves the recurrence.
    #[must_use]
    pub fn is_solution(&self, y: &DensePoly<Q>) -> bool {
        self.residual(y).is_zero()
    }

    /// The coefficients q_0..q_r of the operator in the forward difference
    /// Δ = N - 1: `q_j = sum_{i=j}^{r} C(i, j) p_i`, so that
    /// `L = sum_j q_j Δ^j`.
    #[must_use]
    pub fn difference_coeffs(&self) -> Vec<DensePoly<Q>> {
        let r = self.order();
        (0..=r)
            .map(|j| {
                (j..=r).fold(DensePoly::zero(), |acc, i| {
                    let c = Q::from_big(Integer::binomial(order_index(i), order_index(j)));
                    acc.add(&self.coeffs[i].scale(&c))
                })
            })
            .collect()
    }
}

/// Operator orders are tiny; an order past u32 cannot be materialized anyway.
fn order_index(i: usize) -> u32 {
    u32::try_from(i).unwrap_or(u32::MAX)
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let var = &self.var;
        let mut first = true;
        for (i, p) in self.coeffs.iter().enumerate() {
            if p.is_zero() {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;

            let shifted = match i {
                0 => format!("y({var})"),
                _ => format!("y({var}+{i})"),
            };
            if p.is_constant() && p.constant_coeff() == Q::from_integer(1) {
                write!(f, "{shifted}")?;
            } else {
                write!(f, "({})*{shifted}", p.display_in(var))?;
            }
        }
        if first {
            write!(f, "0")?;
        }
        write!(f, " = {}", self.forcing.display_in(var))
    }
}
