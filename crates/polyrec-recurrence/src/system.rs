//! The method of undetermined coefficients.
//!
//! A candidate `y = a_0 + a_1 n + ... + a_d n^d` is substituted into the
//! recurrence. Because the operator is linear, `L y = sum_k a_k L(n^k)`,
//! so the coefficient of each power of `n` in `L y - f` is an affine form
//! in the unknowns. Setting all of them to zero gives the linear system.

use std::fmt;

use tracing::debug;

use polyrec_linalg::{AffineSolution, DenseMatrix};
use polyrec_poly::DensePoly;
use polyrec_rings::rationals::Q;
use polyrec_rings::traits::Ring;

use crate::recurrence::Recurrence;

/// The generic polynomial `sum_{k=0}^{d} a_k n^k` with unknown slots
/// `a_0..a_d`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UndeterminedPoly {
    degree: usize,
}

impl UndeterminedPoly {
    /// The generic polynomial of the given degree.
    #[must_use]
    pub fn new(degree: usize) -> Self {
        Self { degree }
    }

    /// The degree d.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// The number of unknowns, d + 1.
    #[must_use]
    pub fn num_unknowns(&self) -> usize {
        self.degree + 1
    }

    /// The display name of unknown `k`.
    #[must_use]
    pub fn name(k: usize) -> String {
        format!("a{k}")
    }

    /// Fills the unknowns with concrete values.
    ///
    /// # Panics
    ///
    /// Panics if `values` does not have one entry per unknown.
    #[must_use]
    pub fn substitute(&self, values: &[Q]) -> DensePoly<Q> {
        assert_eq!(values.len(), self.num_unknowns(), "one value per unknown");
        DensePoly::new(values.to_vec())
    }
}

/// `sum_k coeffs[k] * a_k + constant`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AffineForm {
    /// Coefficient of each unknown.
    pub coeffs: Vec<Q>,
    /// The part free of unknowns.
    pub constant: Q,
}

impl AffineForm {
    /// The constant coefficient c.
    #[must_use]
    pub fn constant_coeff(&self) -> &Q {
        &self.constant
    }

    /// The form with its constant removed.
    #[must_use]
    pub fn variable_part(&self) -> Self {
        Self {
            coeffs: self.coeffs.clone(),
            constant: Q::zero(),
        }
    }

    /// Returns true if every coefficient and the constant vanish.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.constant.is_zero() && self.coeffs.iter().all(Q::is_zero)
    }

    /// Evaluates the form at concrete unknowns.
    ///
    /// # Panics
    ///
    /// Panics if `values` does not have one entry per unknown.
    #[must_use]
    pub fn eval(&self, values: &[Q]) -> Q {
        assert_eq!(values.len(), self.coeffs.len(), "one value per unknown");
        self.coeffs
            .iter()
            .zip(values)
            .fold(self.constant.clone(), |acc, (c, v)| acc + c.clone() * v.clone())
    }

    /// The equation `variable part == -constant`, which holds exactly when
    /// the form vanishes.
    #[must_use]
    pub fn to_equation(&self) -> LinearEquation {
        LinearEquation {
            lhs: self.coeffs.clone(),
            rhs: -self.constant.clone(),
        }
    }
}

/// `sum_k lhs[k] * a_k = rhs`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinearEquation {
    /// Coefficient of each unknown.
    pub lhs: Vec<Q>,
    /// The right-hand side.
    pub rhs: Q,
}

impl LinearEquation {
    /// Returns true if the equation reads `0 = 0`.
    #[must_use]
    pub fn is_trivial(&self) -> bool {
        self.rhs.is_zero() && self.lhs.iter().all(Q::is_zero)
    }

    /// Returns true if concrete unknowns satisfy the equation.
    #[must_use]
    pub fn is_satisfied_by(&self, values: &[Q]) -> bool {
        let lhs = self
            .lhs
            .iter()
            .zip(values)
            .fold(Q::zero(), |acc, (c, v)| acc + c.clone() * v.clone());
        lhs == self.rhs
    }
}

impl fmt::Display for LinearEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (k, c) in self.lhs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            let name = UndeterminedPoly::name(k);
            let (negative, magnitude) = if c.is_negative() { (true, c.abs()) } else { (false, c.clone()) };
            let term = if magnitude.is_one() {
                name
            } else {
                format!("{magnitude}*{name}")
            };
            match (first, negative) {
                (true, true) => write!(f, "-{term}")?,
                (true, false) => write!(f, "{term}")?,
                (false, true) => write!(f, " - {term}")?,
                (false, false) => write!(f, " + {term}")?,
            }
            first = false;
        }
        if first {
            write!(f, "0")?;
        }
        write!(f, " = {}", self.rhs)
    }
}

/// The linear system in `a_0..a_d` whose solutions are exactly the
/// polynomial solutions of degree at most d.
///
/// Row `e` is the coefficient of `n^e`; column `k` is the unknown `a_k`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinearSystem {
    unknowns: UndeterminedPoly,
    forms: Vec<AffineForm>,
    matrix: DenseMatrix<Q>,
    rhs: Vec<Q>,
}

impl LinearSystem {
    /// Substitutes the generic polynomial `y` into the recurrence.
    #[must_use]
    pub fn build(rec: &Recurrence, y: UndeterminedPoly) -> Self {
        let images: Vec<DensePoly<Q>> = (0..y.num_unknowns())
            .map(|k| rec.apply(&DensePoly::monomial(Q::one(), k)))
            .collect();

        let num_powers = images
            .iter()
            .chain(std::iter::once(rec.forcing()))
            .filter_map(DensePoly::degree)
            .max()
            .map_or(0, |deg| deg + 1);

        let forms: Vec<AffineForm> = (0..num_powers)
            .map(|e| AffineForm {
                coeffs: images.iter().map(|image| image.coeff(e)).collect(),
                constant: -rec.forcing().coeff(e),
            })
            .collect();

        let equations: Vec<LinearEquation> = forms.iter().map(AffineForm::to_equation).collect();
        let rhs = equations.iter().map(|eq| eq.rhs.clone()).collect();
        let matrix = if equations.is_empty() {
            DenseMatrix::zeros(0, y.num_unknowns())
        } else {
            DenseMatrix::from_rows(equations.into_iter().map(|eq| eq.lhs).collect())
        };

        debug!(
            unknowns = y.num_unknowns(),
            equations = matrix.num_rows(),
            "built undetermined coefficient system"
        );

        Self {
            unknowns: y,
            forms,
            matrix,
            rhs,
        }
    }

    /// The generic polynomial the system was built from.
    #[must_use]
    pub fn unknowns(&self) -> UndeterminedPoly {
        self.unknowns
    }

    /// The coefficient of each power of n in `L y - f`, lowest power first.
    #[must_use]
    pub fn coefficient_forms(&self) -> &[AffineForm] {
        &self.forms
    }

    /// The equations `k_e - c_e = -c_e`, one per power of n.
    #[must_use]
    pub fn equations(&self) -> Vec<LinearEquation> {
        self.forms.iter().map(AffineForm::to_equation).collect()
    }

    /// The coefficient matrix.
    #[must_use]
    pub fn matrix(&self) -> &DenseMatrix<Q> {
        &self.matrix
    }

    /// The right-hand side.
    #[must_use]
    pub fn rhs(&self) -> &[Q] {
        &self.rhs
    }

    /// Solves the system by Gauss-Jordan elimination, or returns `None`
    /// if it is inconsistent.
    #[must_use]
    pub fn solve(&self) -> Option<AffineSolution<Q>> {
        self.matrix.solve_affine(&self.rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(v: i64) -> Q {
        Q::from_integer(v)
    }

    fn poly(coeffs: &[i64]) -> DensePoly<Q> {
        DensePoly::new(coeffs.iter().map(|&c| q(c)).collect())
    }

    fn scenario_one() -> Recurrence {
        Recurrence::homogeneous(vec![poly(&[-1, 1]), poly(&[0, -1]), poly(&[3])]).unwrap()
    }

    #[test]
    fn test_undetermined_poly() {
        let y = UndeterminedPoly::new(2);
        assert_eq!(y.num_unknowns(), 3);
        assert_eq!(UndeterminedPoly::name(2), "a2");
        assert_eq!(y.substitute(&[q(27), q(-11), q(1)]), poly(&[27, -11, 1]));
    }

    #[test]
    fn test_affine_form() {
        let form = AffineForm {
            coeffs: vec![q(2), q(-1)],
            constant: q(3),
        };
        assert_eq!(form.eval(&[q(1), q(5)]), q(0));
        assert_eq!(form.variable_part().constant, q(0));
        assert!(!form.is_zero());

        let eq = form.to_equation();
        assert_eq!(eq.rhs, q(-3));
        assert!(eq.is_satisfied_by(&[q(1), q(5)]));
    }

    #[test]
    fn test_build_second_order() {
        // L(1) = 2, L(n) = n + 6, L(n^2) = 11n + 12
        let system = LinearSystem::build(&scenario_one(), UndeterminedPoly::new(2));
        let rows: Vec<Vec<Q>> = (0..system.matrix().num_rows())
            .map(|r| system.matrix().row(r).to_vec())
            .collect();
        assert_eq!(rows, vec![vec![q(2), q(6), q(12)], vec![q(0), q(1), q(11)]]);
        assert_eq!(system.rhs(), &[q(0), q(0)]);
    }

    #[test]
    fn test_forcing_moves_to_rhs() {
        // y(n+1) - y(n) = 1 with d = 1: the only equation is a1 = 1
        let rec = Recurrence::new(vec![poly(&[-1]), poly(&[1])], poly(&[1])).unwrap();
        let system = LinearSystem::build(&rec, UndeterminedPoly::new(1));

        assert_eq!(system.coefficient_forms()[0].constant, q(-1));
        let equations = system.equations();
        assert_eq!(equations.len(), 1);
        assert_eq!(equations[0].to_string(), "a1 = 1");
    }

    #[test]
    fn test_forcing_above_image_degrees() {
        // y(n) = n^2 with d = 1 still needs a row for n^2
        let rec = Recurrence::new(vec![poly(&[1])], poly(&[0, 0, 1])).unwrap();
        let system = LinearSystem::build(&rec, UndeterminedPoly::new(1));
        assert_eq!(system.matrix().num_rows(), 3);
        assert!(system.solve().is_none());
    }

    #[test]
    fn test_solve_family() {
        let system = LinearSystem::build(&scenario_one(), UndeterminedPoly::new(2));
        let sol = system.solve().unwrap();
        assert_eq!(sol.free, vec![2]);
        assert_eq!(sol.kernel, vec![vec![q(27), q(-11), q(1)]]);
    }

    #[test]
    fn test_equation_display() {
        let eq = LinearEquation {
            lhs: vec![q(2), q(-6), q(0), q(1)],
            rhs: Q::new(-1, 2),
        };
        assert_eq!(eq.to_string(), "2*a0 - 6*a1 + a3 = -1/2");
        assert!(!eq.is_trivial());
    }
}
