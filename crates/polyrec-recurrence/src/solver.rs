//! The polynomial solution pipeline.
//!
//! 1. Rewrite the operator in the forward difference and derive the degree
//!    bound d ([`DegreeBound`]).
//! 2. Posit `y = sum_{k<=d} a_k n^k` and build the linear system in the
//!    `a_k` ([`LinearSystem`]).
//! 3. Solve it exactly and classify the solution set by its content.

use tracing::{debug, warn};

use polyrec_linalg::AffineSolution;
use polyrec_poly::{DensePoly, Variable};
use polyrec_rings::rationals::Q;

use crate::config::SolverConfig;
use crate::degree_bound::DegreeBound;
use crate::error::RecurrenceError;
use crate::recurrence::Recurrence;
use crate::solution::{Parameter, ParametricPoly, PolySolutions, SolutionFamily};
use crate::system::{LinearSystem, UndeterminedPoly};

/// Finds all polynomial solutions of a recurrence.
#[derive(Clone, Debug, Default)]
pub struct PolySolver {
    config: SolverConfig,
}

impl PolySolver {
    /// Creates a solver with the given configuration.
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Computes every polynomial solution of `rec`.
    ///
    /// # Errors
    ///
    /// - [`RecurrenceError::ZeroOperator`] if every p_i and f are zero.
    /// - [`RecurrenceError::DivisorSearchLimit`] if the integer root search
    ///   exceeds the configured limit.
    /// - [`RecurrenceError::DegreeOverflow`] if the degree bound is too
    ///   large to represent.
    pub fn solve(&self, rec: &Recurrence) -> Result<PolySolutions, RecurrenceError> {
        if rec.is_zero_operator() {
            if rec.is_homogeneous() {
                return Err(RecurrenceError::ZeroOperator);
            }
            debug!("zero operator with non-zero forcing");
            return Ok(PolySolutions::NoSolution);
        }

        let bound = DegreeBound::compute(rec, &self.config)?;
        let Some(degree) = bound.degree() else {
            debug!(bound = bound.bound, "negative degree bound");
            return Ok(PolySolutions::NoSolution);
        };

        let y = UndeterminedPoly::new(degree);
        let system = LinearSystem::build(rec, y);
        let Some(solution) = system.solve() else {
            debug!("undetermined coefficient system is inconsistent");
            return Ok(PolySolutions::NoSolution);
        };

        let outcome = self.classify(&y, &solution, rec.variable());
        if let PolySolutions::Family(family) = &outcome {
            debug!(
                parameters = family.general.num_parameters(),
                general = %family.general,
                "found polynomial solutions"
            );
            if self.config.verify && !family.verify(rec) {
                warn!(recurrence = %rec, solution = %family, "solution failed verification");
            }
        } else {
            debug!("only the trivial solution");
        }

        Ok(outcome)
    }

    fn classify(&self, y: &UndeterminedPoly, solution: &AffineSolution<Q>, var: &Variable) -> PolySolutions {
        let particular = y.substitute(&solution.particular);

        if solution.is_unique() {
            if particular.is_zero() {
                return PolySolutions::TrivialOnly;
            }
            return PolySolutions::Family(SolutionFamily {
                general: ParametricPoly::fixed(particular.clone(), var.clone()),
                representative: particular,
            });
        }

        let basis = solution
            .free
            .iter()
            .zip(&solution.kernel)
            .map(|(&k, direction)| (Parameter::new(k), y.substitute(direction)))
            .collect();
        let values = vec![self.config.free_parameter_value.clone(); solution.free.len()];
        let representative = y.substitute(&solution.instantiate(&values));

        PolySolutions::Family(SolutionFamily {
            general: ParametricPoly {
                particular,
                basis,
                var: var.clone(),
            },
            representative,
        })
    }
}

/// Computes every polynomial solution of `sum_i p[i](n) y(n+i) = f(n)`
/// with the default configuration.
///
/// # Errors
///
/// - [`RecurrenceError::EmptyOperator`] if `p` is empty.
/// - Any error of [`PolySolver::solve`].
pub fn poly_solutions(
    p: &[DensePoly<Q>],
    f: &DensePoly<Q>,
    var: &Variable,
) -> Result<PolySolutions, RecurrenceError> {
    let rec = Recurrence::new(p.to_vec(), f.clone())?.with_variable(var.clone());
    PolySolver::default().solve(&rec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyrec_integers::Integer;

    fn q(v: i64) -> Q {
        Q::from_integer(v)
    }

    fn poly(coeffs: &[i64]) -> DensePoly<Q> {
        DensePoly::new(coeffs.iter().map(|&c| q(c)).collect())
    }

    #[test]
    fn test_zero_operator() {
        let zero = vec![DensePoly::zero(), DensePoly::zero()];
        let homogeneous = Recurrence::homogeneous(zero.clone()).unwrap();
        assert_eq!(
            PolySolver::default().solve(&homogeneous),
            Err(RecurrenceError::ZeroOperator)
        );

        let forced = Recurrence::new(zero, poly(&[1])).unwrap();
        assert_eq!(PolySolver::default().solve(&forced), Ok(PolySolutions::NoSolution));
    }

    #[test]
    fn test_empty_operator() {
        assert_eq!(
            poly_solutions(&[], &DensePoly::zero(), &Variable::default()),
            Err(RecurrenceError::EmptyOperator)
        );
    }

    #[test]
    fn test_unique_rational_solution() {
        // y(n+1) + y(n) = 1 is solved only by y = 1/2
        let result = poly_solutions(&[poly(&[1]), poly(&[1])], &poly(&[1]), &Variable::default()).unwrap();
        assert_eq!(result.representative(), Some(&DensePoly::constant(Q::new(1, 2))));
        assert_eq!(result.family().map(|f| f.general.num_parameters()), Some(0));
    }

    #[test]
    fn test_inconsistent_system() {
        // n y(n+1) - n y(n) = 1 needs n * Δy = 1
        let result = poly_solutions(&[poly(&[0, -1]), poly(&[0, 1])], &poly(&[1]), &Variable::default()).unwrap();
        assert_eq!(result, PolySolutions::NoSolution);
    }

    #[test]
    fn test_indicial_root_above_forcing_degree() {
        // n^2 Δ^2 y - 2n Δy = 0: alpha = x^2 - 3x, so the cubic solution
        // n^3 - n is only reachable through the indicial root 3
        let rec = Recurrence::homogeneous(vec![poly(&[0, 2, 1]), poly(&[0, -2, -2]), poly(&[0, 0, 1])]).unwrap();
        let result = PolySolver::default().solve(&rec).unwrap();
        let family = result.family().unwrap();

        assert_eq!(family.general.num_parameters(), 2);
        assert!(family.verify(&rec));
        let cubic = family
            .general
            .basis
            .iter()
            .find(|(param, _)| param.index == 3)
            .map(|(_, b)| b.clone())
            .unwrap();
        assert_eq!(cubic, poly(&[0, -1, 0, 1]));
    }

    #[test]
    fn test_free_parameter_value() {
        // y(n+1) - y(n) = 1 with parameters set to 5
        let rec = Recurrence::new(vec![poly(&[-1]), poly(&[1])], poly(&[1])).unwrap();
        let solver = PolySolver::new(SolverConfig::default().with_free_parameter_value(q(5)));
        assert_eq!(solver.solve(&rec).unwrap().representative(), Some(&poly(&[5, 1])));
    }

    #[test]
    fn test_divisor_limit_propagates() {
        let rec = Recurrence::homogeneous(vec![poly(&[-1000, -1]), poly(&[0, 1])]).unwrap();
        let solver = PolySolver::new(SolverConfig::default().with_divisor_search_limit(Integer::new(10)));
        assert!(matches!(
            solver.solve(&rec),
            Err(RecurrenceError::DivisorSearchLimit { .. })
        ));
    }
}
