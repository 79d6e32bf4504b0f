//! Property-based tests for the polynomial solver.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::config::SolverConfig;
    use crate::degree_bound::DegreeBound;
    use crate::recurrence::Recurrence;
    use crate::solution::PolySolutions;
    use crate::solver::PolySolver;
    use polyrec_poly::DensePoly;
    use polyrec_rings::rationals::Q;

    fn small_poly(max_len: usize) -> impl Strategy<Value = DensePoly<Q>> {
        proptest::collection::vec((-6i64..6i64).prop_map(Q::from_integer), 0..=max_len)
            .prop_map(DensePoly::new)
    }

    /// A first-order recurrence together with a planted solution y and the
    /// forcing f = L y it induces.
    fn planted() -> impl Strategy<Value = (Recurrence, DensePoly<Q>)> {
        (small_poly(3), small_poly(3), small_poly(4))
            .prop_filter("operator must be non-zero", |(p0, p1, _)| !(p0.is_zero() && p1.is_zero()))
            .prop_map(|(p0, p1, y)| {
                let homogeneous = Recurrence::homogeneous(vec![p0.clone(), p1.clone()]).unwrap();
                let f = homogeneous.apply(&y);
                (Recurrence::new(vec![p0, p1], f).unwrap(), y)
            })
    }

    proptest! {
        #[test]
        fn degree_bound_covers_planted_solution((rec, y) in planted()) {
            let bound = DegreeBound::compute(&rec, &SolverConfig::default()).unwrap();
            if let Some(deg) = y.degree() {
                prop_assert!(bound.bound >= deg as i64);
            }
        }

        #[test]
        fn substitution_law((rec, y) in planted()) {
            let result = PolySolver::default().solve(&rec).unwrap();
            match &result {
                PolySolutions::NoSolution => prop_assert!(false, "{rec} has the solution {y}"),
                PolySolutions::TrivialOnly => prop_assert!(y.is_zero()),
                PolySolutions::Family(family) => {
                    prop_assert!(family.verify(&rec));
                    prop_assert!(rec.residual(&family.representative).is_zero());
                }
            }
        }

        #[test]
        fn planted_solution_lies_in_family((rec, y) in planted()) {
            // y - particular solves the homogeneous part, so it is spanned
            // by the basis with coefficients read off at the free unknowns.
            let result = PolySolver::default().solve(&rec).unwrap();
            if let PolySolutions::Family(family) = result {
                let values: Vec<Q> = family
                    .general
                    .parameters()
                    .map(|param| y.coeff(param.index) - family.general.particular.coeff(param.index))
                    .collect();
                prop_assert_eq!(family.general.instantiate(&values), y);
            }
        }
    }
}
