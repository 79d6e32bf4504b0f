//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dense::DensePoly;
    use crate::roots::integer_roots;
    use polyrec_integers::Integer;
    use polyrec_rings::rationals::Q;
    use polyrec_rings::traits::Ring;

    fn small_coeff() -> impl Strategy<Value = Q> {
        (-100i64..100i64).prop_map(Q::from_integer)
    }

    fn small_poly() -> impl Strategy<Value = DensePoly<Q>> {
        proptest::collection::vec(small_coeff(), 0..=5).prop_map(DensePoly::new)
    }

    proptest! {
        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!(a.add(&a.neg()).is_zero());
            prop_assert_eq!(a.sub(&a), DensePoly::zero());
        }

        #[test]
        fn degree_of_product(a in small_poly(), b in small_poly()) {
            let expected = match (a.degree(), b.degree()) {
                (Some(x), Some(y)) => Some(x + y),
                _ => None,
            };
            prop_assert_eq!(a.mul(&b).degree(), expected);
        }

        #[test]
        fn shift_composes(a in small_poly(), i in 0usize..5, j in 0usize..5) {
            prop_assert_eq!(a.shift(i).shift(j), a.shift(i + j));
        }

        #[test]
        fn shift_agrees_with_evaluation(a in small_poly(), i in 0usize..5, x in -20i64..20) {
            let x = Q::from_integer(x);
            let shifted_point = x.clone() + Q::from_integer(i as i64);
            prop_assert_eq!(a.shift(i).eval(&x), a.eval(&shifted_point));
        }

        #[test]
        fn shift_is_a_ring_homomorphism(a in small_poly(), b in small_poly(), i in 0usize..4) {
            prop_assert_eq!(a.mul(&b).shift(i), a.shift(i).mul(&b.shift(i)));
        }

        #[test]
        fn planted_integer_roots_are_found(
            roots in proptest::collection::vec(-12i64..12, 1..4),
            lead in prop_oneof![(-5i64..=-1i64), (1i64..=5i64)],
        ) {
            let p = roots.iter().fold(DensePoly::constant(Q::from_integer(lead)), |acc, &r| {
                acc.mul(&DensePoly::new(vec![Q::from_integer(-r), Q::one()]))
            });

            let mut expected: Vec<Integer> = roots.iter().copied().map(Integer::new).collect();
            expected.sort();
            expected.dedup();

            prop_assert_eq!(integer_roots(&p, None).unwrap(), expected);
        }
    }
}
