//! Property-based tests for exact arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        #[test]
        fn signed_divisors_match_brute_force(m in non_zero_int()) {
            let expected: Vec<Integer> = (-m.abs()..=m.abs())
                .filter(|&j| j != 0 && m % j == 0)
                .map(Integer::new)
                .collect();
            prop_assert_eq!(Integer::new(m).signed_divisors(), expected);
        }

        #[test]
        fn divisors_divide(m in non_zero_int()) {
            let m = Integer::new(m);
            for d in m.signed_divisors() {
                prop_assert!(m.is_divisible_by(&d));
            }
        }

        #[test]
        fn binomial_pascal_rule(n in 1u32..40, k in 1u32..40) {
            prop_assert_eq!(
                Integer::binomial(n, k),
                Integer::binomial(n - 1, k - 1) + Integer::binomial(n - 1, k)
            );
        }

        #[test]
        fn binomial_symmetry(n in 0u32..40, k in 0u32..40) {
            prop_assume!(k <= n);
            prop_assert_eq!(Integer::binomial(n, k), Integer::binomial(n, n - k));
        }

        #[test]
        fn rational_distributive(
            a in small_int(), b in non_zero_int(),
            c in small_int(), d in non_zero_int(),
            e in small_int(), f in non_zero_int(),
        ) {
            let x = Rational::from_i64(a, b);
            let y = Rational::from_i64(c, d);
            let z = Rational::from_i64(e, f);
            prop_assert_eq!(&x * &(&y + &z), &(&x * &y) + &(&x * &z));
        }

        #[test]
        fn rational_recip_inverse(a in non_zero_int(), b in non_zero_int()) {
            let x = Rational::from_i64(a, b);
            prop_assert_eq!(&x * &x.recip(), Rational::from(1));
        }

        #[test]
        fn rational_additive_inverse(a in small_int(), b in non_zero_int()) {
            let x = Rational::from_i64(a, b);
            prop_assert!((&x + &(-&x)).is_zero());
        }
    }
}
