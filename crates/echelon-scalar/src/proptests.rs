//! Property-based tests for decimal scalar arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::Scalar;

    // Strategy for generating small decimals (mantissa, up to 3 dp)
    fn small_scalar() -> impl Strategy<Value = Scalar> {
        (-100_000i64..100_000i64, 0u32..4u32).prop_map(|(m, s)| Scalar::new(m, s))
    }

    // Strategy for generating decimals bounded away from zero
    fn non_zero_scalar() -> impl Strategy<Value = Scalar> {
        (
            prop_oneof![(-100_000i64..=-1i64), (1i64..=100_000i64)],
            0u32..4u32,
        )
            .prop_map(|(m, s)| Scalar::new(m, s))
    }

    proptest! {
        // Field axioms

        #[test]
        fn add_commutative(a in small_scalar(), b in small_scalar()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn add_associative(a in small_scalar(), b in small_scalar(), c in small_scalar()) {
            prop_assert_eq!((a + b) + c, a + (b + c));
        }

        #[test]
        fn mul_commutative(a in small_scalar(), b in small_scalar()) {
            prop_assert_eq!(a * b, b * a);
        }

        #[test]
        fn distributive(a in small_scalar(), b in small_scalar(), c in small_scalar()) {
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn add_identity(a in small_scalar()) {
            prop_assert_eq!(a + Scalar::zero(), a);
        }

        #[test]
        fn mul_identity(a in small_scalar()) {
            prop_assert_eq!(a * Scalar::one(), a);
        }

        #[test]
        fn additive_inverse(a in small_scalar()) {
            prop_assert!((a + (-a)).is_zero());
        }

        // Division rounds, so the inverse laws hold within epsilon only.

        #[test]
        fn multiplicative_inverse(a in non_zero_scalar()) {
            let inv = a.recip().expect("bounded away from zero");
            prop_assert!((a * inv).approx_eq(Scalar::one()));
        }

        #[test]
        fn scale_then_unscale(a in small_scalar(), c in non_zero_scalar()) {
            let inv = c.recip().expect("bounded away from zero");
            prop_assert!((a * c * inv).approx_eq(a));
        }

        // Near-zero test

        #[test]
        fn near_zero_is_symmetric(a in small_scalar()) {
            prop_assert_eq!(a.is_near_zero(), (-a).is_near_zero());
        }

        #[test]
        fn approx_eq_reflexive(a in small_scalar()) {
            prop_assert!(a.approx_eq(a));
        }
    }
}
