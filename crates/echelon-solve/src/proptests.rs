//! Property-based tests for row reduction.

#[cfg(test)]
mod tests {
    use echelon_geom::{Hyperplane, Vector};
    use echelon_scalar::Scalar;
    use proptest::prelude::*;

    use crate::{LinearSystem, Solution};

    // Strategy for generating systems of up to 4 equations in up to
    // 3 variables with small integer coefficients
    fn small_system() -> impl Strategy<Value = LinearSystem> {
        (1usize..=3, 1usize..=4).prop_flat_map(|(dim, rows)| {
            prop::collection::vec(
                (prop::collection::vec(-9i64..=9i64, dim), -9i64..=9i64),
                rows,
            )
            .prop_map(|rows| {
                let planes = rows
                    .into_iter()
                    .map(|(normal, constant)| {
                        Hyperplane::new(
                            Vector::new(normal.into_iter().map(Scalar::from)),
                            Scalar::from(constant),
                        )
                    })
                    .collect();
                LinearSystem::new(planes).expect("rows share a dimension")
            })
        })
    }

    // Strategy for generating scale factors bounded away from zero
    fn non_zero_factor() -> impl Strategy<Value = Scalar> {
        prop_oneof![(-90i64..=-1i64), (1i64..=90i64)].prop_map(Scalar::from)
    }

    proptest! {
        #[test]
        fn swap_rows_is_an_involution(s in small_system(), a in 0usize..8, b in 0usize..8) {
            let (a, b) = (a % s.len(), b % s.len());
            let mut edited = s.clone();
            edited.swap_rows(a, b);
            edited.swap_rows(a, b);
            prop_assert_eq!(edited, s);
        }

        #[test]
        fn scale_row_round_trips(s in small_system(), row in 0usize..8, c in non_zero_factor()) {
            let row = row % s.len();
            let mut edited = s.clone();
            edited.scale_row(c, row);
            edited.scale_row(Scalar::ONE / c, row);
            prop_assert!(edited.row(row).approx_eq(s.row(row)));
        }

        #[test]
        fn rref_is_idempotent(s in small_system()) {
            let once = s.rref();
            let twice = once.rref();
            prop_assert_eq!(once.len(), twice.len());
            for (a, b) in once.rows().iter().zip(twice.rows()) {
                prop_assert!(a.approx_eq(b));
            }
        }

        #[test]
        fn rref_pivots_increase_and_are_unit(s in small_system()) {
            let reduced = s.rref();
            let mut previous: Option<usize> = None;
            for (row, pivot) in reduced.pivot_columns().into_iter().enumerate() {
                let Some(col) = pivot else { continue };
                if let Some(prev) = previous {
                    prop_assert!(col > prev, "pivot columns must increase by row");
                }
                previous = Some(col);
                prop_assert!(reduced.row(row).normal_vector()[col].approx_eq(Scalar::ONE));
            }
        }

        #[test]
        fn unique_solution_satisfies_every_equation(s in small_system()) {
            if let Solution::Unique(v) = s.solve() {
                for plane in s.rows() {
                    prop_assert!(plane.normal_vector().dot(&v).approx_eq(plane.constant_term()));
                }
            }
        }

        #[test]
        fn reductions_never_mutate_the_receiver(s in small_system()) {
            let snapshot = s.clone();
            let _ = s.triangular_form();
            let _ = s.rref();
            let _ = s.solve();
            prop_assert_eq!(s, snapshot);
        }
    }
}
