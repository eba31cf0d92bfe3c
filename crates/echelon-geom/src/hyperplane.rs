//! Hyperplanes as normal vector plus constant term.

use std::fmt;

use echelon_scalar::Scalar;
use num_traits::One;

use crate::Vector;

/// The set of points x satisfying `normal . x = constant_term`.
///
/// In dimension 2 this is a line, in dimension 3 a plane. The value is
/// immutable: row operations in the solver replace hyperplanes wholesale
/// rather than mutating them in place.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Hyperplane {
    normal: Vector,
    constant_term: Scalar,
}

impl Hyperplane {
    /// Creates a hyperplane from its normal vector and constant term.
    #[must_use]
    pub fn new(normal: Vector, constant_term: Scalar) -> Self {
        Self {
            normal,
            constant_term,
        }
    }

    /// Returns the dimension of the ambient space.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.normal.dimension()
    }

    /// Returns the normal vector.
    #[must_use]
    pub fn normal_vector(&self) -> &Vector {
        &self.normal
    }

    /// Returns the constant term.
    #[must_use]
    pub fn constant_term(&self) -> Scalar {
        self.constant_term
    }

    /// Returns the index of the first normal coordinate that is not
    /// near zero, or `None` when the normal is entirely near zero.
    ///
    /// A `None` row reads `0 = constant_term`: trivially satisfied when
    /// the constant is also near zero, contradictory otherwise.
    #[must_use]
    pub fn first_nonzero_index(&self) -> Option<usize> {
        self.normal.first_nonzero_index()
    }

    /// Returns a point on the hyperplane, or `None` for a near-zero
    /// normal.
    ///
    /// The point has `constant_term / coefficient` at the first nonzero
    /// coordinate and zeros elsewhere.
    #[must_use]
    pub fn basepoint(&self) -> Option<Vector> {
        let pivot = self.first_nonzero_index()?;
        let mut coords = vec![Scalar::ZERO; self.dimension()];
        coords[pivot] = self.constant_term / self.normal[pivot];
        Some(Vector::new(coords))
    }

    /// Returns the hyperplane with normal and constant term both
    /// multiplied by `factor`.
    ///
    /// For nonzero `factor` this is the same point set.
    #[must_use]
    pub fn scale(&self, factor: Scalar) -> Self {
        Self {
            normal: self.normal.scale(factor),
            constant_term: self.constant_term * factor,
        }
    }

    /// Returns true if the normals point along the same line.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    #[must_use]
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        self.normal.is_parallel_to(&other.normal)
    }

    /// Returns true if the two hyperplanes are the same point set.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    #[must_use]
    pub fn coincides_with(&self, other: &Self) -> bool {
        match (self.basepoint(), other.basepoint()) {
            // Degenerate rows 0 = c are the same set iff the constants
            // agree (both empty, or both everything).
            (None, None) => self.constant_term.approx_eq(other.constant_term),
            (None, Some(_)) | (Some(_), None) => false,
            (Some(p), Some(q)) => {
                self.is_parallel_to(other) && (&p - &q).is_orthogonal_to(&self.normal)
            }
        }
    }

    /// Returns true if normals and constant terms agree within epsilon.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.normal.approx_eq(&other.normal) && self.constant_term.approx_eq(other.constant_term)
    }
}

impl fmt::Display for Hyperplane {
    /// Renders the equation form, e.g. `x_1 - 2x_2 + 3x_3 = 5`.
    ///
    /// Coefficients are rounded to 3 decimal places for rendering only;
    /// terms that round to zero are omitted, and an all-near-zero
    /// normal renders as `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms = String::new();
        for (i, &coeff) in self.normal.iter().enumerate() {
            let rounded = coeff.round_dp(3);
            if rounded.is_near_zero() {
                continue;
            }
            if terms.is_empty() {
                if rounded.is_negative() {
                    terms.push('-');
                }
            } else {
                terms.push_str(if rounded.is_negative() { " - " } else { " + " });
            }
            let size = rounded.abs();
            if !size.is_one() {
                terms.push_str(&size.to_string());
            }
            terms.push_str(&format!("x_{}", i + 1));
        }

        if terms.is_empty() {
            terms.push('0');
        }
        write!(f, "{} = {}", terms, self.constant_term.round_dp(3))
    }
}
