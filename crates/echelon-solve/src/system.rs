//! Linear systems and their row reduction.
//!
//! Row identity is purely positional: the sequence index is the
//! equation number, and the elementary row operations edit positions in
//! place. The reductions (`triangular_form`, `rref`, `solve`) each
//! clone the system first, so the receiver is never observably mutated.

use std::fmt;
use std::ops::Index;

use echelon_geom::{Hyperplane, Vector};
use echelon_scalar::Scalar;
use thiserror::Error;

use crate::Solution;

/// Errors from building or editing a linear system.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SystemError {
    /// A hyperplane's dimension disagrees with the system's.
    #[error("all hyperplanes in the system must live in dimension {expected}, found {found}")]
    DimensionMismatch {
        /// The system's dimension.
        expected: usize,
        /// The offending hyperplane's dimension.
        found: usize,
    },

    /// No hyperplanes were supplied.
    #[error("a linear system needs at least one hyperplane")]
    Empty,
}

/// An ordered sequence of hyperplanes of uniform dimension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinearSystem {
    planes: Vec<Hyperplane>,
    dimension: usize,
}

impl LinearSystem {
    /// Builds a system from its equations.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError::Empty`] for an empty list, and
    /// [`SystemError::DimensionMismatch`] if the hyperplanes do not all
    /// share one dimension.
    pub fn new(planes: Vec<Hyperplane>) -> Result<Self, SystemError> {
        let Some(first) = planes.first() else {
            return Err(SystemError::Empty);
        };
        let dimension = first.dimension();
        for plane in &planes {
            if plane.dimension() != dimension {
                return Err(SystemError::DimensionMismatch {
                    expected: dimension,
                    found: plane.dimension(),
                });
            }
        }
        Ok(Self { planes, dimension })
    }

    /// Returns the number of equations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    /// Always false: construction requires at least one equation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the equation at `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    #[must_use]
    pub fn row(&self, row: usize) -> &Hyperplane {
        &self.planes[row]
    }

    /// Returns the equations as a slice.
    #[must_use]
    pub fn rows(&self) -> &[Hyperplane] {
        &self.planes
    }

    /// Replaces the equation at `row`.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError::DimensionMismatch`] if the hyperplane's
    /// dimension disagrees with the system's; the system is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn set_row(&mut self, row: usize, plane: Hyperplane) -> Result<(), SystemError> {
        assert!(row < self.planes.len(), "row index out of range");
        if plane.dimension() != self.dimension {
            return Err(SystemError::DimensionMismatch {
                expected: self.dimension,
                found: plane.dimension(),
            });
        }
        self.planes[row] = plane;
        Ok(())
    }

    /// Exchanges two equations in place.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn swap_rows(&mut self, r1: usize, r2: usize) {
        self.planes.swap(r1, r2);
    }

    /// Multiplies an equation's normal vector and constant term by
    /// `coefficient` in place.
    ///
    /// `coefficient` may be zero; the result is the degenerate but
    /// valid row `0 = 0`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn scale_row(&mut self, coefficient: Scalar, row: usize) {
        self.planes[row] = self.planes[row].scale(coefficient);
    }

    /// Adds `coefficient` times row `src` to row `dst` in place,
    /// leaving `src` unchanged.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn add_scaled_row_to_row(&mut self, coefficient: Scalar, src: usize, dst: usize) {
        let scaled = self.planes[src].scale(coefficient);
        let target = &self.planes[dst];
        let replacement = Hyperplane::new(
            scaled.normal_vector() + target.normal_vector(),
            scaled.constant_term() + target.constant_term(),
        );
        self.planes[dst] = replacement;
    }

    /// Returns each row's pivot column: the index of the first normal
    /// coordinate that is not near zero, or `None` for an all-near-zero
    /// normal.
    #[must_use]
    pub fn pivot_columns(&self) -> Vec<Option<usize>> {
        self.planes
            .iter()
            .map(Hyperplane::first_nonzero_index)
            .collect()
    }

    fn coefficient(&self, row: usize, col: usize) -> Scalar {
        self.planes[row].normal_vector()[col]
    }

    /// First row below `row` with a usable entry in `col`.
    ///
    /// No magnitude-based pivoting: the first candidate wins, which
    /// fixes where each row lands when several pivots are valid.
    fn first_usable_row_below(&self, row: usize, col: usize) -> Option<usize> {
        (row + 1..self.len()).find(|&r| !self.coefficient(r, col).is_near_zero())
    }

    fn clear_column_below(&mut self, row: usize, col: usize) {
        let pivot = self.coefficient(row, col);
        for below in row + 1..self.len() {
            let coeff = self.coefficient(below, col);
            if !coeff.is_near_zero() {
                self.add_scaled_row_to_row(-(coeff / pivot), row, below);
            }
        }
    }

    /// Computes an echelon form by forward elimination.
    ///
    /// Walks a column cursor left to right: a row with a near-zero
    /// entry under the cursor first tries to swap with a usable row
    /// below; if the whole column is unusable the cursor advances and
    /// the row retries. Once a pivot exists the column is cleared below
    /// it. Rows left without pivots keep all-near-zero normals, with a
    /// possibly nonzero constant term (a contradiction).
    ///
    /// Operates on a copy; `self` is unchanged.
    #[must_use]
    pub fn triangular_form(&self) -> Self {
        let mut system = self.clone();
        let mut col = 0;
        for row in 0..system.len() {
            while col < system.dimension {
                if system.coefficient(row, col).is_near_zero() {
                    match system.first_usable_row_below(row, col) {
                        Some(swap) => system.swap_rows(row, swap),
                        None => {
                            col += 1;
                            continue;
                        }
                    }
                }
                system.clear_column_below(row, col);
                col += 1;
                break;
            }
        }
        system
    }

    /// Computes the reduced row-echelon form.
    ///
    /// Starting from the triangular form, each pivot row (processed
    /// bottom-up) is scaled so its pivot is 1, then the pivot column is
    /// cleared in every row above. Pivot columns end up strictly
    /// increasing by row, each containing a single 1.
    ///
    /// Operates on a copy; `self` is unchanged.
    #[must_use]
    pub fn rref(&self) -> Self {
        let mut system = self.triangular_form();
        let pivots = system.pivot_columns();
        for row in (0..system.len()).rev() {
            let Some(col) = pivots[row] else { continue };
            // A pivot entry is not near zero, so the reciprocal exists.
            if let Some(inv) = system.coefficient(row, col).recip() {
                system.scale_row(inv, row);
            }
            for above in (0..row).rev() {
                let coeff = system.coefficient(above, col);
                system.add_scaled_row_to_row(-coeff, row, above);
            }
        }
        system
    }

    /// Solves the system by Gaussian elimination.
    ///
    /// The contradiction check runs before the pivot count: a system
    /// can be contradictory and pivot-deficient at once, and
    /// [`Solution::NoSolutions`] takes precedence.
    ///
    /// Operates on a copy; `self` is unchanged.
    #[must_use]
    pub fn solve(&self) -> Solution {
        let reduced = self.rref();

        for plane in reduced.rows() {
            if plane.first_nonzero_index().is_none() && !plane.constant_term().is_near_zero() {
                return Solution::NoSolutions;
            }
        }

        let pivot_count = reduced.pivot_columns().iter().flatten().count();
        if pivot_count < reduced.dimension() {
            return Solution::InfiniteSolutions;
        }

        // Each pivot row read "x_i = constant"; the constants column is
        // the solution.
        let coords = (0..reduced.dimension()).map(|row| reduced[row].constant_term());
        Solution::Unique(Vector::new(coords))
    }
}

impl Index<usize> for LinearSystem {
    type Output = Hyperplane;

    fn index(&self, row: usize) -> &Self::Output {
        &self.planes[row]
    }
}

impl fmt::Display for LinearSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Linear System:")?;
        for (i, plane) in self.planes.iter().enumerate() {
            write!(f, "\nEquation {}: {}", i + 1, plane)?;
        }
        Ok(())
    }
}
