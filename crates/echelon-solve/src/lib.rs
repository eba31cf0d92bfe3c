//! # echelon-solve
//!
//! Gaussian elimination over systems of decimal hyperplanes.
//!
//! A [`LinearSystem`] is an ordered sequence of hyperplanes sharing one
//! dimension. Solving proceeds in three stages:
//! 1. Forward elimination with row-swap pivoting into triangular form
//! 2. Back-substitution into reduced row-echelon form, where every
//!    pivot is 1 and alone in its column
//! 3. Classification: a contradictory row means no solutions, a pivot
//!    deficit means infinitely many, otherwise the constants column is
//!    the unique solution
//!
//! Reductions never mutate the receiver: each works on an independently
//! owned copy, so a system survives solving and can be inspected or
//! re-solved afterwards.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod solution;
pub mod system;

#[cfg(test)]
mod proptests;

pub use solution::Solution;
pub use system::{LinearSystem, SystemError};
