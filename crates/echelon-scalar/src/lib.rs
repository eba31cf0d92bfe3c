//! # echelon-scalar
//!
//! Fixed-precision decimal scalar arithmetic for Echelon.
//!
//! This crate wraps `rust_decimal` to provide:
//! - A 96-bit fixed-precision decimal scalar (`Scalar`, 28-29
//!   significant digits)
//! - The near-zero tolerance test used throughout the row-reduction
//!   algorithms
//!
//! ## Precision Notes
//!
//! Decimal arithmetic keeps exact results for addition, subtraction and
//! multiplication of representable values; division rounds to the last
//! representable digit. Chains of row operations therefore accumulate
//! residue only in the final digits, which [`Scalar::is_near_zero`]
//! absorbs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod scalar;

#[cfg(test)]
mod proptests;

pub use scalar::{Scalar, EPSILON};
