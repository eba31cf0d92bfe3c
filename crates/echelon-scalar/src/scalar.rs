//! The fixed-precision decimal scalar.
//!
//! All coefficients and constant terms in Echelon are `Scalar`s. The type
//! wraps `rust_decimal::Decimal` (96-bit mantissa, 28-29 significant
//! digits), which is wide enough that long chains of row operations only
//! disturb the last few digits.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use num_traits::{One, Zero};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};

/// Tolerance below which a scalar is treated as zero.
///
/// Division rounds to the last representable digit, so repeated row
/// operations leave residue where exact arithmetic would produce zero.
/// Algorithms must use [`Scalar::is_near_zero`] instead of comparing
/// against `Scalar::zero()`.
pub const EPSILON: Scalar = Scalar(Decimal::from_parts(1, 0, 0, false, 10));

/// A fixed-precision decimal number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Scalar(Decimal);

impl Scalar {
    /// The scalar 0.
    pub const ZERO: Scalar = Scalar(Decimal::ZERO);

    /// The scalar 1.
    pub const ONE: Scalar = Scalar(Decimal::ONE);

    /// Creates a scalar of value `mantissa * 10^(-scale)`.
    ///
    /// `Scalar::new(15, 1)` is 1.5; `Scalar::new(-3, 0)` is -3.
    #[must_use]
    pub fn new(mantissa: i64, scale: u32) -> Self {
        Self(Decimal::new(mantissa, scale))
    }

    /// Converts an `f64` into a scalar, if it is finite and in range.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        Decimal::from_f64_retain(value).map(Self)
    }

    /// Returns true if the absolute value is below [`EPSILON`].
    #[must_use]
    pub fn is_near_zero(self) -> bool {
        self.0.abs() < EPSILON.0
    }

    /// Returns true if the two scalars differ by less than [`EPSILON`].
    #[must_use]
    pub fn approx_eq(self, other: Self) -> bool {
        (self - other).is_near_zero()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(self) -> i8 {
        if self.0.is_zero() {
            0
        } else if self.0.is_sign_negative() {
            -1
        } else {
            1
        }
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(self) -> bool {
        !self.0.is_zero() && self.0.is_sign_negative()
    }

    /// Returns the reciprocal (1/x).
    ///
    /// Returns `None` for a near-zero scalar: dividing by residue that
    /// only survived rounding would amplify it into a garbage quotient.
    #[must_use]
    pub fn recip(self) -> Option<Self> {
        if self.is_near_zero() {
            None
        } else {
            Some(Self(Decimal::ONE / self.0))
        }
    }

    /// Returns the square root, or `None` for a negative scalar.
    #[must_use]
    pub fn sqrt(self) -> Option<Self> {
        self.0.sqrt().map(Self)
    }

    /// Rounds to `dp` decimal places, banker's rounding.
    #[must_use]
    pub fn round_dp(self, dp: u32) -> Self {
        Self(self.0.round_dp(dp))
    }

    /// Converts to `f64`, losing precision beyond the 53-bit mantissa.
    #[must_use]
    pub fn to_f64(self) -> Option<f64> {
        self.0.to_f64()
    }

    /// Returns the inner `Decimal`.
    #[must_use]
    pub fn into_inner(self) -> Decimal {
        self.0
    }

    /// Returns a reference to the inner `Decimal`.
    #[must_use]
    pub fn as_inner(&self) -> &Decimal {
        &self.0
    }
}

impl Zero for Scalar {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Scalar {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar({})", self.0.normalize())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Strip trailing zeros so 3.00 renders as "3".
        write!(f, "{}", self.0.normalize())
    }
}

// Arithmetic operations
impl Add for Scalar {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Scalar {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Scalar {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Div for Scalar {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is exactly zero. Use [`Scalar::recip`] when the
    /// divisor may be residue.
    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Neg for Scalar {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Scalar {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<Decimal> for Scalar {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Self(Decimal::from(n))
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Self(Decimal::from(n))
    }
}

impl From<u32> for Scalar {
    fn from(n: u32) -> Self {
        Self(Decimal::from(n))
    }
}

impl FromStr for Scalar {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s).map(Self)
    }
}
