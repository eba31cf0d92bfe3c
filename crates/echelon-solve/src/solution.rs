//! Solution classification for Gaussian elimination.

use std::fmt;

use echelon_geom::Vector;

/// The outcome of solving a linear system.
///
/// The degenerate classifications are ordinary values, not errors: a
/// contradictory or underdetermined system is an expected input, and
/// callers match on the variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Solution {
    /// Exactly one point satisfies every equation.
    Unique(Vector),
    /// Some row reduced to `0 = c` with nonzero `c`; no point satisfies
    /// the system.
    NoSolutions,
    /// Fewer pivots than variables; the solution set is a line, plane,
    /// or higher-dimensional flat.
    InfiniteSolutions,
}

impl Solution {
    /// Returns true for a unique solution.
    #[must_use]
    pub fn is_unique(&self) -> bool {
        matches!(self, Solution::Unique(_))
    }

    /// Returns the solution vector if it is unique.
    #[must_use]
    pub fn unique_value(&self) -> Option<&Vector> {
        match self {
            Solution::Unique(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Unique(v) => write!(f, "{v}"),
            Solution::NoSolutions => write!(f, "No solutions"),
            Solution::InfiniteSolutions => write!(f, "Infinitely many solutions"),
        }
    }
}
