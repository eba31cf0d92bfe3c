//! # Echelon
//!
//! Exact-decimal linear algebra and Gaussian elimination.
//!
//! Echelon models systems of linear equations as ordered sequences of
//! hyperplanes over fixed-precision decimal scalars (28-29 significant
//! digits), and reduces them to row-echelon and reduced row-echelon
//! form to classify and extract solutions.
//!
//! ## Quick Start
//!
//! ```
//! use echelon::prelude::*;
//!
//! let planes = vec![
//!     Hyperplane::new(Vector::new([Scalar::from(1), Scalar::from(1)]), Scalar::from(3)),
//!     Hyperplane::new(Vector::new([Scalar::from(1), Scalar::from(-1)]), Scalar::from(1)),
//! ];
//! let system = LinearSystem::new(planes)?;
//!
//! match system.solve() {
//!     Solution::Unique(point) => println!("intersection at {point}"),
//!     Solution::NoSolutions => println!("contradictory"),
//!     Solution::InfiniteSolutions => println!("underdetermined"),
//! }
//! # Ok::<(), SystemError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use echelon_geom as geom;
pub use echelon_scalar as scalar;
pub use echelon_solve as solve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use echelon_geom::{Hyperplane, Vector};
    pub use echelon_scalar::{Scalar, EPSILON};
    pub use echelon_solve::{LinearSystem, Solution, SystemError};
}
