//! # polyrec
//!
//! Polynomial solutions of linear recurrence equations with polynomial
//! coefficients, over exact rationals.
//!
//! ## Features
//!
//! - **Arbitrary Precision**: big integers and rationals throughout
//! - **Exact Linear Algebra**: Gauss-Jordan elimination over Q
//! - **Complete Answers**: every polynomial solution as a parametrized
//!   family, plus a concrete representative
//!
//! ## Quick Start
//!
//! ```
//! use polyrec::prelude::*;
//!
//! // 3y(n+2) - n y(n+1) + (n-1) y(n) = 0
//! let p = vec![
//!     DensePoly::new(vec![Q::from_integer(-1), Q::from_integer(1)]),
//!     DensePoly::new(vec![Q::from_integer(0), Q::from_integer(-1)]),
//!     DensePoly::constant(Q::from_integer(3)),
//! ];
//! let rec = Recurrence::homogeneous(p).unwrap();
//! let solutions = PolySolver::default().solve(&rec).unwrap();
//!
//! assert_eq!(solutions.to_string(), "(a2*(n^2 - 11*n + 27), n^2 - 11*n + 27)");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use polyrec_integers as integers;
pub use polyrec_linalg as linalg;
pub use polyrec_poly as poly;
pub use polyrec_recurrence as recurrence;
pub use polyrec_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use polyrec_integers::{Integer, Rational};
    pub use polyrec_poly::{DensePoly, Variable};
    pub use polyrec_recurrence::{
        poly_solutions, PolySolutions, PolySolver, Recurrence, RecurrenceError, SolutionFamily,
        SolverConfig,
    };
    pub use polyrec_rings::{Field, Ring, Q};
}
