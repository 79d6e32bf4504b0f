//! # polyrec-recurrence
//!
//! Polynomial solutions of linear recurrences with polynomial coefficients,
//!
//! ```text
//! p_r(n) y(n+r) + ... + p_1(n) y(n+1) + p_0(n) y(n) = f(n)
//! ```
//!
//! # Algorithm Overview
//!
//! 1. Rewrite the operator as `sum_j q_j Δ^j` in the forward difference
//! 2. Derive an upper bound d on the degree of any polynomial solution from
//!    `b = max_j (deg q_j - j)`, `deg f` and the largest integer root of the
//!    indicial polynomial
//! 3. Substitute `y = a_0 + a_1 n + ... + a_d n^d` and equate coefficients
//! 4. Solve the resulting linear system over Q and report no solution, the
//!    trivial solution only, or a parametrized family
//!
//! # Example
//!
//! ```
//! use polyrec_poly::{DensePoly, Variable};
//! use polyrec_recurrence::{poly_solutions, PolySolutions};
//! use polyrec_rings::Q;
//!
//! // y(n+1) - y(n) = 1
//! let p = [DensePoly::constant(Q::from_integer(-1)), DensePoly::one()];
//! let f = DensePoly::one();
//! let solutions = poly_solutions(&p, &f, &Variable::default()).unwrap();
//!
//! assert!(matches!(solutions, PolySolutions::Family(_)));
//! assert_eq!(solutions.to_string(), "(n + a0, n + 1)");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod degree_bound;
pub mod error;
pub mod recurrence;
pub mod solution;
pub mod solver;
pub mod system;

pub use config::SolverConfig;
pub use degree_bound::DegreeBound;
pub use error::RecurrenceError;
pub use recurrence::Recurrence;
pub use solution::{Parameter, ParametricPoly, PolySolutions, SolutionFamily};
pub use solver::{poly_solutions, PolySolver};
pub use system::{AffineForm, LinearEquation, LinearSystem, UndeterminedPoly};

#[cfg(test)]
mod proptests;
