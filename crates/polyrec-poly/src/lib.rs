//! # polyrec-poly
//!
//! Exact univariate polynomial arithmetic for polyrec.
//!
//! This crate provides:
//! - Dense univariate polynomials over any `Ring`, with the variable
//!   shift `p(n) -> p(n + a)` and falling factorial constructors
//! - Integer root search over `Q` by divisor enumeration
//! - An explicit `Variable` used when rendering polynomials
//!
//! The zero polynomial has no degree: `degree()` returns `None` for it,
//! and `leading_coeff_checked()` reports it as an error.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dense;
pub mod error;
pub mod roots;
pub mod variable;

#[cfg(test)]
mod proptests;

pub use dense::DensePoly;
pub use error::PolyError;
pub use roots::{integer_roots, max_integer_root, root_divisor_bound};
pub use variable::Variable;
