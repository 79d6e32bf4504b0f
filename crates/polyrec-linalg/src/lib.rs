//! # polyrec-linalg
//!
//! Exact dense linear algebra for polyrec.
//!
//! This crate provides:
//! - Dense row-major matrices over any `Ring`
//! - Gauss-Jordan reduction to reduced row echelon form over a `Field`
//! - Null spaces and complete (parametric) solution sets of `A x = b`
//!
//! The systems produced by the method of undetermined coefficients are
//! small and dense, so no sparse representation is needed.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod affine;
pub mod dense_matrix;

pub use affine::AffineSolution;
pub use dense_matrix::{DenseMatrix, Echelon};
