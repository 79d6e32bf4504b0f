//! # polyrec-rings
//!
//! Algebraic structures for polyrec.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `Field`
//! - The rational field `Q`, the coefficient domain of every recurrence
//!
//! Polynomials and matrices are generic over these traits, so the same
//! elimination code serves any exact field.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod rationals;
pub mod traits;

pub use rationals::Q;
pub use traits::{Field, Ring};
