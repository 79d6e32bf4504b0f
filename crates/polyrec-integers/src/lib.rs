//! # polyrec-integers
//!
//! Exact integer and rational arithmetic for polyrec.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`) with binomial coefficients
//!   and signed divisor enumeration
//! - Arbitrary precision rationals (`Rational`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use rational::Rational;
