//! Polynomial domain errors.

use polyrec_integers::Integer;
use thiserror::Error;

/// Errors raised by operations that are undefined on some inputs.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    #[error("operation is undefined on the zero polynomial")]
    ZeroPolynomial,

    #[error("divisor search bound {bound} exceeds the limit {limit}")]
    SearchLimit { bound: Integer, limit: Integer },
}
