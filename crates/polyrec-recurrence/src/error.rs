//! Errors for malformed recurrences and runaway searches.
//!
//! "No solution" and "only the trivial solution" are ordinary outcomes
//! (see [`crate::PolySolutions`]), not errors.

use polyrec_integers::Integer;
use polyrec_poly::PolyError;
use thiserror::Error;

/// Errors that can occur while solving a recurrence.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RecurrenceError {
    #[error("recurrence has no operator coefficients")]
    EmptyOperator,

    #[error("every operator coefficient is zero; every polynomial solves the homogeneous recurrence")]
    ZeroOperator,

    #[error("divisor search bound {bound} exceeds the configured limit {limit}")]
    DivisorSearchLimit { bound: Integer, limit: Integer },

    #[error("degree bound {0} is too large to build a linear system")]
    DegreeOverflow(Integer),

    #[error(transparent)]
    Poly(PolyError),
}

impl From<PolyError> for RecurrenceError {
    fn from(err: PolyError) -> Self {
        match err {
            PolyError::SearchLimit { bound, limit } => Self::DivisorSearchLimit { bound, limit },
            other => Self::Poly(other),
        }
    }
}
