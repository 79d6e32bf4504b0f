//! Solver configuration.

use polyrec_integers::Integer;
use polyrec_rings::rationals::Q;
use polyrec_rings::traits::Ring;

/// Configuration for [`crate::PolySolver`].
#[derive(Clone, Debug)]
pub struct SolverConfig {
    /// Value given to every free parameter in the representative solution.
    pub free_parameter_value: Q,
    /// Largest |m| the integer root search may enumerate divisors of.
    /// `None` searches without limit.
    pub divisor_search_limit: Option<Integer>,
    /// Re-apply the operator to every solution and warn on a residual.
    pub verify: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            free_parameter_value: Q::one(),
            divisor_search_limit: None,
            verify: true,
        }
    }
}

impl SolverConfig {
    /// Sets the value assigned to free parameters.
    #[must_use]
    pub fn with_free_parameter_value(mut self, value: Q) -> Self {
        self.free_parameter_value = value;
        self
    }

    /// Caps the divisor search.
    #[must_use]
    pub fn with_divisor_search_limit(mut self, limit: Integer) -> Self {
        self.divisor_search_limit = Some(limit);
        self
    }

    /// Enables or disables post-solve verification.
    #[must_use]
    pub fn with_verification(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
}
