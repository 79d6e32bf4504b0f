//! The named indeterminate of a polynomial.

use std::fmt;

/// Name of the indeterminate a polynomial is written in.
///
/// Polynomials are stored as bare coefficient vectors; the variable is
/// carried alongside and only matters when rendering.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Variable(String);

impl Variable {
    /// Creates a variable with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Default for Variable {
    fn default() -> Self {
        Self::new("n")
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Variable {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
