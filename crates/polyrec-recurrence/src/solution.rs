//! Solution sets of a recurrence.

use std::fmt;

use polyrec_poly::{DensePoly, Variable};
use polyrec_rings::rationals::Q;
use polyrec_rings::traits::Ring;

use crate::recurrence::Recurrence;
use crate::system::UndeterminedPoly;

/// A free unknown of the undetermined coefficient system, kept under its
/// original name `a_k`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Parameter {
    /// The index k of the unknown.
    pub index: usize,
    /// The display name, `a{k}`.
    pub name: String,
}

impl Parameter {
    /// The parameter standing for unknown `a_index`.
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self {
            index,
            name: UndeterminedPoly::name(index),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// `particular + sum_t t * basis_t` for free parameters t.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParametricPoly {
    /// The member with every parameter set to zero.
    pub particular: DensePoly<Q>,
    /// One polynomial per parameter; each solves the homogeneous recurrence.
    pub basis: Vec<(Parameter, DensePoly<Q>)>,
    /// The variable used for display.
    pub var: Variable,
}

impl ParametricPoly {
    /// A single polynomial without parameters.
    #[must_use]
    pub fn fixed(poly: DensePoly<Q>, var: Variable) -> Self {
        Self {
            particular: poly,
            basis: Vec::new(),
            var,
        }
    }

    /// The parameters, in increasing index order.
    pub fn parameters(&self) -> impl Iterator<Item = &Parameter> + '_ {
        self.basis.iter().map(|(param, _)| param)
    }

    /// The number of free parameters.
    #[must_use]
    pub fn num_parameters(&self) -> usize {
        self.basis.len()
    }

    /// The member of the family obtained by assigning `values[t]` to the
    /// t-th parameter.
    ///
    /// # Panics
    ///
    /// Panics if `values` does not have one entry per parameter.
    #[must_use]
    pub fn instantiate(&self, values: &[Q]) -> DensePoly<Q> {
        assert_eq!(values.len(), self.basis.len(), "one value per parameter");
        self.basis
            .iter()
            .zip(values)
            .fold(self.particular.clone(), |acc, ((_, b), t)| acc.add(&b.scale(t)))
    }
}

impl fmt::Display for ParametricPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        if !self.particular.is_zero() {
            write!(f, "{}", self.particular.display_in(&self.var))?;
            first = false;
        }

        for (param, b) in &self.basis {
            if !first {
                write!(f, " + ")?;
            }
            first = false;

            let single_term = b.terms().count() == 1;
            if *b == DensePoly::one() {
                write!(f, "{param}")?;
            } else if single_term && b.leading_coeff().is_some_and(|c| c.is_one()) {
                write!(f, "{param}*{}", b.display_in(&self.var))?;
            } else {
                write!(f, "{param}*({})", b.display_in(&self.var))?;
            }
        }

        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}

/// A non-empty family of polynomial solutions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolutionFamily {
    /// Every solution of degree at most the bound, in terms of the free
    /// parameters.
    pub general: ParametricPoly,
    /// The member with every parameter set to the configured value.
    pub representative: DensePoly<Q>,
}

impl SolutionFamily {
    /// Checks the family against the recurrence: the representative and
    /// the particular member solve it, and every basis polynomial solves
    /// its homogeneous part.
    #[must_use]
    pub fn verify(&self, rec: &Recurrence) -> bool {
        rec.is_solution(&self.representative)
            && rec.is_solution(&self.general.particular)
            && self.general.basis.iter().all(|(_, b)| rec.apply(b).is_zero())
    }
}

impl fmt::Display for SolutionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})",
            self.general,
            self.representative.display_in(&self.general.var)
        )
    }
}

/// The polynomial solutions of a recurrence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolySolutions {
    /// No polynomial satisfies the recurrence.
    NoSolution,
    /// Only y = 0 does.
    TrivialOnly,
    /// A family with at least one non-zero member.
    Family(SolutionFamily),
}

impl PolySolutions {
    /// Returns true for a family.
    #[must_use]
    pub fn is_family(&self) -> bool {
        matches!(self, Self::Family(_))
    }

    /// The family, if any.
    #[must_use]
    pub fn family(&self) -> Option<&SolutionFamily> {
        match self {
            Self::Family(family) => Some(family),
            _ => None,
        }
    }

    /// The representative solution of a family.
    #[must_use]
    pub fn representative(&self) -> Option<&DensePoly<Q>> {
        self.family().map(|family| &family.representative)
    }
}

impl fmt::Display for PolySolutions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSolution => f.write_str("No polynomial solutions to this recurrence."),
            Self::TrivialOnly => f.write_str("Only the trivial solution."),
            Self::Family(family) => family.fmt(f),
        }
    }
}
