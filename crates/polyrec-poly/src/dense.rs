//! Dense univariate polynomials.
//!
//! Coefficients are stored in ascending degree order with no trailing
//! zeros, so the zero polynomial is the empty vector and two equal
//! polynomials always compare equal structurally.

use std::fmt;

use polyrec_rings::traits::Ring;

use crate::error::PolyError;
use crate::variable::Variable;

/// A dense univariate polynomial.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct DensePoly<R: Ring> {
    /// Coefficients in ascending degree order, without trailing zeros.
    coeffs: Vec<R>,
}

impl<R: Ring> DensePoly<R> {
    /// Creates a polynomial from coefficients in ascending degree order.
    #[must_use]
    pub fn new(mut coeffs: Vec<R>) -> Self {
        while coeffs.last().is_some_and(|c| c.is_zero()) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    /// The zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// The constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(R::one())
    }

    /// A constant polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::new(vec![c])
    }

    /// The polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::monomial(R::one(), 1)
    }

    /// The monomial c * x^k.
    #[must_use]
    pub fn monomial(c: R, k: usize) -> Self {
        let mut coeffs = vec![R::zero(); k + 1];
        coeffs[k] = c;
        Self::new(coeffs)
    }

    /// The falling factorial x(x-1)...(x-j+1), with j = 0 giving 1.
    #[must_use]
    pub fn falling_factorial(j: usize) -> Self {
        (0..j).fold(Self::one(), |acc, i| {
            let factor = Self::new(vec![-R::from_i64(i as i64), R::one()]);
            acc.mul(&factor)
        })
    }

    /// The degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns true for constants, including zero.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.coeffs.len() <= 1
    }

    /// The leading coefficient, or `None` for the zero polynomial.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&R> {
        self.coeffs.last()
    }

    /// The leading coefficient.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ZeroPolynomial`] for the zero polynomial.
    pub fn leading_coeff_checked(&self) -> Result<&R, PolyError> {
        self.leading_coeff().ok_or(PolyError::ZeroPolynomial)
    }

    /// The constant coefficient p(0).
    #[must_use]
    pub fn constant_coeff(&self) -> R {
        self.coeff(0)
    }

    /// The coefficient of x^i.
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs.get(i).cloned().unwrap_or_else(R::zero)
    }

    /// All coefficients in ascending degree order.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Consumes the polynomial, returning its coefficients.
    #[must_use]
    pub fn into_coeffs(self) -> Vec<R> {
        self.coeffs
    }

    /// The non-zero coefficients with their exponents, ascending.
    pub fn terms(&self) -> impl Iterator<Item = (usize, &R)> + '_ {
        self.coeffs.iter().enumerate().filter(|(_, c)| !c.is_zero())
    }

    /// Evaluates at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        self.coeffs
            .iter()
            .rev()
            .fold(R::zero(), |acc, c| acc * x.clone() + c.clone())
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        Self::new((0..len).map(|i| self.coeff(i) + other.coeff(i)).collect())
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|c| -c.clone()).collect(),
        }
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        Self::new((0..len).map(|i| self.coeff(i) - other.coeff(i)).collect())
    }

    /// Multiplies two polynomials (schoolbook).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let mut result = vec![R::zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                result[i + j] = result[i + j].clone() + a.clone() * b.clone();
            }
        }

        Self::new(result)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self::new(self.coeffs.iter().map(|x| x.clone() * c.clone()).collect())
    }

    /// Raises to a non-negative power by repeated squaring.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul(&base);
            }
        }

        result
    }

    /// Substitutes x -> x + a, i.e. returns p(x + a).
    ///
    /// Horner's scheme over the linear factor (x + a); exact over any ring.
    #[must_use]
    pub fn shift_by(&self, a: &R) -> Self {
        if a.is_zero() || self.is_constant() {
            return self.clone();
        }

        let step = Self::new(vec![a.clone(), R::one()]);
        self.coeffs.iter().rev().fold(Self::zero(), |acc, c| {
            acc.mul(&step).add(&Self::constant(c.clone()))
        })
    }

    /// The shift operator: returns p(x + i).
    #[must_use]
    pub fn shift(&self, i: usize) -> Self {
        self.shift_by(&R::from_i64(i as i64))
    }

    /// Splits off the largest power of x dividing the polynomial.
    ///
    /// Returns `(k, q)` with `p = x^k * q` and `q(0) != 0`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ZeroPolynomial`], since x^k divides zero for all k.
    pub fn split_x_power(&self) -> Result<(usize, Self), PolyError> {
        let k = self
            .coeffs
            .iter()
            .position(|c| !c.is_zero())
            .ok_or(PolyError::ZeroPolynomial)?;
        Ok((
            k,
            Self {
                coeffs: self.coeffs[k..].to_vec(),
            },
        ))
    }

    /// Renders the polynomial in the given variable.
    #[must_use]
    pub fn display_in<'a>(&'a self, var: &'a Variable) -> PolyDisplay<'a, R> {
        PolyDisplay { poly: self, var }
    }
}

/// Rendering of a polynomial in a named variable, highest degree first.
pub struct PolyDisplay<'a, R: Ring> {
    poly: &'a DensePoly<R>,
    var: &'a Variable,
}

impl<R: Ring + fmt::Display> fmt::Display for PolyDisplay<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.poly.is_zero() {
            return f.write_str("0");
        }

        let mut first = true;
        for (i, c) in self.poly.terms().collect::<Vec<_>>().into_iter().rev() {
            let text = c.to_string();
            let (negative, magnitude) = match text.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, text.as_str()),
            };

            let power = match i {
                0 => String::new(),
                1 => self.var.to_string(),
                _ => format!("{}^{i}", self.var),
            };
            let term = match (magnitude, i) {
                (m, 0) => m.to_string(),
                ("1", _) => power,
                (m, _) => format!("{m}*{power}"),
            };

            match (first, negative) {
                (true, true) => write!(f, "-{term}")?,
                (true, false) => write!(f, "{term}")?,
                (false, true) => write!(f, " - {term}")?,
                (false, false) => write!(f, " + {term}")?,
            }
            first = false;
        }

        Ok(())
    }
}

impl<R: Ring + fmt::Display> fmt::Display for DensePoly<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.display_in(&Variable::default()).fmt(f)
    }
}
