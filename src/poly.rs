//! Real coefficient polynomials and their evaluation on the imaginary axis.

use std::fmt::Display;

use itertools::Itertools;
use num::{complex::Complex64, Zero};

use crate::{
    complex::{c_add, c_mul, c_powu},
    parse::parse_coefficients,
    util::casting::usize_to_u32,
};

/// Real polynomial, coefficients stored from the highest power down.
///
/// Unlike a normalized representation, leading zeros are kept as given: a
/// list of length `L` always describes a polynomial of degree `L - 1`.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Poly(Vec<f64>);

impl Poly {
    #[must_use]
    pub fn new(coeffs: &[f64]) -> Self {
        Self(coeffs.to_owned())
    }

    /// Parse whitespace separated coefficients, see
    /// [`parse_coefficients`](crate::parse::parse_coefficients).
    ///
    /// ```
    /// use rust_bode::{poly, Poly};
    ///
    /// assert_eq!(Poly::parse("1 0.1 0.01"), poly![1.0, 0.1, 0.01]);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self(parse_coefficients(text))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        self.0.as_slice()
    }

    /// Iterate over coefficients, from the highest power
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no coefficients at all, i.e. nothing usable was
    /// parsed. A polynomial with only zero coefficients is not empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The degree, `len() - 1`, or `None` for an empty polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.len().checked_sub(1)
    }

    /// Iterate over `(power, coefficient)` pairs, from the highest power
    fn terms(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        let n = self.len();
        self.iter().enumerate().map(move |(i, c)| (n - 1 - i, *c))
    }

    /// Evaluate at an arbitrary complex point.
    ///
    /// Each term `c * x^p` is computed separately and accumulated from the
    /// highest power down. An empty polynomial evaluates to zero.
    ///
    /// ```
    /// use rust_bode::{complex, poly};
    ///
    /// // x^2 + 1 vanishes at x = i
    /// assert_eq!(poly![1.0, 0.0, 1.0].eval(complex!(0.0, 1.0)), complex!(0.0));
    /// ```
    #[must_use]
    pub fn eval(&self, x: Complex64) -> Complex64 {
        self.terms().fold(Complex64::zero(), |acc, (power, c)| {
            let term = c_mul(c_powu(x, usize_to_u32(power)), Complex64::new(c, 0.0));
            c_add(acc, term)
        })
    }

    /// Evaluate `P(jω)`, the polynomial on the imaginary axis.
    ///
    /// ```
    /// use rust_bode::{complex, poly};
    ///
    /// // (jω)^2 + 2jω + 1 at ω = 1 is 2j
    /// assert_eq!(poly![1.0, 2.0, 1.0].eval_jw(1.0), complex!(0.0, 2.0));
    /// // constants do not depend on ω
    /// assert_eq!(poly![4.0].eval_jw(123.0), complex!(4.0));
    /// ```
    #[must_use]
    pub fn eval_jw(&self, omega: f64) -> Complex64 {
        self.eval(Complex64::new(0.0, omega))
    }
}

impl From<Vec<f64>> for Poly {
    fn from(value: Vec<f64>) -> Self {
        Self(value)
    }
}

impl From<&[f64]> for Poly {
    fn from(value: &[f64]) -> Self {
        Self::new(value)
    }
}

impl From<Poly> for Vec<f64> {
    fn from(val: Poly) -> Self {
        val.0
    }
}

impl<'a> IntoIterator for &'a Poly {
    type IntoIter = std::slice::Iter<'a, f64>;
    type Item = &'a f64;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders `c`, `cs` or `cs^p` per term, joined with `" + "`.
///
/// Coefficients keep their literal sign, so `s - 2` prints as `1s + -2`.
impl Display for Poly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self
            .terms()
            .map(|(power, c)| match power {
                0 => format!("{c}"),
                1 => format!("{c}s"),
                _ => format!("{c}s^{power}"),
            })
            .join(" + ");
        f.write_str(&s)
    }
}
