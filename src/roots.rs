//! Poles and zeros of low order polynomials.
//!
//! Only closed forms are used, so roots are available up to degree 2. Higher
//! degrees are reported as [`RootSet::Unsupported`] rather than failing.

use std::fmt::Display;

use itertools::Itertools;
use num::complex::Complex64;

use crate::{complex::complex_fmt, Poly};

/// A single entry of a [`RootSet`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Root {
    Real(f64),

    /// Two complex conjugate roots `re ± j·im_pos`, with `im_neg = -im_pos`
    /// and `im_pos > 0`.
    ComplexPair { re: f64, im_pos: f64, im_neg: f64 },
}

impl Root {
    /// The roots this entry stands for: one for a real root, two for a
    /// conjugate pair (positive imaginary part first).
    #[must_use]
    pub fn to_complex(&self) -> Vec<Complex64> {
        match *self {
            Self::Real(x) => vec![Complex64::new(x, 0.0)],
            Self::ComplexPair { re, im_pos, im_neg } => {
                vec![Complex64::new(re, im_pos), Complex64::new(re, im_neg)]
            }
        }
    }

    /// Number of roots this entry stands for
    #[must_use]
    pub const fn multiplicity(&self) -> usize {
        match self {
            Self::Real(_) => 1,
            Self::ComplexPair { .. } => 2,
        }
    }
}

/// Formats like [`complex_fmt`], a conjugate pair prints both roots
/// separated by `", "`.
impl Display for Root {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.to_complex().into_iter().map(complex_fmt).join(", ");
        f.write_str(&s)
    }
}

/// Outcome of root finding on a polynomial.
#[derive(Clone, Debug, PartialEq)]
pub enum RootSet {
    /// The polynomial is a constant (or empty) and has no roots
    Constant,

    /// Roots of a polynomial of degree 1 or 2, in formula order
    Found(Vec<Root>),

    /// The polynomial has degree 3 or more, which has no closed-form
    /// solver here. This is a limitation, not a property of the polynomial.
    Unsupported { degree: usize },
}

impl RootSet {
    /// The root entries, empty for [`RootSet::Constant`] and
    /// [`RootSet::Unsupported`]
    #[must_use]
    pub fn roots(&self) -> &[Root] {
        match self {
            Self::Found(roots) => roots.as_slice(),
            Self::Constant | Self::Unsupported { .. } => &[],
        }
    }

    /// Every individual root, conjugate pairs expanded
    #[must_use]
    pub fn to_complex_vec(&self) -> Vec<Complex64> {
        self.roots().iter().flat_map(Root::to_complex).collect_vec()
    }

    /// Number of individual roots, a conjugate pair counts twice
    #[must_use]
    pub fn count(&self) -> usize {
        self.roots().iter().map(Root::multiplicity).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots().is_empty()
    }

    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

impl Poly {
    /// Roots of polynomials up to degree 2.
    ///
    /// Leading coefficients are used as given; a zero leading coefficient
    /// yields non-finite roots.
    ///
    /// ```
    /// use rust_bode::{poly, Root, RootSet};
    ///
    /// assert_eq!(poly![2.0].roots(), RootSet::Constant);
    /// assert_eq!(poly![2.0, 4.0].roots(), RootSet::Found(vec![Root::Real(-2.0)]));
    /// assert_eq!(
    ///     poly![1.0, 0.0, 1.0].roots(),
    ///     RootSet::Found(vec![Root::ComplexPair { re: 0.0, im_pos: 1.0, im_neg: -1.0 }])
    /// );
    /// assert_eq!(poly![1.0, 2.0, 3.0, 2.0, 1.0].roots(), RootSet::Unsupported { degree: 4 });
    /// ```
    #[must_use]
    pub fn roots(&self) -> RootSet {
        match *self.as_slice() {
            [] | [_] => RootSet::Constant,
            [a, b] => RootSet::Found(vec![linear_root(a, b)]),
            [a, b, c] => RootSet::Found(quadratic_roots(a, b, c)),
            _ => {
                let degree = self.len() - 1;
                log::debug!("no closed-form roots {{degree: {degree}}}");
                RootSet::Unsupported { degree }
            }
        }
    }
}

fn linear_root(a: f64, b: f64) -> Root {
    Root::Real(-b / a)
}

/// Quadratic formula, real roots in `[+, -]` branch order
fn quadratic_roots(a: f64, b: f64, c: f64) -> Vec<Root> {
    let discriminant = b * b - 4.0 * a * c;
    if discriminant >= 0.0 {
        let sqrt_d = discriminant.sqrt();
        return vec![
            Root::Real((-b + sqrt_d) / (2.0 * a)),
            Root::Real((-b - sqrt_d) / (2.0 * a)),
        ];
    }
    let re = -b / (2.0 * a);
    let im = ((-discriminant).sqrt() / (2.0 * a)).abs();
    vec![Root::ComplexPair {
        re,
        im_pos: im,
        im_neg: -im,
    }]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::__testing::check_roots;

    #[test]
    fn constant() {
        assert_eq!(poly![5.0].roots(), RootSet::Constant);
        assert_eq!(poly![].roots(), RootSet::Constant);
        assert!(poly![5.0].roots().is_empty());
        assert!(!poly![5.0].roots().is_unsupported());
    }

    #[test]
    fn linear() {
        assert_eq!(poly![1.0, 10.0].roots().roots(), &[Root::Real(-10.0)]);
        assert_eq!(poly![4.0, -2.0].roots().roots(), &[Root::Real(0.5)]);
    }

    #[test]
    fn double_root() {
        let roots = poly![1.0, 2.0, 1.0].roots();
        assert_eq!(roots.roots(), &[Root::Real(-1.0), Root::Real(-1.0)]);
        assert_eq!(roots.count(), 2);
    }

    #[test]
    fn distinct_real_roots_branch_order() {
        // (s + 1)(s + 3)
        assert_eq!(
            poly![1.0, 4.0, 3.0].roots().roots(),
            &[Root::Real(-1.0), Root::Real(-3.0)]
        );
    }

    #[test]
    fn complex_pair() {
        let roots = poly![1.0, 0.0, 1.0].roots();
        assert_eq!(
            roots.to_complex_vec(),
            vec![complex!(0.0, 1.0), complex!(0.0, -1.0)]
        );
        assert_eq!(roots.count(), 2);
        assert_eq!(roots.roots().len(), 1);
    }

    #[test]
    fn complex_pair_negative_leading() {
        // -(s^2 + 2s + 5), roots -1 ± 2j
        let roots = poly![-1.0, -2.0, -5.0].roots();
        assert_eq!(
            roots.roots(),
            &[Root::ComplexPair {
                re: -1.0,
                im_pos: 2.0,
                im_neg: -2.0
            }]
        );
    }

    #[test]
    fn roots_evaluate_to_zero() {
        for p in [poly![1.0, 0.1, 0.01], poly![2.0, -3.0, 1.0], poly![0.5, 1.0]] {
            for z in p.roots().to_complex_vec() {
                assert!(p.eval(z).norm() < 1E-12, "{p}: {z}");
            }
        }
    }

    #[test]
    fn default_denominator() {
        // s^2 + 0.1s + 0.01 has roots -0.05 ± j·sqrt(0.0075)
        let im = 0.0075_f64.sqrt();
        assert!(check_roots(
            poly![1.0, 0.1, 0.01].roots().to_complex_vec(),
            vec![complex!(-0.05, -im), complex!(-0.05, im)],
            1E-12
        ));
    }

    #[test]
    fn unsupported() {
        let roots = poly![1.0, 2.0, 3.0, 2.0, 1.0].roots();
        assert_eq!(roots, RootSet::Unsupported { degree: 4 });
        assert!(roots.is_empty());
        assert!(roots.is_unsupported());
        assert_ne!(roots, RootSet::Constant);
        assert!(poly![1.0, 0.0, 0.0, 1.0].roots().is_unsupported());
    }

    #[test]
    fn display() {
        assert_eq!(Root::Real(-1.0).to_string(), "-1.000");
        assert_eq!(
            poly![1.0, 0.1, 0.01].roots().roots()[0].to_string(),
            "-0.050 + 0.087j, -0.050 - 0.087j"
        );
    }
}
