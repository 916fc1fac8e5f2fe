//! Testing utilities, do not depend on any of these in production!

use fastrand::Rng;
use itertools::Itertools;
use num::complex::Complex64;

use crate::Poly;

struct RandStreamF64 {
    state: Rng,
}

impl RandStreamF64 {
    fn new(seed: u64) -> Self {
        Self {
            state: Rng::with_seed(seed),
        }
    }
}

impl Iterator for RandStreamF64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.state.f64())
    }
}

/// Uniformly distributed reals in `[min, max)`
pub struct RandStreamR64 {
    real_stream: RandStreamF64,
    min: f64,
    max: f64,
}

impl RandStreamR64 {
    #[must_use]
    pub fn new(seed: u64, min: f64, max: f64) -> Self {
        assert!(min <= max, "minimum should be smaller or equal to maximum");
        Self {
            real_stream: RandStreamF64::new(seed),
            min,
            max,
        }
    }
}

impl Iterator for RandStreamR64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some((self.real_stream.next()?).mul_add(self.max - self.min, self.min))
    }
}

/// Complex numbers uniformly distributed in a rectangle
pub struct RandStreamC64Cartesian {
    real_stream: RandStreamF64,
    min_re: f64,
    max_re: f64,
    min_im: f64,
    max_im: f64,
}

impl RandStreamC64Cartesian {
    #[must_use]
    pub fn new(seed: u64, min_re: f64, max_re: f64, min_im: f64, max_im: f64) -> Self {
        assert!(
            min_re <= max_re && min_im <= max_im,
            "minimum should be smaller or equal to maximum"
        );
        Self {
            real_stream: RandStreamF64::new(seed),
            min_re,
            max_re,
            min_im,
            max_im,
        }
    }
}

impl Iterator for RandStreamC64Cartesian {
    type Item = Complex64;

    fn next(&mut self) -> Option<Self::Item> {
        let re = (self.real_stream.next()?).mul_add(self.max_re - self.min_re, self.min_re);
        let im = (self.real_stream.next()?).mul_add(self.max_im - self.min_im, self.min_im);
        Some(Complex64::new(re, im))
    }
}

/// Random real polynomials of a fixed degree, coefficients drawn from
/// `coeff_stream`. The leading coefficient is kept away from zero.
pub struct PolyStream<I: Iterator<Item = f64>> {
    degree: usize,
    coeff_stream: I,
}

impl<I: Iterator<Item = f64>> PolyStream<I> {
    pub const fn new(degree: usize, coeff_stream: I) -> Self {
        Self {
            degree,
            coeff_stream,
        }
    }
}

impl<I: Iterator<Item = f64>> Iterator for PolyStream<I> {
    type Item = Poly;

    fn next(&mut self) -> Option<Self::Item> {
        let mut coeffs = (0..=self.degree)
            .map(|_| self.coeff_stream.next())
            .collect::<Option<Vec<f64>>>()?;
        if coeffs[0].abs() < 1E-3 {
            coeffs[0] = 1.0;
        }
        Some(Poly::from(coeffs))
    }
}

/// Check that all roots have been found, regardless of order
#[must_use]
pub fn check_roots(roots1: Vec<Complex64>, mut roots2: Vec<Complex64>, tol: f64) -> bool {
    if roots1.len() != roots2.len() {
        return false;
    }

    for r1 in roots1 {
        let mut best_idx = 0;
        let mut best_d = f64::MAX;
        for (i, r2) in roots2.iter().enumerate() {
            let d = (r1 - r2).norm();
            if d < best_d {
                best_idx = i;
                best_d = d;
            }
        }
        if best_d > tol {
            return false;
        }
        roots2.remove(best_idx);
    }
    true
}

/// Relative-or-absolute closeness, for comparing computed responses against
/// closed-form references.
#[must_use]
pub fn almost_eq(a: f64, b: f64, tol: f64) -> bool {
    if a == b {
        return true;
    }
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= tol * scale
}

/// Pairwise [`almost_eq`] over two slices of equal length
#[must_use]
pub fn all_almost_eq(a: &[f64], b: &[f64], tol: f64) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip_eq(b.iter())
            .all(|(x, y)| almost_eq(*x, *y, tol))
}
