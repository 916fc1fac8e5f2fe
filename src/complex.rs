//! Arithmetic primitives on [`Complex64`].
//!
//! These are thin, explicit wrappers so the evaluation code reads term by
//! term. Every function takes its operands by value and returns a new value.

use num::{complex::Complex64, One};

#[must_use]
#[inline]
pub fn c_add(a: Complex64, b: Complex64) -> Complex64 {
    Complex64::new(a.re + b.re, a.im + b.im)
}

#[must_use]
#[inline]
pub fn c_mul(a: Complex64, b: Complex64) -> Complex64 {
    Complex64::new(a.re * b.re - a.im * b.im, a.re * b.im + a.im * b.re)
}

/// Complex division.
///
/// There is no guard against a zero divisor: dividing by `(0, 0)` gives
/// NaN or infinite components, exactly as IEEE-754 arithmetic produces them.
///
/// ```
/// use rust_bode::{complex, complex::c_div};
///
/// assert_eq!(c_div(complex!(1.0, 1.0), complex!(0.0, 1.0)), complex!(1.0, -1.0));
/// assert!(c_div(complex!(1.0), complex!(0.0)).re.is_nan());
/// ```
#[must_use]
#[inline]
pub fn c_div(a: Complex64, b: Complex64) -> Complex64 {
    let denom = b.re * b.re + b.im * b.im;
    Complex64::new(
        (a.re * b.re + a.im * b.im) / denom,
        (a.im * b.re - a.re * b.im) / denom,
    )
}

/// Raise to a non-negative integer power by repeated multiplication.
#[must_use]
pub fn c_powu(base: Complex64, exp: u32) -> Complex64 {
    if exp == 0 {
        return Complex64::one();
    }

    if exp == 1 {
        return base;
    }

    let mut res = base;
    for _ in 2..=exp {
        res = c_mul(res, base);
    }
    res
}

#[must_use]
#[inline]
pub fn c_magnitude(c: Complex64) -> f64 {
    (c.re * c.re + c.im * c.im).sqrt()
}

/// Argument in degrees, in the range (-180, 180]. The phase of zero is zero.
#[must_use]
#[inline]
pub fn c_phase_deg(c: Complex64) -> f64 {
    c.im.atan2(c.re) * 180.0 / std::f64::consts::PI
}

/// Formatting used when listing poles and zeros.
///
/// Values with a negligible imaginary part print as a plain real number.
///
/// ```
/// use rust_bode::{complex, complex::complex_fmt};
///
/// assert_eq!(complex_fmt(complex!(-1.0)), "-1.000");
/// assert_eq!(complex_fmt(complex!(-0.05, 0.0866)), "-0.050 + 0.087j");
/// assert_eq!(complex_fmt(complex!(-0.05, -0.0866)), "-0.050 - 0.087j");
/// ```
#[must_use]
pub fn complex_fmt(c: Complex64) -> String {
    if c.im.abs() < 1E-10 {
        return format!("{:.3}", c.re);
    }
    let sign = if c.im >= 0.0 { '+' } else { '-' };
    format!("{:.3} {sign} {:.3}j", c.re, c.im.abs())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn add_mul() {
        let a = complex!(1.0, 2.0);
        let b = complex!(3.0, -1.0);
        assert_eq!(c_add(a, b), complex!(4.0, 1.0));
        assert_eq!(c_mul(a, b), complex!(5.0, 5.0));
        assert_eq!(c_mul(a, b), a * b);
    }

    #[test]
    fn div_matches_num() {
        let a = complex!(1.5, -2.0);
        let b = complex!(-0.5, 4.0);
        let q = c_div(a, b);
        let expected = a / b;
        assert!((q - expected).norm() < 1E-15);
    }

    #[test]
    fn div_by_zero_is_not_finite() {
        let q = c_div(complex!(1.0, 1.0), complex!(0.0, 0.0));
        assert!(q.re.is_nan());
        assert!(q.im.is_nan());
    }

    #[test]
    fn powu() {
        let j = complex!(0.0, 1.0);
        assert_eq!(c_powu(j, 0), complex!(1.0));
        assert_eq!(c_powu(j, 1), j);
        assert_eq!(c_powu(j, 2), complex!(-1.0));
        assert_eq!(c_powu(j, 3), complex!(0.0, -1.0));
        assert_eq!(c_powu(j, 4), complex!(1.0));
        assert_eq!(c_powu(complex!(2.0), 10), complex!(1024.0));
    }

    #[test]
    fn magnitude_and_phase() {
        assert_eq!(c_magnitude(complex!(3.0, 4.0)), 5.0);
        assert_eq!(c_phase_deg(complex!(0.0, 0.0)), 0.0);
        assert!((c_phase_deg(complex!(1.0, 1.0)) - 45.0).abs() < 1E-12);
        assert!((c_phase_deg(complex!(0.0, -1.0)) + 90.0).abs() < 1E-12);
        assert!((c_phase_deg(complex!(-1.0, 0.0)) - 180.0).abs() < 1E-12);
    }

    #[test]
    fn fmt() {
        assert_eq!(complex_fmt(complex!(0.0, 1.0)), "0.000 + 1.000j");
        assert_eq!(complex_fmt(complex!(2.0, 1E-12)), "2.000");
    }
}
