//! Evaluation of `H(jω) = N(jω) / D(jω)` into magnitude and phase.

use std::fmt::Display;

use itertools::Itertools;
use num::complex::Complex64;

use crate::{
    complex::{c_div, c_magnitude, c_phase_deg},
    util::doc_macros::non_finite_output,
    Poly,
};

/// One sample of a frequency response.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResponsePoint {
    /// Angular frequency in rad/s
    pub omega: f64,
    /// `20 log10 |H(jω)|`
    pub magnitude_db: f64,
    /// `arg H(jω)` in degrees, in (-180, 180]
    pub phase_deg: f64,
}

impl ResponsePoint {
    /// True when both magnitude and phase are finite, i.e. the point can be
    /// plotted.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.magnitude_db.is_finite() && self.phase_deg.is_finite()
    }
}

/// A summary-table row: `ω  K (dB)  φ (deg)`.
///
/// ```
/// use rust_bode::ResponsePoint;
///
/// let row = ResponsePoint { omega: 0.01, magnitude_db: -3.0103, phase_deg: -45.0 };
/// assert_eq!(row.to_string(), "0.010\t-3.01\t-45.00°");
/// let row = ResponsePoint { omega: 10.0, magnitude_db: 0.0, phase_deg: 5.711 };
/// assert_eq!(row.to_string(), "10.0\t0.00\t5.71°");
/// ```
impl Display for ResponsePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.omega < 1.0 {
            write!(f, "{:.3}", self.omega)?;
        } else {
            write!(f, "{:.1}", self.omega)?;
        }
        write!(f, "\t{:.2}\t{:.2}°", self.magnitude_db, self.phase_deg)
    }
}

/// Rational transfer function `H(s) = N(s) / D(s)` with real coefficients.
#[derive(Clone, Debug, PartialEq)]
pub struct TransferFunction {
    pub numerator: Poly,
    pub denominator: Poly,
}

impl TransferFunction {
    #[must_use]
    pub const fn new(numerator: Poly, denominator: Poly) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// `H(jω)`.
    ///
    #[doc = non_finite_output!()]
    #[must_use]
    pub fn eval_jw(&self, omega: f64) -> Complex64 {
        c_div(self.numerator.eval_jw(omega), self.denominator.eval_jw(omega))
    }

    /// Magnitude in dB and phase in degrees at a single frequency.
    ///
    /// ```
    /// use rust_bode::{poly, TransferFunction};
    ///
    /// // first order low-pass 1 / (s + 1) at its corner frequency
    /// let h = TransferFunction::new(poly![1.0], poly![1.0, 1.0]);
    /// let p = h.response_at(1.0);
    /// assert!((p.magnitude_db + 3.0103).abs() < 1E-4);
    /// assert!((p.phase_deg + 45.0).abs() < 1E-12);
    /// ```
    ///
    #[doc = non_finite_output!()]
    #[must_use]
    pub fn response_at(&self, omega: f64) -> ResponsePoint {
        let h = self.eval_jw(omega);
        let point = ResponsePoint {
            omega,
            magnitude_db: 20.0 * c_magnitude(h).log10(),
            phase_deg: c_phase_deg(h),
        };
        log::trace!(
            "{{omega: {omega}, h: {h}, magnitude_db: {}, phase_deg: {}}}",
            point.magnitude_db,
            point.phase_deg
        );
        point
    }

    /// One [`ResponsePoint`] per frequency, in the order given.
    ///
    #[doc = non_finite_output!()]
    pub fn response(&self, omegas: impl IntoIterator<Item = f64>) -> Vec<ResponsePoint> {
        omegas
            .into_iter()
            .map(|omega| self.response_at(omega))
            .collect_vec()
    }
}

/// `H(s) = (<numerator>) / (<denominator>)`, see [`Poly`]'s `Display`.
impl Display for TransferFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "H(s) = ({}) / ({})", self.numerator, self.denominator)
    }
}
