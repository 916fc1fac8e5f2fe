//! Frequency response of real rational transfer functions.
//!
//! A transfer function `H(s) = N(s) / D(s)` is given as two lists of real
//! coefficients, highest power first. The crate evaluates `H(jω)` over a
//! logarithmic sweep to produce Bode plot data (magnitude in dB, phase in
//! degrees), a fixed decade table, and the poles and zeros of low order
//! polynomials.
//!
//! ```
//! use rust_bode::{compute_response, SweepConfig};
//!
//! let config = SweepConfig::new(0.01, 100.0, 50);
//! let response = compute_response("1", "1 1", &config).unwrap().unwrap();
//!
//! assert_eq!(response.sweep_points.len(), 50);
//! assert_eq!(response.decade_points.len(), 6);
//! assert_eq!(response.label(), "H(s) = (1) / (1s + 1)");
//! ```
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Build a [`Poly`] from real coefficients, highest power first.
///
/// ```
/// use rust_bode::{poly, Poly};
///
/// assert_eq!(poly![1.0, 2.0, 1.0], Poly::from(vec![1.0, 2.0, 1.0]));
/// assert!(poly![].is_empty());
/// ```
#[macro_export]
macro_rules! poly {
    () => {
        $crate::Poly::from(::std::vec::Vec::<f64>::new())
    };
    ($($c:expr),+ $(,)?) => {
        $crate::Poly::from(::std::vec![$($c as f64),+])
    };
}

/// Shorthand for building a [`Complex64`].
///
/// ```
/// use rust_bode::{complex, Complex64};
///
/// assert_eq!(complex!(1.0), Complex64::new(1.0, 0.0));
/// assert_eq!(complex!(1.0, -2.0), Complex64::new(1.0, -2.0));
/// ```
#[macro_export]
macro_rules! complex {
    ($re:expr) => {
        $crate::Complex64::new($re, 0.0)
    };
    ($re:expr, $im:expr) => {
        $crate::Complex64::new($re, $im)
    };
}

pub use num;
pub use num::complex::Complex64;

mod util;
#[doc(hidden)]
pub use util::__testing;

pub mod bode;
pub mod complex;
pub mod error;
pub mod parse;
pub mod poly;
pub mod response;
pub mod roots;
pub mod sweep;

pub use bode::{compute_response, BodeResponse};
pub use error::{Error, Result};
pub use poly::Poly;
pub use response::{ResponsePoint, TransferFunction};
pub use roots::{Root, RootSet};
pub use sweep::{decade_sweep, LogSweep, SweepConfig};
