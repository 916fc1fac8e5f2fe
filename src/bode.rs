//! One-shot computation of everything a Bode plot view needs.

use crate::{
    error::Result,
    response::{ResponsePoint, TransferFunction},
    roots::RootSet,
    sweep::{decade_sweep, SweepConfig},
    util::doc_macros::{errors_invalid_sweep, non_finite_output},
    Poly,
};

/// Sweep data, decade table, poles and zeros of one transfer function.
#[derive(Clone, Debug, PartialEq)]
pub struct BodeResponse {
    /// One point per frequency of the logarithmic sweep
    pub sweep_points: Vec<ResponsePoint>,
    /// One point per decade from 0.001 to 100 rad/s
    pub decade_points: Vec<ResponsePoint>,
    /// Zeros of `H(s)`
    pub numerator_roots: RootSet,
    /// Poles of `H(s)`
    pub denominator_roots: RootSet,
    pub transfer_function: TransferFunction,
}

impl BodeResponse {
    /// Human readable `H(s) = (...) / (...)`
    #[must_use]
    pub fn label(&self) -> String {
        self.transfer_function.to_string()
    }

    #[must_use]
    pub const fn zeros(&self) -> &RootSet {
        &self.numerator_roots
    }

    #[must_use]
    pub const fn poles(&self) -> &RootSet {
        &self.denominator_roots
    }
}

/// Parse both coefficient lists and compute the full response.
///
/// Returns `Ok(None)` if either text contains no usable coefficient; that
/// check comes before the sweep parameters are looked at. Every call starts
/// from scratch, nothing is cached.
///
/// ```
/// use rust_bode::{compute_response, SweepConfig};
///
/// let config = SweepConfig::default();
/// assert!(compute_response("", "1 1", &config).unwrap().is_none());
/// assert!(compute_response("1", "s", &config).unwrap().is_none());
///
/// let response = compute_response("1", "1 0.1 0.01", &config).unwrap().unwrap();
/// assert_eq!(response.sweep_points.len(), 200);
/// assert_eq!(response.poles().count(), 2);
/// ```
///
#[doc = non_finite_output!()]
///
/// # Errors
#[doc = errors_invalid_sweep!()]
pub fn compute_response(
    numerator_text: &str,
    denominator_text: &str,
    config: &SweepConfig,
) -> Result<Option<BodeResponse>> {
    let numerator = Poly::parse(numerator_text);
    let denominator = Poly::parse(denominator_text);
    if numerator.is_empty() || denominator.is_empty() {
        log::debug!(
            "no transfer function {{numerator: {numerator_text:?}, denominator: {denominator_text:?}}}"
        );
        return Ok(None);
    }

    let sweep = config.log_sweep()?;
    let transfer_function = TransferFunction::new(numerator, denominator);
    log::debug!("computing response {{tf: \"{transfer_function}\", config: {config:?}}}");

    let sweep_points = transfer_function.response(sweep);
    let decade_points = transfer_function.response(decade_sweep());
    let numerator_roots = transfer_function.numerator.roots();
    let denominator_roots = transfer_function.denominator.roots();

    let singular = sweep_points.iter().filter(|p| !p.is_finite()).count();
    if singular > 0 {
        log::debug!("sweep contains non-finite points {{count: {singular}}}");
    }

    Ok(Some(BodeResponse {
        sweep_points,
        decade_points,
        numerator_roots,
        denominator_roots,
        transfer_function,
    }))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{roots::Root, Error};

    #[test]
    fn no_data() {
        let config = SweepConfig::default();
        assert_eq!(compute_response("", "1", &config), Ok(None));
        assert_eq!(compute_response("1", "   ", &config), Ok(None));
        assert_eq!(compute_response("a b", "c", &config), Ok(None));
    }

    #[test]
    fn no_data_wins_over_bad_config() {
        let config = SweepConfig::new(-1.0, 1.0, 0);
        assert_eq!(compute_response("", "1", &config), Ok(None));
    }

    #[test]
    fn bad_config() {
        let config = SweepConfig::new(10.0, 1.0, 5);
        assert_eq!(
            compute_response("1", "1 1", &config),
            Err(Error::InvalidFreqMax {
                min: 10.0,
                max: 1.0
            })
        );
    }

    #[test]
    fn default_system() {
        let response = compute_response("1", "1 0.1 0.01", &SweepConfig::default())
            .unwrap()
            .unwrap();
        assert_eq!(response.label(), "H(s) = (1) / (1s^2 + 0.1s + 0.01)");
        assert_eq!(response.sweep_points.len(), 200);
        assert_eq!(response.decade_points.len(), 6);
        assert_eq!(*response.zeros(), RootSet::Constant);
        assert!(matches!(
            response.poles().roots(),
            [Root::ComplexPair { .. }]
        ));
        assert!(response.sweep_points.iter().all(ResponsePoint::is_finite));
    }

    #[test]
    fn decade_points_ignore_config() {
        let response = compute_response("1", "1 1", &SweepConfig::new(5.0, 6.0, 2))
            .unwrap()
            .unwrap();
        let omegas: Vec<f64> = response.decade_points.iter().map(|p| p.omega).collect();
        assert_eq!(omegas, [0.001, 0.01, 0.1, 1.0, 10.0, 100.0]);
        assert_eq!(response.sweep_points.len(), 2);
    }
}
