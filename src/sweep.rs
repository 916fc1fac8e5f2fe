//! Frequency sweeps in rad/s.

use crate::{
    error::{Error, Result},
    util::{casting::usize_to_f64, doc_macros::errors_invalid_sweep},
};

/// The frequencies of the summary table. Fixed, whatever the sweep settings.
pub const DECADES: [f64; 6] = [0.001, 0.01, 0.1, 1.0, 10.0, 100.0];

/// Parameters of a logarithmic frequency sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepConfig {
    /// Lowest frequency in rad/s, must be positive
    pub freq_min: f64,
    /// Highest frequency in rad/s, must be above `freq_min`
    pub freq_max: f64,
    /// Number of samples, at least 2
    pub num_points: usize,
}

impl Default for SweepConfig {
    /// 200 points from 0.001 to 100 rad/s
    fn default() -> Self {
        Self {
            freq_min: 0.001,
            freq_max: 100.0,
            num_points: 200,
        }
    }
}

impl SweepConfig {
    /// Build a configuration. Parameters are checked when a sweep is
    /// requested, not here.
    #[must_use]
    pub const fn new(freq_min: f64, freq_max: f64, num_points: usize) -> Self {
        Self {
            freq_min,
            freq_max,
            num_points,
        }
    }

    /// Check the sweep preconditions.
    ///
    /// # Errors
    #[doc = errors_invalid_sweep!()]
    pub fn validate(&self) -> Result<()> {
        if !(self.freq_min.is_finite() && self.freq_min > 0.0) {
            return Err(Error::NonPositiveFreqMin(self.freq_min));
        }
        if !(self.freq_max.is_finite() && self.freq_max > self.freq_min) {
            return Err(Error::InvalidFreqMax {
                min: self.freq_min,
                max: self.freq_max,
            });
        }
        if self.num_points < 2 {
            return Err(Error::TooFewPoints(self.num_points));
        }
        Ok(())
    }

    /// Logarithmically spaced frequencies from `freq_min` to `freq_max`.
    ///
    /// ```
    /// use rust_bode::SweepConfig;
    ///
    /// let omegas: Vec<f64> = SweepConfig::new(0.1, 1000.0, 5).log_sweep().unwrap().collect();
    /// assert_eq!(omegas.len(), 5);
    /// assert!((omegas[0] - 0.1).abs() < 1E-12);
    /// assert!((omegas[2] - 10.0).abs() < 1E-9);
    /// assert!((omegas[4] - 1000.0).abs() < 1E-9);
    /// ```
    ///
    /// # Errors
    #[doc = errors_invalid_sweep!()]
    pub fn log_sweep(&self) -> Result<LogSweep> {
        self.validate()?;
        let log_min = self.freq_min.log10();
        let log_max = self.freq_max.log10();
        Ok(LogSweep {
            log_min,
            step: (log_max - log_min) / usize_to_f64(self.num_points - 1),
            next: 0,
            len: self.num_points,
        })
    }
}

/// Iterator over a logarithmic sweep, see [`SweepConfig::log_sweep`].
///
/// Each value is computed from its index, so there is no accumulated drift.
#[derive(Clone, Debug)]
pub struct LogSweep {
    log_min: f64,
    step: f64,
    next: usize,
    len: usize,
}

impl LogSweep {
    fn omega(&self, i: usize) -> f64 {
        10f64.powf(usize_to_f64(i).mul_add(self.step, self.log_min))
    }
}

impl Iterator for LogSweep {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.len {
            return None;
        }
        let omega = self.omega(self.next);
        self.next += 1;
        Some(omega)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LogSweep {}

/// The decade frequencies `0.001, 0.01, ..., 100` rad/s.
///
/// ```
/// use rust_bode::decade_sweep;
///
/// let omegas: Vec<f64> = decade_sweep().collect();
/// assert_eq!(omegas, [0.001, 0.01, 0.1, 1.0, 10.0, 100.0]);
/// ```
pub fn decade_sweep() -> impl ExactSizeIterator<Item = f64> + Clone {
    DECADES.into_iter()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::__testing::almost_eq;

    #[test]
    fn default_matches_decades() {
        let config = SweepConfig::default();
        assert_eq!(config.freq_min, DECADES[0]);
        assert_eq!(config.freq_max, DECADES[5]);
        assert_eq!(config.num_points, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn endpoints_and_monotonic() {
        for (min, max, n) in [(0.001, 100.0, 200), (1.0, 2.0, 2), (3.7, 91.2, 17), (1E-6, 1E6, 1000)] {
            let omegas: Vec<f64> = SweepConfig::new(min, max, n).log_sweep().unwrap().collect();
            assert_eq!(omegas.len(), n);
            assert!(almost_eq(omegas[0], min, 1E-12), "{} != {min}", omegas[0]);
            assert!(almost_eq(omegas[n - 1], max, 1E-12), "{} != {max}", omegas[n - 1]);
            assert!(omegas.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn exact_size() {
        let mut sweep = SweepConfig::new(1.0, 10.0, 4).log_sweep().unwrap();
        assert_eq!(sweep.len(), 4);
        sweep.next();
        assert_eq!(sweep.len(), 3);
        assert_eq!(sweep.by_ref().count(), 3);
        assert_eq!(sweep.next(), None);
    }

    #[test]
    fn fresh_each_call() {
        let config = SweepConfig::new(0.5, 50.0, 9);
        let a: Vec<f64> = config.log_sweep().unwrap().collect();
        let b: Vec<f64> = config.log_sweep().unwrap().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid() {
        assert_eq!(
            SweepConfig::new(0.0, 1.0, 10).validate(),
            Err(Error::NonPositiveFreqMin(0.0))
        );
        assert_eq!(
            SweepConfig::new(-1.0, 1.0, 10).validate(),
            Err(Error::NonPositiveFreqMin(-1.0))
        );
        assert!(matches!(
            SweepConfig::new(f64::NAN, 1.0, 10).validate(),
            Err(Error::NonPositiveFreqMin(_))
        ));
        assert_eq!(
            SweepConfig::new(10.0, 10.0, 10).validate(),
            Err(Error::InvalidFreqMax {
                min: 10.0,
                max: 10.0
            })
        );
        assert!(matches!(
            SweepConfig::new(1.0, f64::INFINITY, 10).log_sweep(),
            Err(Error::InvalidFreqMax { .. })
        ));
        assert_eq!(
            SweepConfig::new(1.0, 10.0, 1).validate(),
            Err(Error::TooFewPoints(1))
        );
    }

    #[test]
    fn decades_are_fixed() {
        let _ = SweepConfig::new(5.0, 6.0, 3);
        assert_eq!(
            decade_sweep().collect::<Vec<_>>(),
            vec![0.001, 0.01, 0.1, 1.0, 10.0, 100.0]
        );
        assert_eq!(decade_sweep().len(), 6);
    }
}
