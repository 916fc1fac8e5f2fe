use thiserror::Error;

/// Errors raised when a frequency sweep is requested with invalid parameters.
///
/// Malformed coefficients, singular denominators and unsupported root degrees
/// are not errors. They degrade to empty or non-finite results instead.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("minimum frequency must be positive and finite, got {0}")]
    NonPositiveFreqMin(f64),

    #[error("maximum frequency must be finite and above the minimum ({min}), got {max}")]
    InvalidFreqMax { min: f64, max: f64 },

    #[error("a sweep needs at least 2 points, got {0}")]
    TooFewPoints(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
