//! Macros for reducing doc comment boilerplate.

/// Documents the errors returned for invalid sweep parameters.
macro_rules! errors_invalid_sweep {
    () => {
        r"- `NonPositiveFreqMin`: the minimum frequency is not finite or not positive.
- `InvalidFreqMax`: the maximum frequency is not finite or not above the minimum.
- `TooFewPoints`: fewer than 2 points were requested.
"
    };
}
pub(crate) use errors_invalid_sweep;

/// Documents that singular points are propagated rather than reported.
macro_rules! non_finite_output {
    () => {
        r"If the denominator vanishes at a sampled frequency, or the response is exactly zero there, the corresponding values are NaN or infinite. They are passed through as-is; see [`ResponsePoint::is_finite`](crate::ResponsePoint::is_finite).
"
    };
}
pub(crate) use non_finite_output;
