//! Reading coefficient lists from free text.

use itertools::Itertools;

/// Parse whitespace separated coefficients, highest power first.
///
/// Reading is lenient: each token contributes the longest prefix that reads
/// as a decimal number, and tokens without one are dropped silently. Only
/// finite values are kept. Empty or fully invalid input gives an empty list.
///
/// ```
/// use rust_bode::parse::parse_coefficients;
///
/// assert_eq!(parse_coefficients("1 2 1"), vec![1.0, 2.0, 1.0]);
/// assert_eq!(parse_coefficients("1 abc 2"), vec![1.0, 2.0]);
/// assert_eq!(parse_coefficients("  0.5s\t1e-2  "), vec![0.5, 0.01]);
/// assert!(parse_coefficients("").is_empty());
/// ```
#[must_use]
pub fn parse_coefficients(text: &str) -> Vec<f64> {
    text.split_whitespace()
        .filter_map(|token| {
            let value = parse_token(token);
            if value.is_none() {
                log::debug!("dropping malformed coefficient {{token: {token:?}}}");
            }
            value
        })
        .collect_vec()
}

/// Longest numeric prefix of `token`, if it is finite.
fn parse_token(token: &str) -> Option<f64> {
    let end = numeric_prefix_len(token);
    if end == 0 {
        return None;
    }
    token[..end].parse::<f64>().ok().filter(|x| x.is_finite())
}

/// Length in bytes of the longest prefix of `s` of the form
/// `[+-]? digits? (. digits?)? ([eE] [+-]? digits)?` containing at least one
/// mantissa digit. Returns 0 if there is no such prefix.
fn numeric_prefix_len(s: &str) -> usize {
    let b = s.as_bytes();
    let mut i = 0;

    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }

    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < b.len() && b[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        mantissa_digits += j - frac_start;
        if mantissa_digits > 0 {
            i = j;
        }
    }

    if mantissa_digits == 0 {
        return 0;
    }

    // exponent only counts if it has digits
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}
