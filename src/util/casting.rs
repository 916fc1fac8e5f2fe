use num::cast;

pub(crate) fn usize_to_u32(x: usize) -> u32 {
    x.try_into().unwrap_or(u32::MAX)
}

/// Cast with loss of precision, explicitly clamping out of bounds values instead
/// of panicking (also shuts up clippy 📎)
pub(crate) fn usize_to_f64(x: usize) -> f64 {
    cast(x).unwrap_or(f64::INFINITY)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn clamps() {
        assert_eq!(usize_to_u32(7), 7);
        assert_eq!(usize_to_u32(usize::MAX), u32::MAX);
        assert_eq!(usize_to_f64(200), 200.0);
    }
}
