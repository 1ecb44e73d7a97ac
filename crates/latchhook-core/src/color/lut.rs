//! Gamma lookup table access
//!
//! The table is generated at compile time by build.rs.

include!(concat!(env!("OUT_DIR"), "/gamma_lut.rs"));

/// Convert an 8-bit sRGB channel to linear light.
#[inline]
pub fn srgb8_to_linear(value: u8) -> f32 {
    SRGB8_TO_LINEAR[value as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb8_to_linear_boundaries() {
        assert!(srgb8_to_linear(0).abs() < 1e-6);
        assert!((srgb8_to_linear(255) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_srgb8_to_linear_known_value() {
        // ((128/255 + 0.055) / 1.055)^2.4 = 0.215861...
        assert!((srgb8_to_linear(128) - 0.21586).abs() < 1e-4);
    }

    #[test]
    fn test_monotonicity() {
        let mut prev = srgb8_to_linear(0);
        for v in 1..=255u8 {
            let curr = srgb8_to_linear(v);
            assert!(curr > prev, "srgb8_to_linear not strictly increasing at {v}");
            prev = curr;
        }
    }
}
