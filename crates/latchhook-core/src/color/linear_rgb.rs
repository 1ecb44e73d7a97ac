//! Linear RGB color type
//!
//! Linear RGB is the intermediate step between 8-bit colors and Oklab.

use super::lut::srgb8_to_linear;
use super::rgba::Color;

/// A color in linear RGB color space.
///
/// Values represent light intensity proportional to physical light power,
/// in the range 0.0..=1.0 for colors decoded from 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f32,
    /// Green channel (linear light intensity)
    pub g: f32,
    /// Blue channel (linear light intensity)
    pub b: f32,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl From<Color> for LinearRgb {
    /// Gamma-decode the color channels. Alpha is dropped.
    fn from(color: Color) -> Self {
        Self {
            r: srgb8_to_linear(color.r),
            g: srgb8_to_linear(color.g),
            b: srgb8_to_linear(color.b),
        }
    }
}
