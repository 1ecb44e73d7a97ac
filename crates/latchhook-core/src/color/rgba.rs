//! 8-bit RGBA color type
//!
//! [`Color`] is the value every pipeline stage reads and writes. Equality,
//! hashing and ordering are all defined over the `(r, g, b, a)` tuple.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// An 8-bit-per-channel RGBA color.
///
/// Whatever the storage of the source image (gray, paletted, 16-bit), it is
/// converted into this one representation before analysis.
///
/// The derived `Ord` compares channels in `r, g, b, a` order; palette
/// construction uses it to break frequency ties deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (0 = fully transparent, 255 = opaque)
    pub a: u8,
}

impl Color {
    /// Fully transparent black, the zero value of a raster.
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Create a color from all four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create an opaque gray with the given intensity.
    #[inline]
    pub const fn gray(value: u8) -> Self {
        Self::rgb(value, value, value)
    }

    /// Channel tuple as `[r, g, b, a]`.
    #[inline]
    pub fn channels(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Luma of this color using Rec. 601 weights, keeping alpha.
    ///
    /// Fixed-point weights sum to 65536 so white stays 255.
    ///
    /// ```
    /// use latchhook_core::Color;
    /// assert_eq!(Color::WHITE.to_luma(), Color::WHITE);
    /// assert_eq!(Color::rgb(255, 0, 0).to_luma(), Color::gray(76));
    /// ```
    pub fn to_luma(self) -> Color {
        let y = (19595 * self.r as u32 + 38470 * self.g as u32 + 7471 * self.b as u32 + (1 << 15))
            >> 16;
        Color::new(y as u8, y as u8, y as u8, self.a)
    }

    /// Hex representation, `#RRGGBB` for opaque colors and `#RRGGBBAA` otherwise.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl From<[u8; 4]> for Color {
    #[inline]
    fn from(c: [u8; 4]) -> Self {
        Color::new(c[0], c[1], c[2], c[3])
    }
}

impl From<[u8; 3]> for Color {
    #[inline]
    fn from(c: [u8; 3]) -> Self {
        Color::rgb(c[0], c[1], c[2])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Accepts `#RGB`, `#RRGGBB` and `#RRGGBBAA`, with or without the hash.
    /// Parsing is case-insensitive and surrounding whitespace is trimmed.
    ///
    /// ```
    /// use latchhook_core::Color;
    ///
    /// let red: Color = "#F00".parse().unwrap();
    /// assert_eq!(red, Color::rgb(255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match s.len() {
            3 => {
                // Shorthand: 0xF -> 0xFF
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Color::rgb(r, g, b))
            }
            6 | 8 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                let a = if s.len() == 8 {
                    u8::from_str_radix(&s[6..8], 16)?
                } else {
                    255
                };
                Ok(Color::new(r, g, b, a))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
