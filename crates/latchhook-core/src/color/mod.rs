//! Color types and conversion utilities
//!
//! Every stage of the pipeline works on [`Color`], a plain 8-bit RGBA value.
//! Perceptual comparisons project colors into [`Oklab`] via [`LinearRgb`].
//!
//! # Example
//!
//! ```
//! use latchhook_core::{Color, LinearRgb, Oklab};
//!
//! let orange = Color::rgb(255, 128, 0);
//! let linear = LinearRgb::from(orange);
//! let lab = Oklab::from(linear);
//! assert!(lab.l > 0.5);
//! ```

mod linear_rgb;
mod lut;
mod oklab;
mod rgba;

pub use linear_rgb::LinearRgb;
pub use oklab::Oklab;
pub use rgba::Color;
