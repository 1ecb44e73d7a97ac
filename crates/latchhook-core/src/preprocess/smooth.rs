//! 3×3 neighborhood smoothing.

use super::average::ColorAccumulator;
use crate::color::Color;
use crate::raster::Raster;

/// Replace every pixel by the mean of its in-bounds 3×3 neighborhood.
///
/// Red, green and blue are averaged with integer truncation; the result is
/// always opaque. Border pixels average over fewer neighbors instead of
/// padding.
///
/// ```
/// use latchhook_core::preprocess::smooth;
/// use latchhook_core::{Color, Raster};
///
/// let source = Raster::new(2, 1, vec![Color::gray(0), Color::gray(255)]).unwrap();
/// let smoothed = smooth(&source);
/// assert_eq!(smoothed.pixels(), &[Color::gray(127), Color::gray(127)]);
/// ```
pub fn smooth(raster: &Raster) -> Raster {
    let width = raster.width();
    let height = raster.height();
    let mut out = raster.clone();

    for y in 0..height {
        for x in 0..width {
            let mut acc = ColorAccumulator::new();
            for ny in y.saturating_sub(1)..=(y + 1).min(height - 1) {
                for nx in x.saturating_sub(1)..=(x + 1).min(width - 1) {
                    acc.push(raster.get(nx, ny));
                }
            }
            // Always at least the pixel itself for a valid raster
            if let Some(mean) = acc.mean() {
                out.set(x, y, Color::rgb(mean.r, mean.g, mean.b));
            }
        }
    }

    tracing::debug!(width, height, "Smoothed raster");
    out
}
