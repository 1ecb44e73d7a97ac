//! Bucket-averaging resize.
//!
//! Every source pixel is mapped to the target pixel
//! `(floor(x * W'/W), floor(y * H'/H))`; each target pixel becomes the
//! truncated mean of the source pixels mapped onto it.
//!
//! Target pixels that receive no source pixel (upscaling, or gaps left by
//! rounding) stay [`Color::TRANSPARENT`]. They are counted in
//! [`ResizeResult::empty_buckets`] rather than interpolated.

use super::average::ColorAccumulator;
use crate::color::Color;
use crate::raster::{checked_area, Raster, RasterError};

/// Output of [`resize()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeResult {
    /// The resized raster, exactly the requested size.
    pub raster: Raster,
    /// Number of target pixels that no source pixel mapped to.
    pub empty_buckets: usize,
}

/// Resize `raster` to `new_width × new_height` by bucket averaging.
///
/// # Errors
///
/// - [`RasterError::DegenerateDimension`] if either target dimension is zero
/// - [`RasterError::DimensionOverflow`] if `new_width * new_height` overflows
///
/// # Example
///
/// ```
/// use latchhook_core::preprocess::resize;
/// use latchhook_core::{Color, Raster};
///
/// let source = Raster::new(2, 1, vec![Color::gray(100), Color::gray(201)]).unwrap();
/// let result = resize(&source, 1, 1).unwrap();
/// assert_eq!(result.raster.get(0, 0), Color::gray(150));
/// ```
pub fn resize(
    raster: &Raster,
    new_width: usize,
    new_height: usize,
) -> Result<ResizeResult, RasterError> {
    let area = checked_area("resize", new_width, new_height)?;

    let x_ratio = new_width as f64 / raster.width() as f64;
    let y_ratio = new_height as f64 / raster.height() as f64;

    // Target column and row for each source column and row
    let columns: Vec<usize> = (0..raster.width())
        .map(|x| bucket(x, x_ratio, new_width))
        .collect();
    let rows: Vec<usize> = (0..raster.height())
        .map(|y| bucket(y, y_ratio, new_height))
        .collect();

    let mut buckets = vec![ColorAccumulator::new(); area];
    for (y, row) in raster.rows().enumerate() {
        let ny = rows[y];
        for (x, &color) in row.iter().enumerate() {
            buckets[ny * new_width + columns[x]].push(color);
        }
    }

    let mut empty_buckets = 0;
    let pixels: Vec<Color> = buckets
        .iter()
        .map(|acc| {
            acc.mean().unwrap_or_else(|| {
                empty_buckets += 1;
                Color::TRANSPARENT
            })
        })
        .collect();

    if empty_buckets > 0 {
        tracing::warn!(
            empty_buckets,
            from_width = raster.width(),
            from_height = raster.height(),
            to_width = new_width,
            to_height = new_height,
            "Resize left target pixels without source samples; they stay transparent"
        );
    } else {
        tracing::debug!(
            from_width = raster.width(),
            from_height = raster.height(),
            to_width = new_width,
            to_height = new_height,
            "Resized raster"
        );
    }

    Ok(ResizeResult {
        raster: Raster::from_valid(new_width, new_height, pixels),
        empty_buckets,
    })
}

#[inline]
fn bucket(coord: usize, ratio: f64, limit: usize) -> usize {
    ((coord as f64 * ratio).floor() as usize).min(limit - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn gradient(width: usize, height: usize) -> Raster {
        Raster::from_fn(width, height, |x, y| {
            Color::rgb((x * 7 % 256) as u8, (y * 13 % 256) as u8, 90)
        })
        .unwrap()
    }

    #[test]
    fn test_output_is_always_requested_size() {
        for (w, h) in [(1, 1), (10, 10), (37, 5), (200, 150), (3, 90)] {
            let result = resize(&gradient(w, h), 10, 10).unwrap();
            assert_eq!(result.raster.width(), 10);
            assert_eq!(result.raster.height(), 10);
        }
    }

    #[test]
    fn test_same_size_is_identity() {
        let source = gradient(13, 9);
        let result = resize(&source, 13, 9).unwrap();
        assert_eq!(result.raster, source);
        assert_eq!(result.empty_buckets, 0);
    }

    #[test]
    fn test_halving_averages_blocks() {
        let source = Raster::new(
            4,
            2,
            vec![
                Color::gray(0),
                Color::gray(10),
                Color::gray(100),
                Color::gray(101),
                Color::gray(20),
                Color::gray(30),
                Color::gray(102),
                Color::gray(103),
            ],
        )
        .unwrap();
        let result = resize(&source, 2, 1).unwrap();
        // (0+10+20+30)/4 = 15, (100+101+102+103)/4 = 101
        assert_eq!(result.raster.pixels(), &[Color::gray(15), Color::gray(101)]);
    }

    #[test]
    fn test_alpha_is_averaged() {
        let source = Raster::new(
            2,
            1,
            vec![Color::new(255, 255, 255, 255), Color::new(255, 255, 255, 0)],
        )
        .unwrap();
        let result = resize(&source, 1, 1).unwrap();
        assert_eq!(result.raster.get(0, 0), Color::new(255, 255, 255, 127));
    }

    #[test]
    fn test_upscale_leaves_empty_buckets_transparent() {
        let source = Raster::filled(2, 2, Color::rgb(200, 10, 10)).unwrap();
        let result = resize(&source, 4, 4).unwrap();
        assert_eq!(result.empty_buckets, 12);
        assert_eq!(result.raster.get(0, 0), Color::rgb(200, 10, 10));
        assert_eq!(result.raster.get(2, 2), Color::rgb(200, 10, 10));
        assert_eq!(result.raster.get(1, 0), Color::TRANSPARENT);
        assert_eq!(result.raster.get(3, 3), Color::TRANSPARENT);
    }

    #[test]
    fn test_zero_target_is_rejected() {
        assert_eq!(
            resize(&gradient(4, 4), 0, 3),
            Err(RasterError::DegenerateDimension {
                stage: "resize",
                width: 0,
                height: 3
            })
        );
    }

    #[test]
    fn test_overflowing_target_is_rejected() {
        assert_eq!(
            resize(&gradient(4, 4), usize::MAX / 2, 3),
            Err(RasterError::DimensionOverflow {
                stage: "resize",
                width: usize::MAX / 2,
                height: 3
            })
        );
    }

    #[test]
    fn test_deterministic() {
        let source = gradient(57, 31);
        assert_eq!(resize(&source, 10, 7), resize(&source, 10, 7));
    }
}
