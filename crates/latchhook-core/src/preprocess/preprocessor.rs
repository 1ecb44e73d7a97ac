//! Preprocessing pipeline.

use super::options::PreprocessOptions;
use super::resize::resize;
use super::smooth::smooth;
use crate::raster::{Raster, RasterError};

/// Result of running the [`Preprocessor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreprocessResult {
    /// The preprocessed raster.
    pub raster: Raster,
    /// Target pixels left transparent by the resize stage (0 when not resized).
    pub empty_buckets: usize,
}

/// Runs the enabled preprocessing stages in order:
/// grayscale, then resize, then smooth.
#[derive(Debug, Clone, Default)]
pub struct Preprocessor {
    options: PreprocessOptions,
}

impl Preprocessor {
    pub fn new(options: PreprocessOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PreprocessOptions {
        &self.options
    }

    /// Apply the configured stages to `raster`.
    ///
    /// # Errors
    ///
    /// [`RasterError::DegenerateDimension`] or [`RasterError::DimensionOverflow`]
    /// when the resize target has a zero or oversized dimension. The target is
    /// checked before any pixel is touched.
    pub fn process(&self, raster: &Raster) -> Result<PreprocessResult, RasterError> {
        if let Some((w, h)) = self.options.target {
            crate::raster::checked_area("resize", w, h)?;
        }

        // Step 1: grayscale
        let mut current = if self.options.grayscale {
            grayscale(raster)
        } else {
            raster.clone()
        };

        // Step 2: resize
        let mut empty_buckets = 0;
        if let Some((w, h)) = self.options.target {
            let resized = resize(&current, w, h)?;
            empty_buckets = resized.empty_buckets;
            current = resized.raster;
        }

        // Step 3: smooth
        if self.options.smooth {
            current = smooth(&current);
        }

        Ok(PreprocessResult {
            raster: current,
            empty_buckets,
        })
    }
}

/// Convert every pixel to its Rec. 601 luma, keeping alpha.
///
/// ```
/// use latchhook_core::preprocess::grayscale;
/// use latchhook_core::{Color, Raster};
///
/// let source = Raster::new(1, 1, vec![Color::new(0, 255, 0, 128)]).unwrap();
/// assert_eq!(grayscale(&source).get(0, 0), Color::new(150, 150, 150, 128));
/// ```
pub fn grayscale(raster: &Raster) -> Raster {
    let pixels = raster.pixels().iter().map(|c| c.to_luma()).collect();
    Raster::from_valid(raster.width(), raster.height(), pixels)
}
