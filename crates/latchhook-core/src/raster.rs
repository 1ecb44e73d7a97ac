//! In-memory raster of [`Color`] values.
//!
//! A [`Raster`] is built once by a stage and then handed to the next stage
//! read-only. Only the crate itself can mutate pixels, and only while a stage
//! is filling its own output buffer.

use thiserror::Error;

use crate::color::Color;

/// Errors describing an invalid raster shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RasterError {
    /// A width, height or cell size of zero was requested
    #[error("degenerate dimensions for {stage}: {width}x{height}")]
    DegenerateDimension {
        /// Which stage rejected the dimensions
        stage: &'static str,
        /// Requested width (or cell side)
        width: usize,
        /// Requested height (or cell side)
        height: usize,
    },

    /// Pixel buffer length does not match `width * height`
    #[error("pixel count mismatch: expected {expected}, got {actual}")]
    PixelCountMismatch {
        /// `width * height`
        expected: usize,
        /// Length of the supplied buffer
        actual: usize,
    },

    /// `width * height` does not fit in `usize`
    #[error("dimensions too large for {stage}: {width}x{height}")]
    DimensionOverflow {
        /// Which stage rejected the dimensions
        stage: &'static str,
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// An index does not address an entry of the palette
    #[error("palette index {index} out of range for {colors} colors")]
    PaletteIndexOutOfRange {
        /// The offending index
        index: usize,
        /// Number of palette entries
        colors: usize,
    },
}

/// Reject zero-sized dimensions on behalf of `stage`.
pub(crate) fn check_dimensions(
    stage: &'static str,
    width: usize,
    height: usize,
) -> Result<(), RasterError> {
    if width == 0 || height == 0 {
        return Err(RasterError::DegenerateDimension {
            stage,
            width,
            height,
        });
    }
    Ok(())
}

/// Pixel count of a `width` x `height` grid, rejecting zero and overflowing
/// dimensions on behalf of `stage`.
pub(crate) fn checked_area(
    stage: &'static str,
    width: usize,
    height: usize,
) -> Result<usize, RasterError> {
    check_dimensions(stage, width, height)?;
    width
        .checked_mul(height)
        .ok_or(RasterError::DimensionOverflow {
            stage,
            width,
            height,
        })
}

/// A rectangular grid of colors, stored row-major.
///
/// Width and height are always greater than zero.
///
/// # Example
///
/// ```
/// use latchhook_core::{Color, Raster};
///
/// let raster = Raster::from_fn(3, 2, |x, y| Color::gray((x + y * 3) as u8)).unwrap();
/// assert_eq!(raster.get(2, 1), Color::gray(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Raster {
    /// Wrap a row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// - [`RasterError::DegenerateDimension`] if `width` or `height` is zero
    /// - [`RasterError::DimensionOverflow`] if `width * height` overflows
    /// - [`RasterError::PixelCountMismatch`] if `pixels.len() != width * height`
    pub fn new(width: usize, height: usize, pixels: Vec<Color>) -> Result<Self, RasterError> {
        let area = checked_area("raster", width, height)?;
        if pixels.len() != area {
            return Err(RasterError::PixelCountMismatch {
                expected: area,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A raster where every pixel is `color`.
    pub fn filled(width: usize, height: usize, color: Color) -> Result<Self, RasterError> {
        let area = checked_area("raster", width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![color; area],
        })
    }

    /// Build a raster by evaluating `f(x, y)` for every coordinate.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self, RasterError>
    where
        F: FnMut(usize, usize) -> Color,
    {
        let area = checked_area("raster", width, height)?;
        let mut pixels = Vec::with_capacity(area);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Color at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the raster.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Color {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} raster",
            self.width,
            self.height
        );
        self.pixels[y * self.width + x]
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Consume the raster, returning its pixel buffer.
    pub fn into_pixels(self) -> Vec<Color> {
        self.pixels
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks_exact(self.width)
    }

    /// Number of distinct colors in the raster.
    pub fn distinct_colors(&self) -> usize {
        self.pixels
            .iter()
            .collect::<std::collections::HashSet<_>>()
            .len()
    }

    /// Wrap a buffer whose shape the caller has already validated.
    pub(crate) fn from_valid(width: usize, height: usize, pixels: Vec<Color>) -> Self {
        debug_assert!(width > 0 && height > 0 && pixels.len() == width * height);
        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, x: usize, y: usize, color: Color) {
        self.pixels[y * self.width + x] = color;
    }
}
