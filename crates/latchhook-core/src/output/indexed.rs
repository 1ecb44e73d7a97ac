//! IndexedRaster: palette indices plus the palette they index.

use crate::color::Color;
use crate::palette::Palette;
use crate::raster::{checked_area, Raster, RasterError};

/// A quantized image stored as one palette index per pixel.
///
/// # Example
///
/// ```
/// use latchhook_core::{Color, IndexedRaster, Palette};
///
/// let palette = Palette::new(&[Color::BLACK, Color::WHITE]).unwrap();
/// let image = IndexedRaster::new(vec![0, 1, 1, 0], 2, 2, palette).unwrap();
///
/// assert_eq!(image.color_counts(), vec![(Color::BLACK, 2), (Color::WHITE, 2)]);
/// assert_eq!(image.to_raster().get(1, 0), Color::WHITE);
/// ```
#[derive(Debug, Clone)]
pub struct IndexedRaster {
    /// Palette indices, one per pixel, row-major order.
    indices: Vec<usize>,
    width: usize,
    height: usize,
    palette: Palette,
}

impl IndexedRaster {
    /// Wrap quantized indices.
    ///
    /// # Errors
    ///
    /// - [`RasterError::DegenerateDimension`] if `width` or `height` is zero
    /// - [`RasterError::DimensionOverflow`] if `width * height` overflows
    /// - [`RasterError::PixelCountMismatch`] if `indices.len() != width * height`
    /// - [`RasterError::PaletteIndexOutOfRange`] if an index is outside the palette
    pub fn new(
        indices: Vec<usize>,
        width: usize,
        height: usize,
        palette: Palette,
    ) -> Result<Self, RasterError> {
        let area = checked_area("indexed raster", width, height)?;
        if indices.len() != area {
            return Err(RasterError::PixelCountMismatch {
                expected: area,
                actual: indices.len(),
            });
        }
        if let Some(&index) = indices.iter().find(|&&i| i >= palette.len()) {
            return Err(RasterError::PaletteIndexOutOfRange {
                index,
                colors: palette.len(),
            });
        }
        Ok(Self::from_valid(indices, width, height, palette))
    }

    /// Shape already validated by the raster the indices were computed from.
    pub(crate) fn from_valid(
        indices: Vec<usize>,
        width: usize,
        height: usize,
        palette: Palette,
    ) -> Self {
        debug_assert_eq!(indices.len(), width * height);
        Self {
            indices,
            width,
            height,
            palette,
        }
    }

    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Expand indices back into palette colors.
    pub fn to_raster(&self) -> Raster {
        let pixels: Vec<Color> = self
            .indices
            .iter()
            .map(|&idx| self.palette.color(idx))
            .collect();
        Raster::from_valid(self.width, self.height, pixels)
    }

    /// Pixels per palette entry, in palette order.
    ///
    /// For a latch hook pattern this is the number of yarn pieces per color.
    pub fn color_counts(&self) -> Vec<(Color, usize)> {
        let mut counts = vec![0usize; self.palette.len()];
        for &idx in &self.indices {
            counts[idx] += 1;
        }
        self.palette.colors().iter().copied().zip(counts).collect()
    }
}
