//! Palette struct with precomputed perceptual coordinates and nearest-color
//! matching.

use std::collections::HashSet;

use super::error::PaletteError;
use super::frequency::FrequencyTable;
use crate::color::{Color, Oklab};
use crate::raster::Raster;

/// An ordered set of distinct colors.
///
/// Order matters: when two entries are equally close to a query color the
/// one with the lower index wins.
///
/// Oklab projections are computed once at construction, so each nearest
/// color query costs one conversion plus `len()` distance evaluations.
///
/// # Example
///
/// ```
/// use latchhook_core::{Color, Palette};
///
/// let palette = Palette::new(&[Color::BLACK, Color::WHITE]).unwrap();
/// let (idx, _) = palette.find_nearest(Color::gray(230));
/// assert_eq!(idx, 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
    oklab: Vec<Oklab>,
}

impl Palette {
    /// Create a palette from explicit colors, keeping their order.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if `colors` is empty
    /// - [`PaletteError::DuplicateColor`] if any color repeats
    pub fn new(colors: &[Color]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let mut seen = HashSet::with_capacity(colors.len());
        for (index, color) in colors.iter().enumerate() {
            if !seen.insert(*color) {
                return Err(PaletteError::DuplicateColor { index });
            }
        }

        Ok(Self {
            colors: colors.to_vec(),
            oklab: colors.iter().map(|&c| Oklab::from(c)).collect(),
        })
    }

    /// Take the `k` most frequent colors of an analyzed raster.
    ///
    /// # Errors
    ///
    /// [`PaletteError::InvalidPaletteSize`] if `k` is zero or larger than the
    /// number of distinct colors in `table`.
    pub fn from_frequencies(table: &FrequencyTable, k: usize) -> Result<Self, PaletteError> {
        if k == 0 || k > table.len() {
            return Err(PaletteError::InvalidPaletteSize {
                requested: k,
                available: table.len(),
            });
        }

        let colors: Vec<Color> = table.ranked().into_iter().take(k).map(|(c, _)| c).collect();
        Self::new(&colors)
    }

    /// Build a palette of the `k` most frequent colors of `raster`.
    ///
    /// Colors with equal counts are ordered by ascending channel tuple.
    ///
    /// ```
    /// use latchhook_core::{Color, Palette, Raster};
    ///
    /// let red = Color::rgb(255, 0, 0);
    /// let raster = Raster::new(3, 1, vec![red, Color::WHITE, red]).unwrap();
    /// let palette = Palette::build(&raster, 1).unwrap();
    /// assert_eq!(palette.colors(), &[red]);
    /// ```
    pub fn build(raster: &Raster, k: usize) -> Result<Self, PaletteError> {
        let table = FrequencyTable::analyze(raster);
        let palette = Self::from_frequencies(&table, k)?;
        tracing::debug!(
            colors = palette.len(),
            covered = table.coverage(&palette),
            pixels = table.total(),
            "Built frequency palette"
        );
        Ok(palette)
    }

    /// Number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `idx`.
    #[inline]
    pub fn color(&self, idx: usize) -> Color {
        self.colors[idx]
    }

    /// All colors in palette order.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Precomputed Oklab projection of the entry at `idx`.
    #[inline]
    pub fn oklab(&self, idx: usize) -> Oklab {
        self.oklab[idx]
    }

    /// Index of an exact palette member.
    pub fn index_of(&self, color: Color) -> Option<usize> {
        self.colors.iter().position(|&c| c == color)
    }

    /// Find the perceptually nearest palette entry to `color`.
    ///
    /// Returns `(index, squared Oklab distance)`. A color that is in the
    /// palette always maps to itself with distance 0.
    #[inline]
    pub fn find_nearest(&self, color: Color) -> (usize, f32) {
        self.find_nearest_oklab(Oklab::from(color))
    }

    /// Like [`find_nearest()`](Self::find_nearest) for an already projected color.
    pub fn find_nearest_oklab(&self, color: Oklab) -> (usize, f32) {
        let mut best_idx = 0;
        let mut best_dist = f32::MAX;

        // Strict `<`: the earliest of equidistant entries wins
        for (i, &entry) in self.oklab.iter().enumerate() {
            let dist = color.distance_squared(entry);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }

    /// Find the nearest entry by squared difference of the raw R, G, B, A
    /// channels.
    ///
    /// This is how a paletted image resolves a color that is not in its
    /// palette; no perceptual projection is involved.
    pub fn find_nearest_rgba(&self, color: Color) -> (usize, u32) {
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;

        for (i, entry) in self.colors.iter().enumerate() {
            let dist: u32 = color
                .channels()
                .iter()
                .zip(entry.channels().iter())
                .map(|(&a, &b)| {
                    let d = a.abs_diff(b) as u32;
                    d * d
                })
                .sum();
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }
}
