//! Exact-color occurrence counting.

use std::collections::HashMap;

use super::palette::Palette;
use crate::color::Color;
use crate::raster::Raster;

/// Occurrence count of every exact color in a raster.
///
/// Colors are compared by channel tuple, so two colors that look the same
/// but differ in any channel (alpha included) are counted separately.
/// The map itself has no order; [`ranked()`](Self::ranked) imposes one.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<Color, usize>,
    total: usize,
}

impl FrequencyTable {
    /// Count every pixel of `raster` exactly once.
    pub fn analyze(raster: &Raster) -> Self {
        let mut counts: HashMap<Color, usize> = HashMap::new();
        for &color in raster.pixels() {
            *counts.entry(color).or_insert(0) += 1;
        }
        tracing::debug!(
            distinct = counts.len(),
            pixels = raster.pixels().len(),
            "Analyzed color frequencies"
        );
        Self {
            counts,
            total: raster.pixels().len(),
        }
    }

    /// Number of distinct colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts; equals the pixel count of the analyzed raster.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Occurrences of `color` (0 if absent).
    #[inline]
    pub fn count(&self, color: Color) -> usize {
        self.counts.get(&color).copied().unwrap_or(0)
    }

    /// Unordered iteration over `(color, count)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Color, usize)> + '_ {
        self.counts.iter().map(|(&c, &n)| (c, n))
    }

    /// Colors sorted by descending count.
    ///
    /// Equal counts are ordered by ascending `(r, g, b, a)` so the ranking
    /// never depends on hash iteration order.
    pub fn ranked(&self) -> Vec<(Color, usize)> {
        let mut ranked: Vec<(Color, usize)> = self.iter().collect();
        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked
    }

    /// Number of pixels whose exact color appears in `palette`.
    pub fn coverage(&self, palette: &Palette) -> usize {
        palette.colors().iter().map(|&c| self.count(c)).sum()
    }
}
