//! Reassigning every pixel of a raster to a palette entry.
//!
//! Two strategies are available:
//!
//! - [`QuantizeStrategy::Perceptual`]: every pixel becomes the perceptually
//!   nearest palette color (squared Oklab distance). Output colors are always
//!   a subset of the palette.
//! - [`QuantizeStrategy::Direct`]: pixels already in the palette keep their
//!   color; anything else takes the entry with the smallest raw RGBA channel
//!   difference, the way a paletted image stores a foreign color.
//!
//! Both memoize per distinct source color. The result is identical to
//! evaluating every pixel independently.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::output::IndexedRaster;
use crate::palette::Palette;
use crate::raster::Raster;

/// How pixels are mapped onto the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuantizeStrategy {
    /// Nearest palette entry in Oklab space.
    #[default]
    Perceptual,
    /// Exact palette membership, falling back to nearest raw RGBA.
    Direct,
}

impl QuantizeStrategy {
    /// Map every pixel of `raster` onto `palette`.
    pub fn apply(self, raster: &Raster, palette: &Palette) -> IndexedRaster {
        match self {
            QuantizeStrategy::Perceptual => reassign(raster, palette),
            QuantizeStrategy::Direct => assign_direct(raster, palette),
        }
    }
}

impl fmt::Display for QuantizeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantizeStrategy::Perceptual => f.write_str("perceptual"),
            QuantizeStrategy::Direct => f.write_str("direct"),
        }
    }
}

impl FromStr for QuantizeStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            s if s.eq_ignore_ascii_case("perceptual") => Ok(QuantizeStrategy::Perceptual),
            s if s.eq_ignore_ascii_case("direct") => Ok(QuantizeStrategy::Direct),
            other => Err(format!(
                "unknown quantize strategy {other:?} (expected \"perceptual\" or \"direct\")"
            )),
        }
    }
}

/// Replace every pixel with its perceptually nearest palette entry.
///
/// ```
/// use latchhook_core::{quantize, Color, Palette, Raster};
///
/// let palette = Palette::new(&[Color::BLACK, Color::WHITE]).unwrap();
/// let raster = Raster::new(2, 1, vec![Color::gray(10), Color::gray(250)]).unwrap();
/// let indexed = quantize::reassign(&raster, &palette);
/// assert_eq!(indexed.indices(), &[0, 1]);
/// ```
pub fn reassign(raster: &Raster, palette: &Palette) -> IndexedRaster {
    map_pixels(raster, palette, |color| palette.find_nearest(color).0)
}

/// Keep exact palette members, resolve the rest by raw channel distance.
pub fn assign_direct(raster: &Raster, palette: &Palette) -> IndexedRaster {
    map_pixels(raster, palette, |color| {
        palette
            .index_of(color)
            .unwrap_or_else(|| palette.find_nearest_rgba(color).0)
    })
}

fn map_pixels<F>(raster: &Raster, palette: &Palette, mut lookup: F) -> IndexedRaster
where
    F: FnMut(Color) -> usize,
{
    let mut memo: HashMap<Color, usize> = HashMap::with_capacity(palette.len() * 4);
    let indices: Vec<usize> = raster
        .pixels()
        .iter()
        .map(|&color| *memo.entry(color).or_insert_with(|| lookup(color)))
        .collect();

    tracing::debug!(
        distinct = memo.len(),
        palette = palette.len(),
        "Mapped pixels onto palette"
    );
    IndexedRaster::from_valid(indices, raster.width(), raster.height(), palette.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);
    const GREEN: Color = Color::rgb(0, 255, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    fn gradient() -> Raster {
        Raster::from_fn(16, 4, |x, y| {
            Color::rgb((x * 16) as u8, (y * 60) as u8, (255 - x * 16) as u8)
        })
        .unwrap()
    }

    #[test]
    fn test_reassign_output_is_subset_of_palette() {
        let palette = Palette::new(&[RED, BLUE, Color::WHITE]).unwrap();
        let out = reassign(&gradient(), &palette).to_raster();
        assert!(out.pixels().iter().all(|c| palette.colors().contains(c)));
    }

    #[test]
    fn test_reassign_matches_naive_loop() {
        let raster = gradient();
        let palette = Palette::new(&[RED, GREEN, BLUE, Color::BLACK]).unwrap();
        let indexed = reassign(&raster, &palette);
        for (i, &color) in raster.pixels().iter().enumerate() {
            assert_eq!(indexed.indices()[i], palette.find_nearest(color).0);
        }
    }

    #[test]
    fn test_direct_keeps_members_and_resolves_others() {
        let palette = Palette::new(&[RED, BLUE]).unwrap();
        let raster = Raster::new(3, 1, vec![BLUE, RED, Color::rgb(200, 0, 40)]).unwrap();
        let indexed = assign_direct(&raster, &palette);
        assert_eq!(indexed.indices(), &[1, 0, 0]);
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!(
            "perceptual".parse::<QuantizeStrategy>(),
            Ok(QuantizeStrategy::Perceptual)
        );
        assert_eq!(" Direct ".parse::<QuantizeStrategy>(), Ok(QuantizeStrategy::Direct));
        assert!("median-cut".parse::<QuantizeStrategy>().is_err());
        assert_eq!(QuantizeStrategy::default().to_string(), "perceptual");
    }

    #[test]
    fn test_strategies_agree_on_palette_members() {
        let raster = Raster::new(4, 1, vec![RED, GREEN, BLUE, RED]).unwrap();
        let palette = Palette::build(&raster, 3).unwrap();
        assert_eq!(
            QuantizeStrategy::Perceptual.apply(&raster, &palette).to_raster(),
            QuantizeStrategy::Direct.apply(&raster, &palette).to_raster()
        );
    }
}
