#![allow(clippy::excessive_precision, clippy::module_inception)]

//! latchhook-core: turn raster images into latch hook rug patterns
//!
//! A latch hook pattern is a grid where every cell is one knot of yarn. This
//! library reduces an image to a small palette of the colors it uses most,
//! maps every pixel onto that palette, and draws the result as an enlarged
//! grid diagram with counting lines.
//!
//! # Quick Start
//!
//! The [`LatchHook`] builder is the primary entry point:
//!
//! ```
//! use latchhook_core::{Color, LatchHook, Raster};
//!
//! let raster = Raster::from_fn(30, 20, |x, _| {
//!     if x < 15 { Color::rgb(200, 30, 30) } else { Color::rgb(30, 30, 200) }
//! })
//! .unwrap();
//!
//! let diagram = LatchHook::new(2).cell_side(4).run(&raster).unwrap();
//!
//! assert_eq!(diagram.image().width(), 120);
//! assert_eq!(diagram.image().height(), 80);
//! ```
//!
//! # Pipeline
//!
//! 1. **Preprocess** ([`Preprocessor`]): optional grayscale, bucket resize
//!    to the cell grid, and 3×3 smoothing
//! 2. **Palette** ([`Palette::build`]): the `K` most frequent exact colors,
//!    ties broken by ascending channel tuple
//! 3. **Quantize** ([`QuantizeStrategy`]): every pixel becomes a palette
//!    index
//! 4. **Render** ([`output::render`]): each cell becomes a block with grid
//!    lines on its top and left edges and its color in the center
//!
//! # Color Matching
//!
//! Nearest-color matching uses squared Euclidean distance in Oklab, a
//! perceptually uniform space. Conversion goes through linear RGB using a
//! 256-entry gamma table generated at build time. Alpha takes no part in
//! perceptual matching.
//!
//! Equidistant palette entries resolve to the lowest index, so results are
//! reproducible for a given palette order.

pub mod api;
pub mod color;
pub mod output;
pub mod palette;
pub mod preprocess;
pub mod quantize;
pub mod raster;

#[cfg(test)]
mod domain_tests;

pub use api::{LatchHook, LatchHookError};
pub use color::{Color, LinearRgb, Oklab};
pub use output::{Diagram, DiagramStyle, IndexedRaster};
pub use palette::{FrequencyTable, Palette, PaletteError, ParseColorError};
pub use preprocess::{
    ColorAccumulator, PreprocessOptions, PreprocessResult, Preprocessor, ResizeResult,
};
pub use quantize::QuantizeStrategy;
pub use raster::{Raster, RasterError};
