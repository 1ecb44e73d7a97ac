//! Raster preprocessing before palette construction.
//!
//! The optional stages run in a fixed order:
//!
//! 1. **Grayscale** - Rec. 601 luma, alpha preserved
//! 2. **Resize** - bucket averaging to the cell grid size
//! 3. **Smooth** - 3×3 neighborhood mean
//!
//! Resizing happens before smoothing so the blur is measured in cells, not
//! in source pixels.
//!
//! # Example
//!
//! ```
//! use latchhook_core::{Color, PreprocessOptions, Preprocessor, Raster};
//!
//! let source = Raster::filled(40, 30, Color::rgb(90, 140, 200)).unwrap();
//! let options = PreprocessOptions::new().resize(8, 6).grayscale(true);
//! let result = Preprocessor::new(options).process(&source).unwrap();
//!
//! assert_eq!((result.raster.width(), result.raster.height()), (8, 6));
//! assert_eq!(result.empty_buckets, 0);
//! ```

mod average;
mod options;
mod preprocessor;
mod resize;
mod smooth;

pub use average::ColorAccumulator;
pub use options::PreprocessOptions;
pub use preprocessor::{grayscale, PreprocessResult, Preprocessor};
pub use resize::{resize, ResizeResult};
pub use smooth::smooth;
