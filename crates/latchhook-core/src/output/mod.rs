//! Output types for the latch hook pipeline.
//!
//! - [`IndexedRaster`]: palette indices per pixel, the result of quantization
//! - [`render()`]: the grid diagram renderer
//! - [`Diagram`]: the finished pattern with its palette and stitch legend

mod diagram;
mod indexed;

pub use diagram::{render, render_with_style, Diagram, DiagramStyle};
pub use indexed::IndexedRaster;
