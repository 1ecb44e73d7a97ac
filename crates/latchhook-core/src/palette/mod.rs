//! Palette construction and nearest-color matching
//!
//! [`FrequencyTable`] counts exact colors in a raster, [`Palette`] keeps the
//! most frequent ones and answers nearest-color queries.

mod error;
mod frequency;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use frequency::FrequencyTable;
pub use palette::Palette;
