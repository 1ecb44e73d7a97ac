//! Unified error type for the latchhook-core public API.

use thiserror::Error;

use crate::palette::{PaletteError, ParseColorError};
use crate::raster::RasterError;

/// Unified error type for the latchhook-core public API.
///
/// Wraps every error the crate produces so application code can propagate
/// with `?`.
///
/// # Example
///
/// ```
/// use latchhook_core::{Color, LatchHookError, Palette};
///
/// fn two_tone(a: &str, b: &str) -> Result<Palette, LatchHookError> {
///     let colors = [a.parse::<Color>()?, b.parse::<Color>()?];
///     Ok(Palette::new(&colors)?)
/// }
///
/// assert!(two_tone("#000", "#FFF").is_ok());
/// assert!(matches!(two_tone("#000", "#000"), Err(LatchHookError::Palette(_))));
/// assert!(matches!(two_tone("#000", "#GG0000"), Err(LatchHookError::ParseColor(_))));
/// ```
#[derive(Debug, Error)]
pub enum LatchHookError {
    /// A palette size of zero was configured
    #[error("invalid palette size 0: at least one color is required")]
    ZeroPaletteSize,
    /// Palette construction failed (empty, duplicate, or size out of range)
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),
    /// A raster stage was given a zero dimension
    #[error("raster error: {0}")]
    Raster(#[from] RasterError),
    /// A hex color string could not be parsed
    #[error("color parse error: {0}")]
    ParseColor(#[from] ParseColorError),
}
