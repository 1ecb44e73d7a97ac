//! Image decoding and file access.

use std::path::Path;

use image::DynamicImage;
use latchhook_core::{Color, Raster};

use crate::error::ImageIoError;

/// Decode an encoded image, detecting the format from its signature.
///
/// PNG, JPEG, GIF and BMP are supported.
pub fn decode(bytes: &[u8]) -> Result<Raster, ImageIoError> {
    let img = image::load_from_memory(bytes)?;
    to_raster(img)
}

/// Read and decode the image at `path`.
pub fn load(path: &Path) -> Result<Raster, ImageIoError> {
    let bytes = std::fs::read(path).map_err(|source| ImageIoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let raster = decode(&bytes)?;
    tracing::debug!(
        path = %path.display(),
        width = raster.width(),
        height = raster.height(),
        "Loaded image"
    );
    Ok(raster)
}

/// Write fully encoded output to `path`.
pub fn save(path: &Path, bytes: &[u8]) -> Result<(), ImageIoError> {
    std::fs::write(path, bytes).map_err(|source| ImageIoError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert any decoded storage layout (gray, gray+alpha, RGB, RGBA, 16-bit)
/// to 8-bit RGBA colors.
fn to_raster(img: DynamicImage) -> Result<Raster, ImageIoError> {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let pixels: Vec<Color> = rgba.pixels().map(|p| Color::from(p.0)).collect();
    Ok(Raster::new(width as usize, height as usize, pixels)?)
}
