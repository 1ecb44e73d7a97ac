//! Test fixtures and constants.

use std::path::{Path, PathBuf};

use latchhook::rendering::{encode, save, OutputFormat};
use latchhook_core::{Color, Raster};

pub const RED: Color = Color::rgb(255, 0, 0);
pub const GREEN: Color = Color::rgb(0, 255, 0);
pub const BLUE: Color = Color::rgb(0, 0, 255);
pub const YELLOW: Color = Color::rgb(255, 255, 0);

/// Diagram shades with the default style
pub mod shades {
    use latchhook_core::Color;

    pub const BACKGROUND: Color = Color::WHITE;
    pub const GRID: Color = Color::gray(225);
    pub const DECADE: Color = Color::gray(200);
}

/// `[[Red, Red], [Blue, Green]]`
pub fn red_blue_green() -> Raster {
    Raster::new(2, 2, vec![RED, RED, BLUE, GREEN]).unwrap()
}

/// Four quadrants: red with a sprinkle of near-red, green, blue, and yellow
/// with blue stripes.
///
/// At 40×40 the counts are blue 540, green 400, red 343, yellow 260 and
/// near-red 57.
pub fn quadrants(width: usize, height: usize) -> Raster {
    Raster::from_fn(width, height, |x, y| {
        let left = x < width / 2;
        let top = y < height / 2;
        match (left, top) {
            (true, true) if (x + y) % 7 == 0 => Color::rgb(250, 10, 5),
            (true, true) => RED,
            (false, true) => GREEN,
            (true, false) => BLUE,
            (false, false) if x % 3 == 0 => BLUE,
            (false, false) => YELLOW,
        }
    })
    .unwrap()
}

/// Encode `raster` as an RGBA PNG at `dir/name` and return the path.
pub fn write_png(dir: &Path, name: &str, raster: &Raster) -> PathBuf {
    let path = dir.join(name);
    let bytes = encode(raster, OutputFormat::Rgba).unwrap();
    save(&path, &bytes).unwrap();
    path
}

/// Write a YAML config file at `dir/name` and return the path.
pub fn write_config(dir: &Path, name: &str, yaml: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, yaml).unwrap();
    path
}
