//! Assertion helpers for tests.

use std::path::Path;

use latchhook_core::{Color, Raster};
use pretty_assertions::assert_eq;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Assert the bytes start with the PNG signature
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(&PNG_SIGNATURE),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Read a PNG file back into a raster
pub fn read_png(path: &Path) -> Raster {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected output at {}: {e}", path.display()));
    assert_png(&bytes);
    latchhook::rendering::decode(&bytes).unwrap()
}

/// Assert every pixel is one of `allowed`
pub fn assert_colors_within(raster: &Raster, allowed: &[Color]) {
    for (i, pixel) in raster.pixels().iter().enumerate() {
        assert!(
            allowed.contains(pixel),
            "Pixel {} ({}, {}) is {pixel}, not one of {allowed:?}",
            i,
            i % raster.width(),
            i / raster.width()
        );
    }
}

/// Assert `diagram` is the grid rendering of `cells` with `cell_side`
/// pixel cells: right size and every center carries its cell color.
pub fn assert_diagram_of(diagram: &Raster, cells: &Raster, cell_side: usize) {
    assert_eq!(
        (diagram.width(), diagram.height()),
        (cells.width() * cell_side, cells.height() * cell_side),
        "Diagram size"
    );
    let center = cell_side / 2;
    for y in 0..cells.height() {
        for x in 0..cells.width() {
            assert_eq!(
                diagram.get(x * cell_side + center, y * cell_side + center),
                cells.get(x, y),
                "Center of cell ({x}, {y})"
            );
        }
    }
}
