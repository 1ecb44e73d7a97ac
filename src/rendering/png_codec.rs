//! PNG encoding for rasters and diagrams.
//!
//! Diagrams use only a handful of colors, so they are normally written as
//! indexed PNGs with the smallest bit depth that fits the palette.

use std::collections::HashMap;
use std::fmt;
use std::io::Cursor;
use std::str::FromStr;

use latchhook_core::{Color, Raster};

use crate::error::ImageIoError;

/// PNG pixel layout to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Indexed when the image has at most 256 colors, RGBA otherwise
    #[default]
    Auto,
    /// 8-bit RGBA truecolor
    Rgba,
    /// Palette-based with PLTE (and tRNS for translucent colors)
    Indexed,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Auto => "auto",
            OutputFormat::Rgba => "rgba",
            OutputFormat::Indexed => "indexed",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(OutputFormat::Auto),
            "rgba" => Ok(OutputFormat::Rgba),
            "indexed" => Ok(OutputFormat::Indexed),
            other => Err(format!(
                "unknown output format {other:?} (expected \"auto\", \"rgba\" or \"indexed\")"
            )),
        }
    }
}

/// Encode `raster` as a PNG.
pub fn encode(raster: &Raster, format: OutputFormat) -> Result<Vec<u8>, ImageIoError> {
    let (colors, indices) = index_colors(raster);
    let indexed = match format {
        OutputFormat::Rgba => false,
        OutputFormat::Indexed if colors.len() > 256 => {
            return Err(ImageIoError::TooManyColors {
                count: colors.len(),
            })
        }
        OutputFormat::Indexed => true,
        OutputFormat::Auto => colors.len() <= 256,
    };

    let bytes = if indexed {
        encode_indexed(raster, &colors, &indices)?
    } else {
        let data: Vec<u8> = raster.pixels().iter().flat_map(|c| c.channels()).collect();
        encode_png(
            raster,
            png::ColorType::Rgba,
            png::BitDepth::Eight,
            None,
            None,
            &data,
        )?
    };

    tracing::debug!(
        width = raster.width(),
        height = raster.height(),
        colors = colors.len(),
        indexed,
        bytes = bytes.len(),
        "Encoded PNG"
    );
    Ok(bytes)
}

/// Losslessly recompress PNG bytes with oxipng.
///
/// Falls back to the input when oxipng fails, since the input is already a
/// valid PNG.
pub fn optimize(png_bytes: Vec<u8>) -> Vec<u8> {
    let before = png_bytes.len();
    match oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    ) {
        Ok(optimized) => {
            tracing::debug!(before, after = optimized.len(), "Optimized PNG");
            optimized
        }
        Err(e) => {
            tracing::warn!(%e, "PNG optimization failed, keeping unoptimized output");
            png_bytes
        }
    }
}

/// Distinct colors in first-seen order, and each pixel's position in that
/// list. Indices saturate at 255; callers check the color count first.
fn index_colors(raster: &Raster) -> (Vec<Color>, Vec<u8>) {
    let mut colors = Vec::new();
    let mut lookup: HashMap<Color, usize> = HashMap::new();
    let indices = raster
        .pixels()
        .iter()
        .map(|&c| {
            let idx = *lookup.entry(c).or_insert_with(|| {
                colors.push(c);
                colors.len() - 1
            });
            idx.min(255) as u8
        })
        .collect();
    (colors, indices)
}

fn encode_indexed(
    raster: &Raster,
    colors: &[Color],
    indices: &[u8],
) -> Result<Vec<u8>, ImageIoError> {
    let (depth, bits) = match colors.len() {
        0..=2 => (png::BitDepth::One, 1),
        3..=4 => (png::BitDepth::Two, 2),
        5..=16 => (png::BitDepth::Four, 4),
        _ => (png::BitDepth::Eight, 8),
    };
    let plte: Vec<u8> = colors.iter().flat_map(|c| [c.r, c.g, c.b]).collect();
    let trns: Option<Vec<u8>> = colors
        .iter()
        .any(|c| c.a < 255)
        .then(|| colors.iter().map(|c| c.a).collect());
    let packed = if bits == 8 {
        indices.to_vec()
    } else {
        pack_nbits(indices, raster.width(), bits)
    };
    encode_png(
        raster,
        png::ColorType::Indexed,
        depth,
        Some(plte),
        trns,
        &packed,
    )
}

/// Encode packed pixel data as a PNG.
fn encode_png(
    raster: &Raster,
    color_type: png::ColorType,
    bit_depth: png::BitDepth,
    plte: Option<Vec<u8>>,
    trns: Option<Vec<u8>>,
    packed: &[u8],
) -> Result<Vec<u8>, ImageIoError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, raster.width() as u32, raster.height() as u32);
        encoder.set_color(color_type);
        encoder.set_depth(bit_depth);
        encoder.set_compression(png::Compression::Default);
        if let Some(plte) = plte {
            encoder.set_palette(plte);
        }
        if let Some(trns) = trns {
            encoder.set_trns(trns);
        }
        let mut writer = encoder.write_header()?;
        writer.write_image_data(packed)?;
    }
    Ok(buf.into_inner())
}

/// Pack pixel values into N-bit PNG row data (1, 2, or 4 bits per pixel).
fn pack_nbits(indices: &[u8], width: usize, bits: u8) -> Vec<u8> {
    let pixels_per_byte = 8 / bits as usize;
    let bytes_per_row = width.div_ceil(pixels_per_byte);
    let height = indices.len() / width;
    let mask = (1u8 << bits) - 1;
    let mut packed = Vec::with_capacity(bytes_per_row * height);

    for row in indices.chunks(width) {
        let mut byte = 0u8;
        for (i, &idx) in row.iter().enumerate() {
            let shift = (8 - bits) - (i % pixels_per_byte) as u8 * bits;
            byte |= (idx & mask) << shift;

            if (i % pixels_per_byte) == pixels_per_byte - 1 || i == row.len() - 1 {
                packed.push(byte);
                byte = 0;
            }
        }
    }

    packed
}
