//! LatchHook builder, the primary entry point for the crate.
//!
//! [`LatchHook`] wraps the pipeline (preprocess, palette, quantize, render)
//! behind fluent configuration.

use super::error::LatchHookError;
use crate::output::{render_with_style, Diagram, DiagramStyle, IndexedRaster};
use crate::palette::Palette;
use crate::preprocess::{PreprocessOptions, Preprocessor};
use crate::quantize::QuantizeStrategy;
use crate::raster::{check_dimensions, checked_area, Raster};

/// Latch hook pattern builder.
///
/// - Configuration methods consume and return `self`
/// - [`quantize()`](Self::quantize) and [`run()`](Self::run) take `&self`,
///   so one builder can process many images
/// - Every parameter is checked by [`validate()`](Self::validate) before
///   any pixel is touched
///
/// # Example
///
/// ```
/// use latchhook_core::{Color, LatchHook, Raster};
///
/// let red = Color::rgb(255, 0, 0);
/// let blue = Color::rgb(0, 0, 255);
/// let raster = Raster::new(2, 2, vec![red, red, blue, Color::rgb(0, 255, 0)]).unwrap();
///
/// let diagram = LatchHook::new(2).cell_side(4).run(&raster).unwrap();
///
/// assert_eq!(diagram.palette().colors(), &[red, blue]);
/// assert_eq!((diagram.image().width(), diagram.image().height()), (8, 8));
/// assert_eq!(diagram.legend().iter().map(|(_, n)| n).sum::<usize>(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct LatchHook {
    palette_size: usize,
    cell_side: usize,
    preprocess: PreprocessOptions,
    strategy: QuantizeStrategy,
    style: DiagramStyle,
}

impl LatchHook {
    /// Default edge length of one diagram cell in output pixels.
    pub const DEFAULT_CELL_SIDE: usize = 4;

    /// Create a pipeline that reduces images to `palette_size` colors.
    ///
    /// Defaults: 4-pixel cells, no preprocessing, perceptual quantization,
    /// default diagram style.
    pub fn new(palette_size: usize) -> Self {
        Self {
            palette_size,
            cell_side: Self::DEFAULT_CELL_SIDE,
            preprocess: PreprocessOptions::default(),
            strategy: QuantizeStrategy::default(),
            style: DiagramStyle::default(),
        }
    }

    #[inline]
    pub fn cell_side(mut self, cell_side: usize) -> Self {
        self.cell_side = cell_side;
        self
    }

    /// Bucket-resize the source to `width × height` cells first.
    #[inline]
    pub fn resize(mut self, width: usize, height: usize) -> Self {
        self.preprocess = self.preprocess.resize(width, height);
        self
    }

    #[inline]
    pub fn smooth(mut self, enabled: bool) -> Self {
        self.preprocess = self.preprocess.smooth(enabled);
        self
    }

    #[inline]
    pub fn grayscale(mut self, enabled: bool) -> Self {
        self.preprocess = self.preprocess.grayscale(enabled);
        self
    }

    #[inline]
    pub fn strategy(mut self, strategy: QuantizeStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[inline]
    pub fn style(mut self, style: DiagramStyle) -> Self {
        self.style = style;
        self
    }

    pub fn palette_size(&self) -> usize {
        self.palette_size
    }

    /// Check the configuration without looking at any image.
    ///
    /// # Errors
    ///
    /// - [`LatchHookError::ZeroPaletteSize`] for a palette size of 0
    /// - [`LatchHookError::Raster`] for a zero cell side, resize dimension
    ///   or decade spacing, or a resize target too large to address
    pub fn validate(&self) -> Result<(), LatchHookError> {
        if self.palette_size == 0 {
            return Err(LatchHookError::ZeroPaletteSize);
        }
        check_dimensions("diagram cell", self.cell_side, self.cell_side)?;
        check_dimensions(
            "diagram decade",
            self.style.decade_every,
            self.style.decade_every,
        )?;
        if let Some((w, h)) = self.preprocess.target {
            checked_area("resize", w, h)?;
        }
        Ok(())
    }

    /// Preprocess `raster`, build the palette and map every pixel onto it.
    ///
    /// # Errors
    ///
    /// Configuration errors from [`validate()`](Self::validate), or
    /// [`PaletteError::InvalidPaletteSize`](crate::PaletteError::InvalidPaletteSize)
    /// when the preprocessed image has fewer distinct colors than requested.
    pub fn quantize(&self, raster: &Raster) -> Result<IndexedRaster, LatchHookError> {
        self.validate()?;

        let prepared = Preprocessor::new(self.preprocess).process(raster)?;
        let palette = Palette::build(&prepared.raster, self.palette_size)?;
        let indexed = self.strategy.apply(&prepared.raster, &palette);

        tracing::debug!(
            width = indexed.width(),
            height = indexed.height(),
            colors = palette.len(),
            strategy = %self.strategy,
            empty_buckets = prepared.empty_buckets,
            "Quantized raster"
        );
        Ok(indexed)
    }

    /// Run the full pipeline and render the grid diagram.
    ///
    /// # Errors
    ///
    /// Same as [`quantize()`](Self::quantize).
    pub fn run(&self, raster: &Raster) -> Result<Diagram, LatchHookError> {
        let indexed = self.quantize(raster)?;
        let cells = indexed.to_raster();
        let image = render_with_style(&cells, self.cell_side, &self.style)?;
        let legend = indexed.color_counts();

        tracing::info!(
            columns = cells.width(),
            rows = cells.height(),
            colors = legend.len(),
            width = image.width(),
            height = image.height(),
            "Built latch hook diagram"
        );

        Ok(Diagram::new(
            image,
            cells,
            indexed.palette().clone(),
            legend,
            self.cell_side,
        ))
    }
}
