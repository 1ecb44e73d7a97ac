//! Latch hook grid diagram rendering.
//!
//! Each source pixel becomes a `cell_side × cell_side` block of the output.
//! Block borders are grid lines, every `decade_every`-th line is drawn in a
//! darker shade to help with counting, and the block's center pixel carries
//! the cell's color.

use crate::color::Color;
use crate::palette::Palette;
use crate::raster::{check_dimensions, checked_area, Raster, RasterError};

/// Colors used for the diagram skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagramStyle {
    /// Fill for everything that is neither a grid line nor a cell center
    pub background: Color,
    /// Regular grid lines
    pub grid: Color,
    /// Every `decade_every`-th grid line
    pub decade: Color,
    /// Spacing of the darker lines, in cells
    pub decade_every: usize,
}

impl Default for DiagramStyle {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            grid: Color::gray(225),
            decade: Color::gray(200),
            decade_every: 10,
        }
    }
}

impl DiagramStyle {
    /// Skeleton color at output coordinate `(x, y)`.
    ///
    /// A pixel is on a vertical line when `x % cell_side == 0` and on a
    /// horizontal line when `y % cell_side == 0`. It gets the decade shade
    /// when one of the lines it lies on has a cell index that is a multiple
    /// of `decade_every`.
    fn skeleton_at(&self, x: usize, y: usize, cell_side: usize) -> Color {
        let on_vertical = x % cell_side == 0;
        let on_horizontal = y % cell_side == 0;
        let vertical_decade = on_vertical && (x / cell_side) % self.decade_every == 0;
        let horizontal_decade = on_horizontal && (y / cell_side) % self.decade_every == 0;

        if vertical_decade || horizontal_decade {
            self.decade
        } else if on_vertical || on_horizontal {
            self.grid
        } else {
            self.background
        }
    }
}

/// Render `raster` as a grid diagram with the default style.
///
/// The result is `cell_side` times larger in both directions.
///
/// # Errors
///
/// [`RasterError::DegenerateDimension`] if `cell_side` is zero.
///
/// # Example
///
/// ```
/// use latchhook_core::{output, Color, Raster};
///
/// let raster = Raster::filled(3, 2, Color::rgb(255, 0, 0)).unwrap();
/// let diagram = output::render(&raster, 4).unwrap();
///
/// assert_eq!((diagram.width(), diagram.height()), (12, 8));
/// assert_eq!(diagram.get(0, 0), Color::gray(200));
/// assert_eq!(diagram.get(2, 2), Color::rgb(255, 0, 0));
/// ```
pub fn render(raster: &Raster, cell_side: usize) -> Result<Raster, RasterError> {
    render_with_style(raster, cell_side, &DiagramStyle::default())
}

/// Render `raster` as a grid diagram using `style`.
///
/// # Errors
///
/// - [`RasterError::DegenerateDimension`] if `cell_side` or
///   `style.decade_every` is zero
/// - [`RasterError::DimensionOverflow`] if the diagram size does not fit in
///   `usize`
pub fn render_with_style(
    raster: &Raster,
    cell_side: usize,
    style: &DiagramStyle,
) -> Result<Raster, RasterError> {
    check_dimensions("diagram cell", cell_side, cell_side)?;
    check_dimensions("diagram decade", style.decade_every, style.decade_every)?;

    let overflow = RasterError::DimensionOverflow {
        stage: "diagram",
        width: raster.width(),
        height: raster.height(),
    };
    let width = raster.width().checked_mul(cell_side).ok_or_else(|| overflow.clone())?;
    let height = raster.height().checked_mul(cell_side).ok_or(overflow)?;
    checked_area("diagram", width, height)?;

    let mut diagram = Raster::from_fn(width, height, |x, y| style.skeleton_at(x, y, cell_side))?;

    // Centers go last so they win over grid lines when cell_side is 1
    let center = cell_side / 2;
    for my in 0..raster.height() {
        for mx in 0..raster.width() {
            diagram.set(
                mx * cell_side + center,
                my * cell_side + center,
                raster.get(mx, my),
            );
        }
    }

    tracing::debug!(
        cells_x = raster.width(),
        cells_y = raster.height(),
        cell_side,
        width,
        height,
        "Rendered grid diagram"
    );
    Ok(diagram)
}

/// A finished latch hook pattern.
#[derive(Debug, Clone)]
pub struct Diagram {
    image: Raster,
    cells: Raster,
    palette: Palette,
    legend: Vec<(Color, usize)>,
    cell_side: usize,
}

impl Diagram {
    pub(crate) fn new(
        image: Raster,
        cells: Raster,
        palette: Palette,
        legend: Vec<(Color, usize)>,
        cell_side: usize,
    ) -> Self {
        Self {
            image,
            cells,
            palette,
            legend,
            cell_side,
        }
    }

    /// The rendered diagram.
    #[inline]
    pub fn image(&self) -> &Raster {
        &self.image
    }

    /// Consume the diagram, keeping only the rendered image.
    pub fn into_image(self) -> Raster {
        self.image
    }

    /// One pixel per cell: the quantized raster the diagram was drawn from.
    #[inline]
    pub fn cells(&self) -> &Raster {
        &self.cells
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Cells per palette color, in palette order.
    #[inline]
    pub fn legend(&self) -> &[(Color, usize)] {
        &self.legend
    }

    /// Cell grid size as `(columns, rows)`.
    #[inline]
    pub fn grid_size(&self) -> (usize, usize) {
        (self.cells.width(), self.cells.height())
    }

    #[inline]
    pub fn cell_side(&self) -> usize {
        self.cell_side
    }
}
