//! Cell grid construction and mean luminance extraction

use crate::io::error::{Result, invalid_parameter};
use image::GrayImage;
use ndarray::Array2;

/// One sampled cell: grid origin plus its mean luminance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSample {
    /// Left edge of the cell in raster coordinates
    pub x: u32,
    /// Top edge of the cell in raster coordinates
    pub y: u32,
    /// Mean luminance of the in-bounds pixels of the cell
    pub luminance: u8,
}

/// Per-cell mean luminances of a grayscale raster
///
/// Cells tile the raster in row-major order starting at `(0, 0)`. Cells at
/// the right/bottom edge that extend past the raster bounds are clipped, and
/// their mean covers only the pixels actually present.
#[derive(Debug, Clone)]
pub struct LuminanceGrid {
    cells: Array2<u8>,
    cell_size: u32,
}

impl LuminanceGrid {
    /// Number of cell rows (`ceil(height / cell_size)`)
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of cell columns (`ceil(width / cell_size)`)
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Side length of the sampling cells in pixels
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Mean luminance of the cell at the given grid position
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.cells.get((row, col)).copied()
    }

    /// Iterate over all cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = CellSample> + '_ {
        let cell_size = self.cell_size;
        self.cells
            .indexed_iter()
            .map(move |((row, col), &luminance)| CellSample {
                x: col as u32 * cell_size,
                y: row as u32 * cell_size,
                luminance,
            })
    }
}

/// Divide a grayscale raster into square cells and average each one
///
/// Produces one mean luminance per non-overlapping `cell_size × cell_size`
/// cell covering the raster. The mean uses truncating integer division of
/// the pixel sum by the count of pixels actually sampled, so clipped edge
/// cells never dilute their average with out-of-bounds reads.
///
/// # Errors
///
/// Returns `InvalidParameter` if `cell_size` is zero. The check happens
/// before any pixel is read.
pub fn luminance_grid(image: &GrayImage, cell_size: u32) -> Result<LuminanceGrid> {
    if cell_size == 0 {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &"must be a positive integer",
        ));
    }

    let (width, height) = image.dimensions();
    let rows = height.div_ceil(cell_size) as usize;
    let cols = width.div_ceil(cell_size) as usize;

    let mut cells = Array2::zeros((rows, cols));
    for row in 0..rows {
        for col in 0..cols {
            let x0 = col as u32 * cell_size;
            let y0 = row as u32 * cell_size;
            let x1 = (x0 + cell_size).min(width);
            let y1 = (y0 + cell_size).min(height);

            let mut sum: u64 = 0;
            for y in y0..y1 {
                for x in x0..x1 {
                    sum += u64::from(image.get_pixel(x, y).0[0]);
                }
            }

            // Cell origins always lie inside the raster, so the clipped
            // span contains at least one pixel
            let count = u64::from(x1 - x0) * u64::from(y1 - y0);
            if let Some(cell) = cells.get_mut((row, col)) {
                *cell = (sum / count) as u8;
            }
        }
    }

    Ok(LuminanceGrid { cells, cell_size })
}
