//! Grid sampling over grayscale rasters
//!
//! Divides a raster into fixed-size square cells and reduces each cell to
//! its mean luminance. Both halftone-style effects consume this grid.

/// Cell grid construction and mean luminance extraction
pub mod grid;

pub use grid::{CellSample, LuminanceGrid, luminance_grid};
