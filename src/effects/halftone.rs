//! Halftone dot effect
//!
//! Renders the source as a grid of black dots on white paper, the classic
//! newsprint look. Each sampling cell contributes one dot whose radius
//! grows as the cell darkens.

use crate::io::configuration::{CANVAS_WHITE, INK_BLACK, LUMINANCE_SCALE};
use crate::io::error::{Result, invalid_parameter};
use crate::raster::prep;
use crate::sampling::luminance_grid;
use image::{DynamicImage, GrayImage, Luma};
use imageproc::drawing::draw_filled_circle_mut;

/// Map a cell's mean luminance to a dot radius in pixels
///
/// The darkest cell fills half the cell (`radius = cell_size / 2`); the
/// brightest maps to zero. The mapping is linear and monotonically
/// decreasing in luminance.
pub fn dot_radius(cell_size: u32, luminance: u8) -> f64 {
    f64::from(cell_size) / 2.0 * (1.0 - f64::from(luminance) / LUMINANCE_SCALE)
}

/// Render the halftone dot effect
///
/// The source is grayscale-converted, blurred, and sampled cell by cell.
/// Each cell draws a filled black circle with bounding box
/// `(x, y, x + 2·radius, y + 2·radius)` onto a white canvas matching the
/// source dimensions. Radii that round below one pixel draw nothing, so a
/// fully white source yields a fully white canvas. Deterministic: the same
/// source and `cell_size` always produce a bit-identical result.
///
/// # Errors
///
/// Returns `InvalidParameter` if `cell_size` is zero. Validation happens
/// before any pixel work, so a rejected call allocates nothing.
pub fn render(image: &DynamicImage, cell_size: u32) -> Result<GrayImage> {
    if cell_size == 0 {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &"must be a positive integer",
        ));
    }

    let blurred = prep::grayscale_blurred(image, cell_size);
    let grid = luminance_grid(&blurred, cell_size)?;

    let mut canvas = GrayImage::from_pixel(blurred.width(), blurred.height(), Luma([CANVAS_WHITE]));
    for cell in grid.iter() {
        let radius = dot_radius(cell_size, cell.luminance);
        let radius_px = radius.round() as i32;
        if radius_px > 0 {
            // Bounding box (x, y, x+2r, y+2r) puts the center at (x+r, y+r)
            let center_x = (f64::from(cell.x) + radius).round() as i32;
            let center_y = (f64::from(cell.y) + radius).round() as i32;
            draw_filled_circle_mut(
                &mut canvas,
                (center_x, center_y),
                radius_px,
                Luma([INK_BLACK]),
            );
        }
    }

    Ok(canvas)
}
