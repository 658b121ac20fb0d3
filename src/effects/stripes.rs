//! Angled stripe effect
//!
//! Renders the source as black line stripes on white paper. Sampling runs
//! on a rotated copy of the source so the stripes follow the requested
//! orientation, then the drawn canvas is rotated back and cropped to the
//! source bounds.

use crate::io::configuration::{CANVAS_WHITE, INK_BLACK, LUMINANCE_SCALE, ROTATION_FILL};
use crate::io::error::{Result, invalid_parameter};
use crate::raster::{prep, rotation};
use crate::sampling::luminance_grid;
use image::{DynamicImage, GrayImage, Luma};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

/// Map a cell's mean luminance to a stripe width in pixels
///
/// The darkest cell spans the full cell (`line_width = cell_size`); the
/// brightest maps to zero. The mapping is linear and monotonically
/// decreasing in luminance.
pub fn stripe_width(cell_size: u32, luminance: u8) -> f64 {
    f64::from(cell_size) * (1.0 - f64::from(luminance) / LUMINANCE_SCALE)
}

/// Render the angled stripe effect
///
/// The source is grayscale-converted, blurred, and rotated by `-angle`
/// degrees with canvas expansion so no content is lost. Each cell of the
/// rotated raster draws a filled black rectangle horizontally centered in
/// the cell (`start_x = x + (cell_size - line_width) / 2`), spanning the
/// full cell height, onto a white canvas of the rotated dimensions. Widths
/// that round below one pixel draw nothing and the cell stays white. The
/// canvas is then rotated back by `+angle` without expansion and a centered
/// window of the source dimensions is cropped out. A zero angle bypasses
/// both rotations, making the crop offsets zero and the output dimensions
/// exactly the input's. Deterministic for fixed inputs and parameters.
///
/// # Errors
///
/// Returns `InvalidParameter` if `cell_size` is zero. Validation happens
/// before any pixel work, so a rejected call allocates nothing.
pub fn render(image: &DynamicImage, cell_size: u32, angle: f32) -> Result<GrayImage> {
    if cell_size == 0 {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &"must be a positive integer",
        ));
    }

    let blurred = prep::grayscale_blurred(image, cell_size);
    let (source_w, source_h) = blurred.dimensions();

    let rotated = rotation::rotate_expand(&blurred, -angle, Luma([ROTATION_FILL]));
    let grid = luminance_grid(&rotated, cell_size)?;

    let mut canvas = GrayImage::from_pixel(rotated.width(), rotated.height(), Luma([CANVAS_WHITE]));
    for cell in grid.iter() {
        let width_px = stripe_width(cell_size, cell.luminance).round() as u32;
        if width_px > 0 {
            let start_x = cell.x + (cell_size - width_px) / 2;
            draw_filled_rect_mut(
                &mut canvas,
                Rect::at(start_x as i32, cell.y as i32).of_size(width_px, cell_size),
                Luma([INK_BLACK]),
            );
        }
    }

    let restored = rotation::rotate_keep(&canvas, angle, Luma([ROTATION_FILL]));
    Ok(rotation::crop_centered(
        &restored,
        source_w,
        source_h,
        Luma([CANVAS_WHITE]),
    ))
}
