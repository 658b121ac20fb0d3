//! Rotation and centered cropping for grayscale canvases
//!
//! Positive angles rotate counterclockwise. Exact quarter turns take a
//! lossless transpose path; other angles resample with nearest-neighbor
//! lookup so filled regions keep their exact intensity values.

use image::{GrayImage, Luma, imageops};
use imageproc::geometric_transformations::{Interpolation, rotate_about_center};

/// Angular tolerance below which an angle counts as an exact quarter turn
const QUARTER_TOLERANCE: f32 = 1e-6;

// Lossless turns avoid resampling drift at the multiples of 90 degrees
// where an exact result is available
fn quarter_turns(degrees: f32) -> Option<u32> {
    let turns = (degrees / 90.0).round();
    ((degrees - turns * 90.0).abs() < QUARTER_TOLERANCE)
        .then_some((turns as i32).rem_euclid(4) as u32)
}

/// Rotate counterclockwise, expanding the canvas to bound the rotated content
///
/// The output grows to `⌈w·|cos θ| + h·|sin θ|⌉ × ⌈w·|sin θ| + h·|cos θ|⌉`
/// so no content is clipped. Regions the source does not cover are filled
/// with `fill`. A zero angle returns the input unchanged.
pub fn rotate_expand(image: &GrayImage, degrees: f32, fill: Luma<u8>) -> GrayImage {
    if let Some(turns) = quarter_turns(degrees) {
        return match turns {
            1 => imageops::rotate270(image),
            2 => imageops::rotate180(image),
            3 => imageops::rotate90(image),
            _ => image.clone(),
        };
    }

    let (w, h) = image.dimensions();
    let theta = f64::from(degrees).to_radians();
    let (sin, cos) = (theta.sin().abs(), theta.cos().abs());
    let expanded_w = f64::from(w).mul_add(cos, f64::from(h) * sin).ceil() as u32;
    let expanded_h = f64::from(w).mul_add(sin, f64::from(h) * cos).ceil() as u32;

    // Rotate on a working canvas covering both the source and the target
    // bounds; a steep rotation of an elongated image can shrink a dimension,
    // and rotating in-place on the smaller canvas would clip content
    let work_w = expanded_w.max(w);
    let work_h = expanded_h.max(h);
    let mut canvas = GrayImage::from_pixel(work_w, work_h, fill);
    imageops::replace(
        &mut canvas,
        image,
        i64::from((work_w - w) / 2),
        i64::from((work_h - h) / 2),
    );

    let rotated = rotate_about_center(&canvas, -degrees.to_radians(), Interpolation::Nearest, fill);
    if (work_w, work_h) == (expanded_w, expanded_h) {
        rotated
    } else {
        crop_centered(&rotated, expanded_w, expanded_h, fill)
    }
}

/// Rotate counterclockwise about the center without resizing the canvas
///
/// Content rotated past the canvas bounds is lost and uncovered corners
/// are filled with `fill`. A zero angle returns the input unchanged.
pub fn rotate_keep(image: &GrayImage, degrees: f32, fill: Luma<u8>) -> GrayImage {
    if let Some(turns) = quarter_turns(degrees) {
        let (w, h) = image.dimensions();
        return match turns {
            1 => crop_centered(&imageops::rotate270(image), w, h, fill),
            2 => imageops::rotate180(image),
            3 => crop_centered(&imageops::rotate90(image), w, h, fill),
            _ => image.clone(),
        };
    }

    rotate_about_center(image, -degrees.to_radians(), Interpolation::Nearest, fill)
}

/// Extract a centered `width × height` window from `image`
///
/// Window offsets use integer division of the size difference, so an odd
/// delta leaves the extra source pixel on the right/bottom. When the source
/// is smaller than the requested size in a dimension, the uncovered margin
/// is filled with `fill` instead of reading outside the source; the result
/// always has exactly the requested dimensions.
pub fn crop_centered(image: &GrayImage, width: u32, height: u32, fill: Luma<u8>) -> GrayImage {
    let (source_w, source_h) = image.dimensions();
    if (source_w, source_h) == (width, height) {
        return image.clone();
    }

    let left = (i64::from(source_w) - i64::from(width)) / 2;
    let top = (i64::from(source_h) - i64::from(height)) / 2;

    let mut canvas = GrayImage::from_pixel(width, height, fill);
    imageops::replace(&mut canvas, image, -left, -top);
    canvas
}
