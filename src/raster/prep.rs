//! Canvas preparation shared by the halftone-style effects

use crate::io::configuration::BLUR_SIGMA_DIVISOR;
use image::{DynamicImage, GrayImage, imageops};

/// Grayscale-convert the source and apply the pre-sampling blur
///
/// The Gaussian sigma scales with the sampling resolution
/// (`cell_size / 3`), which smooths away detail smaller than one cell
/// before the mean luminance pass. Dimensions are unchanged.
pub fn grayscale_blurred(image: &DynamicImage, cell_size: u32) -> GrayImage {
    let grayscale = image.to_luma8();
    imageops::blur(&grayscale, cell_size as f32 / BLUR_SIGMA_DIVISOR)
}
