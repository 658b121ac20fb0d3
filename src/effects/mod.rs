//! Effect renderers, parameters, and dispatch
//!
//! Each effect is an independent function reading only the source raster
//! and its parameters; [`apply`] routes a selected effect to its renderer.

use crate::io::configuration::{
    DEFAULT_ANGLE, DEFAULT_BAND_HEIGHT, DEFAULT_CELL_SIZE, DEFAULT_SHIFT_POWER,
};
use crate::io::error::Result;
use clap::ValueEnum;
use image::DynamicImage;
use std::fmt;

/// Halftone dot rendering
pub mod halftone;
/// Banded pixel displacement
pub mod shift;
/// Angled line-stripe rendering
pub mod stripes;

pub use shift::BandOffsetSource;

/// Selectable raster effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Effect {
    /// Halftone dots on a white canvas
    Dots,
    /// Angled line stripes on a white canvas
    Stripes,
    /// Cyclic band displacement preserving the source colors
    Shift,
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dots => write!(f, "dots"),
            Self::Stripes => write!(f, "stripes"),
            Self::Shift => write!(f, "shift"),
        }
    }
}

/// Band orientation for the shift effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Direction {
    /// Bands of rows, displaced along the x axis
    #[default]
    Horizontal,
    /// Bands of columns, displaced along the y axis
    Vertical,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// Immutable per-invocation effect configuration
#[derive(Debug, Clone)]
pub struct EffectParameters {
    /// Sampling cell side length for the dots and stripes effects
    pub cell_size: u32,
    /// Stripe orientation in degrees
    pub angle: f32,
    /// Maximum band displacement in pixels
    pub shift_power: u32,
    /// Band orientation for the shift effect
    pub direction: Direction,
    /// Band thickness in pixels
    pub band_height: u32,
}

impl Default for EffectParameters {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            angle: DEFAULT_ANGLE,
            shift_power: DEFAULT_SHIFT_POWER,
            direction: Direction::Horizontal,
            band_height: DEFAULT_BAND_HEIGHT,
        }
    }
}

/// Apply the selected effect to a source raster
///
/// Returns a freshly allocated output raster; the source is only read.
/// The offset source is consumed only by the shift effect.
///
/// # Errors
///
/// Returns `InvalidParameter` if the parameters fail the selected
/// renderer's validation; the check happens before any pixel work.
pub fn apply(
    image: &DynamicImage,
    effect: Effect,
    parameters: &EffectParameters,
    offsets: &mut BandOffsetSource,
) -> Result<DynamicImage> {
    match effect {
        Effect::Dots => Ok(DynamicImage::ImageLuma8(halftone::render(
            image,
            parameters.cell_size,
        )?)),
        Effect::Stripes => Ok(DynamicImage::ImageLuma8(stripes::render(
            image,
            parameters.cell_size,
            parameters.angle,
        )?)),
        Effect::Shift => shift::render(
            image,
            parameters.shift_power,
            parameters.direction,
            parameters.band_height,
            offsets,
        ),
    }
}
