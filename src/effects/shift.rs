//! Band shift effect
//!
//! Partitions the image into bands and displaces each band cyclically by
//! an independently drawn random offset, producing a torn, glitched look.
//! The only randomized effect; offsets come from a seedable source so runs
//! are reproducible.

use crate::effects::Direction;
use crate::io::error::{Result, invalid_parameter};
use image::{DynamicImage, ImageBuffer, Pixel};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded source of per-band displacement offsets
///
/// Wraps a deterministic generator so the same seed always yields the same
/// sequence of band offsets, making shifted output reproducible in tests
/// and across runs.
pub struct BandOffsetSource {
    rng: StdRng,
}

impl BandOffsetSource {
    /// Create a deterministic offset source
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw a fresh offset in `[0, shift_power]`, inclusive on both ends
    pub fn band_offset(&mut self, shift_power: u32) -> u32 {
        self.rng.random_range(0..=shift_power)
    }
}

/// Render the band shift effect
///
/// The output canvas matches the source's dimensions and color mode.
/// Horizontal direction partitions rows into bands of `band_height` (the
/// last band clipped to the raster); every band draws one offset and maps
/// `out(x, y) = src((x + offset) mod w, y)`. Vertical direction is
/// symmetric over column bands with wraparound modulo the height. Each
/// band's offset is drawn independently, so neighboring bands tear apart.
/// Pixel layouts without a dedicated buffer variant fall back to RGBA.
///
/// # Errors
///
/// Returns `InvalidParameter` if `band_height` is zero. Validation happens
/// before the output canvas is allocated.
pub fn render(
    image: &DynamicImage,
    shift_power: u32,
    direction: Direction,
    band_height: u32,
    offsets: &mut BandOffsetSource,
) -> Result<DynamicImage> {
    if band_height == 0 {
        return Err(invalid_parameter(
            "band_height",
            &band_height,
            &"must be a positive integer",
        ));
    }

    Ok(match image {
        DynamicImage::ImageLuma8(buf) => {
            DynamicImage::ImageLuma8(shift_plane(buf, shift_power, direction, band_height, offsets))
        }
        DynamicImage::ImageLumaA8(buf) => DynamicImage::ImageLumaA8(shift_plane(
            buf,
            shift_power,
            direction,
            band_height,
            offsets,
        )),
        DynamicImage::ImageRgb8(buf) => {
            DynamicImage::ImageRgb8(shift_plane(buf, shift_power, direction, band_height, offsets))
        }
        DynamicImage::ImageRgba8(buf) => {
            DynamicImage::ImageRgba8(shift_plane(buf, shift_power, direction, band_height, offsets))
        }
        DynamicImage::ImageLuma16(buf) => DynamicImage::ImageLuma16(shift_plane(
            buf,
            shift_power,
            direction,
            band_height,
            offsets,
        )),
        DynamicImage::ImageLumaA16(buf) => DynamicImage::ImageLumaA16(shift_plane(
            buf,
            shift_power,
            direction,
            band_height,
            offsets,
        )),
        DynamicImage::ImageRgb16(buf) => {
            DynamicImage::ImageRgb16(shift_plane(buf, shift_power, direction, band_height, offsets))
        }
        DynamicImage::ImageRgba16(buf) => DynamicImage::ImageRgba16(shift_plane(
            buf,
            shift_power,
            direction,
            band_height,
            offsets,
        )),
        DynamicImage::ImageRgb32F(buf) => DynamicImage::ImageRgb32F(shift_plane(
            buf,
            shift_power,
            direction,
            band_height,
            offsets,
        )),
        DynamicImage::ImageRgba32F(buf) => DynamicImage::ImageRgba32F(shift_plane(
            buf,
            shift_power,
            direction,
            band_height,
            offsets,
        )),
        other => DynamicImage::ImageRgba8(shift_plane(
            &other.to_rgba8(),
            shift_power,
            direction,
            band_height,
            offsets,
        )),
    })
}

// Bands are independent units of work; each one reads a disjoint strip of
// the source and writes a disjoint strip of the output
fn shift_plane<P: Pixel + 'static>(
    source: &ImageBuffer<P, Vec<P::Subpixel>>,
    shift_power: u32,
    direction: Direction,
    band_height: u32,
    offsets: &mut BandOffsetSource,
) -> ImageBuffer<P, Vec<P::Subpixel>> {
    let (width, height) = source.dimensions();
    let mut shifted = ImageBuffer::new(width, height);
    if width == 0 || height == 0 {
        return shifted;
    }

    match direction {
        Direction::Horizontal => {
            for band_start in (0..height).step_by(band_height as usize) {
                // Reduce the offset once per band; rotation is cyclic, so
                // displacing by `offset mod w` is the same wraparound
                let offset = offsets.band_offset(shift_power) % width;
                let band_end = band_start.saturating_add(band_height).min(height);
                for y in band_start..band_end {
                    for x in 0..width {
                        let source_x = (x + offset) % width;
                        shifted.put_pixel(x, y, *source.get_pixel(source_x, y));
                    }
                }
            }
        }
        Direction::Vertical => {
            for band_start in (0..width).step_by(band_height as usize) {
                let offset = offsets.band_offset(shift_power) % height;
                let band_end = band_start.saturating_add(band_height).min(width);
                for x in band_start..band_end {
                    for y in 0..height {
                        let source_y = (y + offset) % height;
                        shifted.put_pixel(x, y, *source.get_pixel(x, source_y));
                    }
                }
            }
        }
    }

    shifted
}
