//! Validates the stripe effect's rotation bookkeeping and width mapping

use image::{DynamicImage, GrayImage, Luma};
use pixmorph::effects::stripes::{render, stripe_width};

fn gray_input(width: u32, height: u32, value: u8) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([value])))
}

fn patterned_input(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |x, y| {
        Luma([((x * 23 + y * 31) % 256) as u8])
    }))
}

#[test]
fn test_zero_angle_preserves_dimensions() {
    let source = patterned_input(11, 7);
    let Ok(canvas) = render(&source, 3, 0.0) else {
        unreachable!("stripes effect must accept a positive cell size");
    };

    assert_eq!(canvas.dimensions(), (11, 7));
}

#[test]
fn test_white_input_stays_white() {
    let source = gray_input(12, 12, 255);
    let Ok(canvas) = render(&source, 6, 0.0) else {
        unreachable!("stripes effect must accept a positive cell size");
    };

    assert!(canvas.pixels().all(|p| p.0[0] == 255));
}

#[test]
fn test_black_input_fills_cells_at_zero_angle() {
    let source = gray_input(12, 12, 0);
    let Ok(canvas) = render(&source, 6, 0.0) else {
        unreachable!("stripes effect must accept a positive cell size");
    };

    // Full-width stripes spanning full cell height leave no white
    assert!(canvas.pixels().all(|p| p.0[0] == 0));
}

#[test]
fn test_angled_output_matches_source_dimensions() {
    let source = patterned_input(20, 14);
    let Ok(canvas) = render(&source, 4, 37.0) else {
        unreachable!("stripes effect must accept a positive cell size");
    };

    assert_eq!(canvas.dimensions(), (20, 14));
}

#[test]
fn test_odd_size_delta_still_crops_to_source() {
    // 45 degrees on a 9x9 source expands to an odd-delta canvas
    let source = patterned_input(9, 9);
    let Ok(canvas) = render(&source, 3, 45.0) else {
        unreachable!("stripes effect must accept a positive cell size");
    };

    assert_eq!(canvas.dimensions(), (9, 9));
}

#[test]
fn test_width_mapping_endpoints() {
    assert!(stripe_width(6, 255).abs() < f64::EPSILON);
    assert!((stripe_width(6, 0) - 6.0).abs() < f64::EPSILON);
}

#[test]
fn test_width_mapping_is_monotonically_decreasing() {
    let mut previous = stripe_width(10, 0);
    for luminance in 1..=255_u8 {
        let width = stripe_width(10, luminance);
        assert!(width <= previous, "width must not grow with luminance");
        assert!(width >= 0.0);
        previous = width;
    }
}

#[test]
fn test_rerendering_is_bit_identical() {
    let source = patterned_input(24, 18);

    let Ok(first) = render(&source, 5, 30.0) else {
        unreachable!("stripes effect must accept a positive cell size");
    };
    let Ok(second) = render(&source, 5, 30.0) else {
        unreachable!("stripes effect must accept a positive cell size");
    };

    assert_eq!(first.as_raw(), second.as_raw());
}

#[test]
fn test_zero_cell_size_is_rejected() {
    let source = gray_input(8, 8, 128);
    let result = render(&source, 0, 15.0);

    assert!(matches!(
        result,
        Err(pixmorph::EffectError::InvalidParameter { .. })
    ));
}
