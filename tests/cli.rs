//! Tests for command-line parsing, option compatibility, and the runner

use clap::Parser;
use image::{DynamicImage, GrayImage, Luma};
use pixmorph::effects::{Direction, Effect};
use pixmorph::io::cli::{Cli, EffectRunner};
use pixmorph::io::configuration::{
    DEFAULT_BAND_HEIGHT, DEFAULT_CELL_SIZE, DEFAULT_SEED, DEFAULT_SHIFT_POWER,
};

#[test]
fn test_parse_minimal_dots() {
    let cli = Cli::parse_from(["pixmorph", "in.png", "out.png", "--effect", "dots"]);

    assert_eq!(cli.effect, Effect::Dots);
    assert_eq!(cli.seed, DEFAULT_SEED);
    assert!(!cli.quiet);

    let Ok(parameters) = cli.effect_parameters() else {
        unreachable!("defaults must resolve for the dots effect");
    };
    assert_eq!(parameters.cell_size, DEFAULT_CELL_SIZE);
}

#[test]
fn test_parse_all_shift_options() {
    let cli = Cli::parse_from([
        "pixmorph",
        "in.png",
        "out.png",
        "--effect",
        "shift",
        "--direction",
        "vertical",
        "--shift-power",
        "35",
        "--band-height",
        "4",
        "--seed",
        "123",
        "--quiet",
    ]);

    assert_eq!(cli.effect, Effect::Shift);
    assert_eq!(cli.seed, 123);
    assert!(cli.quiet);

    let Ok(parameters) = cli.effect_parameters() else {
        unreachable!("shift options must resolve for the shift effect");
    };
    assert_eq!(parameters.direction, Direction::Vertical);
    assert_eq!(parameters.shift_power, 35);
    assert_eq!(parameters.band_height, 4);
}

#[test]
fn test_shift_defaults_when_options_omitted() {
    let cli = Cli::parse_from(["pixmorph", "in.png", "out.png", "--effect", "shift"]);

    let Ok(parameters) = cli.effect_parameters() else {
        unreachable!("defaults must resolve for the shift effect");
    };
    assert_eq!(parameters.direction, Direction::Horizontal);
    assert_eq!(parameters.shift_power, DEFAULT_SHIFT_POWER);
    assert_eq!(parameters.band_height, DEFAULT_BAND_HEIGHT);
}

#[test]
fn test_stripes_accepts_angle() {
    let cli = Cli::parse_from([
        "pixmorph",
        "in.png",
        "out.png",
        "--effect",
        "stripes",
        "--cell-size",
        "8",
        "--angle",
        "45",
    ]);

    let Ok(parameters) = cli.effect_parameters() else {
        unreachable!("angle must resolve for the stripes effect");
    };
    assert_eq!(parameters.cell_size, 8);
    assert!((parameters.angle - 45.0).abs() < f32::EPSILON);
}

#[test]
fn test_shift_rejects_cell_size() {
    let cli = Cli::parse_from([
        "pixmorph",
        "in.png",
        "out.png",
        "--effect",
        "shift",
        "--cell-size",
        "8",
    ]);

    assert!(matches!(
        cli.effect_parameters(),
        Err(pixmorph::EffectError::InvalidParameter { .. })
    ));
}

#[test]
fn test_dots_rejects_direction() {
    let cli = Cli::parse_from([
        "pixmorph",
        "in.png",
        "out.png",
        "--effect",
        "dots",
        "--direction",
        "vertical",
    ]);

    assert!(matches!(
        cli.effect_parameters(),
        Err(pixmorph::EffectError::InvalidParameter { .. })
    ));
}

#[test]
fn test_dots_rejects_angle() {
    let cli = Cli::parse_from([
        "pixmorph",
        "in.png",
        "out.png",
        "--effect",
        "dots",
        "--angle",
        "30",
    ]);

    assert!(matches!(
        cli.effect_parameters(),
        Err(pixmorph::EffectError::InvalidParameter { .. })
    ));
}

#[test]
fn test_stripes_rejects_shift_power() {
    let cli = Cli::parse_from([
        "pixmorph",
        "in.png",
        "out.png",
        "--effect",
        "stripes",
        "--shift-power",
        "10",
    ]);

    assert!(matches!(
        cli.effect_parameters(),
        Err(pixmorph::EffectError::InvalidParameter { .. })
    ));
}

#[test]
fn test_runner_round_trip() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("temporary directory must be creatable");
    };
    let input_path = dir.path().join("input.png");
    let output_path = dir.path().join("output.png");

    let source = DynamicImage::ImageLuma8(GrayImage::from_pixel(12, 12, Luma([0])));
    assert!(source.save(&input_path).is_ok());

    let cli = Cli::parse_from([
        "pixmorph",
        input_path.to_string_lossy().as_ref(),
        output_path.to_string_lossy().as_ref(),
        "--effect",
        "dots",
        "--quiet",
    ]);

    let runner = EffectRunner::new(cli);
    assert!(runner.run().is_ok());
    assert!(output_path.exists());

    let Ok(written) = image::open(&output_path) else {
        unreachable!("saved output must decode");
    };
    assert_eq!((written.width(), written.height()), (12, 12));
}

#[test]
fn test_runner_rejects_incompatible_options_before_io() {
    let cli = Cli::parse_from([
        "pixmorph",
        "missing-input.png",
        "unwritten-output.png",
        "--effect",
        "shift",
        "--angle",
        "12",
    ]);

    // Validation fires before the (nonexistent) input is touched
    let runner = EffectRunner::new(cli);
    assert!(matches!(
        runner.run(),
        Err(pixmorph::EffectError::InvalidParameter { .. })
    ));
}
