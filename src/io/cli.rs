//! Command-line interface for applying raster effects to image files

use crate::effects::{self, BandOffsetSource, Direction, Effect, EffectParameters};
use crate::io::configuration::{
    DEFAULT_ANGLE, DEFAULT_BAND_HEIGHT, DEFAULT_CELL_SIZE, DEFAULT_SEED, DEFAULT_SHIFT_POWER,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{load_image, save_image};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pixmorph")]
#[command(
    author,
    version,
    about = "Transform images with halftone dot, stripe, and band shift effects"
)]
/// Command-line arguments for the effect tool
pub struct Cli {
    /// Input image file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output image file
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Effect to apply
    #[arg(short, long, value_enum)]
    pub effect: Effect,

    /// Direction for the shift effect
    #[arg(short, long, value_enum)]
    pub direction: Option<Direction>,

    /// Maximum band displacement in pixels for the shift effect
    #[arg(short = 'p', long)]
    pub shift_power: Option<u32>,

    /// Height of each displaced band in pixels for the shift effect
    #[arg(short, long)]
    pub band_height: Option<u32>,

    /// Cell size in pixels for the dots and stripes effects
    #[arg(short, long)]
    pub cell_size: Option<u32>,

    /// Stripe orientation in degrees for the stripes effect
    #[arg(short, long, allow_negative_numbers = true)]
    pub angle: Option<f32>,

    /// Random seed for reproducible band displacement
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress status output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Resolve the provided options into effect parameters
    ///
    /// Options that do not apply to the chosen effect are rejected rather
    /// than silently ignored; omitted options fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when an option incompatible with the
    /// chosen effect was provided
    pub fn effect_parameters(&self) -> Result<EffectParameters> {
        match self.effect {
            Effect::Shift => {
                reject_option("--cell-size", self.cell_size, self.effect)?;
                reject_option("--angle", self.angle, self.effect)?;
            }
            Effect::Dots => {
                reject_option("--direction", self.direction, self.effect)?;
                reject_option("--shift-power", self.shift_power, self.effect)?;
                reject_option("--band-height", self.band_height, self.effect)?;
                reject_option("--angle", self.angle, self.effect)?;
            }
            Effect::Stripes => {
                reject_option("--direction", self.direction, self.effect)?;
                reject_option("--shift-power", self.shift_power, self.effect)?;
                reject_option("--band-height", self.band_height, self.effect)?;
            }
        }

        Ok(EffectParameters {
            cell_size: self.cell_size.unwrap_or(DEFAULT_CELL_SIZE),
            angle: self.angle.unwrap_or(DEFAULT_ANGLE),
            shift_power: self.shift_power.unwrap_or(DEFAULT_SHIFT_POWER),
            direction: self.direction.unwrap_or_default(),
            band_height: self.band_height.unwrap_or(DEFAULT_BAND_HEIGHT),
        })
    }
}

// Options are rejected rather than silently ignored so a typo in the
// effect name cannot reinterpret carefully chosen parameters
fn reject_option<T: ToString>(flag: &'static str, value: Option<T>, effect: Effect) -> Result<()> {
    value.map_or(Ok(()), |value| {
        Err(invalid_parameter(
            flag,
            &value,
            &format!("not applicable to the '{effect}' effect"),
        ))
    })
}

/// Runs a single load, render, save pass for the chosen effect
pub struct EffectRunner {
    cli: Cli,
}

impl EffectRunner {
    /// Create a runner from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the input, apply the effect, and save the result
    ///
    /// # Errors
    ///
    /// Returns an error if option validation, image loading, rendering, or
    /// saving fails. Validation runs first, so an incompatible option set
    /// never touches the filesystem.
    // Allow print for user feedback on completion
    #[allow(clippy::print_stderr)]
    pub fn run(&self) -> Result<()> {
        let parameters = self.cli.effect_parameters()?;
        let source = load_image(&self.cli.input)?;

        let mut offsets = BandOffsetSource::new(self.cli.seed);
        let result = effects::apply(&source, self.cli.effect, &parameters, &mut offsets)?;

        save_image(&result, &self.cli.output)?;

        if !self.cli.quiet {
            eprintln!(
                "Applied '{}' effect and saved to {}",
                self.cli.effect,
                self.cli.output.display()
            );
        }

        Ok(())
    }
}
