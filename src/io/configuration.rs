//! Effect constants and runtime configuration defaults

// Canvas intensity levels for the grayscale effects
/// Background value for freshly allocated halftone and stripe canvases
pub const CANVAS_WHITE: u8 = 255;
/// Fill value for drawn dots and stripes
pub const INK_BLACK: u8 = 0;
/// Fill value for regions a rotation leaves uncovered
pub const ROTATION_FILL: u8 = 0;

/// Full-scale luminance used by the radius and width mappings
pub const LUMINANCE_SCALE: f64 = 255.0;

// Smoothing pass ahead of cell sampling; the divisor ties blur strength
// to the sampling resolution
/// Blur sigma is `cell_size` divided by this
pub const BLUR_SIGMA_DIVISOR: f32 = 3.0;

// Default values for configurable parameters
/// Default cell size for the dots and stripes effects
pub const DEFAULT_CELL_SIZE: u32 = 6;

/// Default stripe orientation in degrees
pub const DEFAULT_ANGLE: f32 = 0.0;

/// Default maximum band displacement in pixels
pub const DEFAULT_SHIFT_POWER: u32 = 20;

/// Default band height in pixels
pub const DEFAULT_BAND_HEIGHT: u32 = 1;

/// Fixed seed for reproducible band displacement
pub const DEFAULT_SEED: u64 = 42;
