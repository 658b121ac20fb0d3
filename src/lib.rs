//! Raster stylization effects over bitmap images
//!
//! Converts a source bitmap into halftone dots, angled line stripes, or
//! band-displaced output. The two halftone-style effects share a grid
//! sampling pass that reduces each fixed-size cell to its mean luminance;
//! the shift effect displaces whole bands cyclically with seeded randomness.

#![forbid(unsafe_code)]

/// Effect renderers, parameters, and dispatch
pub mod effects;
/// Input/output operations and error handling
pub mod io;
/// Canvas preparation and geometric raster utilities
pub mod raster;
/// Cell grid sampling and luminance averaging
pub mod sampling;

pub use io::error::{EffectError, Result};
