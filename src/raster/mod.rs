//! Raster canvas utilities shared by the effect renderers
//!
//! This module wraps the external imaging primitives the effects build on:
//! - Grayscale conversion with the pre-sampling blur pass
//! - Rotation with and without canvas expansion
//! - Centered cropping with exact output dimensions

/// Grayscale conversion and smoothing pass
pub mod prep;
/// Rotation and centered cropping primitives
pub mod rotation;
