//! Input/output operations and error handling
//!
//! This module contains everything that touches the world outside the
//! renderers: the CLI, image loading and saving, configuration defaults,
//! and the error taxonomy.

/// Command-line interface and effect runner
pub mod cli;
/// Effect constants and runtime configuration defaults
pub mod configuration;
/// Error types for effect rendering and image I/O
pub mod error;
/// Image loading and saving
pub mod image;
