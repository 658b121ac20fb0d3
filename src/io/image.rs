//! Image loading and saving with path-carrying errors

use crate::io::error::{EffectError, Result};
use image::DynamicImage;
use std::path::Path;

/// Decode an image from the filesystem
///
/// The format is inferred from the file content.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a valid image
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path_buf = path.as_ref().to_path_buf();
    image::open(&path_buf).map_err(|e| EffectError::ImageLoad {
        path: path_buf,
        source: e,
    })
}

/// Encode an image to the filesystem
///
/// The format is inferred from the output extension. Missing parent
/// directories are created.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the given path
pub fn save_image<P: AsRef<Path>>(image: &DynamicImage, path: P) -> Result<()> {
    let path_ref = path.as_ref();

    if let Some(parent) = path_ref.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| EffectError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    image.save(path_ref).map_err(|e| EffectError::ImageExport {
        path: path_ref.to_path_buf(),
        source: e,
    })
}
