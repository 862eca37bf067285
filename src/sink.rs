//! Persists rasterized images under the output directory.

use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::error::BatchError;

/// Write `image` to `<dir>/<identifier>.png`, creating `dir` if missing.
///
/// An existing file with the same name is replaced without warning.
/// Directory creation is idempotent, so a sibling worker creating `dir`
/// at the same moment is not an error.
///
/// On success the final path is logged and returned.
///
/// # Errors
/// [`BatchError::DirectoryCreate`] when `dir` cannot be created, and
/// [`BatchError::FileWrite`] when the image cannot be encoded or the file
/// cannot be written.
pub fn persist(image: &RgbaImage, dir: &Path, identifier: &str) -> Result<PathBuf, BatchError> {
    create_dir_all(dir).map_err(|source| BatchError::DirectoryCreate {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(format!("{identifier}.png"));
    image.save(&path).map_err(|source| BatchError::FileWrite {
        path: path.clone(),
        source,
    })?;
    log::info!("wrote {}", path.display());
    Ok(path)
}
