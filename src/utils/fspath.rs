use super::error::AppError;

use std::fs;
use std::path::Path;
use tracing::debug;

/// Directory that has to exist before `path` can be written, if any.
///
/// A bare file name has an empty parent and needs nothing.
pub fn output_parent(path: &Path) -> Option<&Path> {
    path.parent().filter(|parent| !parent.as_os_str().is_empty())
}

/// Creates every missing parent directory of the output file.
///
/// # Errors
/// Returns `AppError::OutputDirectory` when creation is refused, e.g. permission
/// denied or one of the ancestors is a regular file
pub fn ensure_output_directory(path: &Path) -> Result<(), AppError> {
    let Some(parent) = output_parent(path) else {
        return Ok(());
    };
    if parent.is_dir() {
        return Ok(());
    }
    debug!("Creating output directory {}", parent.display());
    fs::create_dir_all(parent).map_err(|source| AppError::OutputDirectory {
        path: parent.to_path_buf(),
        source,
    })
}
