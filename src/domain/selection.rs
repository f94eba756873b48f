use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::HostFilesystem;

/// Directory a terminal should start in for a selected entry.
///
/// A directory selects itself, a file selects its parent.
pub fn resolve_target_directory(
    fs: &impl HostFilesystem,
    selected: &Path,
) -> Result<PathBuf, AppError> {
    if !fs.exists(selected) {
        return Err(AppError::SelectedPathNotFound(selected.display().to_string()));
    }

    if fs.is_dir(selected)? {
        return Ok(selected.to_path_buf());
    }

    selected
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            AppError::config_error(format!(
                "Selected file has no parent directory: {}",
                selected.display()
            ))
        })
}
