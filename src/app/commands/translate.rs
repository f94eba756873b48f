use std::path::Path;

use crate::domain::{AppError, resolve_target_directory, translate};
use crate::ports::HostFilesystem;

/// Translate each path; with `resolve`, map it to its target directory first.
pub fn execute<P: AsRef<Path>>(
    fs: &impl HostFilesystem,
    paths: &[P],
    resolve: bool,
) -> Result<Vec<String>, AppError> {
    paths
        .iter()
        .map(|path| {
            let path = path.as_ref();
            if resolve {
                let target = resolve_target_directory(fs, path)?;
                Ok(translate(&target.to_string_lossy()))
            } else {
                Ok(translate(&path.to_string_lossy()))
            }
        })
        .collect()
}
