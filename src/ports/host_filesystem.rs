use std::path::Path;

use crate::domain::AppError;

/// Port for the filesystem checks done before a terminal is launched.
pub trait HostFilesystem {
    /// Whether an entry exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` names a directory.
    fn is_dir(&self, path: &Path) -> Result<bool, AppError>;

    /// Read a file's content as a string.
    fn read_file(&self, path: &Path) -> Result<String, AppError>;
}
