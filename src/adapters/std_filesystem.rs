use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::HostFilesystem;

/// `std::fs` backed filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdHostFilesystem;

impl HostFilesystem for StdHostFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> Result<bool, AppError> {
        Ok(fs::metadata(path)?.is_dir())
    }

    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        Ok(fs::read_to_string(path)?)
    }
}
