use std::env;
use std::path::{Path, PathBuf};

use crate::adapters::StdHostFilesystem;
use crate::domain::settings::CONFIG_FILE_ENV;
use crate::domain::{AppError, SettingsFile};
use crate::ports::{HostFilesystem, SettingsSource};

/// Settings read from a TOML file.
///
/// An explicitly named file must exist; the per-user default may be absent.
#[derive(Debug, Clone)]
pub struct TomlSettingsFile<F: HostFilesystem = StdHostFilesystem> {
    fs: F,
    path: Option<PathBuf>,
    required: bool,
}

impl TomlSettingsFile<StdHostFilesystem> {
    /// Locate the settings file: `explicit`, else `$CYGTERM_CONFIG`, else the user config dir.
    pub fn locate(explicit: Option<PathBuf>) -> Self {
        if let Some(path) = explicit {
            return Self::required(StdHostFilesystem, path);
        }

        if let Some(path) = env::var_os(CONFIG_FILE_ENV).filter(|value| !value.is_empty()) {
            return Self::required(StdHostFilesystem, PathBuf::from(path));
        }

        Self::optional(StdHostFilesystem, Self::default_path())
    }

    /// `<config dir>/cygterm/config.toml`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cygterm").join("config.toml"))
    }
}

impl<F: HostFilesystem> TomlSettingsFile<F> {
    pub fn required(fs: F, path: PathBuf) -> Self {
        Self { fs, path: Some(path), required: true }
    }

    pub fn optional(fs: F, path: Option<PathBuf>) -> Self {
        Self { fs, path, required: false }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl<F: HostFilesystem> SettingsSource for TomlSettingsFile<F> {
    fn load(&self) -> Result<SettingsFile, AppError> {
        let Some(path) = &self.path else {
            return Ok(SettingsFile::default());
        };

        if !self.fs.exists(path) {
            if self.required {
                return Err(AppError::ConfigFileNotFound(path.display().to_string()));
            }
            return Ok(SettingsFile::default());
        }

        let content = self.fs.read_file(path)?;
        SettingsFile::parse_toml(&content)
    }
}
