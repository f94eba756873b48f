//! Launcher settings and their layered resolution.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, DEFAULT_SHELL_PATH};

/// Environment variable overriding the configured shell path.
pub const SHELL_PATH_ENV: &str = "CYGTERM_CYGWIN_PATH";

/// Environment variable naming an alternative settings file.
pub const CONFIG_FILE_ENV: &str = "CYGTERM_CONFIG";

/// Contents of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    #[serde(default)]
    pub cygwin_terminal: TerminalSettings,
}

/// `[cygwin_terminal]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TerminalSettings {
    /// Path to Cygwin's `bash.exe`.
    #[serde(default)]
    pub path: Option<String>,
}

impl SettingsFile {
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(content)?)
    }
}

/// Resolved launcher configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    pub shell_path: PathBuf,
}

impl LauncherConfig {
    /// Pick the first non-empty candidate, highest precedence first, else the default.
    pub fn resolve<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Self {
        let shell_path = candidates
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|value| !value.is_empty())
            .unwrap_or(DEFAULT_SHELL_PATH);
        Self { shell_path: PathBuf::from(shell_path) }
    }
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self { shell_path: PathBuf::from(DEFAULT_SHELL_PATH) }
    }
}
