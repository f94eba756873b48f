//! Launcher configuration resolution.

use std::env;

use tracing::debug;

use crate::domain::settings::SHELL_PATH_ENV;
use crate::domain::{AppError, LauncherConfig};
use crate::ports::SettingsSource;

/// Resolve the shell path: CLI flag, then `$CYGTERM_CYGWIN_PATH`, then the settings file,
/// then the default installation path.
pub fn resolve_launcher_config(
    flag: Option<&str>,
    settings: &impl SettingsSource,
) -> Result<LauncherConfig, AppError> {
    let from_env = env::var(SHELL_PATH_ENV).ok();
    let from_file = settings.load()?.cygwin_terminal.path;

    let config = LauncherConfig::resolve([flag, from_env.as_deref(), from_file.as_deref()]);
    debug!(shell = %config.shell_path.display(), "resolved launcher config");
    Ok(config)
}
