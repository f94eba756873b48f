//! API Facade for the application.
//!
//! Wires the std-backed adapters into an `AppContext` and runs commands.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::adapters::{CommandProcessLauncher, StdHostFilesystem, TomlSettingsFile};
use crate::app::commands::{open, translate, window};
use crate::app::config::resolve_launcher_config;
use crate::app::AppContext;
use crate::ports::Notifier;

pub use crate::app::commands::open::{OpenOutcome, TerminalHandle};
pub use crate::app::commands::window::{LaunchedTerminal, WindowOptions, WindowOutcome};
pub use crate::domain::{AppError, LaunchPlan, LauncherConfig};

/// Inputs shared by both launch commands.
#[derive(Debug, Clone, Default)]
pub struct LaunchRequest {
    /// Selected file or directory; the current directory when `None`.
    pub selected: Option<PathBuf>,
    /// Shell path overriding environment and settings file.
    pub cygwin_path: Option<String>,
    /// Settings file overriding the per-user default.
    pub config_file: Option<PathBuf>,
    /// Assemble the plan without spawning.
    pub dry_run: bool,
}

fn create_context(
    notifier: Arc<dyn Notifier>,
) -> AppContext<StdHostFilesystem, CommandProcessLauncher> {
    AppContext::new(StdHostFilesystem, CommandProcessLauncher::new(), notifier)
}

/// Resolve the launcher configuration from flag, environment and settings file.
pub fn launcher_config(
    cygwin_path: Option<&str>,
    config_file: Option<PathBuf>,
) -> Result<LauncherConfig, AppError> {
    resolve_launcher_config(cygwin_path, &TomlSettingsFile::locate(config_file))
}

fn selected_path(selected: Option<&Path>) -> Result<PathBuf, AppError> {
    match selected {
        Some(path) => Ok(std::path::absolute(path)?),
        None => Ok(env::current_dir()?),
    }
}

/// Open a Cygwin login shell in the invoking console.
pub fn open(request: &LaunchRequest, notifier: Arc<dyn Notifier>) -> Result<OpenOutcome, AppError> {
    let config = launcher_config(request.cygwin_path.as_deref(), request.config_file.clone())?;
    let selected = selected_path(request.selected.as_deref())?;
    let ctx = create_context(notifier);
    open::execute(&ctx, &config, &selected, request.dry_run)
}

/// Open a Cygwin terminal in a detached mintty window.
pub fn window(
    request: &LaunchRequest,
    notifier: Arc<dyn Notifier>,
) -> Result<WindowOutcome, AppError> {
    let config = launcher_config(request.cygwin_path.as_deref(), request.config_file.clone())?;
    let selected = selected_path(request.selected.as_deref())?;
    let ctx = create_context(notifier);
    window::execute(&ctx, &config, &selected, WindowOptions { dry_run: request.dry_run })
}

/// Translate host paths into Cygwin paths.
pub fn translate_paths<P: AsRef<Path>>(paths: &[P], resolve: bool) -> Result<Vec<String>, AppError> {
    translate::execute(&StdHostFilesystem, paths, resolve)
}
