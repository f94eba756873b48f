pub mod error;
pub mod installation;
pub mod launch;
pub mod posix_path;
pub mod selection;
pub mod settings;

pub use error::{AppError, ErrorCategory};
pub use installation::{CygwinInstallation, DEFAULT_SHELL_PATH, MINTTY_EXECUTABLE};
pub use launch::{ExitReport, LaunchMode, LaunchPlan};
pub use posix_path::translate;
pub use selection::resolve_target_directory;
pub use settings::{LauncherConfig, SettingsFile};
