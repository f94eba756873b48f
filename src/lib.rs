//! cygterm: open a Cygwin terminal rooted at a selected file or directory.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{
    LaunchRequest, LaunchedTerminal, OpenOutcome, TerminalHandle, WindowOptions, WindowOutcome,
    launcher_config, open, translate_paths, window,
};
pub use domain::{
    AppError, CygwinInstallation, ErrorCategory, ExitReport, LaunchMode, LaunchPlan,
    LauncherConfig, resolve_target_directory, translate,
};
