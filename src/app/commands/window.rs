//! External terminal: a detached mintty window.

use std::path::Path;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{debug, info, warn};

use crate::app::AppContext;
use crate::domain::{
    AppError, CygwinInstallation, LaunchPlan, LauncherConfig, resolve_target_directory, translate,
};
use crate::ports::{HostFilesystem, Notifier, ProcessLauncher, RunningProcess};

/// Options for `window`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowOptions {
    /// Assemble and return the plan without spawning.
    pub dry_run: bool,
}

/// Outcome of `window`.
pub enum WindowOutcome {
    Planned(LaunchPlan),
    Launched(LaunchedTerminal),
}

/// A fire-and-forget terminal launch.
///
/// Dropping it releases the exit watcher; the terminal keeps running either way.
pub struct LaunchedTerminal {
    pid: Option<u32>,
    watcher: Option<JoinHandle<()>>,
}

impl LaunchedTerminal {
    /// Process id, or `None` when the spawn failed (already reported).
    pub fn pid(&self) -> Option<u32> {
        self.pid
    }

    /// Block until the exit observer has run.
    pub fn join(self) {
        if let Some(watcher) = self.watcher {
            if watcher.join().is_err() {
                warn!("exit watcher panicked");
            }
        }
    }
}

/// Spawn `plan` detached and attach the error and exit observers.
///
/// Never fails: spawn and exit problems go to `notifier`.
pub fn launch_external(
    launcher: &impl ProcessLauncher,
    notifier: Arc<dyn Notifier>,
    plan: &LaunchPlan,
) -> LaunchedTerminal {
    info!(command = %plan.command_line(), cwd = %plan.cwd.display(), "starting external terminal");

    match launcher.spawn_detached(plan) {
        Ok(process) => {
            let pid = process.id();
            debug!(pid, "terminal spawned");
            let watcher = thread::spawn(move || observe_exit(process, notifier));
            LaunchedTerminal { pid: Some(pid), watcher: Some(watcher) }
        }
        Err(err) => {
            notifier.error(&process_error_message(&err));
            LaunchedTerminal { pid: None, watcher: None }
        }
    }
}

fn observe_exit(process: Box<dyn RunningProcess>, notifier: Arc<dyn Notifier>) {
    match process.wait() {
        Ok(report) if report.success() => debug!("terminal exited cleanly"),
        Ok(report) => notifier.error(&report.describe()),
        Err(err) => notifier.error(&process_error_message(&err)),
    }
}

fn process_error_message(err: &AppError) -> String {
    let details = match err {
        AppError::Spawn { details, .. } | AppError::Wait { details, .. } => details.clone(),
        other => other.to_string(),
    };
    format!("Failed to open Cygwin terminal: {}", details)
}

/// Check the installation and selection, then launch mintty in the translated directory.
pub fn execute<F, L>(
    ctx: &AppContext<F, L>,
    config: &LauncherConfig,
    selected: &Path,
    options: WindowOptions,
) -> Result<WindowOutcome, AppError>
where
    F: HostFilesystem,
    L: ProcessLauncher,
{
    let install = CygwinInstallation::from_shell(&config.shell_path);
    let mintty = install.mintty();
    if !ctx.fs().exists(&mintty) {
        return Err(AppError::MinttyNotFound { path: mintty.display().to_string() });
    }

    let target = resolve_target_directory(ctx.fs(), selected)?;
    let cygwin_dir = translate(&target.to_string_lossy());
    debug!(target = %target.display(), cygwin_dir = %cygwin_dir, "translated target");

    let plan = LaunchPlan::external(&install, &cygwin_dir);
    if options.dry_run {
        return Ok(WindowOutcome::Planned(plan));
    }

    Ok(WindowOutcome::Launched(launch_external(ctx.launcher(), ctx.notifier(), &plan)))
}
