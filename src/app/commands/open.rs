//! Embedded terminal: a Cygwin login shell in the invoking console.

use std::path::Path;

use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::{AppError, ExitReport, LaunchPlan, LauncherConfig, resolve_target_directory};
use crate::ports::{HostFilesystem, ProcessLauncher, RunningProcess};

/// Outcome of `open`.
pub enum OpenOutcome {
    /// Dry run: the plan that would have been started.
    Planned(LaunchPlan),
    /// Shell is running.
    Started(TerminalHandle),
}

/// A running embedded terminal session.
pub struct TerminalHandle {
    name: String,
    process: Box<dyn RunningProcess>,
}

impl TerminalHandle {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> u32 {
        self.process.id()
    }

    /// Block until the shell exits.
    pub fn wait(self) -> Result<ExitReport, AppError> {
        self.process.wait()
    }
}

/// Start `shell` as an interactive login shell in `working_dir`.
///
/// No existence checks: a bad shell surfaces as the launcher's own error.
pub fn launch_embedded(
    launcher: &impl ProcessLauncher,
    shell: &Path,
    working_dir: &Path,
) -> Result<TerminalHandle, AppError> {
    let plan = LaunchPlan::embedded(shell, working_dir);
    info!(command = %plan.command_line(), cwd = %plan.cwd.display(), "starting embedded terminal");
    let process = launcher.spawn_attached(&plan)?;
    Ok(TerminalHandle { name: plan.name, process })
}

/// Check the shell and selection, then start the embedded terminal.
pub fn execute<F, L>(
    ctx: &AppContext<F, L>,
    config: &LauncherConfig,
    selected: &Path,
    dry_run: bool,
) -> Result<OpenOutcome, AppError>
where
    F: HostFilesystem,
    L: ProcessLauncher,
{
    if !ctx.fs().exists(&config.shell_path) {
        return Err(AppError::ExecutableNotFound(config.shell_path.display().to_string()));
    }

    let working_dir = resolve_target_directory(ctx.fs(), selected)?;
    debug!(selected = %selected.display(), target = %working_dir.display(), "resolved target");

    if dry_run {
        return Ok(OpenOutcome::Planned(LaunchPlan::embedded(&config.shell_path, &working_dir)));
    }

    let handle = launch_embedded(ctx.launcher(), &config.shell_path, &working_dir)?;
    Ok(OpenOutcome::Started(handle))
}
