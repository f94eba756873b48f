use std::process::{Child, Command, ExitStatus, Stdio};

use crate::domain::{AppError, ExitReport, LaunchPlan};
use crate::ports::{ProcessLauncher, RunningProcess};

/// `std::process::Command` backed launcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandProcessLauncher;

impl CommandProcessLauncher {
    pub fn new() -> Self {
        Self
    }

    fn command(plan: &LaunchPlan) -> Command {
        let mut command = Command::new(&plan.program);
        command.args(&plan.args);
        command.current_dir(&plan.cwd);
        command.envs(plan.env.iter().map(|(key, value)| (key, value)));
        command
    }

    fn spawn(plan: &LaunchPlan, mut command: Command) -> Result<Box<dyn RunningProcess>, AppError> {
        let child = command.spawn().map_err(|e| AppError::Spawn {
            program: plan.program.display().to_string(),
            details: e.to_string(),
        })?;

        Ok(Box::new(ChildProcess { program: plan.program.display().to_string(), child }))
    }
}

impl ProcessLauncher for CommandProcessLauncher {
    fn spawn_attached(&self, plan: &LaunchPlan) -> Result<Box<dyn RunningProcess>, AppError> {
        Self::spawn(plan, Self::command(plan))
    }

    fn spawn_detached(&self, plan: &LaunchPlan) -> Result<Box<dyn RunningProcess>, AppError> {
        let mut command = Self::command(plan);
        command.stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::null());
        detach(&mut command);
        Self::spawn(plan, command)
    }
}

#[cfg(unix)]
fn detach(command: &mut Command) {
    use std::os::unix::process::CommandExt;
    command.process_group(0);
}

#[cfg(windows)]
fn detach(command: &mut Command) {
    use std::os::windows::process::CommandExt;
    const DETACHED_PROCESS: u32 = 0x0000_0008;
    const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;
    command.creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP);
}

#[cfg(not(any(unix, windows)))]
fn detach(_command: &mut Command) {}

struct ChildProcess {
    program: String,
    child: Child,
}

impl RunningProcess for ChildProcess {
    fn id(&self) -> u32 {
        self.child.id()
    }

    fn wait(mut self: Box<Self>) -> Result<ExitReport, AppError> {
        let status = self
            .child
            .wait()
            .map_err(|e| AppError::Wait { program: self.program.clone(), details: e.to_string() })?;
        Ok(exit_report(status))
    }
}

fn exit_report(status: ExitStatus) -> ExitReport {
    ExitReport { code: status.code(), signal: signal_of(&status) }
}

#[cfg(unix)]
fn signal_of(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn signal_of(_status: &ExitStatus) -> Option<i32> {
    None
}
