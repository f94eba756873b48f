use crate::domain::{AppError, ExitReport, LaunchPlan};

/// Port for starting terminal processes.
pub trait ProcessLauncher {
    /// Start a process sharing the caller's standard streams.
    fn spawn_attached(&self, plan: &LaunchPlan) -> Result<Box<dyn RunningProcess>, AppError>;

    /// Start a process in its own group with null standard streams.
    fn spawn_detached(&self, plan: &LaunchPlan) -> Result<Box<dyn RunningProcess>, AppError>;
}

/// Handle to a started process.
///
/// Dropping the handle does not terminate the process.
pub trait RunningProcess: Send {
    fn id(&self) -> u32;

    /// Block until the process exits.
    fn wait(self: Box<Self>) -> Result<ExitReport, AppError>;
}
