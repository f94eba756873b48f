use std::sync::Arc;

use crate::ports::{HostFilesystem, Notifier, ProcessLauncher};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: HostFilesystem, L: ProcessLauncher> {
    fs: F,
    launcher: L,
    notifier: Arc<dyn Notifier>,
}

impl<F: HostFilesystem, L: ProcessLauncher> AppContext<F, L> {
    /// Create a new application context.
    pub fn new(fs: F, launcher: L, notifier: Arc<dyn Notifier>) -> Self {
        Self { fs, launcher, notifier }
    }

    /// Get a reference to the host filesystem.
    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Get a reference to the process launcher.
    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Shared handle to the notification surface.
    pub fn notifier(&self) -> Arc<dyn Notifier> {
        Arc::clone(&self.notifier)
    }
}
