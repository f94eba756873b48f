mod host_filesystem;
mod notifier;
mod process_launcher;
mod settings_source;

pub use host_filesystem::HostFilesystem;
pub use notifier::Notifier;
pub use process_launcher::{ProcessLauncher, RunningProcess};
pub use settings_source::SettingsSource;
