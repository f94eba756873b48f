pub mod console_notifier;
pub mod process_command;
pub mod std_filesystem;
pub mod toml_settings;

pub use console_notifier::ConsoleNotifier;
pub use process_command::CommandProcessLauncher;
pub use std_filesystem::StdHostFilesystem;
pub use toml_settings::TomlSettingsFile;
