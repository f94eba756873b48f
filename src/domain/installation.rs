use std::path::{Path, PathBuf};

/// Shell used when no path is configured.
pub const DEFAULT_SHELL_PATH: &str = "C:\\cygwin64\\bin\\bash.exe";

/// Terminal emulator shipped in Cygwin's `bin` directory.
pub const MINTTY_EXECUTABLE: &str = "mintty.exe";

/// Layout of a Cygwin installation, derived from its shell executable.
///
/// The shell is expected at `<root>/bin/<shell>`. Derivation never fails; a
/// shell outside that layout yields a root without mintty, which the launch
/// checks report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CygwinInstallation {
    shell: PathBuf,
    root: PathBuf,
}

impl CygwinInstallation {
    pub fn from_shell(shell: impl Into<PathBuf>) -> Self {
        let shell = shell.into();
        let root = dirname(&dirname(&shell));
        Self { shell, root }
    }

    pub fn shell(&self) -> &Path {
        &self.shell
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.root.join("bin")
    }

    pub fn mintty(&self) -> PathBuf {
        self.bin_dir().join(MINTTY_EXECUTABLE)
    }
}

/// Parent directory: `.` for bare names, a filesystem or drive root for itself.
fn dirname(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
        Some(parent) => parent.to_path_buf(),
        None if path.as_os_str().is_empty() => PathBuf::from("."),
        None => path.to_path_buf(),
    }
}
