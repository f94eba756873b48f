//! Shared testing harness for `cygterm` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::fake_cygwin::{FakeCygwin, MINTTY_LOG_ENV};

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    cygwin: FakeCygwin,
}

impl TestContext {
    /// Create a new isolated environment with a fake Cygwin installation.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        let cygwin = FakeCygwin::install(root.path());

        Self { root, work_dir, cygwin }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Directory CLI invocations run in.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub(crate) fn cygwin(&self) -> &FakeCygwin {
        &self.cygwin
    }

    /// File the fake mintty logs its invocation to.
    pub(crate) fn mintty_log(&self) -> PathBuf {
        self.root.path().join("mintty.log")
    }

    /// Lines logged by the fake mintty.
    pub(crate) fn read_mintty_log(&self) -> Vec<String> {
        fs::read_to_string(self.mintty_log())
            .expect("Failed to read mintty log")
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Create a directory under the work dir.
    pub(crate) fn create_dir(&self, relative: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }

    /// Create an empty file under the work dir.
    pub(crate) fn create_file(&self, relative: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, "").expect("Failed to create file");
        path
    }

    /// Write a settings file and return its path.
    pub(crate) fn write_config(&self, content: &str) -> PathBuf {
        let path = self.root.path().join("config.toml");
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Build a command for invoking the compiled `cygterm` binary within the work dir.
    ///
    /// The user-level configuration is isolated; no shell path is configured.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("cygterm").expect("Failed to locate cygterm binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.home())
            .env("XDG_CONFIG_HOME", self.home().join(".config"))
            .env("APPDATA", self.home().join("AppData"))
            .env(MINTTY_LOG_ENV, self.mintty_log())
            .env_remove("CYGTERM_CONFIG")
            .env_remove("CYGTERM_CYGWIN_PATH")
            .env_remove("CYGTERM_LOG");
        cmd
    }

    /// `cli()` with `--cygwin-path` pointing at the fake shell.
    pub(crate) fn cli_with_cygwin(&self) -> Command {
        let mut cmd = self.cli();
        cmd.arg("--cygwin-path").arg(self.cygwin.shell());
        cmd
    }
}
