//! Launch plans: the program, arguments and environment of a terminal before it is spawned.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::CygwinInstallation;

/// Session name shown for embedded terminals.
pub const TERMINAL_NAME: &str = "Cygwin";

/// Icon passed to mintty, resolved inside the Cygwin namespace.
pub const MINTTY_ICON: &str = "/Cygwin-Terminal.ico";

/// Tells Cygwin's login profile to stay in the invoking directory.
pub const CHERE_INVOKING: (&str, &str) = ("CHERE_INVOKING", "1");

/// Silences Cygwin's warning about MS-DOS style paths.
pub const CYGWIN_OPTIONS: (&str, &str) = ("CYGWIN", "nodosfilewarning");

/// Points child processes at the installation root.
pub const CYGWIN_ROOT_VAR: &str = "CYGWIN_ROOT";

/// Where a terminal is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchMode {
    /// Runs in the invoking console.
    Embedded,
    /// Runs in its own mintty window.
    External,
}

/// Fully assembled terminal launch.
///
/// `env` holds overrides only; the child always inherits the host environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchPlan {
    pub name: String,
    pub mode: LaunchMode,
    pub program: PathBuf,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub env: Vec<(String, String)>,
}

impl LaunchPlan {
    /// Interactive login shell rooted at a native working directory.
    pub fn embedded(shell: &Path, working_dir: &Path) -> Self {
        Self {
            name: TERMINAL_NAME.to_string(),
            mode: LaunchMode::Embedded,
            program: shell.to_path_buf(),
            args: vec!["--login".to_string(), "-i".to_string()],
            cwd: working_dir.to_path_buf(),
            env: base_env(),
        }
    }

    /// mintty window starting a login shell in `cygwin_dir`, a translated path.
    pub fn external(install: &CygwinInstallation, cygwin_dir: &str) -> Self {
        let mut env = base_env();
        env.push((CYGWIN_ROOT_VAR.to_string(), install.root().display().to_string()));

        Self {
            name: TERMINAL_NAME.to_string(),
            mode: LaunchMode::External,
            program: install.mintty(),
            args: vec![
                "-i".to_string(),
                MINTTY_ICON.to_string(),
                "--dir".to_string(),
                cygwin_dir.to_string(),
                // no command: start the login shell
                "-".to_string(),
            ],
            cwd: install.bin_dir(),
            env,
        }
    }

    /// Value of an environment override, if set.
    pub fn env_var(&self, key: &str) -> Option<&str> {
        self.env.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn command_line(&self) -> String {
        std::iter::once(self.program.display().to_string())
            .chain(self.args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// How a terminal process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ExitReport {
    pub code: Option<i32>,
    pub signal: Option<i32>,
}

impl ExitReport {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn describe(&self) -> String {
        format!(
            "Cygwin terminal exited with code {} (signal: {})",
            display_or_none(self.code),
            display_or_none(self.signal)
        )
    }
}

fn display_or_none(value: Option<i32>) -> String {
    value.map_or_else(|| "none".to_string(), |v| v.to_string())
}

fn base_env() -> Vec<(String, String)> {
    [CHERE_INVOKING, CYGWIN_OPTIONS].iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}
