//! CLI Adapter.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::adapters::ConsoleNotifier;
use crate::app::api::{self, LaunchRequest, OpenOutcome, WindowOutcome};
use crate::app::logging;
use crate::domain::{AppError, LaunchPlan};
use crate::ports::Notifier;

#[derive(Parser)]
#[command(name = "cygterm")]
#[command(version)]
#[command(about = "Open a Cygwin terminal rooted at a file or directory", long_about = None)]
struct Cli {
    /// Path to Cygwin's bash.exe (overrides $CYGTERM_CYGWIN_PATH and the config file)
    #[arg(long, global = true, value_name = "PATH")]
    cygwin_path: Option<String>,
    /// Settings file to read instead of the per-user config.toml
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a Cygwin login shell in this console
    #[clap(visible_alias = "o")]
    Open {
        /// File or directory to start in (defaults to the current directory)
        path: Option<PathBuf>,
        /// Print the launch plan as JSON instead of starting the shell
        #[arg(long)]
        dry_run: bool,
    },
    /// Open a Cygwin terminal in a separate mintty window
    #[clap(visible_alias = "w")]
    Window {
        /// File or directory to start in (defaults to the current directory)
        path: Option<PathBuf>,
        /// Print the launch plan as JSON instead of opening the window
        #[arg(long)]
        dry_run: bool,
        /// Stay until the terminal exits and report a non-zero exit
        #[arg(long, conflicts_with = "dry_run")]
        watch: bool,
    },
    /// Print the Cygwin form of host paths
    #[clap(visible_alias = "t")]
    Translate {
        /// Host paths, e.g. C:\Users\me
        #[arg(required = true)]
        paths: Vec<String>,
        /// Resolve each path to its directory (files map to their parent) first
        #[arg(long)]
        resolve: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier);
    let exit_code = guarded(notifier.as_ref(), || dispatch(cli, Arc::clone(&notifier)));

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn dispatch(cli: Cli, notifier: Arc<dyn Notifier>) -> Result<i32, AppError> {
    let Cli { cygwin_path, config, command, .. } = cli;

    match command {
        Commands::Open { path, dry_run } => {
            let request = LaunchRequest { selected: path, cygwin_path, config_file: config, dry_run };
            match api::open(&request, notifier)? {
                OpenOutcome::Planned(plan) => print_plan(&plan).map(|_| 0),
                OpenOutcome::Started(handle) => {
                    let report = handle.wait()?;
                    Ok(report.code.unwrap_or_else(|| 128 + report.signal.unwrap_or(0)))
                }
            }
        }
        Commands::Window { path, dry_run, watch } => {
            let request = LaunchRequest { selected: path, cygwin_path, config_file: config, dry_run };
            match api::window(&request, Arc::clone(&notifier))? {
                WindowOutcome::Planned(plan) => print_plan(&plan).map(|_| 0),
                WindowOutcome::Launched(terminal) => {
                    if let Some(pid) = terminal.pid() {
                        notifier.info(&format!("✅ Opened Cygwin terminal (pid {})", pid));
                    }
                    if watch {
                        terminal.join();
                    }
                    Ok(0)
                }
            }
        }
        Commands::Translate { paths, resolve } => {
            for translated in api::translate_paths(&paths, resolve)? {
                println!("{}", translated);
            }
            Ok(0)
        }
    }
}

fn print_plan(plan: &LaunchPlan) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(plan)
        .map_err(|e| AppError::Unexpected(format!("Failed to serialize launch plan: {}", e)))?;
    println!("{}", json);
    Ok(())
}

/// Run a command body so that nothing escapes to the caller: errors and panics
/// become a single notification and exit code 1.
fn guarded(notifier: &dyn Notifier, body: impl FnOnce() -> Result<i32, AppError>) -> i32 {
    let result = panic::catch_unwind(AssertUnwindSafe(body))
        .unwrap_or_else(|payload| Err(AppError::Unexpected(panic_message(payload.as_ref()))));

    match result {
        Ok(code) => code,
        Err(err) => {
            debug!(category = ?err.category(), "command failed");
            notifier.error(&format!("Error: {}", err));
            1
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "command panicked".to_string())
}
