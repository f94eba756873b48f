use std::io;

use thiserror::Error;

/// Library-wide error type for cygterm operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Explicitly requested settings file is missing.
    #[error("Config file not found: {0}")]
    ConfigFileNotFound(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Cygwin shell executable is missing.
    #[error("Cygwin executable not found at: {0}")]
    ExecutableNotFound(String),

    /// mintty is missing from the Cygwin `bin` directory.
    #[error("Mintty not found. Please make sure Cygwin is properly installed.")]
    MinttyNotFound { path: String },

    /// Selected filesystem entry does not exist.
    #[error("Selected path does not exist: {0}")]
    SelectedPathNotFound(String),

    /// Terminal process could not be started.
    #[error("Failed to start '{program}': {details}")]
    Spawn { program: String, details: String },

    /// Waiting on a started terminal process failed.
    #[error("Failed to wait for '{program}': {details}")]
    Wait { program: String, details: String },

    /// Anything else escaping a command body.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Coarse grouping of [`AppError`] variants by how they reach the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A precondition on disk was violated; reported before anything is spawned.
    NotFound,
    /// The child process failed; reported through process observers.
    Process,
    /// Everything else.
    Unexpected,
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::ExecutableNotFound(_)
            | AppError::MinttyNotFound { .. }
            | AppError::SelectedPathNotFound(_)
            | AppError::ConfigFileNotFound(_) => ErrorCategory::NotFound,
            AppError::Spawn { .. } | AppError::Wait { .. } => ErrorCategory::Process,
            AppError::Io(_)
            | AppError::Configuration(_)
            | AppError::TomlParseError(_)
            | AppError::Unexpected(_) => ErrorCategory::Unexpected,
        }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::ExecutableNotFound(_)
            | AppError::MinttyNotFound { .. }
            | AppError::SelectedPathNotFound(_)
            | AppError::ConfigFileNotFound(_) => io::ErrorKind::NotFound,
            AppError::Configuration(_) | AppError::TomlParseError(_) => {
                io::ErrorKind::InvalidInput
            }
            AppError::Spawn { .. } | AppError::Wait { .. } | AppError::Unexpected(_) => {
                io::ErrorKind::Other
            }
        }
    }
}
