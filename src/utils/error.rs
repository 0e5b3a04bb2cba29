use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GogetError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error: {field}: {reason}")]
    ValidationError { field: String, reason: String },

    #[error("invalid package {entry:?}: {reason}")]
    InvalidEntry { entry: String, reason: String },

    #[error("there is a package {entry:?} in {}", .path.display())]
    DuplicateEntry { entry: String, path: PathBuf },

    #[error("package {entry:?} not found in {}", .path.display())]
    EntryNotFound { entry: String, path: PathBuf },

    #[error("List of packages not found! ({})", .path.display())]
    ListNotFound { path: PathBuf },

    #[error("found leftover backup {}; move it back to {} or delete it", .backup.display(), .list.display())]
    StaleBackup { backup: PathBuf, list: PathBuf },

    #[error("failed to run {command}: {source}")]
    FetchSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} exited with {status}: {stderr}")]
    FetchFailed {
        command: String,
        status: String,
        stderr: String,
    },
}

/// How far an error is allowed to propagate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Reported, then the next requested operation still runs.
    Recoverable,
    /// Terminates the process.
    Fatal,
}

impl GogetError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GogetError::InvalidEntry { .. }
            | GogetError::DuplicateEntry { .. }
            | GogetError::EntryNotFound { .. }
            | GogetError::ListNotFound { .. } => ErrorSeverity::Recoverable,
            GogetError::IoError(_)
            | GogetError::ConfigError { .. }
            | GogetError::ValidationError { .. }
            | GogetError::StaleBackup { .. }
            | GogetError::FetchSpawn { .. }
            | GogetError::FetchFailed { .. } => ErrorSeverity::Fatal,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity() == ErrorSeverity::Fatal
    }
}

pub type Result<T> = std::result::Result<T, GogetError>;
