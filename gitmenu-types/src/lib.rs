use std::path::PathBuf;
use thiserror::Error;

pub mod flags;
pub use flags::MenuFlags;

/// gitmenu specific error types
#[derive(Error, Debug)]
pub enum GitMenuError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown action: {0}")]
    UnknownAction(String),
}

pub type GitMenuResult<T> = std::result::Result<T, GitMenuError>;

/// The selection the host shell hands over for a single menu-open event.
///
/// Transient per-invocation state only; nothing is carried across
/// menu-open events.
#[derive(Debug, Clone)]
pub struct Context {
    /// Path the user right-clicked, as given by the host.
    pub path: PathBuf,
    /// Whether the selection is a directory.
    pub is_dir: bool,
}

impl Context {
    /// Builds a context for `path`, probing the filesystem to classify it.
    /// A path that does not exist is treated as a file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let is_dir = path.is_dir();
        Context { path, is_dir }
    }

    /// Builds a context with a caller-supplied directory flag, without
    /// touching the filesystem.
    pub fn with_kind(path: impl Into<PathBuf>, is_dir: bool) -> Self {
        Context {
            path: path.into(),
            is_dir,
        }
    }
}

/// Result of running a menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// The subprocess ran to completion with this exit code.
    ExitedWith(i32),
    /// The subprocess was launched without waiting for it.
    Detached,
    /// The item performed nothing for this selection.
    NoOp,
}

impl ExitStatus {
    /// Process exit code to report to the caller. Detached launches and
    /// no-ops count as success.
    pub fn code(&self) -> i32 {
        match self {
            ExitStatus::ExitedWith(code) => *code,
            ExitStatus::Detached | ExitStatus::NoOp => 0,
        }
    }
}
