//! Error types for ccvault

use std::path::PathBuf;
use thiserror::Error;

/// Error types for ccvault operations
#[derive(Debug, Error)]
pub enum VaultError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Source root missing or unreadable, aborts a whole sync pass
    #[error("source directory does not exist: {path}")]
    SourceMissing { path: PathBuf },

    /// Backup directory has no git repository yet
    #[error("backup directory not initialized, run 'ccvault init --exec' first: {path}")]
    NotInitialized { path: PathBuf },

    /// A git or git-lfs invocation failed
    #[error("git: {0}")]
    Git(String),

    /// Some files failed to sync; the rest of the batch completed
    #[error("{failed} file(s) failed to sync")]
    Partial { failed: usize },
}

impl VaultError {
    /// Check if this error aborts a whole operation (as opposed to the
    /// partial-failure condition reported after a batch completes)
    pub fn is_fatal(&self) -> bool {
        !matches!(self, VaultError::Partial { .. })
    }
}
