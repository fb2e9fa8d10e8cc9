//! Thin wrapper over the `git` binary
//!
//! The backup repository is plain git; we shell out rather than link a git
//! library, keeping the on-disk repository fully compatible with the user's
//! own git tooling.

pub mod lfs;

pub use lfs::Lfs;

use crate::types::VaultError;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Runs git commands inside one repository directory.
#[derive(Debug, Clone)]
pub struct Git {
    dir: PathBuf,
}

impl Git {
    /// Create a wrapper for the repository at `dir`.
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    /// Initialize a git repository.
    pub fn init(&self) -> Result<(), VaultError> {
        self.run(&["init"])
    }

    /// Stage all changes.
    pub fn add_all(&self) -> Result<(), VaultError> {
        self.run(&["add", "-A"])
    }

    /// Create a commit with the given message.
    pub fn commit(&self, message: &str) -> Result<(), VaultError> {
        self.run(&["commit", "-m", message])
    }

    /// Check whether the repository has uncommitted changes.
    pub fn has_changes(&self) -> Result<bool, VaultError> {
        let output = Command::new("git")
            .args(["status", "--porcelain"])
            .current_dir(&self.dir)
            .output()
            .map_err(|err| VaultError::Git(format!("status: {err}")))?;

        if !output.status.success() {
            return Err(VaultError::Git(command_failure("status", &output)));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(!stdout.trim().is_empty())
    }

    fn run(&self, args: &[&str]) -> Result<(), VaultError> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.dir)
            .output()
            .map_err(|err| VaultError::Git(format!("{}: {err}", args[0])))?;

        if !output.status.success() {
            return Err(VaultError::Git(command_failure(args[0], &output)));
        }

        Ok(())
    }
}

/// Build an error message carrying the command's stderr.
fn command_failure(command: &str, output: &std::process::Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let detail = stderr.trim();
    if detail.is_empty() {
        format!("{command}: {}", output.status)
    } else {
        format!("{command}: {}: {detail}", output.status)
    }
}
