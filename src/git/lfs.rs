//! Thin wrapper over `git lfs`

use crate::types::VaultError;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Runs git-lfs commands inside one repository directory.
///
/// git-lfs is optional: callers treat a failed `install` as "LFS not
/// available" and skip LFS setup rather than failing initialization.
#[derive(Debug, Clone)]
pub struct Lfs {
    dir: PathBuf,
}

impl Lfs {
    /// Create a wrapper for the repository at `dir`.
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    /// Run `git lfs install` in the repository.
    pub fn install(&self) -> Result<(), VaultError> {
        self.run(&["install"])
    }

    /// Add a pattern to be tracked by LFS.
    pub fn track(&self, pattern: &str) -> Result<(), VaultError> {
        self.run(&["track", pattern])
    }

    fn run(&self, args: &[&str]) -> Result<(), VaultError> {
        let output = Command::new("git")
            .arg("lfs")
            .args(args)
            .current_dir(&self.dir)
            .output()
            .map_err(|err| VaultError::Git(format!("lfs {}: {err}", args[0])))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(VaultError::Git(format!(
                "lfs {}: {}: {}",
                args[0],
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}
