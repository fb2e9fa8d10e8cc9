//! Path helpers shared by commands and config

use crate::types::VaultError;
use std::fs;
use std::path::{Path, PathBuf};

/// Expand a leading `~` to the user's home directory.
///
/// Paths that do not start with `~` pass through untouched. Only the bare
/// `~` and the `~/...` form are expanded; `~user` syntax is not supported.
pub fn expand_home(path: &str) -> Result<PathBuf, VaultError> {
    if !path.starts_with('~') {
        return Ok(PathBuf::from(path));
    }

    let home = dirs::home_dir()
        .ok_or_else(|| VaultError::Config("could not determine home directory".to_string()))?;

    if path == "~" || path == "~/" {
        return Ok(home);
    }

    match path.strip_prefix("~/") {
        Some(rest) => Ok(home.join(rest)),
        None => Ok(PathBuf::from(path)),
    }
}

/// Create a directory and all parent directories if they don't exist.
pub fn ensure_dir(path: &Path) -> Result<(), VaultError> {
    fs::create_dir_all(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home_passthrough_absolute() {
        let path = expand_home("/var/backups").expect("expand");
        assert_eq!(path, PathBuf::from("/var/backups"));
    }

    #[test]
    fn test_expand_home_passthrough_relative() {
        let path = expand_home("backups/claude").expect("expand");
        assert_eq!(path, PathBuf::from("backups/claude"));
    }

    #[test]
    fn test_expand_home_tilde_prefix() {
        let home = dirs::home_dir().expect("home dir available in tests");
        let path = expand_home("~/claude-backup").expect("expand");
        assert_eq!(path, home.join("claude-backup"));
    }

    #[test]
    fn test_expand_home_bare_tilde() {
        let home = dirs::home_dir().expect("home dir available in tests");
        assert_eq!(expand_home("~").expect("expand"), home);
        assert_eq!(expand_home("~/").expect("expand"), home);
    }

    #[test]
    fn test_expand_home_tilde_user_not_expanded() {
        let path = expand_home("~other/stuff").expect("expand");
        assert_eq!(path, PathBuf::from("~other/stuff"));
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let dir = tempfile::TempDir::new().expect("create tempdir");
        let target = dir.path().join("a/b/c");

        ensure_dir(&target).expect("first create");
        ensure_dir(&target).expect("second create");

        assert!(target.is_dir());
    }
}
