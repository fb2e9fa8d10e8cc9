//! # ccvault - Claude Code history backup tool
//!
//! Safety by default: every command previews until `--exec` is given.
//!
//! Backs up `~/.claude/` into a git-versioned backup directory and restores
//! it back, copying only the files that opted in via include patterns and
//! actually changed.

// Module declarations
pub mod commands;
pub mod config;
pub mod git;
pub mod paths;
pub mod sync;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use sync::{SyncOptions, Syncer};
pub use types::VaultError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
