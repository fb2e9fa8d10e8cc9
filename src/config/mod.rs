//! Configuration management and command-line interface

use crate::paths::expand_home;
use crate::types::VaultError;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Command-line interface for ccvault
#[derive(Debug, Parser)]
#[command(
    name = "ccvault",
    version,
    about = "Claude Code history backup tool",
    long_about = "Backup ~/.claude/ history with Git version control."
)]
pub struct Cli {
    /// Config file (default ~/.config/ccvault/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Actually execute (default: dry-run)
    #[arg(long, global = true)]
    pub exec: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize the backup directory with Git and Git LFS
    Init {
        /// Backup directory path (overrides config)
        #[arg(long, value_name = "DIR")]
        backup_dir: Option<String>,
    },

    /// Backup Claude Code history to the backup directory
    Backup,

    /// Restore the backup to the source directory
    Restore,

    /// Show or manage ccvault configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Show config file path
    Path,
}

impl Cli {
    /// Path of the config file to use: `--config` or the default location.
    pub fn config_path(&self) -> Result<PathBuf, VaultError> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Config::default_path(),
        }
    }

    /// Load configuration from the resolved config file path.
    pub fn load_config(&self) -> Result<Config, VaultError> {
        Config::load(&self.config_path()?)
    }
}

/// Global configuration for ccvault
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory being backed up
    pub source_dir: String,

    /// Git-backed backup directory
    pub backup_dir: String,

    /// Include patterns for sync passes (literal names or base-name globs)
    pub include: Vec<String>,

    /// Patterns handed to `git lfs track` during init
    pub lfs_patterns: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: "~/.claude".to_string(),
            backup_dir: "~/claude-backup".to_string(),
            include: vec![
                "projects".to_string(),
                "history.jsonl".to_string(),
                "plans".to_string(),
                "todos".to_string(),
                "usage-data".to_string(),
                "stats-cache.json".to_string(),
            ],
            lfs_patterns: Vec::new(),
        }
    }
}

impl Config {
    /// Default config file location: `~/.config/ccvault/config.toml`.
    pub fn default_path() -> Result<PathBuf, VaultError> {
        let home = dirs::home_dir()
            .ok_or_else(|| VaultError::Config("could not determine home directory".to_string()))?;
        Ok(home.join(".config").join("ccvault").join("config.toml"))
    }

    /// Load configuration from a TOML file.
    ///
    /// A missing file yields the defaults; a partial file fills the missing
    /// fields from the defaults.
    pub fn load(path: &Path) -> Result<Self, VaultError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)?;
        toml::from_str(&text)
            .map_err(|err| VaultError::Config(format!("{}: {err}", path.display())))
    }

    /// Expanded source directory.
    pub fn source_path(&self) -> Result<PathBuf, VaultError> {
        expand_home(&self.source_dir)
    }

    /// Expanded backup directory.
    pub fn backup_path(&self) -> Result<PathBuf, VaultError> {
        expand_home(&self.backup_dir)
    }

    /// Serialize this configuration as TOML for writing a config file.
    pub fn to_toml(&self) -> Result<String, VaultError> {
        toml::to_string_pretty(self)
            .map_err(|err| VaultError::Config(format!("serialize config: {err}")))
    }
}
