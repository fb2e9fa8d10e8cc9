//! Init command: set up the backup repository

use crate::config::Cli;
use crate::git::{Git, Lfs};
use crate::paths::ensure_dir;
use crate::types::VaultError;
use console::style;
use std::fs;

const GITIGNORE_CONTENT: &str = ".DS_Store\n*.swp\n*~\n";

/// Run the init flow: write the config file if absent, create the backup
/// directory, initialize git (and LFS when available), and create the
/// initial commit.
pub fn run(cli: &Cli, backup_dir_flag: Option<&str>) -> Result<(), VaultError> {
    let mut config = cli.load_config()?;
    if let Some(dir) = backup_dir_flag {
        config.backup_dir = dir.to_string();
    }

    let backup_dir = config.backup_path()?;
    let cfg_path = cli.config_path()?;

    if !cli.exec {
        println!("Would create config: {}", cfg_path.display());
        println!("Would create directory: {}", backup_dir.display());
        println!("Would run: git init");
        println!("Would run: git lfs install");
        println!("Would create: .gitattributes (LFS patterns)");
        println!("Would create: .gitignore");
        println!("Would run: git add -A && git commit");
        println!("\nRun with --exec to apply changes.");
        return Ok(());
    }

    if let Some(cfg_dir) = cfg_path.parent() {
        ensure_dir(cfg_dir)?;
    }

    if !cfg_path.exists() {
        fs::write(&cfg_path, config.to_toml()?)?;
        if cli.verbose {
            println!("Created config: {}", cfg_path.display());
        }
    } else if cli.verbose {
        println!("Config already exists: {}", cfg_path.display());
    }

    ensure_dir(&backup_dir)?;
    if cli.verbose {
        println!("Created backup directory: {}", backup_dir.display());
    }

    let git = Git::new(&backup_dir);
    git.init()?;
    if cli.verbose {
        println!("Initialized git repository");
    }

    fs::write(backup_dir.join(".gitignore"), GITIGNORE_CONTENT)?;

    // git-lfs is optional; a failed install means it isn't on this system
    let lfs = Lfs::new(&backup_dir);
    match lfs.install() {
        Ok(()) => {
            if cli.verbose {
                println!("Initialized Git LFS");
            }
            for pattern in &config.lfs_patterns {
                lfs.track(pattern)?;
                if cli.verbose {
                    println!("Configured LFS for: {pattern}");
                }
            }
        }
        Err(_) => {
            if cli.verbose {
                eprintln!(
                    "{} git-lfs not available, skipping LFS setup",
                    style("warning:").yellow()
                );
            }
        }
    }

    git.add_all()?;
    if git.has_changes()? {
        git.commit("Initialize backup repository")?;
        if cli.verbose {
            println!("Created initial commit");
        }
    }

    println!("Ready! Run 'ccvault backup --exec' to start backing up.");
    Ok(())
}
