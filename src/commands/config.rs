//! Config subcommands: show and path

use crate::config::{Cli, ConfigAction};
use crate::types::VaultError;

pub fn run(cli: &Cli, action: &ConfigAction) -> Result<(), VaultError> {
    match action {
        ConfigAction::Show => show(cli),
        ConfigAction::Path => {
            println!("{}", cli.config_path()?.display());
            Ok(())
        }
    }
}

fn show(cli: &Cli) -> Result<(), VaultError> {
    let config = cli.load_config()?;

    let source_dir = config
        .source_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| format!("{} (expansion failed)", config.source_dir));
    let backup_dir = config
        .backup_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| format!("{} (expansion failed)", config.backup_dir));

    println!("source_dir: {source_dir}");
    println!("backup_dir: {backup_dir}");

    println!("include:");
    for pattern in &config.include {
        println!("  - {pattern}");
    }

    println!("lfs_patterns:");
    for pattern in &config.lfs_patterns {
        println!("  - {pattern}");
    }

    Ok(())
}
