use ccvault::commands;
use ccvault::config::{Cli, Command};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Init { backup_dir } => commands::init::run(&cli, backup_dir.as_deref())?,
        Command::Backup => commands::backup::run(&cli)?,
        Command::Restore => commands::restore::run(&cli)?,
        Command::Config { action } => commands::config::run(&cli, action)?,
    }

    Ok(())
}
