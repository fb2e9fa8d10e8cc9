//! Backup command: source tree -> backup repository

use super::{print_failures, print_warnings};
use crate::config::Cli;
use crate::git::Git;
use crate::sync::{SyncOptions, Syncer};
use crate::types::VaultError;
use chrono::Local;
use indicatif::HumanBytes;

/// Run the backup flow.
///
/// Without `--exec` this is a dry-run preview; with it, files are copied
/// into the backup directory and the result committed to git.
pub fn run(cli: &Cli) -> Result<(), VaultError> {
    let config = cli.load_config()?;
    let source_dir = config.source_path()?;
    let backup_dir = config.backup_path()?;

    if !source_dir.exists() {
        return Err(VaultError::SourceMissing { path: source_dir });
    }

    // Only an initialized backup repository may be written to
    if cli.exec && !backup_dir.join(".git").is_dir() {
        return Err(VaultError::NotInitialized { path: backup_dir });
    }

    let options = SyncOptions {
        dry_run: !cli.exec,
        verbose: cli.verbose,
    };
    let syncer = Syncer::new(
        source_dir,
        backup_dir.clone(),
        config.include.clone(),
        options,
    );

    if !cli.exec {
        let plan = syncer.plan()?;
        print_warnings(&plan.warnings);

        if plan.candidates.is_empty() {
            println!("No changes to backup.");
            return Ok(());
        }

        for item in &plan.candidates {
            println!(
                "Would copy: {} ({})",
                item.rel_path.display(),
                HumanBytes(item.size)
            );
        }
        println!("\nRun with --exec to apply changes.");
        return Ok(());
    }

    let report = syncer.execute()?;
    print_failures(&report.errors);

    if report.copied_count == 0 && report.errors.is_empty() {
        println!("No changes to backup.");
        return Ok(());
    }

    if cli.verbose {
        for item in &report.items {
            println!("Copied: {}", item.rel_path.display());
        }
    }

    if report.copied_count > 0 {
        println!(
            "Copied {} files ({})",
            report.copied_count,
            HumanBytes(report.total_bytes)
        );

        let git = Git::new(&backup_dir);
        git.add_all()?;
        if git.has_changes()? {
            let message = format!("Backup {}", Local::now().format("%Y-%m-%d %H:%M"));
            git.commit(&message)?;
            println!("Committed: \"{message}\"");
        }
    }

    if !report.errors.is_empty() {
        return Err(VaultError::Partial {
            failed: report.errors.len(),
        });
    }

    Ok(())
}
