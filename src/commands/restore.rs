//! Restore command: backup repository -> source tree

use super::{print_failures, print_warnings};
use crate::config::Cli;
use crate::sync::{SyncOptions, Syncer};
use crate::types::VaultError;
use indicatif::HumanBytes;

/// Run the restore flow: the reverse of backup, filtered by the same
/// include patterns. No git commit afterwards; the source tree is not a
/// repository we manage.
pub fn run(cli: &Cli) -> Result<(), VaultError> {
    let config = cli.load_config()?;
    let source_dir = config.source_path()?;
    let backup_dir = config.backup_path()?;

    let options = SyncOptions {
        dry_run: !cli.exec,
        verbose: cli.verbose,
    };
    let syncer = Syncer::new(backup_dir, source_dir, config.include.clone(), options);

    if !cli.exec {
        let plan = syncer.plan()?;
        print_warnings(&plan.warnings);

        if plan.candidates.is_empty() {
            println!("No changes to restore.");
            return Ok(());
        }

        for item in &plan.candidates {
            println!(
                "Would restore: {} ({})",
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
        println!("No changes to restore.");
        return Ok(());
    }

    if cli.verbose {
        for item in &report.items {
            println!("Restored: {}", item.rel_path.display());
        }
    }

    if report.copied_count > 0 {
        println!(
            "Restored {} files ({})",
            report.copied_count,
            HumanBytes(report.total_bytes)
        );
    }

    if !report.errors.is_empty() {
        return Err(VaultError::Partial {
            failed: report.errors.len(),
        });
    }

    Ok(())
}
