//! Command implementations behind the CLI subcommands

pub mod backup;
pub mod config;
pub mod init;
pub mod restore;

use crate::sync::SyncFailure;
use console::style;

/// Print plan warnings: entries the walk could not inspect.
pub(crate) fn print_warnings(warnings: &[SyncFailure]) {
    for warning in warnings {
        eprintln!(
            "{} {}: {}",
            style("warning:").yellow(),
            warning.rel_path.display(),
            warning.error
        );
    }
}

/// Print per-file failures from an execute pass.
pub(crate) fn print_failures(failures: &[SyncFailure]) {
    for failure in failures {
        eprintln!(
            "{} {}: {}",
            style("Failed:").red(),
            failure.rel_path.display(),
            failure.error
        );
    }
}
