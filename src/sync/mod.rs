//! Plan/execute directory synchronization
//!
//! The `Syncer` walks a source tree, filters candidates through the include
//! patterns, compares metadata against the destination tree, and either
//! reports the resulting plan (dry-run preview) or copies the files. One bad
//! entry never aborts a pass: per-entry walk errors and per-file copy
//! failures are collected into the outcome instead.

mod copy;
mod filter;

pub use copy::copy_file;
pub use filter::Filter;

use crate::types::VaultError;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

/// File metadata used for the sync-needed comparison.
///
/// Computed fresh for every comparison, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMeta {
    /// File size in bytes
    pub size: u64,
    /// Last modification time
    pub modified: SystemTime,
}

/// A file the planning phase decided needs copying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncItem {
    /// Path relative to the sync root
    pub rel_path: PathBuf,
    /// Resolved source location
    pub src_path: PathBuf,
    /// Resolved destination location
    pub dest_path: PathBuf,
    /// File size in bytes
    pub size: u64,
}

/// A per-file error that did not abort the sync pass.
#[derive(Debug)]
pub struct SyncFailure {
    /// Best-effort path relative to the sync root
    pub rel_path: PathBuf,
    /// What went wrong for this entry
    pub error: VaultError,
}

/// Outcome of the planning phase.
#[derive(Debug, Default)]
pub struct SyncPlan {
    /// Files needing copy, in directory-walk order
    pub candidates: Vec<SyncItem>,
    /// Entries that could not be inspected; the walk continued past them
    pub warnings: Vec<SyncFailure>,
}

/// Outcome of an execute pass.
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Number of files copied (or, in dry-run, that would be copied)
    pub copied_count: usize,
    /// Total bytes of successfully processed files
    pub total_bytes: u64,
    /// Candidates that were processed successfully
    pub items: Vec<SyncItem>,
    /// Plan warnings plus per-file copy failures, in occurrence order
    pub errors: Vec<SyncFailure>,
}

/// Behavior switches for a sync pass, fixed at construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Plan only; never touch the filesystem
    pub dry_run: bool,
    /// Presentation hint for callers; sync logic itself ignores it
    pub verbose: bool,
}

/// Synchronizes files from a source tree into a destination tree.
///
/// Each `plan`/`execute` call owns its own accumulators; a `Syncer` holds no
/// state across calls beyond its configuration.
#[derive(Debug)]
pub struct Syncer {
    src_dir: PathBuf,
    dest_dir: PathBuf,
    filter: Filter,
    options: SyncOptions,
}

/// Check whether a source file needs to be copied over its destination
/// counterpart.
///
/// True when the destination is absent, the sizes differ, or the source is
/// strictly newer. Equal size with an equal-or-newer destination counts as
/// already in sync; there is no content comparison.
pub fn needs_sync(src: &FileMeta, dest: Option<&FileMeta>) -> bool {
    match dest {
        None => true,
        Some(dest) => src.size != dest.size || src.modified > dest.modified,
    }
}

impl Syncer {
    /// Create a Syncer for one source/destination pair.
    pub fn new(
        src_dir: PathBuf,
        dest_dir: PathBuf,
        include_patterns: Vec<String>,
        options: SyncOptions,
    ) -> Self {
        Self {
            src_dir,
            dest_dir,
            filter: Filter::new(include_patterns),
            options,
        }
    }

    /// Presentation options this Syncer was built with.
    pub fn options(&self) -> SyncOptions {
        self.options
    }

    /// Scan the source tree and compute which files need copying.
    ///
    /// Read-only: no writes, no directory creation. A missing or
    /// untraversable source root aborts with an error; any other entry that
    /// cannot be inspected is recorded as a warning and the walk continues.
    pub fn plan(&self) -> Result<SyncPlan, VaultError> {
        if !self.src_dir.is_dir() {
            return Err(VaultError::SourceMissing {
                path: self.src_dir.clone(),
            });
        }

        let mut plan = SyncPlan::default();

        for entry in WalkDir::new(&self.src_dir) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    // A failure on the root itself means the scan cannot
                    // produce a meaningful result
                    if err.path() == Some(self.src_dir.as_path()) {
                        return Err(VaultError::Io(err.into()));
                    }
                    let rel_path = self.best_effort_rel(&err);
                    plan.warnings.push(SyncFailure {
                        rel_path,
                        error: VaultError::Io(err.into()),
                    });
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }

            let rel_path = match entry.path().strip_prefix(&self.src_dir) {
                Ok(rel) => rel.to_path_buf(),
                // Cannot happen for entries yielded under the walk root
                Err(_) => continue,
            };

            if !self.filter.should_include(&rel_path) {
                continue;
            }

            let metadata = match entry.metadata() {
                Ok(metadata) => metadata,
                Err(err) => {
                    plan.warnings.push(SyncFailure {
                        rel_path,
                        error: VaultError::Io(err.into()),
                    });
                    continue;
                }
            };
            let modified = match metadata.modified() {
                Ok(modified) => modified,
                Err(err) => {
                    plan.warnings.push(SyncFailure {
                        rel_path,
                        error: VaultError::Io(err),
                    });
                    continue;
                }
            };

            let src_meta = FileMeta {
                size: metadata.len(),
                modified,
            };
            let dest_path = self.dest_dir.join(&rel_path);
            let dest_meta = read_meta(&dest_path);

            if needs_sync(&src_meta, dest_meta.as_ref()) {
                plan.candidates.push(SyncItem {
                    src_path: entry.into_path(),
                    dest_path,
                    size: src_meta.size,
                    rel_path,
                });
            }
        }

        Ok(plan)
    }

    /// Plan, then copy every candidate into the destination tree.
    ///
    /// Plan warnings carry over into the report's error list. A candidate
    /// whose copy fails is recorded there too and the batch continues; only
    /// a plan-level failure aborts the call. In dry-run mode every candidate
    /// is counted as copied without any I/O.
    pub fn execute(&self) -> Result<SyncReport, VaultError> {
        let plan = self.plan()?;

        let mut report = SyncReport {
            errors: plan.warnings,
            ..Default::default()
        };

        for item in plan.candidates {
            if self.options.dry_run {
                report.copied_count += 1;
                report.total_bytes += item.size;
                report.items.push(item);
                continue;
            }

            match copy_file(&item.src_path, &item.dest_path) {
                Ok(_) => {
                    report.copied_count += 1;
                    report.total_bytes += item.size;
                    report.items.push(item);
                }
                Err(error) => {
                    report.errors.push(SyncFailure {
                        rel_path: item.rel_path,
                        error,
                    });
                }
            }
        }

        Ok(report)
    }

    /// Relative path for a walk error, falling back to whatever the error
    /// carries when it lies outside the source root.
    fn best_effort_rel(&self, err: &walkdir::Error) -> PathBuf {
        match err.path() {
            Some(path) => path
                .strip_prefix(&self.src_dir)
                .unwrap_or(path)
                .to_path_buf(),
            None => PathBuf::new(),
        }
    }
}

/// Stat a destination path; absent or unreadable counts as no metadata.
fn read_meta(path: &Path) -> Option<FileMeta> {
    let metadata = fs::metadata(path).ok()?;
    let modified = metadata.modified().ok()?;
    Some(FileMeta {
        size: metadata.len(),
        modified,
    })
}
