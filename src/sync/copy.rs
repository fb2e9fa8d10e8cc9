//! Single-file copy with mtime preservation

use crate::types::VaultError;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

/// Copy a file using the write-then-rename strategy, preserving the
/// source's modification time.
///
/// The destination's parent directories are created as needed and any
/// existing destination file is overwritten. The modification time written
/// to the destination is the source's mtime as read when the copy began,
/// which is what lets a later plan treat the pair as already in sync.
///
/// # Returns
/// * `Ok(u64)` - Number of bytes copied
/// * `Err(VaultError)` - IO failure at any step
pub fn copy_file(src: &Path, dest: &Path) -> Result<u64, VaultError> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    // Capture the source mtime before streaming so a concurrent writer
    // cannot make the destination look newer than the bytes we copied.
    let src_mtime = fs::metadata(src)?.modified()?;

    let part_path = dest.with_extension("part");

    let mut src_file = File::open(src)?;
    let mut part_file = File::create(&part_path)?;

    let mut buffer = vec![0u8; 128 * 1024];
    let mut total_bytes = 0u64;

    loop {
        let bytes_read = src_file.read(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        part_file.write_all(&buffer[0..bytes_read])?;
        total_bytes += bytes_read as u64;
    }

    part_file.sync_all()?;

    // Drop the file handle before rename (required on Windows)
    drop(part_file);

    let mtime = filetime::FileTime::from_system_time(src_mtime);
    filetime::set_file_mtime(&part_path, mtime)?;

    // Atomic on POSIX systems (single syscall)
    fs::rename(&part_path, dest)?;

    Ok(total_bytes)
}
