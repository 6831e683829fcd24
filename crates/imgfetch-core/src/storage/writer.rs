//! Temp-file writes and no-clobber publishing.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Create (or truncate) `temp_path`, write all of `data` and sync it to disk.
pub(super) fn write_temp(temp_path: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)?;
    file.write_all(data)?;
    file.sync_all()
}

/// Make `temp_path` visible as `final_path` unless `final_path` exists.
///
/// Returns `Ok(false)` when the final name is already taken. Prefers a hard
/// link (atomic create-if-absent); on filesystems without hard links it
/// falls back to an exclusive create plus copy.
pub(super) fn publish_no_clobber(temp_path: &Path, final_path: &Path) -> io::Result<bool> {
    match std::fs::hard_link(temp_path, final_path) {
        Ok(()) => return Ok(true),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => {
            tracing::debug!("hard link failed ({}), falling back to exclusive copy", e);
        }
    }

    let mut dst = match File::options().write(true).create_new(true).open(final_path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(e),
    };
    let mut src = File::open(temp_path)?;
    if let Err(e) = io::copy(&mut src, &mut dst).and_then(|_| dst.sync_all()) {
        drop(dst);
        let _ = std::fs::remove_file(final_path);
        return Err(e);
    }
    Ok(true)
}
