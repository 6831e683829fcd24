//! Disk I/O and file lifecycle.
//!
//! Images are written to a `.part` temp file, synced, then published under
//! their final name without clobbering: if the final name already exists the
//! new copy is discarded. A crash mid-write never leaves a truncated file
//! under a final name.

mod writer;

use crate::error::FetchError;
use crate::url_model::{truncate_to_boundary, NAME_MAX};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before publishing.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `cat.png` → `cat.png.part`).
///
/// The file name is shortened first when appending the suffix would exceed
/// NAME_MAX, so any legal final name has a legal temp name.
pub fn temp_path(final_path: &Path) -> PathBuf {
    let name = match final_path.file_name() {
        Some(n) => n.to_string_lossy(),
        None => {
            let mut o = final_path.as_os_str().to_owned();
            o.push(TEMP_SUFFIX);
            return PathBuf::from(o);
        }
    };
    let stem = truncate_to_boundary(&name, NAME_MAX - TEMP_SUFFIX.len());
    final_path.with_file_name(format!("{stem}{TEMP_SUFFIX}"))
}

/// Result of [`persist_new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persisted {
    /// Bytes were written to this path.
    Saved(PathBuf),
    /// A file with this path already existed; nothing was written.
    AlreadyPresent(PathBuf),
}

/// Create `dir` and its parents if missing. Idempotent.
pub fn ensure_dir(dir: &Path) -> Result<(), FetchError> {
    std::fs::create_dir_all(dir).map_err(|e| FetchError::io(dir, e))
}

/// Write `data` to `final_path` unless a file with that name already exists.
pub fn persist_new(final_path: &Path, data: &[u8]) -> Result<Persisted, FetchError> {
    if final_path.exists() {
        return Ok(Persisted::AlreadyPresent(final_path.to_path_buf()));
    }

    let tp = temp_path(final_path);
    if let Err(e) = writer::write_temp(&tp, data) {
        let _ = std::fs::remove_file(&tp);
        return Err(FetchError::io(&tp, e));
    }
    let published = writer::publish_no_clobber(&tp, final_path);
    if let Err(e) = std::fs::remove_file(&tp) {
        tracing::warn!("could not remove temp file {}: {}", tp.display(), e);
    }

    match published {
        Ok(true) => Ok(Persisted::Saved(final_path.to_path_buf())),
        Ok(false) => Ok(Persisted::AlreadyPresent(final_path.to_path_buf())),
        Err(e) => Err(FetchError::io(final_path, e)),
    }
}
