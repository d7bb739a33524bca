//! Archive size guard.
//!
//! Runs before an archive is opened. Only the filesystem metadata is consulted,
//! so an oversized or hostile archive costs a single `stat` call.

use std::fs;
use std::path::Path;

use crate::error::ArchiveError;

/// Returns the size of the file at `path` without reading it.
pub fn probe_size(path: &Path) -> Result<u64, ArchiveError> {
    let meta = fs::metadata(path).map_err(|source| ArchiveError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(meta.len())
}

/// Checks that the archive at `path` fits within `limit` bytes.
///
/// Returns the probed size when the archive may proceed. An archive exactly
/// `limit` bytes long is accepted.
pub fn check_archive_size(path: &Path, limit: u64) -> Result<u64, ArchiveError> {
    let size = probe_size(path)?;
    if size > limit {
        return Err(ArchiveError::Oversized { size, limit });
    }
    Ok(size)
}
