//! # Zip Archive Access
//!
//! This module opens zip archives that passed the [`guard`] and walks their
//! central directory one entry at a time.
//!
//! Only the directory metadata is held for the lifetime of a [`ZipSource`].
//! Entry payloads are inflated on demand through [`Entry::read_payload`], and
//! an [`Entry`] borrows its source mutably, so at most one payload is ever
//! being decompressed.

pub mod guard;

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use zip::read::ZipFile;
use zip::ZipArchive;

use crate::error::{ArchiveError, ItemError};

pub use guard::{check_archive_size, probe_size};

/// Directory metadata for a single entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMeta {
    /// Position in the central directory.
    pub index: usize,
    /// Path inside the archive.
    pub name: String,
    /// Declared uncompressed size. Untrusted until the payload is read.
    pub size: u64,
    pub compressed_size: u64,
    pub is_dir: bool,
    pub last_modified: DateTime<Utc>,
    /// Content type stored with the entry, if the format carries one.
    /// Zip does not, so entries read from disk always report `None`.
    pub content_type: Option<String>,
}

/// An entry whose payload has not been read yet.
pub struct Entry<'a> {
    meta: EntryMeta,
    file: ZipFile<'a>,
}

impl<'a> Entry<'a> {
    fn new(index: usize, file: ZipFile<'a>) -> Self {
        let meta = EntryMeta {
            index,
            name: file.name().to_string(),
            size: file.size(),
            compressed_size: file.compressed_size(),
            is_dir: file.is_dir(),
            last_modified: dos_to_utc(&file.last_modified()),
            content_type: None,
        };
        Self { meta, file }
    }

    pub fn meta(&self) -> &EntryMeta {
        &self.meta
    }

    /// Inflates the payload, reading at most `limit + 1` bytes.
    ///
    /// The declared size is not trusted: if the stream yields more than
    /// `limit` bytes the read stops and [`ItemError::Oversized`] is returned.
    pub fn read_payload(&mut self, limit: u64) -> Result<Vec<u8>, ItemError> {
        let capacity = self.meta.size.min(limit).min(PREALLOC_MAX) as usize;
        let mut buf = Vec::with_capacity(capacity);
        (&mut self.file)
            .take(limit.saturating_add(1))
            .read_to_end(&mut buf)?;
        if buf.len() as u64 > limit {
            return Err(ItemError::Oversized { limit });
        }
        Ok(buf)
    }
}

/// Upper bound on buffer space reserved from a declared entry size.
const PREALLOC_MAX: u64 = 64 * 1024;

/// A forward-only cursor over the entries of one zip archive.
pub struct ZipSource<R> {
    archive: ZipArchive<R>,
    next: usize,
}

impl ZipSource<BufReader<File>> {
    /// Opens the archive at `path` and parses its central directory.
    pub fn open(path: &Path) -> Result<Self, ArchiveError> {
        let file = File::open(path).map_err(|source| ArchiveError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }
}

impl<R: Read + Seek> ZipSource<R> {
    pub fn from_reader(reader: R) -> Result<Self, ArchiveError> {
        let archive = ZipArchive::new(reader)?;
        Ok(Self { archive, next: 0 })
    }

    /// Number of entries listed in the central directory.
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archive.len() == 0
    }

    /// Advances to the next entry in directory order.
    ///
    /// An error here means the entry's local header could not be located or
    /// uses an unsupported compression method; callers treat the rest of the
    /// archive as unreadable.
    pub fn next_entry(&mut self) -> Option<Result<Entry<'_>, ArchiveError>> {
        if self.next >= self.archive.len() {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(
            self.archive
                .by_index(index)
                .map(|file| Entry::new(index, file))
                .map_err(ArchiveError::from),
        )
    }
}

/// Converts a DOS timestamp to UTC. Zip stores no zone, so the wall clock
/// value is taken as UTC. Out-of-range fields map to the Unix epoch.
fn dos_to_utc(dt: &zip::DateTime) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(dt.year() as i32, dt.month() as u32, dt.day() as u32)
        .and_then(|date| date.and_hms_opt(dt.hour() as u32, dt.minute() as u32, dt.second() as u32))
        .map(|naive| DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
        .unwrap_or_default()
}
