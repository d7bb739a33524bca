//! Per-archive and per-entry outcomes.
//!
//! Reason names are part of the diagnostic output and must stay stable.

use crate::blob::Blob;
use crate::error::{ArchiveError, ItemError};

/// Why an entire archive was skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArchiveSkipReason {
    /// File size exceeds `zip-size-max`.
    SizeLimitExceeded,
    /// The file could not be probed or opened.
    ReadError,
    /// The zip structure is malformed or uses an unsupported feature.
    Corrupt,
}

impl ArchiveSkipReason {
    pub const fn name(self) -> &'static str {
        match self {
            Self::SizeLimitExceeded => "size_limit_exceeded",
            Self::ReadError => "read_error",
            Self::Corrupt => "corrupt",
        }
    }

    pub fn of(err: &ArchiveError) -> Self {
        match err {
            ArchiveError::Oversized { .. } => Self::SizeLimitExceeded,
            ArchiveError::Io { .. } => Self::ReadError,
            ArchiveError::Corrupt(_) => Self::Corrupt,
        }
    }
}

/// Why a single entry was skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemSkipReason {
    /// Declared or inflated size exceeds `item-size-max`.
    SizeLimitExceeded,
    /// The entry's content type differs from `item-content-type`.
    TypeMismatch,
    /// Decompression or CRC verification failed.
    Unreadable,
}

impl ItemSkipReason {
    pub const fn name(self) -> &'static str {
        match self {
            Self::SizeLimitExceeded => "size_limit_exceeded",
            Self::TypeMismatch => "type_mismatch",
            Self::Unreadable => "unreadable",
        }
    }

    pub fn of(err: &ItemError) -> Self {
        match err {
            ItemError::Oversized { .. } => Self::SizeLimitExceeded,
            ItemError::Unreadable(_) => Self::Unreadable,
        }
    }
}

/// The result of pushing one archive or entry through the pipeline.
#[derive(Debug)]
pub enum Outcome {
    Accepted(Blob),
    SkippedArchive {
        reason: ArchiveSkipReason,
        error: ArchiveError,
    },
    SkippedItem {
        name: String,
        size: u64,
        reason: ItemSkipReason,
        error: Option<ItemError>,
    },
}

impl Outcome {
    pub fn archive(error: ArchiveError) -> Self {
        Outcome::SkippedArchive {
            reason: ArchiveSkipReason::of(&error),
            error,
        }
    }
}
