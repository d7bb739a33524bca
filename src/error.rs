use std::path::PathBuf;

use thiserror::Error;

/// Invalid run configuration. Always fatal: the manifest is never read.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The requested content encoding has no known transformation.
    #[error("unsupported item content encoding '{0}' (supported: identity, identical)")]
    UnsupportedEncoding(String),

    /// The expected item content type was empty.
    #[error("item content type must not be empty")]
    EmptyContentType,
}

/// A condition that makes a whole archive unusable. The run moves on to the
/// next manifest path.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The archive file is larger than `zip-size-max`.
    #[error("archive is {size} bytes, limit is {limit}")]
    Oversized { size: u64, limit: u64 },

    /// The archive could not be probed or opened.
    #[error("I/O error on path '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The zip structure could not be parsed.
    #[error("corrupt archive: {0}")]
    Corrupt(#[from] zip::result::ZipError),
}

/// A condition that makes a single entry unusable. The run moves on to the
/// next entry of the same archive.
#[derive(Debug, Error)]
pub enum ItemError {
    /// The inflated payload grew past `item-size-max`.
    #[error("payload exceeds {limit} bytes")]
    Oversized { limit: u64 },

    /// Decompression or CRC verification failed.
    #[error("payload unreadable: {0}")]
    Unreadable(#[from] std::io::Error),
}

/// Fatal run conditions. Any of these terminates the run with a nonzero status.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The manifest stream could not be read.
    #[error("failed to read manifest: {0}")]
    Manifest(#[source] std::io::Error),

    /// The output stream rejected a write or flush.
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),

    /// A record could not be serialized.
    #[error("failed to serialize record: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl From<serde_json::Error> for RunError {
    fn from(err: serde_json::Error) -> Self {
        // serde_json reports writer failures through its own error type.
        if err.is_io() {
            RunError::Output(err.into())
        } else {
            RunError::Serialize(err)
        }
    }
}
