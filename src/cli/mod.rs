use clap::Parser;

use crate::common::{
    Constraints, ITEM_CONTENT_ENCODING_DEFAULT, ITEM_CONTENT_TYPE_DEFAULT, ITEM_SIZE_MAX_DEFAULT,
    ZIP_SIZE_MAX_DEFAULT,
};
use crate::error::ConfigError;

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Converts zip archives into a stream of JSON blobs.",
    long_about = "Reads zip archive paths from stdin (one per line) and writes one JSON object per accepted entry to stdout. \
                  Oversized, unreadable or mismatching archives and entries are skipped, never fatal."
)]
pub struct Args {
    /// Max size in bytes for each zip file (skipped if exceeded).
    #[arg(long, default_value_t = ZIP_SIZE_MAX_DEFAULT)]
    pub zip_size_max: u64,

    /// Max size in bytes for a file within a zip (skipped if exceeded).
    #[arg(long, default_value_t = ITEM_SIZE_MAX_DEFAULT)]
    pub item_size_max: u64,

    /// Content type every emitted entry must have. Matched exactly.
    #[arg(long, default_value = ITEM_CONTENT_TYPE_DEFAULT)]
    pub item_content_type: String,

    /// Content encoding of emitted payloads. Only pass-through (`identity` or `identical`) is supported.
    #[arg(long, default_value = ITEM_CONTENT_ENCODING_DEFAULT)]
    pub item_content_encoding: String,

    /// Report skipped archives and entries on stderr.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Validates the flags and freezes them into run constraints.
    pub fn constraints(&self) -> Result<Constraints, ConfigError> {
        Constraints::new(
            self.zip_size_max,
            self.item_size_max,
            self.item_content_type.as_str(),
            self.item_content_encoding.as_str(),
        )
    }
}

/// Parses command-line arguments using `clap`.
///
/// Exits the process with usage text on invalid syntax.
pub fn parse() -> Args {
    Args::parse()
}
