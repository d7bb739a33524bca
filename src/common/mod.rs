//! Common run-scoped types.
// Constraints are built once from the CLI and only read afterwards.

use crate::error::ConfigError;

/// Default ceiling for a whole archive (1 MiB).
pub const ZIP_SIZE_MAX_DEFAULT: u64 = 1 << 20;
/// Default ceiling for a single entry (128 KiB).
pub const ITEM_SIZE_MAX_DEFAULT: u64 = 1 << 17;
pub const ITEM_CONTENT_TYPE_DEFAULT: &str = "application/octet-stream";
pub const ITEM_CONTENT_ENCODING_DEFAULT: &str = "identity";

/// How entry bytes are turned into record payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEncoding {
    /// Bytes are passed through unmodified.
    Identity,
}

impl ContentEncoding {
    /// Parses an operator supplied encoding name.
    ///
    /// `identity` and `identical` are both accepted for pass-through. Every other
    /// value is rejected because no transformation is defined for it.
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        match name {
            "identity" | "identical" => Ok(ContentEncoding::Identity),
            other => Err(ConfigError::UnsupportedEncoding(other.to_string())),
        }
    }

    /// Applies the encoding to a payload.
    pub fn apply(self, payload: Vec<u8>) -> Vec<u8> {
        match self {
            ContentEncoding::Identity => payload,
        }
    }
}

/// Immutable limits and expectations applied to every archive and entry of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    pub zip_size_max: u64,
    pub item_size_max: u64,
    /// Expected content type; entries must match it exactly.
    pub item_content_type: String,
    /// Encoding name as given by the operator, echoed into every record.
    pub item_content_encoding: String,
    pub encoding: ContentEncoding,
}

impl Constraints {
    pub fn new(
        zip_size_max: u64,
        item_size_max: u64,
        item_content_type: impl Into<String>,
        item_content_encoding: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let item_content_type = item_content_type.into();
        if item_content_type.is_empty() {
            return Err(ConfigError::EmptyContentType);
        }
        let item_content_encoding = item_content_encoding.into();
        let encoding = ContentEncoding::parse(&item_content_encoding)?;
        Ok(Self {
            zip_size_max,
            item_size_max,
            item_content_type,
            item_content_encoding,
            encoding,
        })
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            zip_size_max: ZIP_SIZE_MAX_DEFAULT,
            item_size_max: ITEM_SIZE_MAX_DEFAULT,
            item_content_type: ITEM_CONTENT_TYPE_DEFAULT.to_string(),
            item_content_encoding: ITEM_CONTENT_ENCODING_DEFAULT.to_string(),
            encoding: ContentEncoding::Identity,
        }
    }
}
