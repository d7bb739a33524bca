//! Records emitted for accepted entries.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::archive::EntryMeta;
use crate::common::Constraints;
use crate::validate::effective_content_type;

/// Transfer encoding of [`Blob::body`].
pub const TRANSFER_ENCODING: &str = "base64";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// Archive path exactly as listed in the manifest.
    #[serde(rename = "ZipName")]
    pub zip_name: String,
}

/// One output record. Serialized as a single JSON line.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub name: String,
    pub content_type: String,
    pub content_encoding: String,
    pub content_transfer_encoding: String,
    /// Payload bytes, standard base64.
    pub body: String,
    pub metadata: Metadata,
    pub content_length: u64,
    /// RFC 3339, UTC.
    pub last_modified: String,
}

impl Blob {
    /// Builds the record for an accepted entry of `zip_name`.
    pub fn build(zip_name: &str, meta: &EntryMeta, payload: Vec<u8>, constraints: &Constraints) -> Self {
        let payload = constraints.encoding.apply(payload);
        Self {
            name: meta.name.clone(),
            content_type: effective_content_type(meta, constraints).to_string(),
            content_encoding: constraints.item_content_encoding.clone(),
            content_transfer_encoding: TRANSFER_ENCODING.to_string(),
            body: STANDARD.encode(&payload),
            metadata: Metadata {
                zip_name: zip_name.to_string(),
            },
            content_length: payload.len() as u64,
            last_modified: meta.last_modified.to_rfc3339(),
        }
    }

    /// Decodes [`Blob::body`] back into payload bytes.
    pub fn payload(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.body)
    }
}
