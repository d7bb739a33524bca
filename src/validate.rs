//! Entry acceptance rules.
//!
//! Rules run in a fixed order and the first failing rule names the skip
//! reason. Validation only looks at directory metadata; the payload size is
//! checked again while reading because the declared size is untrusted.

use crate::archive::EntryMeta;
use crate::common::Constraints;
use crate::outcome::ItemSkipReason;

/// Decides whether `meta` may become a record under `constraints`.
pub fn validate_entry(meta: &EntryMeta, constraints: &Constraints) -> Result<(), ItemSkipReason> {
    if meta.size > constraints.item_size_max {
        return Err(ItemSkipReason::SizeLimitExceeded);
    }
    if effective_content_type(meta, constraints) != constraints.item_content_type {
        return Err(ItemSkipReason::TypeMismatch);
    }
    Ok(())
}

/// The content type an entry is treated as having.
///
/// Entries without stored type metadata take on the expected type.
pub fn effective_content_type<'a>(meta: &'a EntryMeta, constraints: &'a Constraints) -> &'a str {
    meta.content_type
        .as_deref()
        .unwrap_or(&constraints.item_content_type)
}
