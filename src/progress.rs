//! Run counters for the batch pipeline.
//!
//! The pipeline is single threaded, so plain integers are enough. The final
//! snapshot is returned to the caller and reported as the `run_complete` line.

/// Totals accumulated over one run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    /// Manifest paths attempted.
    pub archives_seen: u64,
    /// Archives skipped as a whole or abandoned part way through.
    pub archives_skipped: u64,
    pub items_emitted: u64,
    pub items_skipped: u64,
    /// Payload bytes carried by emitted records (before base64).
    pub bytes_emitted: u64,
}

impl RunStats {
    pub fn record_archive(&mut self) {
        self.archives_seen += 1;
    }

    pub fn record_archive_skipped(&mut self) {
        self.archives_skipped += 1;
    }

    pub fn record_emitted(&mut self, payload_len: u64) {
        self.items_emitted += 1;
        self.bytes_emitted += payload_len;
    }

    pub fn record_item_skipped(&mut self) {
        self.items_skipped += 1;
    }
}
