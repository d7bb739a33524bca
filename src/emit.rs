//! JSON Lines emitter.
//!
//! Every record is written as one line and flushed before the call returns,
//! so a downstream reader sees it while the run is still going.

use std::io::Write;

use crate::blob::Blob;
use crate::error::RunError;

pub struct JsonLinesWriter<W: Write> {
    writer: W,
    written: u64,
}

impl<W: Write> JsonLinesWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Serializes, terminates and flushes one record.
    ///
    /// The record is serialized to memory first so a serialization failure
    /// never leaves a partial line on the stream.
    pub fn emit(&mut self, blob: &Blob) -> Result<(), RunError> {
        let mut line = serde_json::to_vec(blob)?;
        line.push(b'\n');
        self.writer.write_all(&line).map_err(RunError::Output)?;
        self.writer.flush().map_err(RunError::Output)?;
        self.written += 1;
        Ok(())
    }

    /// Number of records emitted so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn flush(&mut self) -> Result<(), RunError> {
        self.writer.flush().map_err(RunError::Output)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
