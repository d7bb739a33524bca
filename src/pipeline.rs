//! # Run Coordinator
//!
//! Drives a manifest through the size guard, the zip reader, the entry
//! validator and the emitter, strictly one archive and one entry at a time.
//!
//! Archive and entry problems turn into [`Outcome`] skips and never stop the
//! run. Only [`RunError`] conditions (manifest read, output write,
//! serialization) are propagated.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::archive::{check_archive_size, Entry, EntryMeta, ZipSource};
use crate::blob::Blob;
use crate::common::Constraints;
use crate::diagnostics::{Diagnostic, Reporter};
use crate::emit::JsonLinesWriter;
use crate::error::RunError;
use crate::outcome::{ItemSkipReason, Outcome};
use crate::progress::RunStats;
use crate::validate::validate_entry;

/// Reads archive paths, one per line, and processes them in order.
///
/// Lines are raw bytes, so a path that is not valid UTF-8 still reaches the
/// size guard and is skipped there if it cannot be opened. Blank lines are
/// ignored. Returns the run totals once the manifest is exhausted; the
/// `run_complete` summary is reported before returning.
pub fn run<R, W, D>(
    manifest: R,
    constraints: &Constraints,
    out: W,
    reporter: D,
) -> Result<RunStats, RunError>
where
    R: BufRead,
    W: Write,
    D: Reporter,
{
    let mut pipeline = Pipeline::new(constraints, out, reporter);
    for line in manifest.split(b'\n') {
        let line = line.map_err(RunError::Manifest)?;
        let line = line.strip_suffix(b"\r").unwrap_or(&line[..]);
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        pipeline.process_archive(&manifest_path(line))?;
    }
    pipeline.finish()
}

#[cfg(unix)]
fn manifest_path(line: &[u8]) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(OsStr::from_bytes(line))
}

#[cfg(not(unix))]
fn manifest_path(line: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(line).into_owned())
}

/// Per-run state: the emitter, the diagnostics sink and the counters.
pub struct Pipeline<'c, W: Write, D: Reporter> {
    constraints: &'c Constraints,
    emitter: JsonLinesWriter<W>,
    reporter: D,
    stats: RunStats,
}

impl<'c, W: Write, D: Reporter> Pipeline<'c, W, D> {
    pub fn new(constraints: &'c Constraints, out: W, reporter: D) -> Self {
        Self {
            constraints,
            emitter: JsonLinesWriter::new(out),
            reporter,
            stats: RunStats::default(),
        }
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Processes one archive named by a manifest line.
    ///
    /// The archive is closed before this returns.
    pub fn process_archive(&mut self, path: &Path) -> Result<(), RunError> {
        self.stats.record_archive();
        let zip_name = path.to_string_lossy();
        let zip_name: &str = &zip_name;

        let size = match check_archive_size(path, self.constraints.zip_size_max) {
            Ok(size) => size,
            Err(err) => return self.handle(zip_name, Outcome::archive(err)),
        };
        let mut source = match ZipSource::open(path) {
            Ok(source) => source,
            Err(err) => return self.handle(zip_name, Outcome::archive(err)),
        };
        info!(path = zip_name, size, entries = source.len(), "archive opened");

        while let Some(next) = source.next_entry() {
            let outcome = match next {
                Ok(mut entry) => self.process_entry(zip_name, &mut entry),
                Err(err) => {
                    // Nothing after a broken local header can be trusted.
                    return self.handle(zip_name, Outcome::archive(err));
                }
            };
            self.handle(zip_name, outcome)?;
        }
        Ok(())
    }

    /// Validates and, if accepted, reads and packages a single entry.
    fn process_entry(&self, zip_name: &str, entry: &mut Entry<'_>) -> Outcome {
        let skip = |meta: &EntryMeta, reason, error| Outcome::SkippedItem {
            name: meta.name.clone(),
            size: meta.size,
            reason,
            error,
        };

        if let Err(reason) = validate_entry(entry.meta(), self.constraints) {
            return skip(entry.meta(), reason, None);
        }
        match entry.read_payload(self.constraints.item_size_max) {
            Ok(payload) => Outcome::Accepted(Blob::build(
                zip_name,
                entry.meta(),
                payload,
                self.constraints,
            )),
            Err(err) => skip(entry.meta(), ItemSkipReason::of(&err), Some(err)),
        }
    }

    fn handle(&mut self, zip_name: &str, outcome: Outcome) -> Result<(), RunError> {
        match outcome {
            Outcome::Accepted(blob) => {
                self.emitter.emit(&blob)?;
                self.stats.record_emitted(blob.content_length);
                debug!(path = zip_name, item = %blob.name, size = blob.content_length, "item emitted");
            }
            Outcome::SkippedArchive { reason, error } => {
                self.stats.record_archive_skipped();
                self.reporter.report(&Diagnostic::ArchiveSkipped {
                    path: zip_name,
                    reason,
                    error: &error,
                });
            }
            Outcome::SkippedItem { name, size, reason, error } => {
                self.stats.record_item_skipped();
                self.reporter.report(&Diagnostic::ItemSkipped {
                    path: zip_name,
                    item: &name,
                    size,
                    reason,
                    error: error.as_ref(),
                });
            }
        }
        Ok(())
    }

    /// Flushes the output and reports the run summary.
    pub fn finish(mut self) -> Result<RunStats, RunError> {
        self.emitter.flush()?;
        self.reporter.report(&Diagnostic::RunComplete(&self.stats));
        info!(
            archives = self.stats.archives_seen,
            emitted = self.emitter.written(),
            "run finished"
        );
        Ok(self.stats)
    }
}
