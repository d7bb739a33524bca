//! Skip and progress diagnostics.
//!
//! Diagnostics are LTSV lines (tab separated `key:value` pairs) written to a
//! stream that never carries records. When verbose mode is off the
//! [`Silent`] reporter drops everything; fatal errors are reported by the
//! binary itself and do not pass through here.

use std::io::Write;

use crate::error::{ArchiveError, ItemError};
use crate::outcome::{ArchiveSkipReason, ItemSkipReason};
use crate::progress::RunStats;

/// A single decision worth telling the operator about.
#[derive(Debug)]
pub enum Diagnostic<'a> {
    ArchiveSkipped {
        path: &'a str,
        reason: ArchiveSkipReason,
        error: &'a ArchiveError,
    },
    ItemSkipped {
        path: &'a str,
        item: &'a str,
        size: u64,
        reason: ItemSkipReason,
        error: Option<&'a ItemError>,
    },
    RunComplete(&'a RunStats),
}

pub trait Reporter {
    fn report(&mut self, diagnostic: &Diagnostic<'_>);
}

impl<T: Reporter + ?Sized> Reporter for &mut T {
    fn report(&mut self, diagnostic: &Diagnostic<'_>) {
        (**self).report(diagnostic)
    }
}

impl<T: Reporter + ?Sized> Reporter for Box<T> {
    fn report(&mut self, diagnostic: &Diagnostic<'_>) {
        (**self).report(diagnostic)
    }
}

/// Discards all diagnostics.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Reporter for Silent {
    fn report(&mut self, _diagnostic: &Diagnostic<'_>) {}
}

/// Writes one LTSV line per diagnostic.
pub struct LtsvReporter<W: Write> {
    writer: W,
}

impl<W: Write> LtsvReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Reporter for LtsvReporter<W> {
    fn report(&mut self, diagnostic: &Diagnostic<'_>) {
        let line = format_line(diagnostic);
        // Nowhere left to report a failing diagnostic stream.
        let _ = writeln!(self.writer, "{line}");
        self.writer.flush().ok();
    }
}

/// Renders a diagnostic as an LTSV line, without the trailing newline.
pub fn format_line(diagnostic: &Diagnostic<'_>) -> String {
    let mut fields: Vec<(&str, String)> = Vec::with_capacity(8);
    match diagnostic {
        Diagnostic::ArchiveSkipped { path, reason, error } => {
            fields.push(("level", "warn".into()));
            fields.push(("status", "zip_skipped".into()));
            fields.push(("reason", reason.name().into()));
            fields.push(("path", path.to_string()));
            match error {
                ArchiveError::Oversized { size, limit } => {
                    fields.push(("size", size.to_string()));
                    fields.push(("limit", limit.to_string()));
                }
                ArchiveError::Io { source, .. } => fields.push(("error", source.to_string())),
                ArchiveError::Corrupt(e) => fields.push(("error", e.to_string())),
            }
        }
        Diagnostic::ItemSkipped { path, item, size, reason, error } => {
            fields.push(("level", "warn".into()));
            fields.push(("status", "item_skipped".into()));
            fields.push(("reason", reason.name().into()));
            fields.push(("path", path.to_string()));
            fields.push(("item", item.to_string()));
            fields.push(("size", size.to_string()));
            if let Some(err) = error {
                fields.push(("error", err.to_string()));
            }
        }
        Diagnostic::RunComplete(stats) => {
            fields.push(("level", "info".into()));
            fields.push(("status", "run_complete".into()));
            fields.push(("archives", stats.archives_seen.to_string()));
            fields.push(("archives_skipped", stats.archives_skipped.to_string()));
            fields.push(("items_emitted", stats.items_emitted.to_string()));
            fields.push(("items_skipped", stats.items_skipped.to_string()));
            fields.push(("bytes_emitted", stats.bytes_emitted.to_string()));
        }
    }

    fields
        .iter()
        .map(|(key, value)| format!("{key}:{}", escape(value)))
        .collect::<Vec<_>>()
        .join("\t")
}

/// Replaces control characters so a value cannot split a field or a line.
fn escape(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_control() { '?' } else { c })
        .collect()
}
