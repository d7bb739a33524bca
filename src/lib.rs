//! # zipblobs Core Library
//!
//! This crate turns a manifest of zip archives into a stream of JSON records,
//! one per accepted entry.
//!
//! It is designed to be used by the `zipblobs` command-line application, but
//! [`pipeline::run`] can be driven directly with any manifest reader and output
//! writer.
//!
//! ## Key Modules
//!
//! - [`archive`]: Size guard and the forward-only zip entry reader.
//! - [`validate`]: Entry acceptance rules.
//! - [`blob`]: The emitted record type.
//! - [`emit`]: JSON Lines output with per-record flushing.
//! - [`diagnostics`]: LTSV skip reports for verbose runs.
//! - [`pipeline`]: The run coordinator.
//!
//! ## Examples
//!
//! ```no_run
//! use zipblobs::common::Constraints;
//! use zipblobs::diagnostics::Silent;
//!
//! let manifest = "/input/a.zip\n/input/b.zip\n";
//! let mut out = Vec::new();
//! let stats = zipblobs::pipeline::run(manifest.as_bytes(), &Constraints::default(), &mut out, Silent)?;
//! println!("{} records", stats.items_emitted);
//! # Ok::<(), zipblobs::RunError>(())
//! ```

pub mod archive;
pub mod blob;
pub mod cli;
pub mod cli_runner;
pub mod common;
pub mod diagnostics;
pub mod emit;
pub mod error;
pub use error::{ArchiveError, ConfigError, ItemError, RunError};

pub mod logging;
pub mod outcome;
pub mod pipeline;
pub mod progress;
pub mod validate;

#[cfg(test)]
mod test_utils;
