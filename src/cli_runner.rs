//! Binds the pipeline to the process: flags, stdin, stdout and stderr.

use std::io::{self, BufWriter};

use crate::cli;
use crate::diagnostics::{LtsvReporter, Silent};
use crate::error::RunError;
use crate::logging;
use crate::pipeline;
use crate::progress::RunStats;

/// Public entry for running the CLI.
///
/// Configuration is validated before stdin is touched, so a bad flag never
/// consumes any of the manifest.
pub fn run_cli_app() -> Result<RunStats, RunError> {
    let args = cli::parse();
    let constraints = args.constraints()?;
    logging::init(args.verbose);

    let manifest = io::stdin().lock();
    let out = BufWriter::new(io::stdout().lock());

    if args.verbose {
        pipeline::run(manifest, &constraints, out, LtsvReporter::new(io::stderr()))
    } else {
        pipeline::run(manifest, &constraints, out, Silent)
    }
}
