use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Initialize structured logging on stderr.
///
/// Quiet mode logs nothing, whatever `RUST_LOG` says, so stderr stays empty
/// unless `--verbose` is given. In verbose mode `RUST_LOG` picks the filter
/// and progress notices at `info` are the fallback. stdout is never used.
pub fn init(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = EnvFilter::try_new(filter_directives(verbose, rust_log.as_deref()))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

fn filter_directives(verbose: bool, rust_log: Option<&str>) -> &str {
    match (verbose, rust_log) {
        (false, _) => "off",
        (true, Some(directives)) if !directives.trim().is_empty() => directives,
        (true, _) => "info",
    }
}
