use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber for the CLI.
///
/// Logs go to stderr without timestamps or targets. `RUST_LOG` overrides
/// the default filter (`info`, or `debug` when `verbose` is set).
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
