use tracing_subscriber::EnvFilter;

/// Initialize tracing for the CLI.
///
/// Logs go to stderr so stdout stays reserved for response output. The
/// filter comes from `RUST_LOG`, defaulting to `warn`; run with
/// `RUST_LOG=debug` to see request/response lines.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
