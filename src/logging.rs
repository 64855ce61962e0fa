use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
/// RUST_LOG wins; otherwise the configured default filter is used.
pub fn configure_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .init();
}
