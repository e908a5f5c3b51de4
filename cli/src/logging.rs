use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes console logging on stderr, keeping stdout for command output.
///
/// Default level is "warn", or "debug" with `--verbose`. RUST_LOG overrides
/// both, e.g. `RUST_LOG=domain=trace sortkit parse-date 03/04/2020` shows
/// every date pattern that was tried.
pub fn init_logging(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}
