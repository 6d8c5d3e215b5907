use tracing_subscriber::{fmt, EnvFilter};

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG`, defaulting to `warn`.
///
/// Calling it more than once is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
