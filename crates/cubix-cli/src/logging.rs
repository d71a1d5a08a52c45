//! Diagnostic logging setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber.
///
/// Diagnostics go to stderr so stdout carries only the result line. `RUST_LOG`
/// takes precedence over `default_level`. Records emitted through the `log`
/// facade by `cubix-math` are forwarded to the same subscriber.
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
