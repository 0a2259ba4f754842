//! Logging configuration
//!
//! Logs go to stderr so countdown frames on stdout stay clean. `RUST_LOG`
//! takes precedence; otherwise only warnings are shown, and `DEBUG_LOGGING=1`
//! enables debug output for the countdown crates.

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

pub fn init() {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(debug_logging)));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(filter)
        .init();

    tracing::debug!(debug_logging, "logging initialized");
}

fn filter_directive(debug_logging: bool) -> &'static str {
    if debug_logging {
        "info,countdown=debug,countdown_core=debug"
    } else {
        "warn"
    }
}
