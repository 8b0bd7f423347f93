//! Structured logging for the Vantage viewer.
//!
//! Console logging via the `tracing` ecosystem with environment-based
//! filtering. The HTTP stack is noisy at `info`, so the default filter
//! caps `reqwest` and `hyper` at `warn`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use vantage_config::Config;

/// Default filter: `info` everywhere, HTTP internals at `warn`.
const DEFAULT_FILTER: &str = "info,reqwest=warn,hyper=warn,hyper_util=warn";

/// Initialize the tracing subscriber for the viewer.
///
/// Filter precedence: `RUST_LOG` if set, otherwise the config's
/// `debug.log_level` applied on top of the default filter, otherwise the
/// default filter alone.
pub fn init_logging(config: Option<&Config>) {
    let filter_str = match config {
        Some(config) if !config.debug.log_level.is_empty() => {
            format!("{},{}", DEFAULT_FILTER, config.debug.log_level)
        }
        _ => DEFAULT_FILTER.to_string(),
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

/// Create an `EnvFilter` with the default filter string.
///
/// Useful for tests and for consistent default behavior.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}
