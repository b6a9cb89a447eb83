//! Structured logging bootstrap using `tracing`.
//!
//! Logs go to stderr so that stdout carries only the report (or JSON).

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::AppError;

/// Install the global subscriber. `RUST_LOG` wins over `default_level`.
pub fn init_tracing(default_level: &str) -> Result<(), AppError> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| AppError::new(2, format!("Invalid log filter: {e}")))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_level(true)
        .with_thread_ids(false)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .map_err(|e| AppError::new(2, format!("Failed to install tracing subscriber: {e}")))?;

    tracing::debug!("tracing initialised");
    Ok(())
}
