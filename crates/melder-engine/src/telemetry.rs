//! Tracing setup for embedding applications.

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::EngineConfig;

/// Installs a global subscriber: formatted output filtered by `RUST_LOG`
/// plus `default_directive` (e.g. `melder=info`).
///
/// Fails if the directive does not parse or a global subscriber is already
/// installed.
pub fn init_tracing(default_directive: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(default_directive.parse()?))
        .try_init()?;
    Ok(())
}

/// Installs the global subscriber with the configured `log_filter`.
pub fn init_tracing_from(config: &EngineConfig) -> Result<()> {
    init_tracing(&config.log_filter)
}
