//! Structured logging setup.
//!
//! The codec only emits `tracing` events; installing a subscriber is left to
//! the application. [`init_logging`] is the stock way to do it from a
//! [`LoggingConfig`]: `RUST_LOG` wins when set, otherwise the configured
//! level applies.

use crate::config::LoggingConfig;
use crate::error::{ConnectorError, Result};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Build the filter used by [`init_logging`]
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(LevelFilter::from_level(config.log_level).into())
    })
}

/// Install a global fmt subscriber (plain or JSON).
///
/// # Errors
/// Returns `ConnectorError::ConfigError` if a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(true);

    let installed = if config.json_format {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed
        .map_err(|e| ConnectorError::ConfigError(format!("Failed to initialize logging: {e}")))?;

    info!(
        app = %config.app_name,
        level = %config.log_level,
        json = config.json_format,
        "Logging initialized"
    );
    Ok(())
}
