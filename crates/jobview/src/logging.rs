//! Tracing subscriber setup.
//!
//! Library code logs through the `log` macros; `tracing_log::LogTracer`
//! routes those records into the subscriber so they share span context with
//! the `tracing` spans around load, filter and sort.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::{LogFormat, LoggingConfig};
use crate::error::ConfigError;

/// Builds the filter from `RUST_LOG` when set, otherwise from the configured
/// level.
pub fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, ConfigError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level).map_err(|e| ConfigError::Validation {
        message: format!("Invalid logging level '{}': {}", config.level, e),
    })
}

/// Installs the global subscriber writing to stderr.
///
/// Calling this twice leaves the first subscriber in place.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ConfigError> {
    tracing_log::LogTracer::init().ok();

    let filter = build_env_filter(config)?;

    let layer = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_span_list(true)
            .with_filter(filter)
            .boxed(),
        LogFormat::Compact => tracing_subscriber::fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(filter)
            .boxed(),
    };

    let subscriber = tracing_subscriber::registry().with(layer);
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        log::debug!("Global subscriber already installed");
    }

    tracing::trace!(
        "Logging initialized: level={}, format={:?}",
        config.level,
        config.format
    );

    Ok(())
}
