//! Process-wide `tracing` subscriber setup.
//!
//! The library only emits events; binaries and test harnesses call
//! [`init_logging`] once at start-up.

use crate::config::{LogFormat, LoggingSettings};
use thiserror::Error;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Errors returned while installing the subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The level directive could not be parsed.
    #[error("invalid log filter '{directive}': {reason}")]
    InvalidFilter {
        /// Directive as configured.
        directive: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// A global subscriber is already installed.
    #[error("cannot install log subscriber: {0}")]
    AlreadyInitialised(String),
}

/// Builds the event filter for `settings`.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] when the level directive is
/// malformed.
pub fn build_filter(settings: &LoggingSettings) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(&settings.level).map_err(|err| TelemetryError::InvalidFilter {
        directive: settings.level.clone(),
        reason: err.to_string(),
    })
}

/// Installs a global `fmt` subscriber writing to stderr.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the filter is malformed or a subscriber
/// has already been installed.
pub fn init_logging(settings: &LoggingSettings) -> Result<(), TelemetryError> {
    let filter = build_filter(settings)?;
    let layer = match settings.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .pretty()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .boxed(),
    };
    tracing_subscriber::registry()
        .with(layer.with_filter(filter))
        .try_init()
        .map_err(|err| TelemetryError::AlreadyInitialised(err.to_string()))
}
