//! Configuration error types.

use thiserror::Error;

/// Result type for settings loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors returned while loading settings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A provider could not be read or a value has the wrong shape.
    #[error("cannot load settings: {0}")]
    Extract(String),

    /// A required value is blank.
    #[error("setting '{0}' must not be empty")]
    MissingValue(&'static str),
}
