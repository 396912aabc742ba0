//! Logging settings.

use super::{ConfigResult, extract, require};
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Output format of log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directive, such as `info` or `pullsync=debug`.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Pretty,
        }
    }
}

impl LoggingSettings {
    /// Loads settings from `PULLSYNC_LOG_LEVEL` and `PULLSYNC_LOG_FORMAT`,
    /// falling back to `info` and pretty output.
    ///
    /// # Errors
    ///
    /// Returns [`super::ConfigError`] when a value cannot be parsed.
    pub fn from_env() -> ConfigResult<Self> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Env::prefixed("PULLSYNC_LOG_"));
        let settings: Self = extract(&figment)?;
        require("level", &settings.level)?;
        Ok(settings)
    }
}
