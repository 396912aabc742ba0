//! Settings for the tracker and board adapters and for logging.
//!
//! Settings are read from the process environment through `figment`:
//!
//! - `JIRA_*` for [`JiraSettings`]
//! - `TRELLO_*` for [`TrelloSettings`]
//! - `PULLSYNC_LOG_*` for [`LoggingSettings`]

mod error;
mod jira;
mod logging;
mod trello;

pub use error::{ConfigError, ConfigResult};
pub use jira::JiraSettings;
pub use logging::{LogFormat, LoggingSettings};
pub use trello::{DEFAULT_TRELLO_API_URL, TrelloSettings};

use figment::Figment;
use serde::de::DeserializeOwned;

/// Extracts settings of type `T` from `figment`.
fn extract<T: DeserializeOwned>(figment: &Figment) -> ConfigResult<T> {
    figment
        .extract()
        .map_err(|err| ConfigError::Extract(err.to_string()))
}

/// Rejects blank required values.
fn require(field: &'static str, value: &str) -> ConfigResult<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingValue(field));
    }
    Ok(())
}
