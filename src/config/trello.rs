//! Trello connection settings.

use super::{ConfigResult, extract, require};
use figment::{Figment, providers::Env};
use serde::{Deserialize, Serialize};

/// Public Trello REST endpoint.
pub const DEFAULT_TRELLO_API_URL: &str = "https://api.trello.com";

/// Connection settings for the Trello board adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrelloSettings {
    /// Application key (`TRELLO_APP_KEY`).
    pub app_key: String,
    /// Application secret (`TRELLO_SECRET`).
    pub secret: String,
    /// Member token authorising the application (`TRELLO_USER_TOKEN`).
    pub user_token: String,
    /// List new cards are created in (`TRELLO_TARGET_LIST_ID`).
    pub target_list_id: String,
    /// REST endpoint (`TRELLO_API_URL`).
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    DEFAULT_TRELLO_API_URL.to_owned()
}

impl TrelloSettings {
    /// Loads settings from the `TRELLO_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`super::ConfigError`] when a variable is missing or blank.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_figment(&Figment::new().merge(Env::prefixed("TRELLO_")))
    }

    /// Loads settings from an arbitrary provider stack.
    ///
    /// # Errors
    ///
    /// Returns [`super::ConfigError`] when a value is missing or blank.
    pub fn from_figment(figment: &Figment) -> ConfigResult<Self> {
        let settings: Self = extract(figment)?;
        require("app_key", &settings.app_key)?;
        require("user_token", &settings.user_token)?;
        require("target_list_id", &settings.target_list_id)?;
        require("api_url", &settings.api_url)?;
        Ok(settings)
    }
}
